//! Global Radar - backend API for the product-scraping browser extension
//!
//! The extension scrapes marketplace product pages and pushes the payloads
//! here; the backend answers with shipping quotes, fabricated publish ids and
//! a mocked reverse image search. Nothing is persisted.
//!
//! Layering:
//! - domain/: shipping rate table, listing identifiers, match toggle (pure logic)
//! - application/: command/query handlers and the draft-store port
//! - infrastructure/: HTTP surface (axum) and the in-memory draft store
//! - config/: multi-source configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
