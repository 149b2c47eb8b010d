//! Application Layer - use case orchestration
//!
//! Contains:
//! - commands: scan / publish / match-image commands and their results
//! - queries: draft listing query handler
//! - ports: outbound port for the draft store
//! - error: application error type

pub mod commands;
pub mod error;
pub mod handlers;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    ImageMatch, MatchImageCommand, PublishProductCommand, PublishedListing, ScanProductCommand,
    ScanReceipt,
};
pub use error::ApplicationError;
pub use handlers::{MatchImageHandler, PublishProductHandler, ScanProductHandler};
pub use ports::{DraftRecord, DraftRepositoryPort, RepositoryError};
pub use queries::ListDraftsHandler;
