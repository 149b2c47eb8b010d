//! Infrastructure Layer
//!
//! Concrete implementations behind the application ports, plus the HTTP
//! surface.

pub mod http;
pub mod memory;

pub use memory::InMemoryDraftRepository;
