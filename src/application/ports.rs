//! Repository Ports - outbound ports
//!
//! Abstraction over draft storage. The current implementation lives in
//! `infrastructure::memory` and is a placeholder: publishing is mocked, so
//! nothing ever writes a draft.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Repository error
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Unpublished product record.
#[derive(Debug, Clone)]
pub struct DraftRecord {
    pub id: String,
    pub shop: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Draft Repository Port
#[async_trait]
pub trait DraftRepositoryPort: Send + Sync {
    /// All stored drafts.
    async fn find_all(&self) -> Result<Vec<DraftRecord>, RepositoryError>;
}
