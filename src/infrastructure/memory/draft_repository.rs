//! In-Memory Draft Repository
//!
//! Placeholder store behind the draft port. Publishing is mocked, so no code
//! path writes a draft; the store exists so the drafts endpoint has a real
//! port to query and a later database-backed implementation can slot in.

use async_trait::async_trait;

use crate::application::ports::{DraftRecord, DraftRepositoryPort, RepositoryError};

/// In-memory draft store. Starts empty and stays empty.
#[derive(Debug, Default)]
pub struct InMemoryDraftRepository {
    drafts: Vec<DraftRecord>,
}

impl InMemoryDraftRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DraftRepositoryPort for InMemoryDraftRepository {
    async fn find_all(&self) -> Result<Vec<DraftRecord>, RepositoryError> {
        Ok(self.drafts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_all_returns_empty() {
        let repo = InMemoryDraftRepository::new();
        let drafts = repo.find_all().await.unwrap();
        assert!(drafts.is_empty());
    }
}
