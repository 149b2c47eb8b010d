//! Draft Queries

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{DraftRecord, DraftRepositoryPort};

/// ListDrafts Handler - fetch all stored drafts
pub struct ListDraftsHandler {
    draft_repo: Arc<dyn DraftRepositoryPort>,
}

impl ListDraftsHandler {
    pub fn new(draft_repo: Arc<dyn DraftRepositoryPort>) -> Self {
        Self { draft_repo }
    }

    pub async fn handle(&self) -> Result<Vec<DraftRecord>, ApplicationError> {
        let drafts = self.draft_repo.find_all().await?;

        tracing::debug!(count = drafts.len(), "Drafts listed");

        Ok(drafts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryDraftRepository;

    #[tokio::test]
    async fn test_list_drafts_is_empty() {
        let handler = ListDraftsHandler::new(Arc::new(InMemoryDraftRepository::new()));
        let drafts = handler.handle().await.unwrap();
        assert!(drafts.is_empty());
    }
}
