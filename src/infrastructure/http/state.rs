//! Application State
//!
//! Shared immutably across requests behind an `Arc`; the handlers themselves
//! hold no mutable state.

use std::sync::Arc;

use crate::application::{
    DraftRepositoryPort, ListDraftsHandler, MatchImageHandler, PublishProductHandler,
    ScanProductHandler,
};
use crate::config::PublishConfig;

use super::middleware::ApiKeyAuth;

/// Application state
pub struct AppState {
    /// Resolved API-key enforcement mode
    pub auth: ApiKeyAuth,

    // ========== Command Handlers ==========
    pub scan_handler: ScanProductHandler,
    pub publish_handler: PublishProductHandler,
    pub match_image_handler: MatchImageHandler,

    // ========== Query Handlers ==========
    pub list_drafts_handler: ListDraftsHandler,
}

impl AppState {
    pub fn new(
        auth: ApiKeyAuth,
        publish: &PublishConfig,
        draft_repo: Arc<dyn DraftRepositoryPort>,
    ) -> Self {
        Self {
            auth,
            scan_handler: ScanProductHandler::new(),
            publish_handler: PublishProductHandler::new(publish.base_url.clone()),
            match_image_handler: MatchImageHandler::new(),
            list_drafts_handler: ListDraftsHandler::new(draft_repo),
        }
    }
}
