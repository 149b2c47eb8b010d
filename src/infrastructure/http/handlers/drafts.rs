//! Drafts Handler

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::SecondsFormat;
use serde::Serialize;

use crate::application::DraftRecord;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftDto {
    pub id: String,
    pub shop: String,
    pub title: String,
    pub created_at: String,
}

impl From<DraftRecord> for DraftDto {
    fn from(record: DraftRecord) -> Self {
        Self {
            id: record.id,
            shop: record.shop,
            title: record.title,
            created_at: record
                .created_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DraftsResponseDto {
    pub drafts: Vec<DraftDto>,
}

pub async fn list_drafts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DraftsResponseDto>, ApiError> {
    let drafts = state.list_drafts_handler.handle().await?;

    Ok(Json(DraftsResponseDto {
        drafts: drafts.into_iter().map(DraftDto::from).collect(),
    }))
}
