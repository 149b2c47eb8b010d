//! Publish Handler

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::SecondsFormat;
use serde::Serialize;

use crate::application::PublishProductCommand;
use crate::infrastructure::http::dto::ProductSubmission;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResponseDto {
    pub success: bool,
    pub id: String,
    pub url: String,
    pub published_at: String,
    pub message: String,
}

pub async fn publish_product(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<ProductSubmission>,
) -> Json<PublishResponseDto> {
    let cmd = PublishProductCommand {
        shop: submission.shop,
        product_id: submission.product_id,
        title: submission.title,
    };

    let listing = state.publish_handler.handle(cmd);

    Json(PublishResponseDto {
        success: true,
        id: listing.id,
        url: listing.url,
        published_at: listing
            .published_at
            .to_rfc3339_opts(SecondsFormat::Micros, true),
        message: listing.message.to_string(),
    })
}
