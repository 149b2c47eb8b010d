//! Match Image Handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::application::{ImageMatch, MatchImageCommand};
use crate::infrastructure::http::dto::ImageMatchQuery;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMatchDto {
    pub shop: String,
    pub title: String,
    pub price: String,
    pub image_url: String,
    pub url: String,
    pub similarity: f64,
}

impl From<ImageMatch> for ImageMatchDto {
    fn from(m: ImageMatch) -> Self {
        Self {
            shop: m.shop,
            title: m.title,
            price: m.price,
            image_url: m.image_url,
            url: m.url,
            similarity: m.similarity,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MatchImageResponseDto {
    pub success: bool,
    pub matches: Vec<ImageMatchDto>,
}

pub async fn match_image(
    State(state): State<Arc<AppState>>,
    Json(query): Json<ImageMatchQuery>,
) -> Json<MatchImageResponseDto> {
    let cmd = MatchImageCommand {
        image_url: query.image_url,
        source_shop: query.source_shop,
    };

    let matches = state.match_image_handler.handle(cmd);

    Json(MatchImageResponseDto {
        success: true,
        matches: matches.into_iter().map(ImageMatchDto::from).collect(),
    })
}
