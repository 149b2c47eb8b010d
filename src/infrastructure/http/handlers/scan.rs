//! Scan Handler

use std::collections::HashMap;
use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::SecondsFormat;
use serde::Serialize;

use crate::application::ScanProductCommand;
use crate::domain::shipping::ShippingQuote;
use crate::infrastructure::http::dto::ProductSubmission;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponseDto {
    pub success: bool,
    pub product_id: String,
    pub received_at: String,
    pub shipping: String,
    pub all_shipping: ShippingQuote,
    pub specs: HashMap<String, String>,
    pub message: String,
}

pub async fn scan_product(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<ProductSubmission>,
) -> Json<ScanResponseDto> {
    let cmd = ScanProductCommand {
        shop: submission.shop,
        product_id: submission.product_id,
        product_url: submission.product_url,
        title: submission.title,
        price: submission.price,
        target_country: submission.target_country,
        specs: submission.specs,
    };

    let receipt = state.scan_handler.handle(cmd);

    Json(ScanResponseDto {
        success: true,
        product_id: receipt.product_id,
        received_at: receipt
            .received_at
            .to_rfc3339_opts(SecondsFormat::Micros, true),
        shipping: receipt.shipping,
        all_shipping: receipt.all_shipping,
        specs: receipt.specs,
        message: receipt.message.to_string(),
    })
}
