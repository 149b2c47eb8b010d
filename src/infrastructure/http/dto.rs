//! Data Transfer Objects
//!
//! Request payloads pushed by the browser extension. Field names are
//! camelCase on the wire; per-endpoint response DTOs live next to their
//! handlers.

use std::collections::HashMap;

use serde::Deserialize;

fn default_warehouse() -> String {
    "CN".to_string()
}

/// Product payload scraped from a marketplace page.
///
/// Only `shop` and `productUrl` are required; everything else the scraper
/// may have failed to extract defaults to an empty value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSubmission {
    pub shop: String,
    #[serde(default)]
    pub product_id: String,
    pub product_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub original_price: String,
    #[serde(default)]
    pub shipping: String,
    #[serde(default = "default_warehouse")]
    pub warehouse: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub specs: HashMap<String, String>,
    #[serde(default)]
    pub target_country: Option<String>,
    #[serde(default)]
    pub scanned_at: Option<String>,
}

/// Reverse-image-search query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMatchQuery {
    pub image_url: String,
    pub source_shop: String,
}
