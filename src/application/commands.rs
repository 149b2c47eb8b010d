//! Product Commands
//!
//! Commands carried from the HTTP layer into the handlers, and the results
//! handed back. Wire-format concerns (field renames, timestamp formatting)
//! stay in the DTO layer.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::shipping::ShippingQuote;

/// Record a scraped product pushed by the extension.
#[derive(Debug, Clone)]
pub struct ScanProductCommand {
    pub shop: String,
    pub product_id: String,
    pub product_url: String,
    pub title: String,
    pub price: String,
    pub target_country: Option<String>,
    pub specs: HashMap<String, String>,
}

/// Acknowledgement for a recorded scan.
#[derive(Debug, Clone)]
pub struct ScanReceipt {
    pub product_id: String,
    pub received_at: DateTime<Utc>,
    /// Estimate for the requested target country, or `"N/A"`.
    pub shipping: String,
    pub all_shipping: ShippingQuote,
    pub specs: HashMap<String, String>,
    pub message: &'static str,
}

/// Publish a scraped product.
#[derive(Debug, Clone)]
pub struct PublishProductCommand {
    pub shop: String,
    pub product_id: String,
    pub title: String,
}

/// Fabricated result of a publish; nothing is actually published.
#[derive(Debug, Clone)]
pub struct PublishedListing {
    pub id: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub message: &'static str,
}

/// Run a reverse image search for a scraped product image.
#[derive(Debug, Clone)]
pub struct MatchImageCommand {
    pub image_url: String,
    pub source_shop: String,
}

/// A single visual-search hit.
#[derive(Debug, Clone)]
pub struct ImageMatch {
    pub shop: String,
    pub title: String,
    pub price: String,
    pub image_url: String,
    pub url: String,
    pub similarity: f64,
}
