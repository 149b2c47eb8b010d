//! Product Command Handlers
//!
//! Every handler is a pure transform of its command plus the wall clock;
//! none of them touch storage or call out.

use chrono::Utc;

use crate::application::commands::{
    ImageMatch, MatchImageCommand, PublishProductCommand, PublishedListing, ScanProductCommand,
    ScanReceipt,
};
use crate::domain::listing::{compose_listing_id, listing_url};
use crate::domain::matching::counterpart_shop;
use crate::domain::shipping::ShippingQuote;

/// Confirmation message returned for a recorded scan.
const SCAN_MESSAGE: &str = "Product recorded";

/// Confirmation message returned for a publish.
const PUBLISH_MESSAGE: &str = "Published in 4 languages";

// Placeholder result fields until a real visual-search backend is wired in.
const MOCK_MATCH_TITLE: &str = "Similar product (mock)";
const MOCK_MATCH_PRICE: &str = "9.99";
const MOCK_MATCH_URL: &str = "https://www.temu.com/example";
const MOCK_MATCH_SIMILARITY: f64 = 0.92;

/// Scan Handler - record a scraped product and quote shipping
#[derive(Debug, Default)]
pub struct ScanProductHandler;

impl ScanProductHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: ScanProductCommand) -> ScanReceipt {
        let all_shipping = ShippingQuote::for_price(&cmd.price);

        // Only the four supported destinations resolve; anything else
        // (including no target country at all) reports "N/A".
        let shipping = cmd
            .target_country
            .as_deref()
            .and_then(|code| all_shipping.rate_for(code))
            .unwrap_or("N/A")
            .to_string();

        tracing::info!(
            shop = %cmd.shop,
            product_id = %cmd.product_id,
            product_url = %cmd.product_url,
            shipping = %shipping,
            "Product scan recorded"
        );

        ScanReceipt {
            product_id: cmd.product_id,
            received_at: Utc::now(),
            shipping,
            all_shipping,
            specs: cmd.specs,
            message: SCAN_MESSAGE,
        }
    }
}

/// Publish Handler - fabricate a listing id and public URL
#[derive(Debug)]
pub struct PublishProductHandler {
    base_url: String,
}

impl PublishProductHandler {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn handle(&self, cmd: PublishProductCommand) -> PublishedListing {
        let now = Utc::now();
        let id = compose_listing_id(&cmd.shop, &cmd.product_id, now.timestamp());
        let url = listing_url(&self.base_url, &id);

        tracing::info!(
            shop = %cmd.shop,
            product_id = %cmd.product_id,
            listing_id = %id,
            title = %cmd.title,
            "Product published"
        );

        PublishedListing {
            id,
            url,
            published_at: now,
            message: PUBLISH_MESSAGE,
        }
    }
}

/// Match Image Handler - mocked visual search
#[derive(Debug, Default)]
pub struct MatchImageHandler;

impl MatchImageHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: MatchImageCommand) -> Vec<ImageMatch> {
        let shop = counterpart_shop(&cmd.source_shop);

        tracing::info!(
            source_shop = %cmd.source_shop,
            match_shop = %shop,
            "Image match requested"
        );

        vec![ImageMatch {
            shop: shop.to_string(),
            title: MOCK_MATCH_TITLE.to_string(),
            price: MOCK_MATCH_PRICE.to_string(),
            image_url: cmd.image_url,
            url: MOCK_MATCH_URL.to_string(),
            similarity: MOCK_MATCH_SIMILARITY,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn scan_command(price: &str, target_country: Option<&str>) -> ScanProductCommand {
        ScanProductCommand {
            shop: "aliexpress".to_string(),
            product_id: "100500".to_string(),
            product_url: "https://www.aliexpress.com/item/100500.html".to_string(),
            title: "USB cable".to_string(),
            price: price.to_string(),
            target_country: target_country.map(str::to_string),
            specs: HashMap::from([("length".to_string(), "1m".to_string())]),
        }
    }

    #[test]
    fn test_scan_quotes_target_country() {
        let receipt = ScanProductHandler::new().handle(scan_command("25", Some("DE")));

        assert_eq!(receipt.shipping, "4.99");
        assert_eq!(receipt.all_shipping.sk, "2.99");
        assert_eq!(receipt.all_shipping.cz, "3.49");
        assert_eq!(receipt.all_shipping.pl, "3.29");
        assert_eq!(receipt.all_shipping.de, "4.99");
        assert_eq!(receipt.product_id, "100500");
        assert_eq!(receipt.specs.get("length").map(String::as_str), Some("1m"));
        assert_eq!(receipt.message, "Product recorded");
    }

    #[test]
    fn test_scan_free_above_threshold() {
        let receipt = ScanProductHandler::new().handle(scan_command("50", Some("SK")));
        assert_eq!(receipt.shipping, "FREE");
    }

    #[test]
    fn test_scan_without_target_country() {
        let receipt = ScanProductHandler::new().handle(scan_command("25", None));
        assert_eq!(receipt.shipping, "N/A");
        // The full quote is still evaluated.
        assert_eq!(receipt.all_shipping.pl, "3.29");
    }

    #[test]
    fn test_scan_unsupported_target_country() {
        let receipt = ScanProductHandler::new().handle(scan_command("25", Some("FR")));
        assert_eq!(receipt.shipping, "N/A");
    }

    #[test]
    fn test_scan_unparseable_price() {
        let receipt = ScanProductHandler::new().handle(scan_command("abc", Some("DE")));
        assert_eq!(receipt.shipping, "N/A");
        assert_eq!(receipt.all_shipping.de, "N/A");
    }

    #[test]
    fn test_publish_composes_id_and_url() {
        let handler = PublishProductHandler::new("https://globalradar.eu");
        let listing = handler.handle(PublishProductCommand {
            shop: "temu".to_string(),
            product_id: "123".to_string(),
            title: "Desk lamp".to_string(),
        });

        assert!(listing.id.starts_with("gr_temu_123_"));
        assert_eq!(
            listing.url,
            format!("https://globalradar.eu/product/{}", listing.id)
        );
        assert_eq!(listing.message, "Published in 4 languages");

        // The id suffix is the publish timestamp in unix seconds.
        let suffix = listing.id.rsplit('_').next().unwrap();
        assert_eq!(suffix.parse::<i64>().unwrap(), listing.published_at.timestamp());
    }

    #[test]
    fn test_match_image_toggles_shop() {
        let handler = MatchImageHandler::new();

        let matches = handler.handle(MatchImageCommand {
            image_url: "https://img.example/1.jpg".to_string(),
            source_shop: "aliexpress".to_string(),
        });
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].shop, "temu");
        assert_eq!(matches[0].image_url, "https://img.example/1.jpg");
        assert_eq!(matches[0].similarity, 0.92);

        let matches = handler.handle(MatchImageCommand {
            image_url: "https://img.example/2.jpg".to_string(),
            source_shop: "shein".to_string(),
        });
        assert_eq!(matches[0].shop, "aliexpress");
    }
}
