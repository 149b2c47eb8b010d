//! Listing Identifiers
//!
//! Deterministic composition of the identifier and public URL handed back by
//! the publish endpoint. No listing is actually created anywhere.

/// Prefix shared by all fabricated listing identifiers.
pub const LISTING_ID_PREFIX: &str = "gr";

/// Compose the public identifier for a published listing.
///
/// Timestamps carry second precision, so two publishes of the same
/// shop/product within one second share an identifier. Known limitation.
pub fn compose_listing_id(shop: &str, product_id: &str, unix_seconds: i64) -> String {
    format!("{LISTING_ID_PREFIX}_{shop}_{product_id}_{unix_seconds}")
}

/// Public URL under which a published listing would be reachable.
pub fn listing_url(base_url: &str, listing_id: &str) -> String {
    format!("{}/product/{}", base_url.trim_end_matches('/'), listing_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_layout() {
        assert_eq!(
            compose_listing_id("temu", "123", 1_700_000_000),
            "gr_temu_123_1700000000"
        );
    }

    #[test]
    fn test_same_second_collides_different_seconds_differ() {
        let first = compose_listing_id("temu", "123", 1_700_000_000);
        let again = compose_listing_id("temu", "123", 1_700_000_000);
        let later = compose_listing_id("temu", "123", 1_700_000_001);

        assert_eq!(first, again);
        assert_ne!(first, later);
    }

    #[test]
    fn test_url_joins_base_and_id() {
        let id = compose_listing_id("aliexpress", "abc", 1_700_000_000);
        assert_eq!(
            listing_url("https://globalradar.eu", &id),
            "https://globalradar.eu/product/gr_aliexpress_abc_1700000000"
        );
        // A trailing slash on the base must not double up.
        assert_eq!(
            listing_url("https://globalradar.eu/", &id),
            "https://globalradar.eu/product/gr_aliexpress_abc_1700000000"
        );
    }
}
