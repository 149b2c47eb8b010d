//! Image Matching
//!
//! Placeholder for the visual-search feature: no similarity computation runs.
//! The only real rule is which marketplace a match is reported from.

pub const SHOP_ALIEXPRESS: &str = "aliexpress";
pub const SHOP_TEMU: &str = "temu";

/// Marketplace a match is reported from, given the shop the query came from.
///
/// Queries originating on AliExpress are answered with a Temu match; queries
/// from anywhere else are answered with an AliExpress match.
pub fn counterpart_shop(source_shop: &str) -> &'static str {
    if source_shop == SHOP_ALIEXPRESS {
        SHOP_TEMU
    } else {
        SHOP_ALIEXPRESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliexpress_maps_to_temu() {
        assert_eq!(counterpart_shop("aliexpress"), "temu");
    }

    #[test]
    fn test_everything_else_maps_to_aliexpress() {
        assert_eq!(counterpart_shop("temu"), "aliexpress");
        assert_eq!(counterpart_shop("shein"), "aliexpress");
        assert_eq!(counterpart_shop(""), "aliexpress");
    }
}
