//! Shipping Estimation
//!
//! Flat per-destination rates for the four markets the extension targets.
//! The table is a process-wide constant; there is no carrier integration.

use serde::Serialize;

/// Order value above which shipping is free, in EUR.
pub const FREE_SHIPPING_THRESHOLD: f64 = 30.0;

/// Flat rate applied to destinations outside the supported set.
pub const DEFAULT_RATE: &str = "3.99";

/// Supported destination countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Slovakia,
    Czechia,
    Poland,
    Germany,
}

impl Destination {
    pub const ALL: [Destination; 4] = [
        Destination::Slovakia,
        Destination::Czechia,
        Destination::Poland,
        Destination::Germany,
    ];

    /// ISO 3166-1 alpha-2 code used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Destination::Slovakia => "SK",
            Destination::Czechia => "CZ",
            Destination::Poland => "PL",
            Destination::Germany => "DE",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SK" => Some(Destination::Slovakia),
            "CZ" => Some(Destination::Czechia),
            "PL" => Some(Destination::Poland),
            "DE" => Some(Destination::Germany),
            _ => None,
        }
    }

    /// Flat rate for orders at or below the free-shipping threshold.
    pub fn flat_rate(&self) -> &'static str {
        match self {
            Destination::Slovakia => "2.99",
            Destination::Czechia => "3.49",
            Destination::Poland => "3.29",
            Destination::Germany => "4.99",
        }
    }
}

/// Outcome of a shipping estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingEstimate {
    /// Order value exceeds the free-shipping threshold.
    Free,
    /// Flat per-country rate.
    Flat(&'static str),
    /// The price string did not parse as a number.
    Unavailable,
}

impl ShippingEstimate {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingEstimate::Free => "FREE",
            ShippingEstimate::Flat(rate) => rate,
            ShippingEstimate::Unavailable => "N/A",
        }
    }
}

impl std::fmt::Display for ShippingEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Estimate the shipping cost for one destination country code.
///
/// An empty price counts as zero. A price that does not parse yields
/// [`ShippingEstimate::Unavailable`]; that is the only failure mode and it
/// never surfaces as an error to the caller.
pub fn estimate(price: &str, destination: &str) -> ShippingEstimate {
    let trimmed = price.trim();
    let parsed = if trimmed.is_empty() {
        Ok(0.0)
    } else {
        trimmed.parse::<f64>()
    };

    match parsed {
        Err(_) => ShippingEstimate::Unavailable,
        Ok(value) if value > FREE_SHIPPING_THRESHOLD => ShippingEstimate::Free,
        Ok(_) => ShippingEstimate::Flat(
            Destination::from_code(destination).map_or(DEFAULT_RATE, |d| d.flat_rate()),
        ),
    }
}

/// Shipping estimates for all supported destinations at a given price.
///
/// Serialized with the country codes as keys, e.g.
/// `{"SK": "2.99", "CZ": "3.49", "PL": "3.29", "DE": "4.99"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingQuote {
    #[serde(rename = "SK")]
    pub sk: String,
    #[serde(rename = "CZ")]
    pub cz: String,
    #[serde(rename = "PL")]
    pub pl: String,
    #[serde(rename = "DE")]
    pub de: String,
}

impl ShippingQuote {
    /// Run the estimator once per supported destination.
    pub fn for_price(price: &str) -> Self {
        Self {
            sk: estimate(price, Destination::Slovakia.code()).to_string(),
            cz: estimate(price, Destination::Czechia.code()).to_string(),
            pl: estimate(price, Destination::Poland.code()).to_string(),
            de: estimate(price, Destination::Germany.code()).to_string(),
        }
    }

    /// Rate for one of the four supported codes; `None` for anything else.
    pub fn rate_for(&self, code: &str) -> Option<&str> {
        match Destination::from_code(code)? {
            Destination::Slovakia => Some(&self.sk),
            Destination::Czechia => Some(&self.cz),
            Destination::Poland => Some(&self.pl),
            Destination::Germany => Some(&self.de),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_above_threshold_for_every_destination() {
        for destination in Destination::ALL {
            assert_eq!(
                estimate("30.01", destination.code()),
                ShippingEstimate::Free
            );
            assert_eq!(estimate("50", destination.code()), ShippingEstimate::Free);
        }
        // Unknown destinations are free above the threshold too.
        assert_eq!(estimate("31", "FR"), ShippingEstimate::Free);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(estimate("30", "SK"), ShippingEstimate::Flat("2.99"));
        assert_eq!(estimate("30.00", "DE"), ShippingEstimate::Flat("4.99"));
    }

    #[test]
    fn test_flat_rates_per_destination() {
        assert_eq!(estimate("25", "SK"), ShippingEstimate::Flat("2.99"));
        assert_eq!(estimate("25", "CZ"), ShippingEstimate::Flat("3.49"));
        assert_eq!(estimate("25", "PL"), ShippingEstimate::Flat("3.29"));
        assert_eq!(estimate("25", "DE"), ShippingEstimate::Flat("4.99"));
    }

    #[test]
    fn test_default_rate_for_unknown_destination() {
        assert_eq!(estimate("25", "FR"), ShippingEstimate::Flat(DEFAULT_RATE));
        assert_eq!(estimate("25", ""), ShippingEstimate::Flat(DEFAULT_RATE));
        // Codes are matched exactly; lowercase is not a supported code.
        assert_eq!(estimate("25", "sk"), ShippingEstimate::Flat(DEFAULT_RATE));
    }

    #[test]
    fn test_empty_price_counts_as_zero() {
        assert_eq!(estimate("", "SK"), ShippingEstimate::Flat("2.99"));
        assert_eq!(estimate("   ", "DE"), ShippingEstimate::Flat("4.99"));
        assert_eq!(estimate("0", "PL"), ShippingEstimate::Flat("3.29"));
    }

    #[test]
    fn test_unparseable_price_is_unavailable() {
        for destination in Destination::ALL {
            assert_eq!(
                estimate("abc", destination.code()),
                ShippingEstimate::Unavailable
            );
        }
        assert_eq!(estimate("12,99", "SK"), ShippingEstimate::Unavailable);
        assert_eq!(estimate("€25", "DE"), ShippingEstimate::Unavailable);
    }

    #[test]
    fn test_quote_covers_all_destinations() {
        let quote = ShippingQuote::for_price("25");
        assert_eq!(quote.sk, "2.99");
        assert_eq!(quote.cz, "3.49");
        assert_eq!(quote.pl, "3.29");
        assert_eq!(quote.de, "4.99");

        let free = ShippingQuote::for_price("100");
        assert_eq!(free.sk, "FREE");
        assert_eq!(free.de, "FREE");
    }

    #[test]
    fn test_quote_rate_lookup() {
        let quote = ShippingQuote::for_price("25");
        assert_eq!(quote.rate_for("DE"), Some("4.99"));
        assert_eq!(quote.rate_for("FR"), None);
        assert_eq!(quote.rate_for(""), None);
    }

    #[test]
    fn test_quote_serializes_with_country_code_keys() {
        let quote = ShippingQuote::for_price("25");
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"SK": "2.99", "CZ": "3.49", "PL": "3.29", "DE": "4.99"})
        );
    }
}
