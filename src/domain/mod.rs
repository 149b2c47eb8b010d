//! Domain Layer - pure pricing and identifier rules
//!
//! No I/O here: the shipping rate table, the listing-id composition rule and
//! the image-match shop toggle are all plain functions over their inputs.

pub mod listing;
pub mod matching;
pub mod shipping;

pub use shipping::{estimate, ShippingEstimate, ShippingQuote};
