//! Resortfare Core - synthetic hotel pricing for the booking demo
//!
//! Generates a dense price/occupancy table over three fixed axes (time
//! period, star rating, location) and answers "cheapest location" queries
//! against it. Values are random; the shape and the bounds are not.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Fixed period, star rating, and location lists |
//! | [`pricing`] | Generator coefficients, multipliers, clamping, config validation |
//! | [`generation`] | Dense price table construction |
//! | [`service`] | Construct-once table owner and best-option lookup |
//! | [`error`] | Lookup error kinds |
//!
//! # Example
//!
//! ```rust
//! use resortfare_core::prelude::*;
//!
//! let service = PriceService::new();
//! let best = service.find_best_option(0, 4).expect("period 0 / five stars exists");
//! assert!(best.price >= 1000 && best.price <= 20000);
//! ```

pub mod catalog;
pub mod error;
pub mod generation;
pub mod pricing;
pub mod service;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::catalog::{Location, StarRating, TimePeriod};
    pub use crate::error::LookupError;
    pub use crate::generation::{generate, generate_price_table, PriceEntry, PriceTable};
    pub use crate::pricing::PricingConfig;
    pub use crate::service::{BestOption, PriceService};
}
