//! Menu data model and helpers
//!
//! Defines the typed menu item schema, restaurant-level records and the
//! filtering/extraction helpers used by reports and histograms.

mod filter;
mod item;
mod restaurant;

pub use filter::*;
pub use item::{MenuItem, FIELDS};
pub use restaurant::{RestaurantId, RestaurantMenu};
