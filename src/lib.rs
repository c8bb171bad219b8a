//! menu-nutrition: download and summarize restaurant menu nutrition data
//!
//! Menus are fetched page by page from the Nutritionix API, cached as JSON
//! and queried offline with filters, sugar reports and histograms.

pub mod api;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod histogram;
pub mod menu;
pub mod network;
pub mod report;
pub mod store;

pub use config::Settings;
pub use fetch::{Fetcher, PagePolicy, PageSource};
pub use menu::{MenuItem, RestaurantMenu};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
