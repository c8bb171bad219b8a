//! Settings structures for menu-nutrition configuration

use crate::api::DEFAULT_BASE_URL;
use crate::fetch::{PagePolicy, DEFAULT_PAGE_SIZE};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main settings structure, loaded from `settings.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub paths: PathSettings,
    pub report: ReportSettings,
    pub histogram: HistogramSettings,
    /// Restaurant names looked up by `ids` when none are given
    pub restaurants: Restaurants,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (MENU_NUTRITION_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("MENU_NUTRITION_BASE_URL") {
            self.api.base_url = val;
        }
        if let Ok(val) = std::env::var("MENU_NUTRITION_PAGE_SIZE") {
            if let Ok(size) = val.parse() {
                self.api.page_size = size;
            }
        }
        if let Ok(val) = std::env::var("MENU_NUTRITION_PAGE_POLICY") {
            if let Ok(policy) = val.parse() {
                self.api.page_policy = policy;
            }
        }
        if let Ok(val) = std::env::var("MENU_NUTRITION_TIMEOUT") {
            // Zero or negative disables the timeout
            if let Ok(secs) = val.parse::<f64>() {
                self.api.request_timeout = (secs > 0.0).then_some(secs);
            }
        }
        if let Ok(val) = std::env::var("MENU_NUTRITION_CREDENTIALS") {
            self.paths.credentials = PathBuf::from(val);
        }
    }

    /// Reject values that would make fetching or binning meaningless
    pub fn validate(&self) -> Result<()> {
        if self.api.page_size == 0 {
            bail!("api.page_size must be greater than zero");
        }
        let timeout_ok = match self.api.request_timeout {
            Some(t) => t > 0.0 && Duration::try_from_secs_f64(t).is_ok(),
            None => true,
        };
        if !timeout_ok {
            bail!("api.request_timeout must be a positive number of seconds");
        }
        if self.histogram.bins == 0 {
            bail!("histogram.bins must be greater than zero");
        }
        Ok(())
    }
}

/// Remote API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// API root; `search` and `brand/search` are resolved against it
    pub base_url: String,
    /// Items requested per page
    pub page_size: usize,
    /// How many pages to request for a reported total
    pub page_policy: PagePolicy,
    /// Request timeout in seconds (none = wait indefinitely)
    pub request_timeout: Option<f64>,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_policy: PagePolicy::default(),
            request_timeout: Some(30.0),
            user_agent: format!("menu-nutrition/{}", crate::VERSION),
        }
    }
}

/// Locations of the credential file and JSON artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub credentials: PathBuf,
    /// Restaurant name to brand id records
    pub restaurant_ids: PathBuf,
    /// Flat menu item dump of a single fetch
    pub menu_dump: PathBuf,
    /// Per-restaurant menus written by `fetch-all`
    pub menu_collection: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            credentials: PathBuf::from("credentials.json"),
            restaurant_ids: PathBuf::from("restaurant_ids.json"),
            menu_dump: PathBuf::from("dump.json"),
            menu_collection: PathBuf::from("restaurant_menu_data.json"),
        }
    }
}

/// Field names and thresholds used by reports
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub brand_field: String,
    /// Field holding the menu category, and the value marking an entree
    pub category_field: String,
    pub category_value: String,
    pub sugar_field: String,
    pub calorie_field: String,
    /// Items strictly below this many grams of sugar count as low sugar
    pub low_sugar_threshold: f64,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            brand_field: "brand_name".to_string(),
            category_field: "menu_category".to_string(),
            category_value: "entree".to_string(),
            sugar_field: "nf_sugars".to_string(),
            calorie_field: "nf_calories".to_string(),
            low_sugar_threshold: 3.0,
        }
    }
}

/// Histogram defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramSettings {
    pub bins: usize,
    /// Width of the longest bar, in characters
    pub bar_width: usize,
}

impl Default for HistogramSettings {
    fn default() -> Self {
        Self {
            bins: 20,
            bar_width: 50,
        }
    }
}

/// Restaurant name list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Restaurants(pub Vec<String>);

impl Default for Restaurants {
    fn default() -> Self {
        Self(
            ["McDonalds", "Wendy's", "Taco Bell", "Qdoba", "Chipotle", "Five Guys"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

impl std::ops::Deref for Restaurants {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
