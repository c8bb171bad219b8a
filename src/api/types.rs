//! Wire types for the Nutritionix v1.1 API

use crate::menu::{MenuItem, RestaurantId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Application credentials sent with every request
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "appId", alias = "appID")]
    pub app_id: String,
    #[serde(rename = "appKey")]
    pub app_key: String,
}

impl Credentials {
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .finish()
    }
}

/// One page of a menu item search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    /// Total number of items matching the query, across all pages
    pub total: usize,
    pub hits: Vec<SearchHit>,
}

impl SearchPage {
    /// Strip hit metadata, keeping only the item fields
    pub fn into_items(self) -> Vec<MenuItem> {
        self.hits.into_iter().map(|hit| hit.fields).collect()
    }
}

/// A search hit; `_id`, `_score` and friends are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub fields: MenuItem,
}

/// Result of a brand search
#[derive(Debug, Clone, Deserialize)]
pub struct BrandPage {
    #[serde(default)]
    pub total: usize,
    pub hits: Vec<BrandHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrandHit {
    pub fields: BrandFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrandFields {
    pub name: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<BrandFields> for RestaurantId {
    fn from(fields: BrandFields) -> Self {
        RestaurantId::new(fields.name, fields.id)
    }
}
