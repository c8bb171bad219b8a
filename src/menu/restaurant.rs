//! Restaurant-level records

use super::item::MenuItem;
use serde::{Deserialize, Serialize};

/// A restaurant name paired with the remote brand identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantId {
    pub name: String,
    pub id: String,
}

impl RestaurantId {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// A restaurant together with its downloaded menu
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantMenu {
    pub name: String,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

impl RestaurantMenu {
    pub fn new(name: impl Into<String>, menu: Vec<MenuItem>) -> Self {
        Self {
            name: name.into(),
            menu,
        }
    }
}
