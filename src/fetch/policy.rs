//! Page count policies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many pages to request for a reported total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagePolicy {
    /// `ceil(total / page_size)` pages, at least one
    #[default]
    Ceiling,
    /// `1 + floor(total / page_size)` pages; requests a trailing empty page
    /// whenever the total is an exact multiple of the page size
    Legacy,
}

impl PagePolicy {
    /// Total number of page requests, including the first
    pub fn page_count(self, total: usize, page_size: usize) -> usize {
        match self {
            Self::Ceiling => total.div_ceil(page_size).max(1),
            Self::Legacy => 1 + total / page_size,
        }
    }
}

impl fmt::Display for PagePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ceiling => write!(f, "ceiling"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for PagePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ceiling" => Ok(Self::Ceiling),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown page policy: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling_page_count() {
        assert_eq!(PagePolicy::Ceiling.page_count(0, 50), 1);
        assert_eq!(PagePolicy::Ceiling.page_count(49, 50), 1);
        assert_eq!(PagePolicy::Ceiling.page_count(50, 50), 1);
        assert_eq!(PagePolicy::Ceiling.page_count(100, 50), 2);
        assert_eq!(PagePolicy::Ceiling.page_count(120, 50), 3);
    }

    #[test]
    fn test_legacy_page_count() {
        assert_eq!(PagePolicy::Legacy.page_count(0, 50), 1);
        assert_eq!(PagePolicy::Legacy.page_count(49, 50), 1);
        assert_eq!(PagePolicy::Legacy.page_count(100, 50), 3);
        assert_eq!(PagePolicy::Legacy.page_count(120, 50), 3);
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("legacy".parse::<PagePolicy>(), Ok(PagePolicy::Legacy));
        assert_eq!("Ceiling".parse::<PagePolicy>(), Ok(PagePolicy::Ceiling));
        assert!("floor".parse::<PagePolicy>().is_err());
    }
}
