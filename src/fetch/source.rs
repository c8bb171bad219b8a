//! Page source trait

use crate::api::{ApiError, SearchPage};
use async_trait::async_trait;

/// Anything able to return one fixed-size page of results for an entity
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch up to `limit` records for `entity_id`, starting at `offset`
    async fn fetch_page(
        &self,
        entity_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<SearchPage, ApiError>;
}
