//! Paginated bulk fetch

use super::policy::PagePolicy;
use super::source::PageSource;
use crate::api::{ApiError, SearchPage};
use crate::config::ApiSettings;
use crate::menu::MenuItem;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Largest page the search endpoint serves
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Failure of a whole paginated fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("page size must be greater than zero")]
    InvalidPageSize,

    #[error("failed to fetch page at offset {offset}: {source}")]
    Page {
        offset: usize,
        #[source]
        source: ApiError,
    },
}

/// Fetches every record of an entity by walking fixed-size pages
///
/// Pages are requested strictly one after another. Any failed page aborts the
/// fetch; nothing already fetched is returned.
pub struct Fetcher<S> {
    source: S,
    page_size: usize,
    policy: PagePolicy,
}

impl<S: PageSource> Fetcher<S> {
    /// Create a fetcher with the default page size and policy
    pub fn new(source: S) -> Self {
        Self {
            source,
            page_size: DEFAULT_PAGE_SIZE,
            policy: PagePolicy::default(),
        }
    }

    /// Create a fetcher using the page size and policy from settings
    pub fn with_settings(source: S, settings: &ApiSettings) -> Self {
        Self::new(source)
            .with_page_size(settings.page_size)
            .with_policy(settings.page_policy)
    }

    /// Set page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set page count policy
    pub fn with_policy(mut self, policy: PagePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn policy(&self) -> PagePolicy {
        self.policy
    }

    /// Get the underlying page source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch all records for `entity_id`, in page order
    pub async fn fetch_all(&self, entity_id: &str) -> Result<Vec<MenuItem>, FetchError> {
        if self.page_size == 0 {
            return Err(FetchError::InvalidPageSize);
        }

        let first = self.page(entity_id, 0).await?;
        let total = first.total;
        let pages = self.policy.page_count(total, self.page_size);

        info!(
            "Fetching {} items for {} in {} page(s) of {}",
            total, entity_id, pages, self.page_size
        );

        let mut items = first.into_items();

        for index in 1..pages {
            let offset = index * self.page_size;
            let page = self.page(entity_id, offset).await?;

            if page.hits.is_empty() {
                warn!(
                    "Empty page at offset {} for {} ({} of {} items fetched)",
                    offset,
                    entity_id,
                    items.len(),
                    total
                );
                break;
            }

            items.extend(page.into_items());
            debug!("Fetched {}/{} items for {}", items.len(), total, entity_id);
        }

        if items.len() != total {
            warn!(
                "Fetched {} items for {} but the server reported {}",
                items.len(),
                entity_id,
                total
            );
        }

        Ok(items)
    }

    async fn page(&self, entity_id: &str, offset: usize) -> Result<SearchPage, FetchError> {
        self.source
            .fetch_page(entity_id, offset, self.page_size)
            .await
            .map_err(|source| FetchError::Page { offset, source })
    }
}
