//! Paginated fetching
//!
//! Walks a fixed-page-size search endpoint until the server-reported total is
//! exhausted, one request at a time.

mod paginator;
mod policy;
mod source;

pub use paginator::{FetchError, Fetcher, DEFAULT_PAGE_SIZE};
pub use policy::PagePolicy;
pub use source::PageSource;
