//! Remote API module
//!
//! Request/response types, the error taxonomy and the Nutritionix client.

mod error;
mod nutritionix;
mod request;
mod types;

pub use error::ApiError;
pub use nutritionix::{Nutritionix, DEFAULT_BASE_URL};
pub use request::{ApiRequest, ApiResponse, HttpMethod};
pub use types::*;
