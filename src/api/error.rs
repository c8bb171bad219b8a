//! API error taxonomy

use thiserror::Error;

/// Failure talking to the remote API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failure, timeout or an unreadable body
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    /// The body was not JSON or lacked `total`, `hits` or `fields`
    #[error("malformed response from {url}: {reason}")]
    Malformed { url: String, reason: String },

    /// A brand search returned no hits
    #[error("no restaurant matches {0:?}")]
    NoMatch(String),

    #[error("request timeout of {0} seconds is out of range")]
    InvalidTimeout(f64),

    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Whether the request timed out before a response arrived
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// HTTP status, when the server responded
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
