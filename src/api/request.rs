//! Request and response types exchanged with the HTTP layer

use super::error::ApiError;
use std::collections::HashMap;

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// HTTP request to be made against the remote API
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// URL to request
    pub url: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Query parameters, sent in order
    pub params: Vec<(String, String)>,
    /// JSON body
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Get,
            params: Vec::new(),
            body: None,
        }
    }

    /// Create a POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Post,
            params: Vec::new(),
            body: None,
        }
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Set the JSON body
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Look up a query parameter
    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP response from the remote API
#[derive(Debug)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl ApiResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fail with [`ApiError::Status`] unless the status is 2xx
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Status {
                status: self.status,
                url: self.url,
                body: self.text,
            })
        }
    }

    /// Decode the body as JSON, reporting shape mismatches as [`ApiError::Malformed`]
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.text).map_err(|e| ApiError::Malformed {
            url: self.url.clone(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn response(status: u16, text: &str) -> ApiResponse {
        ApiResponse {
            status,
            headers: HashMap::new(),
            text: text.to_string(),
            url: "http://localhost/search".to_string(),
        }
    }

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::get("http://localhost/brand/search")
            .param("query", "Qdoba")
            .param("limit", 1);

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.get_param("query"), Some("Qdoba"));
        assert_eq!(request.get_param("limit"), Some("1"));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_error_for_status() {
        assert!(response(200, "{}").error_for_status().is_ok());

        let err = response(401, "bad key").error_for_status().unwrap_err();
        match err {
            ApiError::Status { status, body, .. } => {
                assert_eq!(status, 401);
                assert_eq!(body, "bad key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_json_shape_mismatch_is_malformed() {
        #[derive(Debug, Deserialize)]
        struct Page {
            #[allow(dead_code)]
            total: usize,
        }

        assert!(response(200, r#"{"total": 3}"#).json::<Page>().is_ok());
        let err = response(200, r#"{"hits": []}"#).json::<Page>().unwrap_err();
        assert!(matches!(err, ApiError::Malformed { .. }));
        let err = response(200, "<html>").json::<Page>().unwrap_err();
        assert!(matches!(err, ApiError::Malformed { .. }));
    }
}
