//! HTTP networking module
//!
//! Provides the HTTP client used to talk to the nutrition API.

mod client;

pub use client::HttpClient;
