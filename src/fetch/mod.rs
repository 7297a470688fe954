// src/fetch/mod.rs
// =============================================================================
// The network capability used by the title resolver.
//
// The pipeline never talks to reqwest directly. It goes through the
// `Fetcher` trait so tests (and other hosts) can hand in their own transport.
//
// Submodules:
// - http: the real reqwest-backed fetcher
// - stub: canned responses for unit tests
// =============================================================================

mod http;
#[cfg(test)]
pub(crate) mod stub;

use async_trait::async_trait;
use reqwest::Method;
use std::collections::HashMap;

use crate::error::FetchError;

pub use http::HttpFetcher;

/// One request for the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Where to send the request
    pub url: String,
    /// HTTP method (the title resolver always uses GET)
    pub method: Method,
    /// Extra request headers
    pub headers: HashMap<String, String>,
    /// When false, a 404 or 500 is returned as a normal response so the
    /// caller can look at the status itself
    pub error_on_status: bool,
}

impl FetchRequest {
    /// A plain GET: no custom headers, non-2xx statuses come back as responses
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::GET,
            headers: HashMap::new(),
            error_on_status: false,
        }
    }
}

/// What the transport got back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

// Anything that can turn a URL into a status code and a body
//
// Send + Sync so one fetcher can serve every concurrent title lookup.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, FetchError>;
}
