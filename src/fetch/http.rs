// src/fetch/http.rs
// =============================================================================
// Fetches pages over HTTP with reqwest.
//
// Key functionality:
// - One shared client (connection pooling) with a per-request timeout
// - Follows a limited number of redirects
// - Hands non-2xx responses back to the caller unless asked not to
//
// The timeout matters: the title resolver has no deadline of its own and
// relies on the transport to give up eventually.
// =============================================================================

use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::{FetchRequest, FetchResponse, Fetcher};
use crate::error::FetchError;

/// Maximum number of redirects followed before giving up
const MAX_REDIRECTS: usize = 5;

/// reqwest-backed `Fetcher`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the HTTP client once; clones share the connection pool
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, FetchError> {
        let mut builder = self.client.request(request.method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&request.url, e))?;

        let status = response.status();
        debug!(url = %request.url, status = status.as_u16(), "received response");

        if request.error_on_status && !status.is_success() {
            return Err(FetchError::Status {
                url: request.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(&request.url, e))?;

        Ok(FetchResponse {
            status: status.as_u16(),
            body,
        })
    }
}

// Live HTTP behaviour is covered in tests/http_conversion.rs against a mock server.
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let fetcher = HttpFetcher::new(Duration::from_secs(2)).unwrap();
        // Port 9 (discard) on localhost is closed in any sane test environment
        let result = fetcher
            .fetch(&FetchRequest::get("http://127.0.0.1:9/"))
            .await;
        assert!(result.is_err());
    }
}
