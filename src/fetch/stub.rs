// src/fetch/stub.rs
// Canned transport for unit tests: per-URL pages, failures and delays,
// plus a record of every request made.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use super::{FetchRequest, FetchResponse, Fetcher};
use crate::error::FetchError;

#[derive(Debug, Clone)]
enum Canned {
    Page { status: u16, body: String },
    Failure(String),
}

#[derive(Debug, Default)]
pub(crate) struct StubFetcher {
    routes: HashMap<String, Canned>,
    delays: HashMap<String, Duration>,
    requests: Mutex<Vec<FetchRequest>>,
}

impl StubFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_title(self, url: &str, title: &str) -> Self {
        let body = format!("<html><head><title>{}</title></head><body></body></html>", title);
        self.with_page(url, 200, &body)
    }

    pub(crate) fn with_page(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            url.to_string(),
            Canned::Page {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    pub(crate) fn with_failure(mut self, url: &str, message: &str) -> Self {
        self.routes
            .insert(url.to_string(), Canned::Failure(message.to_string()));
        self
    }

    pub(crate) fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    pub(crate) fn requests(&self) -> Vec<FetchRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, FetchError> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(delay) = self.delays.get(&request.url) {
            tokio::time::sleep(*delay).await;
        }

        match self.routes.get(&request.url) {
            Some(Canned::Page { status, body }) => Ok(FetchResponse {
                status: *status,
                body: body.clone(),
            }),
            Some(Canned::Failure(message)) => Err(FetchError::Transport {
                url: request.url.clone(),
                message: message.clone(),
            }),
            None => Err(FetchError::Transport {
                url: request.url.clone(),
                message: "no canned response".to_string(),
            }),
        }
    }
}
