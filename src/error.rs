// src/error.rs
// =============================================================================
// Error types for the library side of the crate.
//
// - FetchError: something went wrong talking to the network
// - ConvertError: the whole conversion could not be completed
// - ConfigError: the settings file could not be loaded
//
// A FetchError never escapes the conversion pipeline: a failed title fetch
// only means that URL gets the placeholder label. ConvertError and
// ConfigError are surfaced to the caller.
// =============================================================================

use thiserror::Error;

/// Errors produced by a `Fetcher`
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not finish before the transport deadline
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// Could not reach the host (DNS failure, refused connection, ...)
    #[error("could not connect to {url}: {message}")]
    Connect { url: String, message: String },

    /// The server answered with a non-success status and the request
    /// asked to treat that as an error
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// Any other reqwest failure (bad body encoding, redirect loop, ...)
    #[error("HTTP client error for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failure reported by a non-reqwest transport
    #[error("transport failure for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl FetchError {
    // Sorts a reqwest error into one of our variants: timeouts first, then
    // connection problems, then everything else
    pub fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        let url = url.to_string();

        if error.is_timeout() {
            FetchError::Timeout { url }
        } else if error.is_connect() {
            let message = if error.to_string().contains("dns") {
                "could not resolve hostname".to_string()
            } else {
                "connection failed".to_string()
            };
            FetchError::Connect { url, message }
        } else {
            FetchError::Http { url, source: error }
        }
    }
}

/// Errors that abort a whole conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("could not build a literal match pattern for {url}: {source}")]
    Pattern {
        url: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors loading the settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid setting: {0}")]
    Validation(String),
}
