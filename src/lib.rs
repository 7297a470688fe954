// src/lib.rs
// =============================================================================
// link-titler: turns URLs in text into markdown links titled after the page.
//
//   "Visit https://example.com"  ->  "Visit [Example Domain](https://example.com)"
//
// Modules:
// - convert: the detection / title / substitution pipeline
// - fetch: the network capability the pipeline fetches pages through
// - handlers: "convert selection" and "handle paste" entry points
// - config: user settings
// - error: error types
// =============================================================================

pub mod config;
pub mod convert;
pub mod error;
pub mod fetch;
pub mod handlers;

pub use config::{load_settings, Settings};
pub use convert::{convert_text, convert_urls_to_markdown_links, detect_urls, TitleMap};
pub use error::{ConfigError, ConvertError, FetchError};
pub use fetch::{FetchRequest, FetchResponse, Fetcher, HttpFetcher};
pub use handlers::{convert_selected_urls, handle_paste, ConvertedResult, PasteEvent, TextBuffer};
