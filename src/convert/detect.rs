// src/convert/detect.rs
// =============================================================================
// Finds the URLs in a piece of free text.
//
// A URL is anything that starts with http:// or https:// (any case) and runs
// until the first whitespace character or closing parenthesis. Stopping at
// ')' means the URL inside markdown like [label](https://example.com) is
// found without the bracket. URLs with literal parentheses, such as some
// Wikipedia links, get cut short at the first ')'.
//
// Bare domains (example.com, www.example.com) are never detected.
// =============================================================================

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Constant pattern, known to be valid
    Regex::new(r"(?i)https?://[^\s)]+").expect("URL pattern is valid")
});

// Returns every distinct URL in `text`, in order of first appearance
//
// Example:
//   "https://a.com and https://b.com and https://a.com"
//   -> ["https://a.com", "https://b.com"]
pub fn detect_urls(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for found in URL_PATTERN.find_iter(text) {
        let url = found.as_str();
        if seen.insert(url) {
            urls.push(url.to_string());
        }
    }

    urls
}

/// Quick check used by the paste handler before it intercepts anything
pub fn contains_url(text: &str) -> bool {
    URL_PATTERN.is_match(text)
}
