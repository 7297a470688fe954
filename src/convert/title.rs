// src/convert/title.rs
// =============================================================================
// Resolves a URL to the text of its page's <title>.
//
// How it works:
// 1. GET the URL (no custom headers, non-2xx statuses are not errors)
// 2. Anything but HTTP 200 -> no title
// 3. Take the first <title ...>...</title> (case-insensitive, may span lines)
// 4. Collapse whitespace runs to single spaces and trim
// 5. Decode HTML character entities
//
// This is a pattern match, not an HTML parser: a <title> inside a comment or
// a script still counts.
// =============================================================================

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::fetch::{FetchRequest, Fetcher};

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // (?i) case-insensitive tags, (?s) lets '.' cross newlines, *? stops at
    // the first closing tag
    Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title pattern is valid")
});

static ENTITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&[#\w]+;").expect("entity pattern is valid"));

// Fetches `url` and extracts its title
//
// Returns:
//   Ok(Some(title)) - page answered 200 and had a non-empty <title>
//   Ok(None)        - non-200 status, or no usable <title>
//   Err(e)          - the transport failed
pub async fn try_fetch_title<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
) -> Result<Option<String>, FetchError> {
    let response = fetcher.fetch(&FetchRequest::get(url)).await?;

    if response.status != 200 {
        debug!(url, status = response.status, "no title: non-200 status");
        return Ok(None);
    }

    let title = extract_title(&response.body);
    if title.is_none() {
        debug!(url, "no title: page has no usable <title> tag");
    }
    Ok(title)
}

// Same as try_fetch_title, but a transport failure also becomes None
//
// Use this when one URL failing should never affect anything else.
pub async fn fetch_title<F: Fetcher + ?Sized>(fetcher: &F, url: &str) -> Option<String> {
    match try_fetch_title(fetcher, url).await {
        Ok(title) => title,
        Err(e) => {
            warn!(url, error = %e, "failed to fetch title");
            None
        }
    }
}

/// Extracts and cleans the first `<title>` in `html`
///
/// A title that is empty once whitespace is collapsed counts as missing.
pub fn extract_title(html: &str) -> Option<String> {
    let captures = TITLE_PATTERN.captures(html)?;
    let raw = captures.get(1)?.as_str();

    let collapsed = normalize_whitespace(raw);
    if collapsed.is_empty() {
        return None;
    }

    Some(decode_html_entities(&collapsed))
}

/// Collapses every whitespace run (newlines included) to one space and trims
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Decodes the common named entities plus numeric ones
//
// Named: &amp; &lt; &gt; &quot; &#39; &apos; &nbsp;
// Numeric: &#8217; (decimal) and &#x2019; (hex)
// Anything else, including numbers that are not valid characters, is left
// exactly as written.
pub fn decode_html_entities(text: &str) -> String {
    ENTITY_PATTERN
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[0];
            decode_entity(entity).unwrap_or_else(|| entity.to_string())
        })
        .into_owned()
}

fn decode_entity(entity: &str) -> Option<String> {
    let named = match entity {
        "&amp;" => Some('&'),
        "&lt;" => Some('<'),
        "&gt;" => Some('>'),
        "&quot;" => Some('"'),
        "&#39;" | "&apos;" => Some('\''),
        // Plain space, not U+00A0: titles are used as link labels
        "&nbsp;" => Some(' '),
        _ => None,
    };
    if let Some(c) = named {
        return Some(c.to_string());
    }

    let number = entity.strip_prefix("&#")?.strip_suffix(';')?;
    let code = match number.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => number.parse::<u32>().ok()?,
    };

    char::from_u32(code).map(|c| c.to_string())
}
