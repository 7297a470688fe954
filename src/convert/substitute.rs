// src/convert/substitute.rs
// =============================================================================
// Rewrites URLs in text as inline markdown links.
//
// For each URL in the title map (in map order) every occurrence in the text
// becomes [label](url), where label is the title or, when there is none, the
// placeholder.
//
// Matching is literal: the URL is passed through regex::escape, so '?', '.',
// '+', '(' and friends in query strings match themselves. The link is copied
// in verbatim, so a '$' in a title is not read as a group reference.
//
// Every literal occurrence is replaced, whatever follows it (punctuation,
// quotes, brackets). The one exception: an occurrence where a longer key of
// the same map starts is left for that key, so replacing https://a.com does
// not rewrite the front of https://a.com/docs.
// =============================================================================

use regex::Regex;

use super::title_map::TitleMap;
use crate::error::ConvertError;

/// Renders `[label](url)`
pub fn markdown_link(label: &str, url: &str) -> String {
    format!("[{}]({})", label, url)
}

// Replaces every mapped URL in `text` with its markdown link
//
// Parameters:
//   text: the original text
//   titles: URL -> title (None = title unavailable)
//   placeholder: label used when a title is missing or empty
//
// Returns the rewritten text. An empty map gives back `text` unchanged.
pub fn replace_urls_with_links(
    text: &str,
    titles: &TitleMap,
    placeholder: &str,
) -> Result<String, ConvertError> {
    let mut result = text.to_string();

    for (url, title) in titles.iter() {
        let label = match title {
            Some(title) if !title.is_empty() => title,
            _ => placeholder,
        };
        let link = markdown_link(label, url);

        let pattern = Regex::new(&regex::escape(url)).map_err(|source| ConvertError::Pattern {
            url: url.to_string(),
            source,
        })?;

        // Keys that extend this one, e.g. https://a.com/docs for https://a.com
        let longer: Vec<&str> = titles
            .iter()
            .map(|(key, _)| key)
            .filter(|key| key.len() > url.len() && key.starts_with(url))
            .collect();

        result = replace_occurrences(&result, &pattern, &link, &longer);
    }

    Ok(result)
}

// Like Regex::replace_all with NoExpand, except that matches where one of
// `longer` starts are left alone
fn replace_occurrences(
    text: &str,
    pattern: &Regex,
    replacement: &str,
    longer: &[&str],
) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last_end = 0;

    for found in pattern.find_iter(text) {
        let rest = &text[found.start()..];
        if longer.iter().any(|key| rest.starts_with(key)) {
            continue;
        }
        output.push_str(&text[last_end..found.start()]);
        output.push_str(replacement);
        last_end = found.end();
    }

    output.push_str(&text[last_end..]);
    output
}
