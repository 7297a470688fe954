// src/convert/orchestrate.rs
// =============================================================================
// Ties the pipeline together:
//
//   text -> detect_urls -> try_fetch_title for every URL (all at once)
//        -> TitleMap -> replace_urls_with_links -> converted text
//
// Every title fetch is started before any is awaited, and join_all waits for
// all of them to finish. A failed fetch is recorded as "no title" for that
// URL only; it never cancels or fails the others. Outcomes are zipped back
// to their URL by position, so the result does not depend on which fetch
// finished first.
//
// There is no limit on how many fetches run at once and nothing is cached
// between calls.
// =============================================================================

use futures::future::join_all;
use tracing::{debug, info, warn};

use super::detect::detect_urls;
use super::substitute::replace_urls_with_links;
use super::title::try_fetch_title;
use super::title_map::TitleMap;
use crate::error::ConvertError;
use crate::fetch::Fetcher;

/// Label used when the caller gives an empty placeholder
pub const DEFAULT_PLACEHOLDER: &str = "Untitled";

// Converts every URL in `text` into a titled markdown link
//
// Returns:
//   Ok(None)            - the text contains no URLs, nothing to do
//   Ok(Some(converted)) - the rewritten text
//   Err(e)              - the substitution step itself failed
//
// Network problems never show up as Err: they become placeholder labels.
pub async fn convert_urls_to_markdown_links<F: Fetcher + ?Sized>(
    fetcher: &F,
    text: &str,
    placeholder: &str,
) -> Result<Option<String>, ConvertError> {
    // The detector already returns each URL once, in first-occurrence order
    let urls = detect_urls(text);
    if urls.is_empty() {
        debug!("no URLs detected");
        return Ok(None);
    }

    debug!(count = urls.len(), "fetching titles");
    let outcomes = join_all(urls.iter().map(|url| try_fetch_title(fetcher, url))).await;

    let titles: TitleMap = urls
        .into_iter()
        .zip(outcomes)
        .map(|(url, outcome)| {
            let title = match outcome {
                Ok(title) => title,
                Err(e) => {
                    warn!(url = %url, error = %e, "title fetch failed, using placeholder");
                    None
                }
            };
            (url, title)
        })
        .collect();

    info!(
        urls = titles.len(),
        titled = titles.resolved_count(),
        "resolved page titles"
    );

    replace_urls_with_links(text, &titles, placeholder).map(Some)
}

/// `convert_urls_to_markdown_links` with `DEFAULT_PLACEHOLDER` standing in
/// for an empty or blank placeholder
pub async fn convert_text<F: Fetcher + ?Sized>(
    fetcher: &F,
    text: &str,
    placeholder: &str,
) -> Result<Option<String>, ConvertError> {
    let placeholder = if placeholder.trim().is_empty() {
        DEFAULT_PLACEHOLDER
    } else {
        placeholder
    };
    convert_urls_to_markdown_links(fetcher, text, placeholder).await
}
