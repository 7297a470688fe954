// src/convert/mod.rs
// =============================================================================
// The URL -> markdown link conversion pipeline.
//
// Submodules:
// - detect: finds URLs in free text
// - title: fetches a page and pulls out a clean <title>
// - title_map: the ordered URL -> title association
// - substitute: rewrites URLs as [title](url)
// - orchestrate: runs all of the above for one piece of text
//
// Nothing here keeps state between calls. The only I/O is the title fetch,
// which goes through the `Fetcher` the caller passes in.
// =============================================================================

mod detect;
mod orchestrate;
mod substitute;
mod title;
mod title_map;

pub use detect::{contains_url, detect_urls};
pub use orchestrate::{convert_text, convert_urls_to_markdown_links, DEFAULT_PLACEHOLDER};
pub use substitute::{markdown_link, replace_urls_with_links};
pub use title::{
    decode_html_entities, extract_title, fetch_title, normalize_whitespace, try_fetch_title,
};
pub use title_map::TitleMap;
