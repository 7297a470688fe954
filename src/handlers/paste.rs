// src/handlers/paste.rs
// =============================================================================
// Converts URLs as they are pasted.
//
// How it works:
// 1. Bail out (let the normal paste happen) when auto-convert is off, the
//    clipboard has no plain text, or the text has no URLs
// 2. Stop the normal paste and insert a temporary placeholder right away so
//    the user sees something immediately
// 3. Run the conversion (this is the slow part: one request per URL)
// 4. Find the placeholder again by plain text search, since the user may
//    have kept typing, and replace it with the converted text
//
// The placeholder starts with the pasted text itself, so the user's content
// stays in the document the whole time.
// =============================================================================

use tracing::{debug, error, warn};
use uuid::Uuid;

use super::editor::{replace_placeholder, Editor};
use super::ConvertedResult;
use crate::config::Settings;
use crate::convert::{contains_url, convert_urls_to_markdown_links};
use crate::fetch::Fetcher;

/// Used in the placeholder when no placeholder text is configured
const CONVERTING_LABEL: &str = "Converting";

/// A clipboard paste as seen by the handler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteEvent {
    text: Option<String>,
    default_prevented: bool,
}

impl PasteEvent {
    /// A paste carrying plain text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            default_prevented: false,
        }
    }

    /// A paste with no plain-text payload (an image, say)
    pub fn without_text() -> Self {
        Self::default()
    }

    pub fn plain_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Tells the host not to run its own paste
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

// Builds a placeholder no other text in the document will match
//
// Format: "<pasted> (<label>... <uuid>)"
pub fn placeholder_id(pasted: &str, label: &str) -> String {
    let label = if label.trim().is_empty() {
        CONVERTING_LABEL
    } else {
        label
    };
    format!("{} ({}... {})", pasted, label, Uuid::new_v4().simple())
}

// Handles one paste
//
// Returns:
//   None            - not ours; the host should paste normally
//   Some(succeeded) - placeholder replaced with the converted text
//   Some(failed)    - conversion failed (placeholder reverted to the pasted
//                     text) or the placeholder could not be found again
pub async fn handle_paste<E, F>(
    event: &mut PasteEvent,
    editor: &mut E,
    fetcher: &F,
    settings: &Settings,
) -> Option<ConvertedResult>
where
    E: Editor + ?Sized,
    F: Fetcher + ?Sized,
{
    if !settings.enable_auto_convert {
        return None;
    }

    let pasted = match event.plain_text() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => return None,
    };

    if !contains_url(&pasted) {
        debug!("paste: no URLs, leaving it to the host");
        return None;
    }

    event.prevent_default();

    let placeholder = placeholder_id(&pasted, &settings.placeholder_text);
    editor.replace_selection(&placeholder);

    match convert_urls_to_markdown_links(fetcher, &pasted, settings.placeholder()).await {
        Ok(converted) => {
            let text = converted.unwrap_or(pasted);
            if replace_placeholder(editor, &placeholder, &text) {
                Some(ConvertedResult::succeeded())
            } else {
                warn!("paste: placeholder was edited away, converted text not inserted");
                Some(ConvertedResult::failed())
            }
        }
        Err(e) => {
            error!(error = %e, "paste: conversion failed, restoring pasted text");
            restore_pasted_text(editor, &placeholder, &pasted);
            Some(ConvertedResult::failed())
        }
    }
}

// Puts the pasted text back where the placeholder is. Returns false (and
// leaves the document alone) when the placeholder is gone.
fn restore_pasted_text<E: Editor + ?Sized>(
    editor: &mut E,
    placeholder: &str,
    pasted: &str,
) -> bool {
    let restored = replace_placeholder(editor, placeholder, pasted);
    if !restored {
        warn!("paste: placeholder was edited away, pasted text not restored");
    }
    restored
}
