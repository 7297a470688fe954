// src/handlers/mod.rs
// =============================================================================
// Entry points for a host editor.
//
// Two ways into the same conversion pipeline:
// - command: the user picked "convert links" on a selection
// - paste: the user pasted text that contains URLs
//
// Each one checks its own preconditions first (is there a selection? is
// auto-convert on? is there anything on the clipboard?) and only then runs
// the conversion. Both report back with a ConvertedResult, or None when
// there was nothing for them to do.
// =============================================================================

mod command;
mod editor;
mod paste;

use serde::Serialize;

pub use command::convert_selected_urls;
pub use editor::{
    index_from_position, position_from_index, replace_placeholder, splice, Editor, Position,
    TextBuffer,
};
pub use paste::{handle_paste, placeholder_id, PasteEvent};

pub const SUCCESS_MESSAGE: &str = "Links converted successfully";
pub const NO_LINKS_FOUND_MESSAGE: &str = "No links found in selection";
pub const FAILED_TO_CONVERT_MESSAGE: &str = "Failed to convert links";

/// Outcome of a handled conversion, for the host to show as a notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedResult {
    /// Whether the converted text made it into the document
    pub success: bool,
    /// Message to show the user
    pub message: String,
}

impl ConvertedResult {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: FAILED_TO_CONVERT_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_to_json() {
        let json = serde_json::to_string(&ConvertedResult::succeeded()).unwrap();
        assert_eq!(
            json,
            r#"{"success":true,"message":"Links converted successfully"}"#
        );
    }
}
