// src/handlers/command.rs
// Manual "convert links in selection" command.

use tracing::{debug, error};

use super::editor::Editor;
use super::ConvertedResult;
use crate::config::Settings;
use crate::convert::convert_urls_to_markdown_links;
use crate::fetch::Fetcher;

// Converts the URLs in the current selection and writes the result back
//
// Returns:
//   None                  - nothing selected, or no URLs in the selection
//   Some(succeeded)       - the selection now holds the converted text
//   Some(failed)          - the conversion broke; the selection is untouched
pub async fn convert_selected_urls<E, F>(
    editor: &mut E,
    fetcher: &F,
    settings: &Settings,
) -> Option<ConvertedResult>
where
    E: Editor + ?Sized,
    F: Fetcher + ?Sized,
{
    let selected = editor.selection();
    if selected.is_empty() {
        debug!("convert command: empty selection");
        return None;
    }

    match convert_urls_to_markdown_links(fetcher, &selected, settings.placeholder()).await {
        Ok(Some(converted)) => {
            editor.replace_selection(&converted);
            Some(ConvertedResult::succeeded())
        }
        Ok(None) => {
            debug!("convert command: no URLs in selection");
            None
        }
        Err(e) => {
            error!(error = %e, "convert command failed");
            Some(ConvertedResult::failed())
        }
    }
}
