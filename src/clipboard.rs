//! System clipboard access for result summaries

use tracing::warn;

use crate::errors::{BmiError, Result};

/// Place `text` on the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| {
        warn!(error = %e, "clipboard unavailable");
        BmiError::Clipboard(e.to_string())
    })?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| BmiError::Clipboard(e.to_string()))
}
