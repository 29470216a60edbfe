//! Clipboard helper — best-effort copy of a viewed payload.

use arboard::Clipboard;

use crate::errors::{Result, VaultLinkError};

/// Place `text` on the system clipboard.
///
/// Callers treat failure as a reportable inconvenience, never as a
/// reason to change workflow state.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard =
        Clipboard::new().map_err(|e| VaultLinkError::ClipboardError(e.to_string()))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| VaultLinkError::ClipboardError(e.to_string()))?;

    Ok(())
}
