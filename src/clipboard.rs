//! System clipboard access.
//!
//! Thin wrapper around `arboard` so callers deal with one typed error and
//! the rest of the app stays free of platform clipboard details.

/// Error type for clipboard writes.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// Clipboard could not be opened (missing display, permissions).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The write itself failed.
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Write text to the system clipboard.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}
