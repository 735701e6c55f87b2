//! System clipboard backed by arboard

use codeblock_core::{ClipboardError, ClipboardSink};

/// The OS clipboard. Opened on first write and kept open, since some
/// platforms drop the contents when the owning handle goes away.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = match &mut self.inner {
            Some(clipboard) => clipboard,
            None => {
                let clipboard = arboard::Clipboard::new()
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
                self.inner.insert(clipboard)
            }
        };

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Rejected(e.to_string()))
    }
}
