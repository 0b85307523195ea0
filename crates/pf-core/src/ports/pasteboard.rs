use anyhow::Result;

use crate::pasteboard::PasteboardSnapshot;

/// Read-once access to the system pasteboard.
pub trait PasteboardPort: Send + Sync {
    fn snapshot(&self) -> Result<PasteboardSnapshot>;
}
