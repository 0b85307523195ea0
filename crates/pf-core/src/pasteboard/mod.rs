//! Pasteboard domain models.
mod snapshot;

pub use snapshot::{PasteboardSnapshot, PngImage, IMAGE_FORMAT_TYPES, SCREENSHOT_MARKER_TYPES};
