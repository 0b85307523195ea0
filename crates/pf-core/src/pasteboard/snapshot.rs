use std::path::PathBuf;

use tracing::debug;

/// Pasteboard type markers left behind by the system screenshot tools.
pub const SCREENSHOT_MARKER_TYPES: &[&str] =
    &["com.apple.screencapture", "com.apple.screencapture.type"];

/// Image format identifiers the snapshot recognizes when no explicit
/// source name is available.
pub const IMAGE_FORMAT_TYPES: &[&str] = &[
    "public.png",
    "public.tiff",
    "public.jpeg",
    "public.heic",
    "public.bmp",
];

const SCREENSHOT_NAME: &str = "screenshot";

/// PNG-encoded image bytes lifted off the pasteboard.
#[derive(Clone, PartialEq, Eq)]
pub struct PngImage {
    data: Vec<u8>,
}

impl PngImage {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

impl std::fmt::Debug for PngImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PngImage")
            .field("size_bytes", &self.data.len())
            .finish()
    }
}

/// One-shot observation of the system pasteboard.
///
/// Read once per smart-paste invocation and discarded afterwards. The
/// platform adapter fills in the raw format identifiers exactly as the
/// pasteboard reports them; all interpretation happens here.
#[derive(Debug, Clone, Default)]
pub struct PasteboardSnapshot {
    /// Raw pasteboard format identifiers (UTIs), in pasteboard order.
    pub formats: Vec<String>,

    /// File URL entries, resolved to local paths.
    pub file_urls: Vec<PathBuf>,

    /// Image payload, already re-encoded as PNG.
    pub image: Option<PngImage>,

    /// Plain string payload.
    pub text: Option<String>,
}

impl PasteboardSnapshot {
    /// File URLs take absolute precedence: when present, the native paste
    /// behavior of the frontmost application owns the gesture.
    pub fn contains_file_urls(&self) -> bool {
        !self.file_urls.is_empty()
    }

    pub fn has_format(&self, format: &str) -> bool {
        self.formats.iter().any(|f| f == format)
    }

    /// Infer a source name for image content.
    ///
    /// Preference order: basename of the first file URL (extension
    /// stripped), then the screenshot sentinel when a screencapture marker
    /// is present, then the same sentinel when any known image format is
    /// present without an explicit name.
    pub fn inferred_image_name(&self) -> Option<String> {
        if let Some(url) = self.file_urls.first() {
            if let Some(stem) = url.file_stem().and_then(|s| s.to_str()) {
                if !stem.is_empty() {
                    debug!(name = stem, "inferred image name from file URL");
                    return Some(stem.to_string());
                }
            }
        }

        if SCREENSHOT_MARKER_TYPES.iter().any(|t| self.has_format(t)) {
            debug!("screencapture marker present, using screenshot sentinel");
            return Some(SCREENSHOT_NAME.to_string());
        }

        if IMAGE_FORMAT_TYPES.iter().any(|t| self.has_format(t)) {
            debug!("image data without explicit name, using screenshot sentinel");
            return Some(SCREENSHOT_NAME.to_string());
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_formats(formats: &[&str]) -> PasteboardSnapshot {
        PasteboardSnapshot {
            formats: formats.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn file_url_basename_wins_over_markers() {
        let mut snapshot = snapshot_with_formats(&["public.file-url", "com.apple.screencapture"]);
        snapshot.file_urls = vec![PathBuf::from("/Users/me/Pictures/holiday.heic")];

        assert_eq!(snapshot.inferred_image_name().as_deref(), Some("holiday"));
    }

    #[test]
    fn screencapture_marker_yields_sentinel() {
        let snapshot = snapshot_with_formats(&["public.png", "com.apple.screencapture.type"]);
        assert_eq!(snapshot.inferred_image_name().as_deref(), Some("screenshot"));
    }

    #[test]
    fn image_format_without_name_yields_sentinel() {
        let snapshot = snapshot_with_formats(&["public.tiff"]);
        assert_eq!(snapshot.inferred_image_name().as_deref(), Some("screenshot"));
    }

    #[test]
    fn no_image_material_yields_no_name() {
        let snapshot = snapshot_with_formats(&["public.utf8-plain-text"]);
        assert_eq!(snapshot.inferred_image_name(), None);
    }

    #[test]
    fn empty_file_stem_falls_through_to_formats() {
        let mut snapshot = snapshot_with_formats(&["public.jpeg"]);
        snapshot.file_urls = vec![PathBuf::from("/")];

        assert_eq!(snapshot.inferred_image_name().as_deref(), Some("screenshot"));
    }

    #[test]
    fn file_url_presence_is_visible() {
        let mut snapshot = PasteboardSnapshot::default();
        assert!(!snapshot.contains_file_urls());

        snapshot.file_urls.push(PathBuf::from("/tmp/a.txt"));
        assert!(snapshot.contains_file_urls());
    }
}
