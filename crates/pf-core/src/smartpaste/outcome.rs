use std::path::PathBuf;

/// The kind of file a smart paste produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Image,
    Text,
}

impl ContentKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ContentKind::Image => "png",
            ContentKind::Text => "txt",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Image => write!(f, "image"),
            ContentKind::Text => write!(f, "text"),
        }
    }
}

/// Result of one smart-paste invocation: zero or one file written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmartPasteOutcome {
    Written { kind: ContentKind, path: PathBuf },
    Skipped(SkipReason),
}

/// Why an invocation ended without writing a file.
///
/// None of these are process-fatal; the daemon keeps waiting for the next
/// trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// File URLs on the pasteboard; native paste behavior owns the gesture.
    FileUrlsOnPasteboard,

    /// Behaviors disabled, or no image/text material found.
    NothingEligible,

    /// No destination folder could be resolved.
    NoDestination,

    /// The preferences store could not be read or advanced.
    PreferencesUnavailable,

    /// Sending Apple events to the file browser was denied.
    AutomationDenied,

    /// The destination was resolved but the write failed.
    WriteFailed,
}
