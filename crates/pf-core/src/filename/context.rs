use chrono::{DateTime, Local};

/// Inputs for one template expansion.
///
/// Built once per file-creation event and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct TemplateContext {
    pub timestamp: DateTime<Local>,

    /// Pasteboard text, when the event produces a text file.
    pub source_text: Option<String>,

    /// Name inferred from the pasteboard, when the event produces an image file.
    pub source_name: Option<String>,

    /// Per-kind counter value, already incremented for this event.
    pub counter: u64,
}

impl TemplateContext {
    pub fn new(timestamp: DateTime<Local>, counter: u64) -> Self {
        Self {
            timestamp,
            source_text: None,
            source_name: None,
            counter,
        }
    }

    pub fn with_source_text(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    pub fn with_source_name(mut self, name: Option<String>) -> Self {
        self.source_name = name;
        self
    }
}
