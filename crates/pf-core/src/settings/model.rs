use serde::{Deserialize, Serialize};

use crate::smartpaste::ContentKind;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Which smart-paste behaviors react to the shortcut.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorSettings {
    pub image_enabled: bool,
    pub text_enabled: bool,
}

impl BehaviorSettings {
    pub fn is_enabled(&self, kind: ContentKind) -> bool {
        match kind {
            ContentKind::Image => self.image_enabled,
            ContentKind::Text => self.text_enabled,
        }
    }
}

/// Fixed user directories a smart paste may fall back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveLocation {
    Desktop,
    Downloads,
    Pictures,
}

impl SaveLocation {
    pub fn display_name(&self) -> &'static str {
        match self {
            SaveLocation::Desktop => "Desktop",
            SaveLocation::Downloads => "Downloads",
            SaveLocation::Pictures => "Pictures",
        }
    }
}

/// Destination policy when the file browser's folder is not used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSettings {
    /// When false, an unresolved file-browser folder aborts the invocation
    /// instead of falling back to `location`.
    pub default_save_enabled: bool,

    pub location: SaveLocation,
}

/// Per-kind filename templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSettings {
    pub image: String,
    pub text: String,
}

impl TemplateSettings {
    pub fn for_kind(&self, kind: ContentKind) -> &str {
        match kind {
            ContentKind::Image => &self.image,
            ContentKind::Text => &self.text,
        }
    }

    /// A template with no recognized token expands to the same name every
    /// time; surfaces a warning in any future editing UI.
    pub fn has_placeholder(template: &str) -> bool {
        const TOKENS: &[&str] = &[
            "{date}",
            "{time}",
            "{datetime}",
            "{weekday}",
            "{counter}",
            "{name}",
            "{firstWords}",
        ];
        TOKENS.iter().any(|t| template.contains(t))
    }
}

/// Per-kind monotonic counters.
///
/// Incremented exactly once per file-creation attempt, before the write,
/// never rolled back on failure.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CounterSettings {
    pub image: u64,
    pub text: u64,
}

impl CounterSettings {
    pub fn get(&self, kind: ContentKind) -> u64 {
        match kind {
            ContentKind::Image => self.image,
            ContentKind::Text => self.text,
        }
    }

    /// Increment the counter for `kind` and return the new value.
    pub fn bump(&mut self, kind: ContentKind) -> u64 {
        let slot = match kind {
            ContentKind::Image => &mut self.image,
            ContentKind::Text => &mut self.text,
        };
        *slot += 1;
        *slot
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub save: SaveSettings,

    #[serde(default)]
    pub templates: TemplateSettings,

    #[serde(default)]
    pub counters: CounterSettings,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_bump_independently_and_monotonically() {
        let mut counters = CounterSettings::default();
        assert_eq!(counters.bump(ContentKind::Image), 1);
        assert_eq!(counters.bump(ContentKind::Image), 2);
        assert_eq!(counters.bump(ContentKind::Text), 1);
        assert_eq!(counters.get(ContentKind::Image), 2);
    }

    #[test]
    fn placeholder_detection() {
        assert!(TemplateSettings::has_placeholder("Image {date} at {time}"));
        assert!(TemplateSettings::has_placeholder("{firstWords}"));
        assert!(!TemplateSettings::has_placeholder("static name"));
    }

    #[test]
    fn save_location_serializes_snake_case() {
        let json = serde_json::to_string(&SaveLocation::Downloads).unwrap();
        assert_eq!(json, "\"downloads\"");
    }
}
