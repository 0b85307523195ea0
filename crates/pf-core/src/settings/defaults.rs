use super::model::*;

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            image_enabled: true,
            text_enabled: true,
        }
    }
}

impl Default for SaveSettings {
    fn default() -> Self {
        Self {
            default_save_enabled: true,
            location: SaveLocation::Desktop,
        }
    }
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            image: "Image {date} at {time}".to_string(),
            text: "Note {date} at {time}".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            behavior: BehaviorSettings::default(),
            save: SaveSettings::default(),
            templates: TemplateSettings::default(),
            counters: CounterSettings::default(),
        }
    }
}
