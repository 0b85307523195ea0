use pf_core::ports::PreferencesMigrationPort;
use pf_core::settings::{Settings, CURRENT_SCHEMA_VERSION};

pub struct PreferencesMigrator {
    migrations: Vec<Box<dyn PreferencesMigrationPort>>,
}

impl Default for PreferencesMigrator {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferencesMigrator {
    pub fn new() -> Self {
        Self {
            migrations: vec![
                // Box::new(MigrationV1ToV2),
            ],
        }
    }

    pub fn migrate_to_latest(&self, mut settings: Settings) -> Settings {
        loop {
            let current = settings.schema_version;

            if current >= CURRENT_SCHEMA_VERSION {
                break;
            }

            let migration = self
                .migrations
                .iter()
                .find(|m| m.from_version() == current)
                .unwrap_or_else(|| panic!("no migration found from version {}", current));

            settings = migration.migrate(settings);
        }

        settings
    }
}
