//! Use case for updating preferences.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, warn, Instrument};

use pf_core::ports::PreferencesPort;
use pf_core::settings::{Settings, TemplateSettings, CURRENT_SCHEMA_VERSION};

/// Persists a new preferences value.
///
/// Counters are owned by the smart-paste flow, not by whoever edits the
/// preferences: the stored counter values always win over the incoming
/// ones, so an external edit can never rewind them.
pub struct UpdateSettings {
    preferences: Arc<dyn PreferencesPort>,
}

impl UpdateSettings {
    pub fn new(preferences: Arc<dyn PreferencesPort>) -> Self {
        Self { preferences }
    }

    pub async fn execute(&self, mut settings: Settings) -> Result<()> {
        let span = info_span!("usecase.update_settings.execute");

        async {
            if settings.schema_version != CURRENT_SCHEMA_VERSION {
                return Err(anyhow::anyhow!(
                    "Invalid schema version: expected {}, got {}",
                    CURRENT_SCHEMA_VERSION,
                    settings.schema_version
                ));
            }

            for template in [&settings.templates.image, &settings.templates.text] {
                if !TemplateSettings::has_placeholder(template) {
                    warn!(template = %template, "filename template contains no placeholder token");
                }
            }

            let stored = self.preferences.load().await?;
            settings.counters = stored.counters;

            self.preferences.save(&settings).await?;

            info!("Preferences updated");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pf_core::smartpaste::ContentKind;
    use std::sync::Mutex;

    struct MockPreferences {
        stored: Mutex<Settings>,
    }

    impl MockPreferences {
        fn new(initial: Settings) -> Self {
            Self {
                stored: Mutex::new(initial),
            }
        }
    }

    #[async_trait]
    impl PreferencesPort for MockPreferences {
        async fn load(&self) -> anyhow::Result<Settings> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn save(&self, settings: &Settings) -> anyhow::Result<()> {
            *self.stored.lock().unwrap() = settings.clone();
            Ok(())
        }

        async fn next_counter(&self, kind: ContentKind) -> anyhow::Result<u64> {
            let mut stored = self.stored.lock().unwrap();
            Ok(stored.counters.bump(kind))
        }
    }

    #[tokio::test]
    async fn stored_counters_survive_an_update() {
        let mut initial = Settings::default();
        initial.counters.image = 7;
        let repo = Arc::new(MockPreferences::new(initial));

        let mut incoming = Settings::default();
        incoming.counters.image = 0; // stale view of the counters
        incoming.behavior.text_enabled = false;

        UpdateSettings::new(repo.clone())
            .execute(incoming)
            .await
            .unwrap();

        let stored = repo.stored.lock().unwrap();
        assert_eq!(stored.counters.image, 7);
        assert!(!stored.behavior.text_enabled);
    }

    #[tokio::test]
    async fn rejects_unknown_schema_version() {
        let repo = Arc::new(MockPreferences::new(Settings::default()));

        let mut incoming = Settings::default();
        incoming.schema_version = 99;

        let err = UpdateSettings::new(repo).execute(incoming).await;
        assert!(err.is_err());
    }
}
