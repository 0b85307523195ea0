//! Use case for getting the current preferences.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use pf_core::ports::PreferencesPort;
use pf_core::settings::Settings;

pub struct GetSettings {
    preferences: Arc<dyn PreferencesPort>,
}

impl GetSettings {
    pub fn new(preferences: Arc<dyn PreferencesPort>) -> Self {
        Self { preferences }
    }

    pub async fn execute(&self) -> Result<Settings> {
        let span = info_span!("usecase.get_settings.execute");

        async {
            let result = self.preferences.load().await?;
            info!("Preferences retrieved");
            Ok(result)
        }
        .instrument(span)
        .await
    }
}
