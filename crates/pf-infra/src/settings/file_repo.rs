use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use pf_core::ports::PreferencesPort;
use pf_core::settings::{Settings, CURRENT_SCHEMA_VERSION};
use pf_core::smartpaste::ContentKind;

use crate::settings::migration::PreferencesMigrator;

/// JSON-file-backed preferences store.
///
/// A missing file loads as `Settings::default()`; writes go through a
/// temp file and rename so the target is always either the previous or
/// the fully written contents.
pub struct FilePreferencesRepository {
    path: PathBuf,
}

impl FilePreferencesRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default preferences path under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pastefile").join("preferences.json"))
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create preferences dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp preferences failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp preferences to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl PreferencesPort for FilePreferencesRepository {
    async fn load(&self) -> Result<Settings> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no preferences file, using defaults");
                return Ok(Settings::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read preferences failed: {}", self.path.display()))
            }
        };

        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("parse preferences failed: {}", self.path.display()))?;
        let original_version = settings.schema_version;
        let migrator = PreferencesMigrator::new();
        let migrated = migrator.migrate_to_latest(settings);

        if original_version < CURRENT_SCHEMA_VERSION {
            self.save(&migrated).await?;
        }

        Ok(migrated)
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        let content =
            serde_json::to_string_pretty(settings).context("serialize preferences failed")?;

        self.atomic_write(&content).await
    }

    async fn next_counter(&self, kind: ContentKind) -> Result<u64> {
        let mut settings = self.load().await?;
        let next = settings.counters.bump(kind);
        self.save(&settings).await?;
        debug!(%kind, counter = next, "advanced file counter");
        Ok(next)
    }
}
