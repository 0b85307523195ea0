use async_trait::async_trait;

use crate::settings::Settings;
use crate::smartpaste::ContentKind;

#[async_trait]
pub trait PreferencesPort: Send + Sync {
    async fn load(&self) -> anyhow::Result<Settings>;
    async fn save(&self, settings: &Settings) -> anyhow::Result<()>;

    /// Increment the per-kind counter and persist it, returning the new
    /// value. Runs before the file write and is never rolled back, so
    /// counter values stay monotonic even across failed writes.
    async fn next_counter(&self, kind: ContentKind) -> anyhow::Result<u64>;
}

pub trait PreferencesMigrationPort: Send + Sync {
    fn from_version(&self) -> u32;
    fn to_version(&self) -> u32;
    fn migrate(&self, settings: Settings) -> Settings;
}
