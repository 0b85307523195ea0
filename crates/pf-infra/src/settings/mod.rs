mod file_repo;
mod migration;

pub use file_repo::FilePreferencesRepository;
pub use migration::PreferencesMigrator;
