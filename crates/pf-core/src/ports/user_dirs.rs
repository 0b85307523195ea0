use std::path::PathBuf;

use crate::settings::SaveLocation;

/// Lookup of the fixed OS-provided user directories.
pub trait UserDirsPort: Send + Sync {
    fn dir_for(&self, location: SaveLocation) -> Option<PathBuf>;
}
