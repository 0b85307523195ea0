use std::path::PathBuf;

use pf_core::ports::UserDirsPort;
use pf_core::settings::SaveLocation;

/// Fixed user directories via the `dirs` crate.
pub struct StandardUserDirs;

impl UserDirsPort for StandardUserDirs {
    fn dir_for(&self, location: SaveLocation) -> Option<PathBuf> {
        match location {
            SaveLocation::Desktop => dirs::desktop_dir(),
            SaveLocation::Downloads => dirs::download_dir(),
            SaveLocation::Pictures => dirs::picture_dir(),
        }
    }
}
