use std::path::PathBuf;

use super::errors::FolderResolveError;

/// Resolves the folder shown in the frontmost file-browser window.
///
/// Implemented with blocking inter-application scripting; calls may stall
/// briefly and carry no timeout.
pub trait FrontmostFolderPort: Send + Sync {
    /// Whether the system file browser (Finder) is the frontmost application.
    fn is_file_browser_frontmost(&self) -> bool;

    /// The frontmost file-browser window's target folder, or the desktop
    /// when the browser has no open windows.
    fn frontmost_folder(&self) -> Result<PathBuf, FolderResolveError>;
}
