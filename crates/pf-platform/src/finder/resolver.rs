use std::path::PathBuf;

use pf_core::ports::{FolderResolveError, FrontmostFolderPort};

/// Resolves the front Finder window's target folder by scripting Finder
/// through `osascript`.
///
/// Apple events to Finder require the Automation permission; a denial
/// surfaces as error -1743 on stderr and maps to
/// [`FolderResolveError::AutomationDenied`].
pub struct FinderFolderResolver;

#[cfg(target_os = "macos")]
mod macos {
    use super::*;
    use std::process::Command;
    use tracing::{debug, warn};

    pub(super) const FINDER_BUNDLE_ID: &str = "com.apple.finder";

    /// osascript error code for "Not authorized to send Apple events".
    const APPLE_EVENTS_NOT_AUTHORIZED: &str = "-1743";

    pub(super) const FRONTMOST_FOLDER_SCRIPT: &str = r#"tell application "Finder"
    if (count of windows) is 0 then
        return POSIX path of (desktop as alias)
    else
        set targetFolder to (target of front window) as alias
        return POSIX path of targetFolder
    end if
end tell"#;

    const FRONTMOST_BUNDLE_ID_SCRIPT: &str = r#"tell application "System Events"
    get bundle identifier of first application process whose frontmost is true
end tell"#;

    pub(super) fn run_osascript(script: &str) -> Result<String, FolderResolveError> {
        let output = Command::new("osascript")
            .arg("-e")
            .arg(script)
            .output()
            .map_err(|e| FolderResolveError::Unavailable(format!("osascript spawn failed: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if stderr.contains(APPLE_EVENTS_NOT_AUTHORIZED) {
                warn!("Apple events to Finder not authorized");
                return Err(FolderResolveError::AutomationDenied);
            }
            return Err(FolderResolveError::Unavailable(stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    pub(super) fn frontmost_bundle_id() -> Option<String> {
        match run_osascript(FRONTMOST_BUNDLE_ID_SCRIPT) {
            Ok(id) => Some(id),
            Err(e) => {
                debug!(error = %e, "could not determine frontmost application");
                None
            }
        }
    }
}

#[cfg(target_os = "macos")]
impl FrontmostFolderPort for FinderFolderResolver {
    fn is_file_browser_frontmost(&self) -> bool {
        macos::frontmost_bundle_id().as_deref() == Some(macos::FINDER_BUNDLE_ID)
    }

    fn frontmost_folder(&self) -> Result<PathBuf, FolderResolveError> {
        let path = macos::run_osascript(macos::FRONTMOST_FOLDER_SCRIPT)?;
        if path.is_empty() {
            return Err(FolderResolveError::Unavailable(
                "script returned no path".to_string(),
            ));
        }
        Ok(PathBuf::from(path))
    }
}

// Stub implementation for non-macOS platforms: the file browser is never
// frontmost, so every invocation uses the default-folder policy.
#[cfg(not(target_os = "macos"))]
impl FrontmostFolderPort for FinderFolderResolver {
    fn is_file_browser_frontmost(&self) -> bool {
        false
    }

    fn frontmost_folder(&self) -> Result<PathBuf, FolderResolveError> {
        Err(FolderResolveError::Unavailable(
            "not supported on this platform".to_string(),
        ))
    }
}
