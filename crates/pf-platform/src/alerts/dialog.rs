use std::path::Path;

use pf_core::ports::AlertPort;

/// Alert dialogs via `osascript`'s `display dialog`.
///
/// The daemon has no window of its own, so dialogs ride on the scripting
/// bridge like everything else user-facing.
pub struct DialogAlerts;

#[cfg(target_os = "macos")]
mod macos {
    use std::process::Command;
    use tracing::warn;

    pub(super) const AUTOMATION_SETTINGS_URL: &str =
        "x-apple.systempreferences:com.apple.preference.security?Privacy_Automation";

    const OPEN_SETTINGS_BUTTON: &str = "Open System Settings";

    pub(super) fn automation_prompt() {
        let script = format!(
            "display dialog \"To save files in the current Finder folder, macOS needs \
permission to let PasteFile control Finder.\n\nClick \\\"{OPEN_SETTINGS_BUTTON}\\\" and \
enable PasteFile under Finder in:\nSystem Settings → Privacy & Security → Automation.\" \
with title \"Allow PasteFile to control Finder\" \
buttons {{\"{OPEN_SETTINGS_BUTTON}\", \"Cancel\"}} default button 1"
        );

        match Command::new("osascript").arg("-e").arg(&script).output() {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                if stdout.contains(OPEN_SETTINGS_BUTTON) {
                    open_privacy_settings();
                }
            }
            Err(e) => warn!(error = %e, "failed to present automation prompt"),
        }
    }

    pub(super) fn write_failure_dialog(path_display: &str) {
        let script = format!(
            "display dialog \"PasteFile tried to save a file here:\n\n{path_display}\n\n\
but macOS reported a permissions error.\n\nThis usually means the folder is protected by \
Files & Folders, Full Disk Access, sandboxing, or iCloud Drive settings. Try a different \
save location or adjust your macOS privacy settings.\" \
with title \"Cannot write file\" buttons {{\"OK\"}} default button 1"
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            warn!(error = %e, "failed to present write-failure dialog");
        }
    }

    fn open_privacy_settings() {
        if let Err(e) = Command::new("open").arg(AUTOMATION_SETTINGS_URL).spawn() {
            warn!(error = %e, "failed to open privacy settings");
        }
    }
}

#[cfg(target_os = "macos")]
impl AlertPort for DialogAlerts {
    fn automation_permission_prompt(&self) {
        macos::automation_prompt();
    }

    fn write_permission_failure(&self, path: &Path) {
        macos::write_failure_dialog(&path.display().to_string());
    }
}

// Non-macOS builds only log; there is no dialog surface to present.
#[cfg(not(target_os = "macos"))]
impl AlertPort for DialogAlerts {
    fn automation_permission_prompt(&self) {
        tracing::warn!("automation permission required, no dialog surface on this platform");
    }

    fn write_permission_failure(&self, path: &Path) {
        tracing::warn!(path = %path.display(), "write blocked by permissions");
    }
}
