use std::path::Path;

/// User-facing alerts raised by a smart paste.
pub trait AlertPort: Send + Sync {
    /// Ask the user to grant Automation permission, with a way into the
    /// system privacy settings.
    fn automation_permission_prompt(&self);

    /// Tell the user a write at `path` was blocked by a permissions error.
    fn write_permission_failure(&self, path: &Path);
}
