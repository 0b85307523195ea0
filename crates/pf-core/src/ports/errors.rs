use std::path::PathBuf;

use thiserror::Error;

/// Why the file browser's frontmost folder could not be resolved.
///
/// The two variants drive very different behavior: authorization denial
/// aborts the whole invocation, anything else falls through to the
/// default-folder policy.
#[derive(Debug, Error)]
pub enum FolderResolveError {
    #[error("not authorized to send Apple events to the file browser")]
    AutomationDenied,

    #[error("frontmost folder unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum FileWriteError {
    #[error("permission denied writing {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("write failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileWriteError {
    /// Classify an I/O failure at `path`.
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            FileWriteError::PermissionDenied { path }
        } else {
            FileWriteError::Io { path, source }
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, FileWriteError::PermissionDenied { .. })
    }
}
