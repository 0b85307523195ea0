use std::path::Path;

use super::errors::FileWriteError;

/// Writes the produced file, atomically where the filesystem supports it.
pub trait FileSinkPort: Send + Sync {
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), FileWriteError>;
}
