use std::path::{Path, PathBuf};

use tracing::debug;

use pf_core::ports::{FileSinkPort, FileWriteError};

/// Best-effort atomic file writer: the payload lands in a temp file next
/// to the target and is renamed into place.
///
/// The destination directory is expected to exist: it is either a fixed
/// user directory or a folder the file browser is currently showing.
pub struct AtomicFileSink;

impl AtomicFileSink {
    fn tmp_path(path: &Path) -> PathBuf {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => path.with_extension(format!("{ext}.tmp")),
            None => path.with_extension("tmp"),
        }
    }
}

impl FileSinkPort for AtomicFileSink {
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), FileWriteError> {
        let tmp = Self::tmp_path(path);

        std::fs::write(&tmp, bytes)
            .map_err(|e| FileWriteError::from_io(path.to_path_buf(), e))?;

        std::fs::rename(&tmp, path).map_err(|e| {
            // Leave no stray temp file behind.
            let _ = std::fs::remove_file(&tmp);
            FileWriteError::from_io(path.to_path_buf(), e)
        })?;

        debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
        Ok(())
    }
}
