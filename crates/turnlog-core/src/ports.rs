//! Injected capabilities: clipboard and file system.

use std::fs;
use std::path::Path;

use crate::error::{ClipboardError, LoadError, WriteError};

/// Clipboard transport. The engine hands it canonical JSON text and does
/// not care how it reaches the host clipboard.
pub trait ClipboardPort {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    /// Returns [`ClipboardError`] when the host clipboard is unavailable.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// File access for transcript persistence.
pub trait FileSystemPort {
    /// Reads the whole file at `path`.
    ///
    /// # Errors
    /// Returns [`LoadError::NotFound`] when the file cannot be read.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, LoadError>;

    /// Writes `bytes` to `path`, replacing any existing contents.
    ///
    /// # Errors
    /// Returns [`WriteError`] when the file cannot be written.
    fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<(), WriteError>;
}

/// The real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystemPort for StdFileSystem {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, LoadError> {
        fs::read(path).map_err(|source| LoadError::NotFound {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<(), WriteError> {
        fs::write(path, bytes).map_err(|source| WriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_and_write_through_std_fs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        let fs = StdFileSystem;
        fs.write_file(&path, b"[]").unwrap();
        assert_eq!(fs.read_file(&path).unwrap(), b"[]");
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = StdFileSystem.read_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }
}
