//! Filesystem-backed storage
//!
//! The production `StorageCapability`: plain `std::fs` reads and writes,
//! with `canonicalize` for deduplication keys.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SessionError;

use super::StorageCapability;

/// Document storage over the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStorage;

impl StorageCapability for DiskStorage {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_all(&self, path: &Path) -> Result<Vec<u8>, SessionError> {
        let bytes = fs::read(path)?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(bytes)
    }

    fn write_document(&self, path: &Path, content: &[u8]) -> Result<(), SessionError> {
        fs::write(path, content)?;
        tracing::info!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }

    fn resolve_canonical(&self, path: &Path) -> PathBuf {
        // Fails for paths that don't exist yet (save-as targets); the raw
        // path is still a usable dedup key in that case.
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }
}
