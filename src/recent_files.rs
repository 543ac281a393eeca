//! Persistent recent documents list
//!
//! Tracks documents opened in the workspace and persists them to disk.
//! Entries are stored in MRU (most recently used) order with a capacity
//! limit.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Maximum number of entries to keep
const MAX_ENTRIES: usize = 20;

/// A single entry in the recent documents list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentEntry {
    /// Absolute path to the document
    pub path: PathBuf,
    /// Timestamp when last opened (Unix epoch seconds)
    pub opened_at: u64,
    /// Number of times the document has been opened
    #[serde(default)]
    pub open_count: u32,
}

impl RecentEntry {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            opened_at: now_epoch_secs(),
            open_count: 1,
        }
    }

    /// Update entry for re-opening
    fn touch(&mut self) {
        self.opened_at = now_epoch_secs();
        self.open_count += 1;
    }

    /// Menu label (the file name, or the full path for oddballs like `/`)
    pub fn display_path(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Persistent recent documents list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentFiles {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    /// Entries, most recent first
    pub entries: Vec<RecentEntry>,
}

impl RecentFiles {
    pub const CURRENT_VERSION: u32 = 1;

    /// Load from disk, pruning entries whose files are gone
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::recent_files_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let mut recent: Self = serde_json::from_str(&contents).unwrap_or_default();
                recent.prune_missing();
                recent
            }
            Err(_) => Self::default(),
        }
    }

    /// Save to disk
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = crate::config_paths::recent_files_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config directory available",
            ));
        };
        if let Err(e) = crate::config_paths::ensure_config_dir() {
            tracing::warn!("{}", e);
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
    }

    /// Add a document (or move it back to the front if already present)
    pub fn add(&mut self, path: PathBuf) {
        // Canonicalize for consistent matching
        let canonical = path.canonicalize().unwrap_or(path);

        if let Some(idx) = self.find_index(&canonical) {
            self.entries[idx].touch();
            let entry = self.entries.remove(idx);
            self.entries.insert(0, entry);
        } else {
            self.entries.insert(0, RecentEntry::new(canonical));
        }

        self.entries.truncate(MAX_ENTRIES);
    }

    pub fn remove(&mut self, path: &Path) {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        self.entries.retain(|e| e.path != canonical);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drop entries for documents that no longer exist
    pub fn prune_missing(&mut self) {
        let original_len = self.entries.len();
        self.entries.retain(|e| e.exists());
        if self.entries.len() != original_len {
            tracing::debug!(
                "Pruned {} missing documents from recent list",
                original_len - self.entries.len()
            );
        }
    }

    fn find_index(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_retrieve() {
        let mut recent = RecentFiles::default();
        let path = PathBuf::from("/docs/letter.html");

        recent.add(path.clone());

        assert_eq!(recent.entries.len(), 1);
        assert_eq!(recent.entries[0].path, path);
    }

    #[test]
    fn test_reopening_moves_to_front() {
        let mut recent = RecentFiles::default();

        recent.add(PathBuf::from("/first.html"));
        recent.add(PathBuf::from("/second.html"));
        recent.add(PathBuf::from("/first.html"));

        assert_eq!(recent.entries[0].path, PathBuf::from("/first.html"));
        assert_eq!(recent.entries.len(), 2, "no duplicate");
    }

    #[test]
    fn test_open_count_increments() {
        let mut recent = RecentFiles::default();
        recent.add(PathBuf::from("/a.html"));
        assert_eq!(recent.entries[0].open_count, 1);

        recent.add(PathBuf::from("/a.html"));
        assert_eq!(recent.entries[0].open_count, 2);
    }

    #[test]
    fn test_capacity_preserves_most_recent() {
        let mut recent = RecentFiles::default();
        for i in 0..50 {
            recent.add(PathBuf::from(format!("/doc{}.html", i)));
        }

        assert_eq!(recent.entries.len(), MAX_ENTRIES);
        assert_eq!(recent.entries[0].path, PathBuf::from("/doc49.html"));
        assert_eq!(
            recent.entries[MAX_ENTRIES - 1].path,
            PathBuf::from("/doc30.html")
        );
    }

    #[test]
    fn test_remove_and_clear() {
        let mut recent = RecentFiles::default();
        recent.add(PathBuf::from("/a.html"));
        recent.add(PathBuf::from("/b.html"));

        recent.remove(&PathBuf::from("/a.html"));
        assert_eq!(recent.entries.len(), 1);
        assert_eq!(recent.entries[0].path, PathBuf::from("/b.html"));

        recent.clear();
        assert!(recent.entries.is_empty());
    }

    #[test]
    fn test_display_path() {
        let mut recent = RecentFiles::default();
        recent.add(PathBuf::from("/docs/report.html"));
        assert_eq!(recent.entries[0].display_path(), "report.html");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut recent = RecentFiles {
            version: RecentFiles::CURRENT_VERSION,
            ..Default::default()
        };
        recent.add(PathBuf::from("/a.html"));
        recent.add(PathBuf::from("/b.html"));

        let json = serde_json::to_string(&recent).unwrap();
        let loaded: RecentFiles = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.entries.len(), 2);
        assert_eq!(loaded.entries[0].path, PathBuf::from("/b.html"));
        assert_eq!(loaded.version, 1);
    }
}
