//! File-backed storage backend
//!
//! Each key is stored as one JSON file inside a directory. Writes go through
//! a temp file plus rename so a crash mid-write never leaves a half-written
//! record, and an exclusive lock file keeps two processes from racing writes
//! to the same key. Reads never lock; the rename makes them see either the
//! old value or the new one, never a torn write.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use fs2::FileExt;

use super::{Storage, StorageError};

/// Storage that persists one file per key under a base directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default app data directory (~/.learnforkids/).
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".learnforkids")
    }

    /// File path for a storage key.
    ///
    /// Keys like `@learnforkids:progress` contain characters that are not
    /// filename-safe everywhere, so everything outside `[a-z0-9]` collapses
    /// to a dash.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();
        let name = name.trim_matches('-');
        self.dir.join(format!("{name}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        std::fs::create_dir_all(&self.dir)?;

        // Lock file is separate from the data file so the rename below does
        // not invalidate the held lock.
        let lock_path = path.with_extension("json.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)?;
        lock_file.lock_exclusive()?;

        let temp_path = path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        temp_file.write_all(value.as_bytes())?;
        temp_file.sync_all()?;

        std::fs::rename(&temp_path, &path)?;

        // Lock released when lock_file drops
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn keys_map_to_safe_filenames() {
        let storage = FileStorage::new("/tmp/x");
        let path = storage.path_for("@learnforkids:progress");
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "learnforkids-progress.json"
        );
    }

    #[test]
    fn round_trip_and_remove() {
        let dir = TempDir::new().expect("temp dir");
        let storage = FileStorage::new(dir.path());

        assert!(storage.get("@learnforkids:progress").unwrap().is_none());

        storage.set("@learnforkids:progress", r#"{"stars":3}"#).unwrap();
        assert_eq!(
            storage.get("@learnforkids:progress").unwrap().as_deref(),
            Some(r#"{"stars":3}"#)
        );

        storage.remove("@learnforkids:progress").unwrap();
        assert!(storage.get("@learnforkids:progress").unwrap().is_none());
        // Idempotent remove
        storage.remove("@learnforkids:progress").unwrap();
    }

    #[test]
    fn overwrite_replaces_previous_value() {
        let dir = TempDir::new().expect("temp dir");
        let storage = FileStorage::new(dir.path());

        storage.set("k", "first").unwrap();
        storage.set("k", "second").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("second"));
    }
}
