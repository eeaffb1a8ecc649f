//! Reading-list snapshot persistence
//!
//! Saves and loads the full book collection as one JSON file.
//! Uses atomic writes (write to temp file, then rename) to prevent
//! corruption from interrupted writes.
//!
//! Storage location: `~/.local/share/tbr/reading_list.json`
//! (configurable via `Config`)

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::models::Book;
use crate::storage::error::{StorageError, StorageResult};

/// Persistence layer for the reading-list snapshot
///
/// Every save rewrites the whole snapshot; there is no delta format.
pub struct SnapshotPersistence {
    config: Config,
}

impl SnapshotPersistence {
    /// Create a new persistence handler with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check if a snapshot exists on disk
    pub fn exists(&self) -> bool {
        self.config.snapshot_path().exists()
    }

    /// Save the collection to disk using atomic write
    pub fn save(&self, books: &[Book]) -> StorageResult<()> {
        let path = self.config.snapshot_path();

        let bytes = serde_json::to_vec_pretty(books).map_err(|e| StorageError::InvalidSnapshot {
            path: path.clone(),
            details: e.to_string(),
        })?;

        atomic_write(&path, &bytes)
    }

    /// Load the collection from disk
    ///
    /// Returns `None` if no snapshot exists. Returns an error if the
    /// snapshot exists but can't be read or parsed.
    pub fn load(&self) -> StorageResult<Option<Vec<Book>>> {
        let path = self.config.snapshot_path();

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(|e| StorageError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let books: Vec<Book> =
            serde_json::from_slice(&bytes).map_err(|e| StorageError::InvalidSnapshot {
                path: path.clone(),
                details: e.to_string(),
            })?;

        Ok(Some(books))
    }

    /// Delete the stored snapshot
    pub fn delete(&self) -> StorageResult<()> {
        let path = self.config.snapshot_path();
        if path.exists() {
            fs::remove_file(&path).map_err(|e| StorageError::from_io(e, path))?;
        }
        Ok(())
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    // Temp file in the same directory (rename across filesystems is not atomic)
    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|e| StorageError::AtomicWriteFailed {
        from: temp_path,
        to: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
