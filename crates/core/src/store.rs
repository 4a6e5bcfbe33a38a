//! File persistence for extents.
//!
//! Each extent serializes to one JSON file: an array of records carrying
//! every stored field by name, so a load can rebuild equivalent instances
//! without an external schema. Derived values are never persisted.

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::extent::Extent;

/// Persistence-layer error, distinct from [`crate::DomainError`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// Load was given a path that does not exist.
    #[error("extent file not found: {path}")]
    NotFound { path: PathBuf },

    /// Reading or writing the extent file failed.
    #[error("extent file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but its content is not a valid extent.
    #[error("malformed extent file: {0}")]
    Format(#[from] serde_json::Error),
}

impl<T: Serialize> Extent<T> {
    /// Serialize the whole extent, in order, to `path`.
    ///
    /// Overwrites any existing file. Fails with [`StoreError::Io`] when the
    /// destination is unwritable; the file is only touched once the full
    /// payload has been rendered.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self.list())?;
        std::fs::write(path, json)?;
        tracing::debug!(path = %path.display(), records = self.len(), "extent saved");
        Ok(())
    }
}

impl<T: DeserializeOwned> Extent<T> {
    /// Replace the extent with the record sequence stored at `path`.
    ///
    /// Loaded records are trusted as previously validated and bypass the
    /// constructors. The file is parsed in full before the extent is
    /// touched, so a [`StoreError::Format`] leaves the extent unchanged.
    /// An explicit empty array loads an empty extent.
    pub fn load(&mut self, path: &Path) -> Result<(), StoreError> {
        if !path.exists() {
            return Err(StoreError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let json = std::fs::read_to_string(path)?;
        let items: Vec<T> = serde_json::from_str(&json)?;
        tracing::debug!(path = %path.display(), records = items.len(), "extent loaded");
        self.replace(items);
        Ok(())
    }
}
