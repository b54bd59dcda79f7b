//! Filesystem-as-database.
//!
//! Every persisted record is a standalone JSON document in a directory,
//! keyed by its identifier: arena = directory, index = filename. Records
//! are only ever written whole or deleted, never rewritten in place, so a
//! crash mid-run leaves a valid (if incomplete) store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::app::Result;

/// A directory of JSON documents keyed by identifier.
#[derive(Debug, Clone)]
pub struct JsonDir {
    dir: PathBuf,
}

impl JsonDir {
    /// Open the store, creating the directory if it does not exist.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Open the store with any previous contents removed.
    pub fn recreate(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        match fs::remove_dir_all(&dir) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        Self::open(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Persist a record under a key, overwriting any previous document.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.write_bytes(key, &serde_json::to_vec(value)?)
    }

    /// Persist pre-serialized bytes under a key.
    ///
    /// Used where the same serialized content must land in more than one
    /// destination byte-identically.
    pub fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()> {
        fs::write(self.path(key), bytes)?;
        Ok(())
    }

    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let bytes = fs::read(self.path(key))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.path(key).is_file()
    }

    /// Delete a record; already-missing records are not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// All record keys, sorted.
    ///
    /// Directory enumeration order is filesystem-dependent; sorting makes
    /// every pass over a store reproducible.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for dirent in fs::read_dir(&self.dir)? {
            let path = dirent?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}
