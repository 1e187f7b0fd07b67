//! The on-disk store of numbered text units.

mod scanner;

pub use scanner::UnitEntry;

use scanner::{last_used_index, scan_indices, scan_units, UNIT_EXTENSION};

use crate::error::{Result, SplitError};
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A directory holding one `<index>.txt` file per unit.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Create the store directory if it does not exist yet.
    pub fn ensure(&self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| SplitError::store_io(&self.root, e))
    }

    /// Path of the unit with the given index.
    pub fn unit_path(&self, index: u64) -> PathBuf {
        self.root.join(format!("{}.{}", index, UNIT_EXTENSION))
    }

    /// Indices of all numbered units present.
    pub fn indices(&self) -> Result<BTreeSet<u64>> {
        scan_indices(&self.root)
    }

    /// Highest index present, or 0 for an empty or absent store.
    pub fn last_index(&self) -> Result<u64> {
        Ok(last_used_index(&self.indices()?))
    }

    /// Every unit-extension entry, in audit order.
    pub fn units(&self) -> Result<Vec<UnitEntry>> {
        scan_units(&self.root)
    }

    /// Write a new unit.
    ///
    /// Content goes to a temporary file in the store first and is moved into
    /// place without replacing anything, so an existing unit is never touched
    /// and a crash never leaves a half-written unit behind.
    pub fn write_unit(&self, index: u64, content: &str) -> io::Result<PathBuf> {
        let path = self.unit_path(index);
        let mut file = NamedTempFile::new_in(&self.root)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        file.persist_noclobber(&path).map_err(|e| e.error)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unit_path() {
        let store = Store::new("/tmp/textos");
        assert_eq!(store.unit_path(12), PathBuf::from("/tmp/textos/12.txt"));
    }

    #[test]
    fn test_ensure_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path().join("nested").join("textos"));
        assert!(!store.exists());

        store.ensure().unwrap();
        assert!(store.exists());
        assert_eq!(store.last_index().unwrap(), 0);
    }

    #[test]
    fn test_write_unit_never_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path());

        store.write_unit(1, "first version").unwrap();
        let err = store.write_unit(1, "second version").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(store.unit_path(1)).unwrap(), "first version");
    }

    #[test]
    fn test_write_unit_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path());

        store.write_unit(4, "some words").unwrap();
        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["4.txt"]);
        assert_eq!(store.last_index().unwrap(), 4);
    }
}
