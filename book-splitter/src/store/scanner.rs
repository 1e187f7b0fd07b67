//! Scanning a store directory for numbered units.

use crate::error::{Result, SplitError};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension carried by every unit.
pub const UNIT_EXTENSION: &str = "txt";

/// Parse a unit index from a file name such as `12.txt`.
///
/// Only all-digit stems with the unit extension qualify; `007.txt` is 7.
pub fn parse_index(file_name: &str) -> Option<u64> {
    let stem = unit_stem(file_name)?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

fn unit_stem(file_name: &str) -> Option<&str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    (ext == UNIT_EXTENSION).then_some(stem)
}

/// Collect the indices of all numbered units in `dir`.
///
/// An absent directory is an empty store. Names that are not numbered units
/// are skipped.
pub fn scan_indices(dir: &Path) -> Result<BTreeSet<u64>> {
    let mut indices = BTreeSet::new();

    for name in unit_file_names(dir)? {
        if let Some(index) = parse_index(&name) {
            indices.insert(index);
        }
    }

    Ok(indices)
}

/// The highest index in `indices`, or 0 for an empty store.
pub fn last_used_index(indices: &BTreeSet<u64>) -> u64 {
    indices.last().copied().unwrap_or(0)
}

/// Sort key for units: numbered units first by index, then the rest by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum UnitKey {
    Numbered(u64),
    Named(String),
}

/// A `.txt` entry in the store, numbered or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitEntry {
    pub key: UnitKey,
    pub file_name: String,
    pub path: PathBuf,
}

impl UnitEntry {
    fn new(dir: &Path, file_name: String) -> Self {
        let key = match parse_index(&file_name) {
            Some(index) => UnitKey::Numbered(index),
            None => UnitKey::Named(unit_stem(&file_name).unwrap_or(&file_name).to_string()),
        };
        Self {
            key,
            path: dir.join(&file_name),
            file_name,
        }
    }
}

impl PartialOrd for UnitEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UnitEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.file_name.cmp(&other.file_name))
    }
}

/// List every entry with the unit extension in `dir`, in audit order.
pub fn scan_units(dir: &Path) -> Result<Vec<UnitEntry>> {
    let mut entries: Vec<UnitEntry> = unit_file_names(dir)?
        .into_iter()
        .map(|name| UnitEntry::new(dir, name))
        .collect();
    entries.sort();
    Ok(entries)
}

fn unit_file_names(dir: &Path) -> Result<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    let read_dir = fs::read_dir(dir).map_err(|e| SplitError::store_io(dir, e))?;

    for entry in read_dir {
        let entry = entry.map_err(|e| SplitError::store_io(dir, e))?;
        // Non-UTF-8 names can never be units
        if let Ok(name) = entry.file_name().into_string() {
            if unit_stem(&name).is_some() {
                names.push(name);
            }
        }
    }

    Ok(names)
}
