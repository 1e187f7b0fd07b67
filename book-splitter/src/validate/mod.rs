//! Word-count audit of a unit store.

mod report;

use crate::error::{Result, SplitError};
use crate::store::Store;
use std::fs;
use std::path::{Path, PathBuf};

/// Default minimum words a unit must hold.
pub const DEFAULT_MINIMUM_WORDS: usize = 1000;

/// Result of checking a single unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitStatus {
    Ok { words: usize },
    Below { words: usize, missing: usize },
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitReport {
    pub name: String,
    pub path: PathBuf,
    pub status: UnitStatus,
}

impl UnitReport {
    /// Word count, if the unit could be read.
    pub fn words(&self) -> Option<usize> {
        match self.status {
            UnitStatus::Ok { words } | UnitStatus::Below { words, .. } => Some(words),
            UnitStatus::Unreadable(_) => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.status, UnitStatus::Ok { .. })
    }
}

/// Audit of every unit in a store against a minimum word count.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub store: PathBuf,
    pub minimum_words: usize,
    /// Units in audit order: numbered ascending, then the rest by name
    pub units: Vec<UnitReport>,
}

impl ValidationReport {
    pub fn total(&self) -> usize {
        self.units.len()
    }

    pub fn ok_count(&self) -> usize {
        self.units.iter().filter(|u| u.is_ok()).count()
    }

    pub fn below_count(&self) -> usize {
        self.units
            .iter()
            .filter(|u| matches!(u.status, UnitStatus::Below { .. }))
            .count()
    }

    pub fn unreadable_count(&self) -> usize {
        self.units
            .iter()
            .filter(|u| matches!(u.status, UnitStatus::Unreadable(_)))
            .count()
    }

    /// Units that are below the minimum or could not be read.
    pub fn failures(&self) -> impl Iterator<Item = &UnitReport> {
        self.units.iter().filter(|u| !u.is_ok())
    }

    pub fn total_words(&self) -> usize {
        self.units.iter().filter_map(UnitReport::words).sum()
    }

    /// Mean word count over the units that could be read.
    pub fn mean_words(&self) -> f64 {
        let readable = self.units.iter().filter(|u| u.words().is_some()).count();
        if readable == 0 {
            return 0.0;
        }
        self.total_words() as f64 / readable as f64
    }

    /// Unit with the most words; the first one wins a tie.
    pub fn largest(&self) -> Option<&UnitReport> {
        self.extreme(|candidate, best| candidate > best)
    }

    /// Unit with the fewest words; the first one wins a tie.
    pub fn smallest(&self) -> Option<&UnitReport> {
        self.extreme(|candidate, best| candidate < best)
    }

    fn extreme(&self, replaces: impl Fn(usize, usize) -> bool) -> Option<&UnitReport> {
        let mut best: Option<(&UnitReport, usize)> = None;
        for unit in &self.units {
            let Some(words) = unit.words() else { continue };
            match best {
                Some((_, best_words)) if !replaces(words, best_words) => {}
                _ => best = Some((unit, words)),
            }
        }
        best.map(|(unit, _)| unit)
    }

    /// True when every unit was read and meets the minimum.
    pub fn passed(&self) -> bool {
        self.below_count() == 0 && self.unreadable_count() == 0
    }
}

/// Classify a word count against the minimum.
pub fn classify(words: usize, minimum_words: usize) -> UnitStatus {
    if words >= minimum_words {
        UnitStatus::Ok { words }
    } else {
        UnitStatus::Below {
            words,
            missing: minimum_words - words,
        }
    }
}

fn inspect(name: String, path: PathBuf, minimum_words: usize) -> UnitReport {
    let status = match fs::read_to_string(&path) {
        Ok(content) => classify(content.split_whitespace().count(), minimum_words),
        Err(e) => UnitStatus::Unreadable(e.to_string()),
    };
    UnitReport { name, path, status }
}

/// Audit every unit in `store`.
///
/// A unit that cannot be read is recorded as a failure and the scan goes on.
pub fn validate_store(store: &Store, minimum_words: usize) -> Result<ValidationReport> {
    if !store.exists() {
        return Err(SplitError::StoreMissing(store.path().to_path_buf()));
    }

    let entries = store.units()?;
    if entries.is_empty() {
        log::warn!("No units found in {}", store.path().display());
    } else {
        log::info!(
            "Checking {} units in {} (minimum {} words)",
            entries.len(),
            store.path().display(),
            minimum_words
        );
    }

    let units = entries
        .into_iter()
        .map(|entry| inspect(entry.file_name, entry.path, minimum_words))
        .collect();

    Ok(ValidationReport {
        store: store.path().to_path_buf(),
        minimum_words,
        units,
    })
}

/// Check a single unit file anywhere on disk.
pub fn check_unit(path: &Path, minimum_words: usize) -> Result<UnitReport> {
    if !path.exists() {
        return Err(SplitError::UnitNotFound(path.to_path_buf()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(inspect(name, path.to_path_buf(), minimum_words))
}
