use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to read source file {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid chunk size {0}: must be at least 1 word")]
    InvalidChunkSize(usize),

    #[error("Unit file not found: {}", .0.display())]
    UnitNotFound(PathBuf),

    #[error("Store directory not found: {}", .0.display())]
    StoreMissing(PathBuf),

    #[error("Store I/O error at {}: {source}", path.display())]
    StoreIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write unit {index} after {written} new units were written: {source}")]
    UnitWrite {
        index: u64,
        written: usize,
        #[source]
        source: std::io::Error,
    },
}

impl SplitError {
    pub(crate) fn store_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StoreIo {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
