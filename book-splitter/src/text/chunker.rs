//! Fixed-size word chunking into the unit store.

use crate::error::{Result, SplitError};
use crate::store::Store;

/// Default number of words per unit.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Outcome of one chunking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRun {
    /// Index given to the first unit of this run
    pub first_index: u64,
    /// Number of units written
    pub created: usize,
    /// Index the next run will start from
    pub next_index: u64,
}

/// Split text into windows of `chunk_size` words, each joined by single spaces.
///
/// Every window holds exactly `chunk_size` words except the last, which holds
/// the remainder. Text without words yields no windows.
pub fn plan_chunks(text: &str, chunk_size: usize) -> Result<Vec<String>> {
    if chunk_size == 0 {
        return Err(SplitError::InvalidChunkSize(chunk_size));
    }

    let words: Vec<&str> = text.split_whitespace().collect();

    Ok(words
        .chunks(chunk_size)
        .map(|window| window.join(" "))
        .collect())
}

/// Chunk `text` and append the units to `store`.
///
/// Numbering continues after the highest index already in the store; nothing
/// that exists is overwritten.
pub fn chunk_into_store(text: &str, chunk_size: usize, store: &Store) -> Result<ChunkRun> {
    let chunks = plan_chunks(text, chunk_size)?;

    store.ensure()?;
    let last_index = store.last_index()?;
    log::info!("Continuing from unit number {}", last_index);

    let first_index = last_index + 1;
    for (written, (index, chunk)) in (first_index..).zip(chunks.iter()).enumerate() {
        let path = store
            .write_unit(index, chunk)
            .map_err(|source| SplitError::UnitWrite {
                index,
                written,
                source,
            })?;
        log::debug!("Wrote {}", path.display());
    }

    let created = chunks.len();
    let run = ChunkRun {
        first_index,
        created,
        next_index: first_index + created as u64,
    };

    log::info!(
        "Created {} new units in {}; next available number: {}",
        run.created,
        store.path().display(),
        run.next_index
    );

    Ok(run)
}
