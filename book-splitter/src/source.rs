//! Reading raw book text from disk.

use crate::error::{Result, SplitError};
use std::fs;
use std::path::Path;

/// Number of lines shown by [`preview_lines`] by default.
pub const PREVIEW_LINES: usize = 20;

/// Maximum characters shown per preview line.
pub const PREVIEW_WIDTH: usize = 100;

/// Read a UTF-8 text file, normalizing Windows line endings.
///
/// Missing files and undecodable content are fatal; nothing is written
/// anywhere before this succeeds.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SplitError::SourceNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| SplitError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;

    if text.contains('\r') {
        Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Ok(text)
    }
}

/// First `count` lines of `text`, numbered from 1 and cut to `width` characters.
pub fn preview_lines(text: &str, count: usize, width: usize) -> Vec<String> {
    text.split('\n')
        .take(count)
        .enumerate()
        .map(|(i, line)| {
            let cut: String = line.chars().take(width).collect();
            let ellipsis = if line.chars().count() > width { "..." } else { "" };
            format!("{:2}: {}{}", i + 1, cut, ellipsis)
        })
        .collect()
}
