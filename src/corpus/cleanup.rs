//! Removal of stale corpus files before a rewrite.

use std::fs;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::error_handling::CorpusError;

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

/// Deletes every regular, non-hidden file below `dir`, optionally only those
/// with `extension`. Hidden directories are not entered. A missing `dir` is
/// not an error.
///
/// Returns the number of files removed.
pub fn remove_fixture_files(dir: &Path, extension: Option<&str>) -> Result<usize, CorpusError> {
    if !dir.exists() {
        log::debug!("Nothing to remove, {} does not exist", dir.display());
        return Ok(0);
    }

    let mut removed = 0;
    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry.map_err(|source| CorpusError::Scan {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if let Some(wanted) = extension {
            let matches = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case(wanted))
                .unwrap_or(false);
            if !matches {
                continue;
            }
        }
        fs::remove_file(path).map_err(|source| CorpusError::Remove {
            path: path.to_path_buf(),
            source,
        })?;
        removed += 1;
    }

    log::info!("Removed {} files below {}", removed, dir.display());
    Ok(removed)
}
