//! Full corpus variant: canonical results as JSON fixtures.
//!
//! Layout: one folder per chunk of `FOLDER_CHUNK_SIZE` results, one file per
//! batch of `FILE_CHUNK_SIZE` results inside it:
//! `<dir>/<folder id>/<batch id>.json`. Each file is an object of
//! `test name → result` in corpus order.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use super::chunk::{folder_id, numbered_chunks};
use crate::config::{FILE_CHUNK_SIZE, FOLDER_CHUNK_SIZE};
use crate::error_handling::CorpusError;
use crate::model::CanonicalResult;

/// What [`write_json_corpus`] produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonCorpusLayout {
    /// Number of results in each folder, in folder order.
    pub folder_sizes: Vec<usize>,
    /// Number of JSON files written.
    pub files: usize,
}

impl JsonCorpusLayout {
    pub fn folders(&self) -> usize {
        self.folder_sizes.len()
    }
}

/// Name of the `index`-th test of folder `folder`.
pub fn test_name(folder: &str, index: usize) -> String {
    format!("test-{}-{:03}", folder, index)
}

/// Writes `results` below `dir`, creating folders as needed.
pub fn write_json_corpus(
    results: &[CanonicalResult],
    dir: &Path,
) -> Result<JsonCorpusLayout, CorpusError> {
    let mut layout = JsonCorpusLayout::default();

    for (folder_index, folder_chunk) in numbered_chunks(results, FOLDER_CHUNK_SIZE) {
        let folder = folder_id(folder_index);
        let folder_dir = dir.join(&folder);
        fs::create_dir_all(&folder_dir).map_err(|source| CorpusError::Write {
            path: folder_dir.clone(),
            source,
        })?;

        for (batch_index, batch) in numbered_chunks(folder_chunk, FILE_CHUNK_SIZE) {
            let path = folder_dir.join(format!("{}.json", folder_id(batch_index)));
            let offset = batch_index * FILE_CHUNK_SIZE;
            let tests: IndexMap<String, &CanonicalResult> = batch
                .iter()
                .enumerate()
                .map(|(i, result)| (test_name(&folder, offset + i), result))
                .collect();

            let mut content =
                serde_json::to_string_pretty(&tests).map_err(|source| CorpusError::Serialize {
                    path: path.clone(),
                    source,
                })?;
            content.push('\n');
            fs::write(&path, content).map_err(|source| CorpusError::Write {
                path: path.clone(),
                source,
            })?;
            layout.files += 1;
        }

        log::debug!("Wrote {} fixtures to {}", folder_chunk.len(), folder_dir.display());
        layout.folder_sizes.push(folder_chunk.len());
    }

    Ok(layout)
}
