//! Text-only corpus variant: one header string per line.

use std::fs;
use std::path::Path;

use super::chunk::{folder_id, numbered_chunks};
use crate::config::FOLDER_CHUNK_SIZE;
use crate::error_handling::CorpusError;

/// Writes `headers` as `dir/<id>.txt`, one file per chunk of
/// `FOLDER_CHUNK_SIZE` headers, one header per line.
///
/// Returns the number of files written.
pub fn write_txt_corpus<S: AsRef<str>>(headers: &[S], dir: &Path) -> Result<usize, CorpusError> {
    fs::create_dir_all(dir).map_err(|source| CorpusError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = 0;
    for (chunk_id, chunk) in numbered_chunks(headers, FOLDER_CHUNK_SIZE) {
        let path = dir.join(format!("{}.txt", folder_id(chunk_id)));
        let mut content = String::new();
        for header in chunk {
            content.push_str(header.as_ref());
            content.push('\n');
        }
        fs::write(&path, content).map_err(|source| CorpusError::Write {
            path: path.clone(),
            source,
        })?;
        log::debug!("Wrote {} headers to {}", chunk.len(), path.display());
        files += 1;
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_one_file_per_thousand() {
        let dir = TempDir::new().unwrap();
        let headers: Vec<String> = (0..1001).map(|i| format!("UA-{i}")).collect();

        let files = write_txt_corpus(&headers, dir.path()).unwrap();
        assert_eq!(files, 2);

        let first = fs::read_to_string(dir.path().join("0000000.txt")).unwrap();
        assert_eq!(first.lines().count(), 1000);
        assert!(first.starts_with("UA-0\nUA-1\n"));
        let second = fs::read_to_string(dir.path().join("0000001.txt")).unwrap();
        assert_eq!(second, "UA-1000\n");
    }

    #[test]
    fn test_empty_corpus_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("txt");
        let headers: Vec<&str> = Vec::new();
        assert_eq!(write_txt_corpus(&headers, &target).unwrap(), 0);
        assert!(target.is_dir());
    }
}
