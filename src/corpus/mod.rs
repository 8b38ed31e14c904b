//! Corpus writer.
//!
//! Replaces the on-disk corpus wholesale: stale files are removed first, then
//! the new chunks are written. Every I/O failure here is fatal for the run.

pub mod chunk;
mod cleanup;
mod json;
mod runner;
mod txt;

pub use chunk::{chunk_count, folder_id};
pub use cleanup::remove_fixture_files;
pub use json::{test_name, write_json_corpus, JsonCorpusLayout};
pub use runner::{write_ci_config, write_runner_stubs, RunnerTemplates};
pub use txt::write_txt_corpus;
