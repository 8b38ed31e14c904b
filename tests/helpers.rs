// Shared test helpers: scratch workspaces, scripted sources and file trees.
//
// Used by the copy and rewrite run tests.

#![allow(dead_code)] // Each test file uses a different subset

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::TempDir;
use walkdir::WalkDir;

use ua_corpus::config::Config;
use ua_corpus::mapper::FieldMapper;
use ua_corpus::model::{Browser, Device, DeviceType, Engine, Os, Version};
use ua_corpus::source::{RawRecord, Source, SourceRecord};

/// A scratch corpus layout inside a temporary directory.
pub struct Workspace {
    pub dir: TempDir,
    pub config: Config,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path();
        let templates = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates");
        let config = Config {
            resources_dir: root.join("sources"),
            txt_corpus_dir: root.join("txt"),
            fixture_dir: root.join("tests/issues"),
            runner_dir: root.join("tests/UserAgentsTest"),
            ci_config: root.join(".circleci/config.yml"),
            runner_template: templates.join("test.php.txt"),
            ci_template: templates.join("config.yml.txt"),
            ..Default::default()
        };
        Workspace { dir, config }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `headers` as the first text corpus file.
    pub fn write_txt_corpus(&self, headers: &[&str]) {
        fs::create_dir_all(&self.config.txt_corpus_dir).expect("Failed to create txt corpus");
        let mut content = headers.join("\n");
        content.push('\n');
        fs::write(self.config.txt_corpus_dir.join("0000000.txt"), content)
            .expect("Failed to write txt corpus");
    }

    pub fn txt_corpus(&self) -> String {
        fs::read_to_string(self.config.txt_corpus_dir.join("0000000.txt"))
            .expect("Failed to read txt corpus")
    }

    /// Every fixture entry in corpus order as `(test name, value)`.
    pub fn fixtures(&self) -> Vec<(String, serde_json::Value)> {
        files_with_extension(&self.config.fixture_dir, "json")
            .into_iter()
            .flat_map(|path| {
                let content = fs::read_to_string(&path).expect("Failed to read fixture file");
                let value: serde_json::Value =
                    serde_json::from_str(&content).expect("Fixture file is not JSON");
                value
                    .as_object()
                    .expect("Fixture file is not an object")
                    .clone()
                    .into_iter()
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// Files below `dir` with `extension`, sorted by path.
pub fn files_with_extension(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(extension))
        .collect();
    files.sort();
    files
}

/// Relative path → content of every file below `dir`.
pub fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let relative = e
                .path()
                .strip_prefix(dir)
                .expect("Walked path outside root")
                .to_path_buf();
            let content = fs::read(e.path()).expect("Failed to read file");
            (relative, content)
        })
        .collect()
}

/// Raw record understood by [`ScriptedMapper`].
pub fn raw(browser: &str, version: &str, device: Option<&str>, device_type: &str) -> RawRecord {
    let mut raw = RawRecord::new();
    raw.insert("browser", browser);
    raw.insert("version", version);
    if let Some(device) = device {
        raw.insert("device", device);
    }
    raw.insert("type", device_type);
    raw
}

/// Adds engine and platform fields to a [`raw`] record.
pub fn with_platform(
    mut raw: RawRecord,
    engine: &str,
    engine_version: &str,
    os: &str,
    os_version: &str,
) -> RawRecord {
    raw.insert("engine", engine);
    raw.insert("engine_version", engine_version);
    raw.insert("os", os);
    raw.insert("os_version", os_version);
    raw
}

/// Maps the fields written by [`raw`] and [`with_platform`] and counts how
/// often it ran.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMapper {
    pub calls: Rc<Cell<usize>>,
}

impl FieldMapper for ScriptedMapper {
    fn map_browser(&self, raw: &RawRecord) -> Browser {
        self.calls.set(self.calls.get() + 1);
        Browser {
            name: raw.get("browser").map(str::to_string),
            version: Version::parse(raw.value("version")),
            ..Browser::unknown()
        }
    }

    fn map_engine(&self, raw: &RawRecord) -> Engine {
        Engine {
            name: raw.get("engine").map(str::to_string),
            version: Version::parse(raw.value("engine_version")),
            ..Engine::unknown()
        }
    }

    fn map_os(&self, raw: &RawRecord) -> Os {
        Os {
            name: raw.get("os").map(str::to_string),
            version: Version::parse(raw.value("os_version")),
            ..Os::unknown()
        }
    }

    fn map_device(&self, raw: &RawRecord) -> Device {
        let mut device = Device::new(raw.get("device").map(str::to_string), None);
        device.device_type = raw.value("type").parse().unwrap_or(DeviceType::Unknown);
        device
    }
}

/// A library whose fixtures are given in memory.
pub struct ScriptedSource {
    pub name: String,
    pub entries: Vec<(String, RawRecord)>,
    pub mapper: ScriptedMapper,
}

impl ScriptedSource {
    pub fn new(name: &str, mapper: ScriptedMapper) -> Self {
        ScriptedSource {
            name: name.to_string(),
            entries: Vec::new(),
            mapper,
        }
    }

    pub fn entry(mut self, header: &str, raw: RawRecord) -> Self {
        self.entries.push((header.to_string(), raw));
        self
    }
}

impl Source for ScriptedSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn records(&self) -> Box<dyn Iterator<Item = SourceRecord> + '_> {
        Box::new(
            self.entries
                .iter()
                .map(|(header, raw)| SourceRecord::new(header, raw.clone())),
        )
    }

    fn mapper(&self) -> Option<&dyn FieldMapper> {
        Some(&self.mapper)
    }
}
