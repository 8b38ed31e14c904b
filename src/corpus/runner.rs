//! Generated test-runner stubs and the CI configuration.
//!
//! Both are plain text templates with placeholder tokens. One stub is written
//! per corpus folder; the CI configuration gets one block per folder.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{
    CI_BASE_COLUMNS, CI_RUNNER_PREFIX, CI_RUN_COMMAND, CI_TESTS_TOKEN, STUB_COUNT_TOKEN,
    STUB_GROUP_TOKEN, STUB_TESTS_TOKEN,
};
use crate::corpus::chunk::folder_id;
use crate::error_handling::CorpusError;

const DEFAULT_STUB_EXTENSION: &str = "txt";

/// The runner stub and CI templates of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerTemplates {
    pub stub: String,
    pub ci: String,
    /// Extension of generated stubs, taken from the stub template's file name
    /// (`test.php.txt` → `php`).
    pub stub_extension: String,
}

fn read_template(path: &Path) -> Result<String, CorpusError> {
    fs::read_to_string(path).map_err(|source| CorpusError::Template {
        path: path.to_path_buf(),
        source,
    })
}

fn stub_extension(template: &Path) -> String {
    let inner = template
        .file_stem()
        .map(Path::new)
        .and_then(|stem| stem.extension())
        .or_else(|| template.extension());
    inner
        .and_then(|ext| ext.to_str())
        .unwrap_or(DEFAULT_STUB_EXTENSION)
        .to_string()
}

/// `"   3 tests"`: the count padded to four columns plus the plural noun.
fn tests_label(count: usize) -> String {
    format!("{:>4} test{}", count, if count == 1 { "" } else { "s" })
}

impl RunnerTemplates {
    pub fn new(stub: impl Into<String>, ci: impl Into<String>, stub_extension: &str) -> Self {
        RunnerTemplates {
            stub: stub.into(),
            ci: ci.into(),
            stub_extension: stub_extension.to_string(),
        }
    }

    /// Reads both templates.
    ///
    /// # Errors
    ///
    /// `CorpusError::Template` when either file cannot be read.
    pub fn load(runner_template: &Path, ci_template: &Path) -> Result<Self, CorpusError> {
        Ok(RunnerTemplates {
            stub: read_template(runner_template)?,
            ci: read_template(ci_template)?,
            stub_extension: stub_extension(runner_template),
        })
    }

    /// File name of the stub for `group`.
    pub fn stub_file_name(&self, group: &str) -> String {
        format!("T{}Test.{}", group, self.stub_extension)
    }

    /// The stub for one folder. `test_dir` is the fixture path prefix as the
    /// downstream suite sees it.
    pub fn render_test_stub(&self, group: &str, count: usize, test_dir: &str) -> String {
        let tests = format!("        '{}{}/',", test_dir, group);
        self.stub
            .replace(STUB_TESTS_TOKEN, &tests)
            .replace(STUB_GROUP_TOKEN, group)
            .replace(STUB_COUNT_TOKEN, &count.to_string())
    }

    /// The CI block for one folder: a comment with the test count, a
    /// commented-out group invocation and the active run line.
    pub fn ci_block(&self, group: &str, count: usize) -> String {
        let tests = tests_label(count);
        let columns = CI_BASE_COLUMNS + 2 * count.to_string().len();
        let stub = self.stub_file_name(group);
        let mut block = String::new();
        block.push('\n');
        block.push_str(&format!("    #{}\n", tests));
        block.push_str(&format!(
            "    #  - run: {} --printer 'ScriptFUSION\\PHPUnitImmediateExceptionPrinter\\ImmediateExceptionPrinter' --colors --no-coverage --group {} -- {}\n",
            CI_RUN_COMMAND, group, tests
        ));
        block.push_str(&format!(
            "      - run: {} --colors --no-coverage --columns {}  {}{} -- {}\n",
            CI_RUN_COMMAND, columns, CI_RUNNER_PREFIX, stub, tests
        ));
        block
    }

    pub fn render_ci_config(&self, blocks: &str) -> String {
        self.ci.replace(CI_TESTS_TOKEN, blocks)
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), CorpusError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CorpusError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| CorpusError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes one stub per folder into `runner_dir`. `folder_sizes[i]` is the
/// number of fixtures in folder `i`.
pub fn write_runner_stubs(
    templates: &RunnerTemplates,
    folder_sizes: &[usize],
    runner_dir: &Path,
    test_dir: &str,
) -> Result<Vec<PathBuf>, CorpusError> {
    let mut written = Vec::with_capacity(folder_sizes.len());
    for (folder_index, &count) in folder_sizes.iter().enumerate() {
        let group = folder_id(folder_index);
        let path = runner_dir.join(templates.stub_file_name(&group));
        write_file(&path, &templates.render_test_stub(&group, count, test_dir))?;
        written.push(path);
    }
    Ok(written)
}

/// Renders and writes the CI configuration for the given folders.
pub fn write_ci_config(
    templates: &RunnerTemplates,
    folder_sizes: &[usize],
    path: &Path,
) -> Result<(), CorpusError> {
    let blocks: String = folder_sizes
        .iter()
        .enumerate()
        .map(|(folder_index, &count)| templates.ci_block(&folder_id(folder_index), count))
        .collect();
    log::info!("writing {} ...", path.display());
    write_file(path, &templates.render_ci_config(&blocks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STUB_FIXTURE_PREFIX;
    use tempfile::TempDir;

    fn templates() -> RunnerTemplates {
        RunnerTemplates::new(
            "group ### group ### (### count ###)\n//### tests ###\n",
            "jobs:\n### tests ###\nend\n",
            "php",
        )
    }

    #[test]
    fn test_render_test_stub() {
        let stub = templates().render_test_stub("0000001", 17, STUB_FIXTURE_PREFIX);
        assert_eq!(stub, "group 0000001 (17)\n        'tests/issues/0000001/',\n");
    }

    #[test]
    fn test_ci_block_singular_and_columns() {
        let block = templates().ci_block("0000000", 1);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "    #   1 test");
        assert!(lines[2].starts_with("    #  - run: php -n -d memory_limit=768M vendor/bin/phpunit --printer"));
        assert!(lines[2].ends_with("--group 0000000 --    1 test"));
        assert_eq!(
            lines[3],
            "      - run: php -n -d memory_limit=768M vendor/bin/phpunit --colors --no-coverage --columns 113  tests/UserAgentsTest/T0000000Test.php --    1 test"
        );
    }

    #[test]
    fn test_ci_block_plural() {
        let block = templates().ci_block("0000002", 1000);
        assert!(block.contains("    #1000 tests\n"));
        assert!(block.contains("--columns 119 "));
    }

    #[test]
    fn test_stub_extension_from_template_name() {
        assert_eq!(stub_extension(Path::new("templates/test.php.txt")), "php");
        assert_eq!(stub_extension(Path::new("templates/stub.rs")), "rs");
        assert_eq!(stub_extension(Path::new("templates/stub")), "txt");
    }

    #[test]
    fn test_write_stubs_and_ci_config() {
        let dir = TempDir::new().unwrap();
        let runner_dir = dir.path().join("runners");
        let ci_path = dir.path().join(".ci/config.yml");
        let templates = templates();

        let stubs =
            write_runner_stubs(&templates, &[1000, 3], &runner_dir, STUB_FIXTURE_PREFIX).unwrap();
        assert_eq!(stubs.len(), 2);
        let second = fs::read_to_string(runner_dir.join("T0000001Test.php")).unwrap();
        assert!(second.starts_with("group 0000001 (3)"));

        write_ci_config(&templates, &[1000, 3], &ci_path).unwrap();
        let ci = fs::read_to_string(&ci_path).unwrap();
        assert!(ci.starts_with("jobs:\n\n    #1000 tests\n"));
        assert!(ci.contains("    #   3 tests\n"));
        assert!(ci.ends_with("\nend\n"));
        assert!(!ci.contains(CI_TESTS_TOKEN));
    }

    #[test]
    fn test_load_missing_template_fails() {
        let dir = TempDir::new().unwrap();
        let err = RunnerTemplates::load(&dir.path().join("nope.php.txt"), &dir.path().join("ci"))
            .unwrap_err();
        assert!(matches!(err, CorpusError::Template { .. }));
    }
}
