//! Configuration types and CLI options.
//!
//! This module defines the library `Config` (constructible without any CLI
//! dependency) and the `clap` option structs that populate it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_CI_CONFIG, DEFAULT_CI_TEMPLATE, DEFAULT_FIXTURE_DIR, DEFAULT_RESOURCES_DIR,
    DEFAULT_RUNNER_DIR, DEFAULT_RUNNER_TEMPLATE, DEFAULT_TXT_CORPUS_DIR,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration.
///
/// # Examples
///
/// ```no_run
/// use ua_corpus::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     resources_dir: PathBuf::from("vendor-fixtures"),
///     include_sources: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the third-party fixture checkouts (one sub-directory per library)
    pub resources_dir: PathBuf,

    /// Text-only corpus directory (one header string per line)
    pub txt_corpus_dir: PathBuf,

    /// JSON fixture corpus directory
    pub fixture_dir: PathBuf,

    /// Directory receiving the generated test-runner stubs
    pub runner_dir: PathBuf,

    /// Generated CI configuration file
    pub ci_config: PathBuf,

    /// Test-runner stub template
    pub runner_template: PathBuf,

    /// CI configuration template
    pub ci_template: PathBuf,

    /// Company table override (JSON); the embedded table is used when unset
    pub companies: Option<PathBuf>,

    /// Device table override (YAML); the embedded table is used when unset
    pub devices: Option<PathBuf>,

    /// Regex rule override (YAML); the embedded rules are used when unset
    pub regexes: Option<PathBuf>,

    /// Also map the library sources during a rewrite
    pub include_sources: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resources_dir: PathBuf::from(DEFAULT_RESOURCES_DIR),
            txt_corpus_dir: PathBuf::from(DEFAULT_TXT_CORPUS_DIR),
            fixture_dir: PathBuf::from(DEFAULT_FIXTURE_DIR),
            runner_dir: PathBuf::from(DEFAULT_RUNNER_DIR),
            ci_config: PathBuf::from(DEFAULT_CI_CONFIG),
            runner_template: PathBuf::from(DEFAULT_RUNNER_TEMPLATE),
            ci_template: PathBuf::from(DEFAULT_CI_TEMPLATE),
            companies: None,
            devices: None,
            regexes: None,
            include_sources: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Merge new user agents from the library checkouts into the text corpus
/// ua_corpus copy-tests --resources ./sources
///
/// # Rewrite the JSON fixture corpus, runner stubs and CI config
/// ua_corpus rewrite-tests --include-sources
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "ua_corpus",
    about = "Harvests user-agent fixtures and rewrites the normalized test corpus."
)]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    #[command(flatten)]
    pub paths: PathArgs,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Copies user agents from the library checkouts into the text corpus
    CopyTests,
    /// Rewrites the JSON fixture corpus, runner stubs and CI configuration
    RewriteTests {
        /// Also map user agents from the library checkouts
        #[arg(long)]
        include_sources: bool,
    },
}

/// Filesystem locations shared by all subcommands.
#[derive(Debug, Args)]
pub struct PathArgs {
    /// Where the library fixture checkouts are located
    #[arg(long, global = true, default_value = DEFAULT_RESOURCES_DIR)]
    pub resources: PathBuf,

    /// Text corpus directory
    #[arg(long, global = true, default_value = DEFAULT_TXT_CORPUS_DIR)]
    pub txt_corpus: PathBuf,

    /// JSON fixture directory
    #[arg(long, global = true, default_value = DEFAULT_FIXTURE_DIR)]
    pub fixtures: PathBuf,

    /// Runner stub directory
    #[arg(long, global = true, default_value = DEFAULT_RUNNER_DIR)]
    pub runners: PathBuf,

    /// Generated CI configuration file
    #[arg(long, global = true, default_value = DEFAULT_CI_CONFIG)]
    pub ci_config: PathBuf,

    /// Runner stub template
    #[arg(long, global = true, default_value = DEFAULT_RUNNER_TEMPLATE)]
    pub runner_template: PathBuf,

    /// CI configuration template
    #[arg(long, global = true, default_value = DEFAULT_CI_TEMPLATE)]
    pub ci_template: PathBuf,

    /// Company table (JSON) replacing the embedded one
    #[arg(long, global = true)]
    pub companies: Option<PathBuf>,

    /// Device table (YAML) replacing the embedded one
    #[arg(long, global = true)]
    pub devices: Option<PathBuf>,

    /// Regex rules (YAML) replacing the embedded ones
    #[arg(long, global = true)]
    pub regexes: Option<PathBuf>,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        let include_sources = match opt.command {
            Command::RewriteTests { include_sources } => include_sources,
            Command::CopyTests => false,
        };
        Config {
            resources_dir: opt.paths.resources.clone(),
            txt_corpus_dir: opt.paths.txt_corpus.clone(),
            fixture_dir: opt.paths.fixtures.clone(),
            runner_dir: opt.paths.runners.clone(),
            ci_config: opt.paths.ci_config.clone(),
            runner_template: opt.paths.runner_template.clone(),
            ci_template: opt.paths.ci_template.clone(),
            companies: opt.paths.companies.clone(),
            devices: opt.paths.devices.clone(),
            regexes: opt.paths.regexes.clone(),
            include_sources,
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
        }
    }
}
