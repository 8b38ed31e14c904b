//! Configuration constants.
//!
//! Chunk sizes, template placeholder tokens, default paths and the device
//! name lists used by the fallback resolver.

/// Fixtures per corpus folder (text file in the text-only variant).
pub const FOLDER_CHUNK_SIZE: usize = 1000;
/// Fixtures per JSON file inside a folder.
pub const FILE_CHUNK_SIZE: usize = 100;
/// Width of the zero-padded folder/file identifiers.
pub const CHUNK_ID_WIDTH: usize = 7;

/// Delimiter between signature key components.
pub const SIGNATURE_DELIMITER: &str = "-";

// Template placeholders
pub const STUB_TESTS_TOKEN: &str = "//### tests ###";
pub const STUB_GROUP_TOKEN: &str = "### group ###";
pub const STUB_COUNT_TOKEN: &str = "### count ###";
pub const CI_TESTS_TOKEN: &str = "### tests ###";

/// Path prefix of a chunk folder as seen from the downstream test suite.
pub const STUB_FIXTURE_PREFIX: &str = "tests/issues/";
/// Path prefix of a runner stub as seen from the downstream CI config.
pub const CI_RUNNER_PREFIX: &str = "tests/UserAgentsTest/";
/// Base column width of the CI run line; two columns are added per count digit.
pub const CI_BASE_COLUMNS: usize = 111;
/// Command the CI config uses to run one chunk's stub.
pub const CI_RUN_COMMAND: &str = "php -n -d memory_limit=768M vendor/bin/phpunit";

// Default locations
pub const DEFAULT_RESOURCES_DIR: &str = "sources";
pub const DEFAULT_TXT_CORPUS_DIR: &str = "corpus/txt";
pub const DEFAULT_FIXTURE_DIR: &str = "corpus/tests/issues";
pub const DEFAULT_RUNNER_DIR: &str = "corpus/tests/UserAgentsTest";
pub const DEFAULT_CI_CONFIG: &str = "corpus/.circleci/config.yml";
pub const DEFAULT_RUNNER_TEMPLATE: &str = "templates/test.php.txt";
pub const DEFAULT_CI_TEMPLATE: &str = "templates/config.yml.txt";

// Source sub-directories below the resources directory
pub const BROWSCAP_DIR: &str = "browscap";
pub const PIWIK_DIR: &str = "piwik";
pub const UAP_CORE_DIR: &str = "uap-core";
pub const WHICH_BROWSER_DIR: &str = "whichbrowser";
pub const WOOTHEE_DIR: &str = "woothee";
pub const MOBILE_DETECT_DIR: &str = "mobiledetect";
pub const YZALIS_DIR: &str = "yzalis";
pub const CRAWLER_DETECT_DIR: &str = "crawler-detect";
pub const TXT_SOURCES_DIR: &str = "txt";

// Device names
/// Device name that marks "the resolver looked and found nothing".
pub const NOT_FOUND_VIA_REGEXES: &str = "not found via regexes";
/// Generic device names the resolver never re-examines.
pub const RESOLVER_SKIP_DEVICES: &[&str] = &["general Apple Device"];
/// Generic device names acceptable as a resolver result.
pub const ACCEPTED_GENERIC_DEVICES: &[&str] =
    &["general Desktop", "general Apple Device", "general Philips TV"];
/// Regex results that name a device category rather than a model.
pub const SPECIAL_DEVICE_CATEGORIES: &[&str] =
    &["general blackberry device", "general mobile device"];
