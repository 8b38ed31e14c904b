//! User-agent normalization ahead of regex matching.
//!
//! Strips substrings that vary between otherwise identical devices (locale,
//! encryption flag, Android build ids) so one rule covers all of them.

use regex::Regex;
use std::sync::LazyLock;

const IIS_PLUS_PATTERN: &str = r"\+(\S)";
/// `de-de`, `pt_BR`, `zh-Hans-CN`, or a bare language code. Other two-letter
/// tokens like `wv` and `TV` are kept.
const LOCALE_PATTERN: &str = concat!(
    r"(?i);\s*(?:[a-z]{2,3}[-_](?:[a-z]{4}[-_])?[a-z]{2}",
    r"|ar|cs|da|de|el|en|es|fi|fr|he|hu|id|it|ja|ko|nb|nl|pl|pt|ro|ru|sk|sv|th|tr|uk|vi|zh)",
    r"\s*([;)])"
);
const ENCRYPTION_PATTERN: &str = r";\s*[UIN]\s*([;)])";
const BUILD_PATTERN: &str = r"(?i)\s*Build/[^;)\s]+";
const KHTML_PATTERN: &str = r"(?i)\(\s*khtml,?\s*like\s*gecko\s*\)";
const WHITESPACE_PATTERN: &str = r"\s+";

struct Replacement {
    regex: Regex,
    with: &'static str,
}

fn compile(pattern: &str, with: &'static str) -> Replacement {
    Replacement {
        regex: Regex::new(pattern).unwrap_or_else(|e| {
            panic!("Failed to compile normalizer pattern '{pattern}': {e}. This is a programming error.")
        }),
        with,
    }
}

// Applied in order; the locale and flag passes run before whitespace is collapsed.
static REPLACEMENTS: LazyLock<Vec<Replacement>> = LazyLock::new(|| {
    vec![
        compile(IIS_PLUS_PATTERN, " $1"),
        compile(ENCRYPTION_PATTERN, "$1"),
        compile(LOCALE_PATTERN, "$1"),
        compile(BUILD_PATTERN, ""),
        compile(KHTML_PATTERN, "(KHTML, like Gecko)"),
        compile(WHITESPACE_PATTERN, " "),
    ]
});

/// Returns `user_agent` with volatile substrings removed.
pub fn normalize_user_agent(user_agent: &str) -> String {
    let mut normalized = user_agent.trim().to_string();
    for replacement in REPLACEMENTS.iter() {
        normalized = replacement
            .regex
            .replace_all(&normalized, replacement.with)
            .into_owned();
    }
    normalized.trim().to_string()
}
