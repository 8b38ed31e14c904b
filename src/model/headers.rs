//! Request headers a fixture was recorded with.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const USER_AGENT_HEADER: &str = "user-agent";

/// Ordered header name → value mapping. Names are stored lower-cased.
///
/// The *header string* is the identity of a fixture in the text corpus: the
/// bare user agent when it is the only header, a one-line JSON object
/// otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, String>", into = "IndexMap<String, String>")]
pub struct Headers {
    entries: IndexMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Headers for a request that only carried a user agent.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let mut headers = Self::new();
        headers.insert(USER_AGENT_HEADER, user_agent.trim());
        headers
    }

    /// Parses a header string. A line that is a JSON object of strings is read
    /// as a header map; anything else is a bare user agent.
    pub fn from_header_string(header: &str) -> Self {
        let trimmed = header.trim();
        if trimmed.starts_with('{') {
            if let Ok(map) = serde_json::from_str::<IndexMap<String, String>>(trimmed) {
                return Headers::from(map);
            }
        }
        Self::from_user_agent(trimmed)
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.entries
            .insert(name.trim().to_lowercase(), value.trim().to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    /// The user-agent value, `""` when absent.
    pub fn user_agent(&self) -> &str {
        self.get(USER_AGENT_HEADER).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Inverse of [`Headers::from_header_string`].
    pub fn header_string(&self) -> String {
        let only_user_agent = self.entries.len() == 1 && self.entries.contains_key(USER_AGENT_HEADER);
        if only_user_agent || self.entries.is_empty() {
            return self.user_agent().to_string();
        }
        serde_json::to_string(&self.entries).unwrap_or_else(|_| self.user_agent().to_string())
    }
}

impl From<IndexMap<String, String>> for Headers {
    fn from(map: IndexMap<String, String>) -> Self {
        let mut headers = Headers::new();
        for (name, value) in &map {
            headers.insert(name, value);
        }
        headers
    }
}

impl From<Headers> for IndexMap<String, String> {
    fn from(headers: Headers) -> Self {
        headers.entries
    }
}
