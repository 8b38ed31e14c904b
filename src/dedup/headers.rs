//! Header-string dedup pool (the cheap pre-pass).

use indexmap::map::Entry;
use indexmap::IndexMap;

/// Where a header string was first seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The existing corpus.
    Corpus,
    /// The source at this registration index.
    Source(usize),
}

/// Unique header strings in first-seen order.
///
/// Scoped to one run; grows monotonically.
#[derive(Debug, Clone, Default)]
pub struct HeaderPool {
    headers: IndexMap<String, Origin>,
}

impl HeaderPool {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, header: &str, origin: Origin) -> bool {
        let header = header.trim();
        if header.is_empty() {
            return false;
        }
        match self.headers.entry(header.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(origin);
                true
            }
        }
    }

    /// Adds a header from the existing corpus. Returns `false` when the
    /// corpus already held it.
    pub fn seed(&mut self, header: &str) -> bool {
        let added = self.add(header, Origin::Corpus);
        if !added && !header.trim().is_empty() {
            log::info!("UA \"{}\" added more than once", header.trim());
        }
        added
    }

    /// Offers a header from source `source_index`. Returns `true` when it was
    /// new.
    pub fn offer(&mut self, header: &str, source_index: usize) -> bool {
        let added = self.add(header, Origin::Source(source_index));
        if !added {
            log::debug!("UA \"{}\" is already known", header.trim());
        }
        added
    }

    pub fn contains(&self, header: &str) -> bool {
        self.headers.contains_key(header.trim())
    }

    pub fn origin(&self, header: &str) -> Option<Origin> {
        self.headers.get(header.trim()).copied()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Number of headers contributed by sources rather than the corpus.
    pub fn new_count(&self) -> usize {
        self.headers
            .values()
            .filter(|origin| matches!(origin, Origin::Source(_)))
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Origin)> {
        self.headers.iter().map(|(h, o)| (h.as_str(), *o))
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.keys().map(String::as_str)
    }
}
