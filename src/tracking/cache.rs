use std::collections::BTreeMap;

/// Last recorded occurrence count per tracked crash group.
///
/// A key is present only while its crash group sits above some threshold.
/// Entries are created on first crossing, raised on later crossings and
/// removed on resolution; counts are never decremented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrashCache {
    entries: BTreeMap<String, u64>,
}

impl CrashCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: BTreeMap<String, u64>) -> Self {
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<u64> {
        self.entries.get(id).copied()
    }

    pub fn set(&mut self, id: impl Into<String>, count: u64) {
        self.entries.insert(id.into(), count);
    }

    pub fn delete(&mut self, id: &str) -> Option<u64> {
        self.entries.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn entries(&self) -> &BTreeMap<String, u64> {
        &self.entries
    }
}

impl FromIterator<(String, u64)> for CrashCache {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
