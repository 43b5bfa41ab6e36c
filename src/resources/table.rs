use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Insertion-ordered mapping from a raw reference to the file it resolved to
///
/// A reference is stored at most once; the first insertion wins and later
/// ones are ignored. Iteration follows insertion order, which is the order
/// parts are written to the archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceTable {
    entries: Vec<(String, Option<PathBuf>)>,
    keys: HashSet<String>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `reference` unless it is already present; returns whether the
    /// entry was added
    pub fn insert(&mut self, reference: &str, path: Option<PathBuf>) -> bool {
        if self.keys.contains(reference) {
            return false;
        }

        self.keys.insert(reference.to_string());
        self.entries.push((reference.to_string(), path));
        true
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.keys.contains(reference)
    }

    /// Resolved path of `reference`; `None` for both unknown and unresolved
    /// references
    pub fn get(&self, reference: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(key, _)| key == reference)
            .and_then(|(_, path)| path.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Path>)> {
        self.entries
            .iter()
            .map(|(reference, path)| (reference.as_str(), path.as_deref()))
    }

    /// Entries that matched a file, in insertion order
    pub fn resolved(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.iter()
            .filter_map(|(reference, path)| path.map(|path| (reference, path)))
    }

    /// References that matched no file, in insertion order
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, path)| path.is_none())
            .map(|(reference, _)| reference)
    }

    pub fn resolved_count(&self) -> usize {
        self.resolved().count()
    }
}
