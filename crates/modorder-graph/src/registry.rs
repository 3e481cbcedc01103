//! Module name → defining file lookup.

use rustc_hash::FxHashMap as HashMap;

use super::FileId;

/// Maps lowercase module names to the file that defines them.
///
/// Written once during the definition pass and read-only afterwards.
/// Duplicate definitions are not rejected: the most recent `insert` for a
/// name wins, and `insert` hands back the file it displaced so the caller
/// can report the collision.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    entries: HashMap<String, FileId>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` as defined by `file`, returning the previous definer.
    pub fn insert(&mut self, name: impl Into<String>, file: FileId) -> Option<FileId> {
        self.entries.insert(name.into(), file)
    }

    /// File defining `name`. Case-sensitive: callers pass lowercased names.
    pub fn lookup(&self, name: &str) -> Option<FileId> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FileId)> {
        self.entries.iter().map(|(name, file)| (name.as_str(), *file))
    }
}
