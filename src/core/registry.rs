//! The set of accepted contributor names.

use std::collections::HashSet;

/// Insertion-ordered, exact-match unique collection of contributor names.
///
/// Every name passes through [`ContributorRegistry::accept`], which applies
/// the exclusion list and deduplicates. Case is significant here; only the
/// final sort in [`ContributorRegistry::into_sorted`] ignores it.
#[derive(Debug, Default)]
pub struct ContributorRegistry {
    names: Vec<String>,
    seen: HashSet<String>,
    exclusions: HashSet<String>,
}

impl ContributorRegistry {
    pub fn new<I, S>(exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: Vec::new(),
            seen: HashSet::new(),
            exclusions: exclusions.into_iter().map(Into::into).collect(),
        }
    }

    /// Insert a name without consulting the exclusion list.
    ///
    /// Used for seed names, which are credited unconditionally.
    pub fn seed(&mut self, name: &str) -> bool {
        self.insert(name)
    }

    /// Insert `candidate` if it is neither excluded nor already present.
    ///
    /// Returns true if the registry changed.
    pub fn accept(&mut self, candidate: &str) -> bool {
        if self.exclusions.contains(candidate) {
            return false;
        }
        self.insert(candidate)
    }

    fn insert(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    /// Names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Consume the registry, returning names sorted case-insensitively.
    pub fn into_sorted(self) -> Vec<String> {
        let mut names = self.names;
        names.sort_by_cached_key(|name| name.to_lowercase());
        names
    }
}
