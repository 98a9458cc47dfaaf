//! Mock storage implementation for testing.
//!
//! Provides [`MockEntryStore`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::store::{EntryStore, StoreError, StoreErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores entry bodies in memory. Use the builder methods to configure the
/// mock with test data, or [`fail_writes`](Self::fail_writes) to exercise
/// error paths.
///
/// # Example
///
/// ```ignore
/// use wiki_storage::{EntryStore, MockEntryStore};
///
/// let store = MockEntryStore::new().with_entry("Rust", "# Rust\n\nContent.");
///
/// assert!(store.exists("Rust"));
/// assert_eq!(store.read("Rust").unwrap(), "# Rust\n\nContent.");
/// ```
#[derive(Debug, Default)]
pub struct MockEntryStore {
    entries: RwLock<HashMap<String, String>>,
    fail_writes: bool,
}

impl MockEntryStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry with the given title and body.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_entry(self, title: impl Into<String>, body: impl Into<String>) -> Self {
        self.entries
            .write()
            .unwrap()
            .insert(title.into(), body.into());
        self
    }

    /// Make every subsequent `save` fail with a generic storage error.
    #[must_use]
    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl EntryStore for MockEntryStore {
    fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut titles: Vec<String> = self.entries.read().unwrap().keys().cloned().collect();
        titles.sort();
        Ok(titles)
    }

    fn read(&self, title: &str) -> Result<String, StoreError> {
        self.entries
            .read()
            .unwrap()
            .get(title)
            .cloned()
            .ok_or_else(|| StoreError::not_found(title).with_backend(BACKEND))
    }

    fn exists(&self, title: &str) -> bool {
        self.entries.read().unwrap().contains_key(title)
    }

    fn save(&self, title: &str, body: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::new(StoreErrorKind::Other)
                .with_path(title)
                .with_backend(BACKEND));
        }
        self.entries
            .write()
            .unwrap()
            .insert(title.to_owned(), body.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_store_lists_nothing() {
        let store = MockEntryStore::new();

        assert_eq!(store.list().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_with_entry_builder() {
        let store = MockEntryStore::new()
            .with_entry("Rust", "rs")
            .with_entry("Python", "py");

        assert_eq!(store.list().unwrap(), vec!["Python", "Rust"]);
        assert_eq!(store.read("Rust").unwrap(), "rs");
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let store = MockEntryStore::new();

        assert!(store.read("Missing").unwrap_err().is_not_found());
    }

    #[test]
    fn test_save_then_read() {
        let store = MockEntryStore::new();

        store.save("Rust", "body").unwrap();

        assert!(store.exists("Rust"));
        assert_eq!(store.read("Rust").unwrap(), "body");
    }

    #[test]
    fn test_fail_writes() {
        let store = MockEntryStore::new().fail_writes();

        let err = store.save("Rust", "body").unwrap_err();

        assert_eq!(err.kind, StoreErrorKind::Other);
        assert!(!store.exists("Rust"));
    }
}
