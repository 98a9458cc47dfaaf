//! Unified entry lookup, rendering, and editing.
//!
//! Provides [`Wiki`] for serving wiki pages from an [`EntryStore`] backend,
//! with integrated Markdown rendering.
//!
//! # Thread Safety
//!
//! `Wiki` holds no mutable state of its own; it is `Send + Sync` and designed
//! to sit behind an `Arc` shared across request handlers. Write policy
//! (create-must-not-overwrite) is enforced here, while the store serializes
//! the actual writes.

use std::sync::Arc;

use rand::seq::IndexedRandom;
use wiki_renderer::HtmlRenderer;
use wiki_storage::{EntryStore, StoreError, StoreErrorKind};

/// A rendered wiki page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// Entry title.
    pub title: String,
    /// Rendered HTML content.
    pub html: String,
}

/// An unrendered entry, as loaded for an edit form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawEntry {
    /// Entry title.
    pub title: String,
    /// Raw Markdown body.
    pub markup: String,
}

/// Result of a title search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query matched a title exactly; the entry is returned rendered.
    Hit(Page),
    /// Case-insensitive substring matches, in enumeration order.
    ///
    /// An empty `titles` list is a normal outcome, not an error. The trimmed
    /// query is echoed back for display.
    Matches {
        /// The trimmed query string.
        query: String,
        /// Titles containing the query, ignoring case.
        titles: Vec<String>,
    },
}

/// Error returned by wiki operations.
///
/// All variants except `Storage` are expected, user-visible outcomes.
#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    /// No entry with that title exists.
    #[error("No entry titled \"{0}\"")]
    EntryNotFound(String),
    /// An entry with that title already exists (create only).
    #[error("An entry titled \"{0}\" already exists")]
    Conflict(String),
    /// The wiki has no entries (random only).
    #[error("The wiki has no entries")]
    EmptyWiki,
    /// The underlying store failed.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Wiki engine: one operation per user-facing action.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use wiki_core::Wiki;
/// use wiki_renderer::HtmlRenderer;
/// use wiki_storage::FsEntryStore;
///
/// let store = Arc::new(FsEntryStore::new("entries".into()));
/// let wiki = Wiki::new(store, HtmlRenderer::new());
/// let page = wiki.page("Rust")?;
/// ```
pub struct Wiki {
    store: Arc<dyn EntryStore>,
    renderer: HtmlRenderer,
}

impl Wiki {
    /// Create a new wiki over the given store and renderer.
    #[must_use]
    pub fn new(store: Arc<dyn EntryStore>, renderer: HtmlRenderer) -> Self {
        Self { store, renderer }
    }

    /// List all entry titles. No rendering is performed.
    pub fn entries(&self) -> Result<Vec<String>, WikiError> {
        Ok(self.store.list()?)
    }

    /// Fetch and render the entry with the given title.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::EntryNotFound`] when no entry has that exact
    /// title, or [`WikiError::Storage`] on backend failure.
    pub fn page(&self, title: &str) -> Result<Page, WikiError> {
        let body = self.read_entry(title)?;
        Ok(Page {
            title: title.to_owned(),
            html: self.renderer.render(&body),
        })
    }

    /// Render a uniformly random entry.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::EmptyWiki`] when the store holds no entries.
    pub fn random_page(&self) -> Result<Page, WikiError> {
        let titles = self.store.list()?;
        let title = titles.choose(&mut rand::rng()).ok_or(WikiError::EmptyWiki)?;
        self.page(title)
    }

    /// Search entry titles.
    ///
    /// The query is trimmed first. An exact title match short-circuits to the
    /// rendered entry; otherwise every title containing the query
    /// (case-insensitively) is returned in enumeration order. The empty query
    /// matches every title.
    pub fn search(&self, query: &str) -> Result<SearchOutcome, WikiError> {
        let query = query.trim();

        match self.page(query) {
            Ok(page) => return Ok(SearchOutcome::Hit(page)),
            // The empty query maps to no valid title; fall through like a miss.
            Err(WikiError::EntryNotFound(_)) => {}
            Err(WikiError::Storage(e)) if e.kind == StoreErrorKind::InvalidTitle => {}
            Err(e) => return Err(e),
        }

        let needle = query.to_lowercase();
        let titles = self
            .store
            .list()?
            .into_iter()
            .filter(|title| title.to_lowercase().contains(&needle))
            .collect();

        Ok(SearchOutcome::Matches {
            query: query.to_owned(),
            titles,
        })
    }

    /// Create a new entry, then render it.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::Conflict`] without writing when an entry with
    /// that title already exists.
    pub fn create(&self, title: &str, body: &str) -> Result<Page, WikiError> {
        if self.store.exists(title) {
            return Err(WikiError::Conflict(title.to_owned()));
        }
        self.store.save(title, body)?;
        tracing::info!(title = %title, "Entry created");
        self.page(title)
    }

    /// Fetch the raw (unrendered) body for pre-populating an edit form.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::EntryNotFound`] when no entry has that title.
    pub fn raw(&self, title: &str) -> Result<RawEntry, WikiError> {
        let markup = self.read_entry(title)?;
        Ok(RawEntry {
            title: title.to_owned(),
            markup,
        })
    }

    /// Overwrite an entry's body unconditionally, then render it.
    ///
    /// Creates the entry if it did not previously exist; last writer wins.
    pub fn save(&self, title: &str, body: &str) -> Result<Page, WikiError> {
        self.store.save(title, body)?;
        tracing::info!(title = %title, "Entry saved");
        self.page(title)
    }

    /// Read a body, translating the store's not-found into the wiki's.
    fn read_entry(&self, title: &str) -> Result<String, WikiError> {
        self.store.read(title).map_err(|err| {
            if err.is_not_found() {
                WikiError::EntryNotFound(title.to_owned())
            } else {
                WikiError::Storage(err)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wiki_storage::MockEntryStore;

    use super::*;

    fn wiki(store: MockEntryStore) -> Wiki {
        Wiki::new(Arc::new(store), HtmlRenderer::new())
    }

    fn sample() -> Wiki {
        wiki(
            MockEntryStore::new()
                .with_entry("Python", "# Python\nA language.")
                .with_entry("Rust", "# Rust\nAnother language."),
        )
    }

    #[test]
    fn test_entries_lists_all_titles() {
        let wiki = sample();

        assert_eq!(wiki.entries().unwrap(), vec!["Python", "Rust"]);
    }

    #[test]
    fn test_page_renders_markdown() {
        let wiki = sample();

        let page = wiki.page("Python").unwrap();

        assert_eq!(page.title, "Python");
        assert!(page.html.contains("<h1>Python</h1>"));
        assert!(page.html.contains("<p>A language.</p>"));
    }

    #[test]
    fn test_page_missing_title_is_not_found() {
        let wiki = sample();

        let err = wiki.page("Haskell").unwrap_err();

        assert!(matches!(err, WikiError::EntryNotFound(t) if t == "Haskell"));
    }

    #[test]
    fn test_random_page_returns_an_entry() {
        let wiki = sample();

        let page = wiki.random_page().unwrap();

        assert!(["Python", "Rust"].contains(&page.title.as_str()));
    }

    #[test]
    fn test_random_page_empty_wiki_is_an_error() {
        let wiki = wiki(MockEntryStore::new());

        assert!(matches!(
            wiki.random_page().unwrap_err(),
            WikiError::EmptyWiki
        ));
    }

    #[test]
    fn test_search_exact_title_is_a_hit() {
        let wiki = sample();

        let outcome = wiki.search("Python").unwrap();

        match outcome {
            SearchOutcome::Hit(page) => assert_eq!(page.title, "Python"),
            SearchOutcome::Matches { .. } => panic!("expected exact hit"),
        }
    }

    #[test]
    fn test_search_trims_whitespace_before_exact_match() {
        let wiki = sample();

        let outcome = wiki.search("  Python \n").unwrap();

        assert!(matches!(outcome, SearchOutcome::Hit(p) if p.title == "Python"));
    }

    #[test]
    fn test_search_substring_is_case_insensitive() {
        let wiki = sample();

        let outcome = wiki.search("pyth").unwrap();

        assert_eq!(
            outcome,
            SearchOutcome::Matches {
                query: "pyth".to_owned(),
                titles: vec!["Python".to_owned()],
            }
        );
    }

    #[test]
    fn test_search_empty_query_matches_everything() {
        let wiki = sample();

        let outcome = wiki.search("").unwrap();

        assert_eq!(
            outcome,
            SearchOutcome::Matches {
                query: String::new(),
                titles: vec!["Python".to_owned(), "Rust".to_owned()],
            }
        );
    }

    #[test]
    fn test_search_no_match_is_empty_not_an_error() {
        let wiki = sample();

        let outcome = wiki.search("zzz").unwrap();

        assert_eq!(
            outcome,
            SearchOutcome::Matches {
                query: "zzz".to_owned(),
                titles: Vec::new(),
            }
        );
    }

    #[test]
    fn test_create_renders_new_entry() {
        let wiki = wiki(MockEntryStore::new());

        let page = wiki.create("Go", "# Go\nCompiled.").unwrap();

        assert_eq!(page.title, "Go");
        assert!(page.html.contains("<h1>Go</h1>"));
    }

    #[test]
    fn test_create_existing_title_is_a_conflict_and_leaves_body() {
        let wiki = sample();

        let err = wiki.create("Python", "overwrite attempt").unwrap_err();

        assert!(matches!(err, WikiError::Conflict(t) if t == "Python"));
        assert_eq!(wiki.raw("Python").unwrap().markup, "# Python\nA language.");
    }

    #[test]
    fn test_raw_returns_unrendered_markup() {
        let wiki = sample();

        let raw = wiki.raw("Rust").unwrap();

        assert_eq!(raw.markup, "# Rust\nAnother language.");
    }

    #[test]
    fn test_raw_missing_title_is_not_found() {
        let wiki = sample();

        assert!(matches!(
            wiki.raw("Haskell").unwrap_err(),
            WikiError::EntryNotFound(_)
        ));
    }

    #[test]
    fn test_save_overwrites_existing_entry() {
        let wiki = sample();

        let page = wiki.save("Rust", "# Rust\nRewritten.").unwrap();

        assert!(page.html.contains("Rewritten."));
        assert_eq!(wiki.raw("Rust").unwrap().markup, "# Rust\nRewritten.");
    }

    #[test]
    fn test_save_creates_when_absent() {
        let wiki = wiki(MockEntryStore::new());

        let page = wiki.save("New", "body").unwrap();

        assert_eq!(page.title, "New");
        assert!(wiki.raw("New").is_ok());
    }

    #[test]
    fn test_storage_failure_propagates() {
        let wiki = wiki(MockEntryStore::new().fail_writes());

        assert!(matches!(
            wiki.save("Rust", "body").unwrap_err(),
            WikiError::Storage(_)
        ));
    }
}
