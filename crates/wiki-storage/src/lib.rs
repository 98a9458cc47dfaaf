//! Entry storage abstraction for the wiki engine.
//!
//! This crate provides an [`EntryStore`] trait for abstracting entry listing,
//! retrieval, and persistence from the underlying storage backend. This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Backend flexibility** (filesystem today, databases later)
//! - **Clean separation** between wiki logic and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`EntryStore`] trait with `list()`, `read()`, `exists()`, and `save()` methods
//! - [`FsEntryStore`] implementation storing one Markdown file per entry
//! - [`MockEntryStore`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use wiki_storage::{EntryStore, FsEntryStore};
//!
//! let store = FsEntryStore::new(PathBuf::from("entries"));
//! store.save("Rust", "# Rust\n\nA systems language.")?;
//! for title in store.list()? {
//!     println!("{title}");
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod store;

pub use fs::FsEntryStore;
#[cfg(feature = "mock")]
pub use mock::MockEntryStore;
pub use store::{EntryStore, StoreError, StoreErrorKind};
