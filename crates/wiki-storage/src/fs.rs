//! Filesystem storage implementation.
//!
//! Provides [`FsEntryStore`] storing one UTF-8 Markdown file per entry under
//! a flat root directory, named `<title>.md`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::store::{EntryStore, StoreError, StoreErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// File extension for stored entries.
const EXTENSION: &str = "md";

/// Filesystem storage implementation.
///
/// Entries live directly under `root` as `<title>.md` files. Titles are used
/// verbatim as file stems, so lookup stays case-sensitive and exact on
/// case-sensitive filesystems. Writes are serialized by a store-wide mutex so
/// concurrent saves to the same title are last-writer-wins rather than
/// interleaved.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use wiki_storage::{EntryStore, FsEntryStore};
///
/// let store = FsEntryStore::new(PathBuf::from("entries"));
/// let titles = store.list()?;
/// ```
pub struct FsEntryStore {
    /// Root directory holding entry files.
    root: PathBuf,
    /// Serializes writes across the whole store.
    write_lock: Mutex<()>,
}

impl FsEntryStore {
    /// Create a new filesystem store rooted at `root`.
    ///
    /// The directory is created lazily on the first `save`; a missing root
    /// simply lists as empty.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            write_lock: Mutex::new(()),
        }
    }

    /// Root directory for entry files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate that a title maps to a single file inside the root.
    ///
    /// Rejects empty titles and titles containing path separators, NUL, or a
    /// leading dot to prevent traversal (e.g., `../../etc/passwd`) and hidden
    /// files.
    fn validate_title(title: &str) -> Result<(), StoreError> {
        let invalid = title.is_empty()
            || title.starts_with('.')
            || title.contains(['/', '\\', '\0']);

        if invalid {
            return Err(StoreError::new(StoreErrorKind::InvalidTitle)
                .with_path(title)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    /// Map a title to its file path, validating it first.
    fn entry_path(&self, title: &str) -> Result<PathBuf, StoreError> {
        Self::validate_title(title)?;
        Ok(self.root.join(format!("{title}.{EXTENSION}")))
    }
}

impl EntryStore for FsEntryStore {
    fn list(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            // A store that was never written to is empty, not broken.
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(StoreError::io(err, Some(self.root.clone())).with_backend(BACKEND));
            }
        };

        let mut titles = Vec::new();
        for entry in entries.filter_map(Result::ok) {
            let path = entry.path();
            let is_file = entry.file_type().is_ok_and(|t| t.is_file());
            if !is_file || path.extension().is_none_or(|e| e != EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            // Hidden files never correspond to a saved title.
            if stem.starts_with('.') {
                continue;
            }
            titles.push(stem.to_owned());
        }

        // Directory order is platform-dependent; sort for determinism.
        titles.sort();
        Ok(titles)
    }

    fn read(&self, title: &str) -> Result<String, StoreError> {
        let path = self.entry_path(title)?;
        fs::read_to_string(&path).map_err(|err| StoreError::io(err, Some(path)).with_backend(BACKEND))
    }

    fn exists(&self, title: &str) -> bool {
        self.entry_path(title).is_ok_and(|path| path.is_file())
    }

    fn save(&self, title: &str, body: &str) -> Result<(), StoreError> {
        let path = self.entry_path(title)?;

        let _guard = self.write_lock.lock().unwrap();

        fs::create_dir_all(&self.root)
            .map_err(|err| StoreError::io(err, Some(self.root.clone())).with_backend(BACKEND))?;

        tracing::debug!(title = %title, path = %path.display(), "Saving entry");
        fs::write(&path, body).map_err(|err| StoreError::io(err, Some(path)).with_backend(BACKEND))
    }
}
