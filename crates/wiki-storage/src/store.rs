//! Storage trait and error types.
//!
//! Provides the core [`EntryStore`] trait for abstracting entry persistence,
//! along with [`StoreError`] for unified error handling across backends.
//!
//! # Title Convention
//!
//! All title parameters are plain entry titles, not file paths. Backends map
//! titles to their internal storage format (e.g., `"Rust"` maps to `Rust.md`
//! for the filesystem backend). Lookup is case-sensitive and exact.

use std::path::PathBuf;

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorKind {
    /// No entry with that title exists.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// An entry with that title already exists (for create operations).
    AlreadyExists,
    /// Title is empty or would map outside the store.
    InvalidTitle,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StoreError {
    /// Semantic error category.
    pub kind: StoreErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StoreErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Downcast the source error to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }

    /// True when the error means "no such entry".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == StoreErrorKind::NotFound
    }

    /// Create a not found error for a title.
    #[must_use]
    pub fn not_found(title: &str) -> Self {
        Self::new(StoreErrorKind::NotFound).with_path(title)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StoreErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StoreErrorKind::PermissionDenied,
            std::io::ErrorKind::AlreadyExists => StoreErrorKind::AlreadyExists,
            _ => StoreErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StoreErrorKind::NotFound => "Not found",
            StoreErrorKind::PermissionDenied => "Permission denied",
            StoreErrorKind::AlreadyExists => "Already exists",
            StoreErrorKind::InvalidTitle => "Invalid title",
            StoreErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Storage abstraction for wiki entries.
///
/// Provides a unified interface for entry persistence regardless of backend.
/// One title maps to exactly one body; backends never hold multiple versions.
///
/// Policy (such as "create must not overwrite") lives in the caller; `save`
/// is always an unconditional overwrite.
pub trait EntryStore: Send + Sync {
    /// List all stored entry titles, each exactly once.
    ///
    /// No ordering is guaranteed; backends may sort for determinism.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if enumeration fails (e.g., permission denied).
    fn list(&self) -> Result<Vec<String>, StoreError>;

    /// Read the raw Markdown body for a title.
    ///
    /// Lookup is case-sensitive and exact. A missing entry is a [`StoreError`]
    /// of kind [`StoreErrorKind::NotFound`], which callers treat as a normal
    /// outcome rather than a fault.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the entry doesn't exist or can't be read.
    fn read(&self, title: &str) -> Result<String, StoreError>;

    /// Check whether an entry with the given title exists.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, title: &str) -> bool;

    /// Write the body for a title, overwriting any previous body.
    ///
    /// A `read` immediately after `save` must observe the new body.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the title is invalid or the write fails.
    fn save(&self, title: &str, body: &str) -> Result<(), StoreError>;
}
