//! Application state.
//!
//! Shared state for all request handlers.

use wiki_core::Wiki;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Wiki engine: storage plus Markdown rendering.
    pub(crate) wiki: Wiki,
}
