//! Wiki orchestration.
//!
//! Provides [`Wiki`], which ties an [`EntryStore`](wiki_storage::EntryStore)
//! backend to an [`HtmlRenderer`](wiki_renderer::HtmlRenderer) and exposes one
//! operation per user-facing action: list, view, random, search, create, edit,
//! and save. Every operation is a stateless request/response pair over the
//! store's current contents.

mod wiki;

pub use wiki::{Page, RawEntry, SearchOutcome, Wiki, WikiError};
