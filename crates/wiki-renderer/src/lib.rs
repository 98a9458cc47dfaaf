//! Markdown to HTML renderer for wiki entries.
//!
//! Wraps `pulldown-cmark` behind [`HtmlRenderer`] so the conversion engine
//! stays swappable and the rest of the workspace never touches parser events
//! directly.

mod renderer;

pub use renderer::HtmlRenderer;
