//! Markdown renderer backed by `pulldown-cmark`.

use pulldown_cmark::{Options, Parser, html};

/// Markdown to HTML renderer.
///
/// A pure function of its input: no state is retained between calls, so one
/// instance can be shared freely across requests.
///
/// GFM extensions (tables, strikethrough, task lists) are enabled by default
/// and can be disabled via [`with_gfm`](Self::with_gfm).
#[derive(Clone, Debug)]
pub struct HtmlRenderer {
    gfm: bool,
}

impl HtmlRenderer {
    /// Create a new renderer with GFM enabled by default.
    #[must_use]
    pub fn new() -> Self {
        Self { gfm: true }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// When enabled, the parser supports:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Render Markdown text to HTML.
    #[must_use]
    pub fn render(&self, markup: &str) -> String {
        let parser = Parser::new_ext(markup, self.parser_options());
        let mut output = String::with_capacity(markup.len() * 2);
        html::push_html(&mut output, parser);
        output
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}
