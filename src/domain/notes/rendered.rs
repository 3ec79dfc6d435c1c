//! RenderedRegion - the HTML fragment shown for the current notes.

use serde::Serialize;

/// HTML produced from the generated markdown.
///
/// This is the export target. It is never mutated by export; exporters work
/// on a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderedRegion {
    html: String,
}

impl RenderedRegion {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn is_empty(&self) -> bool {
        self.html.trim().is_empty()
    }
}
