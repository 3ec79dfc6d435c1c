//! Export options and download filename derivation.

use serde::Serialize;

/// Number of prompt characters kept in the download filename.
pub const FILENAME_PROMPT_CHARS: usize = 30;

/// Suffix appended to every derived filename.
pub const FILENAME_SUFFIX: &str = "-notes.pdf";

/// Filename used when the prompt leaves nothing usable.
pub const DEFAULT_EXPORT_FILENAME: &str = "yellow-notes-export.pdf";

/// Options for a single PDF export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportOptions {
    /// Heading prepended to the exported document.
    pub title: Option<String>,
    /// Download filename, already sanitized.
    pub filename: String,
}

impl ExportOptions {
    /// Options for notes generated from `prompt`: the prompt is the title and
    /// the filename is derived from it.
    pub fn for_prompt(prompt: &str) -> Self {
        let title = prompt.trim();
        Self {
            title: (!title.is_empty()).then(|| title.to_string()),
            filename: export_filename(prompt),
        }
    }

    /// Replaces the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.trim().is_empty()).then_some(title);
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: None,
            filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

/// Derives the download filename from a prompt.
///
/// Keeps the first 30 characters, replaces each whitespace run with a single
/// hyphen, drops anything outside letters, digits, `-`, `_` and `.`, and
/// appends `-notes.pdf`.
pub fn export_filename(prompt: &str) -> String {
    let head: String = prompt.chars().take(FILENAME_PROMPT_CHARS).collect();

    let mut stem = String::with_capacity(head.len());
    let mut in_whitespace = false;
    for c in head.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                stem.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if is_safe_filename_char(c) {
            stem.push(c);
        }
    }

    // A stem of only separators would produce names like "--notes.pdf".
    if stem.chars().all(|c| matches!(c, '-' | '.' | '_')) {
        return DEFAULT_EXPORT_FILENAME.to_string();
    }

    format!("{}{}", stem, FILENAME_SUFFIX)
}

fn is_safe_filename_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.')
}
