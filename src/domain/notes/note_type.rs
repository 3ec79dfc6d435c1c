//! Note type and detail level selectors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Kind of notes the user wants.
///
/// Steers the system instruction sent to the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    /// Conceptual / theoretical notes.
    #[default]
    Theory,
    /// Code-oriented notes with examples.
    Code,
    /// Logic and reasoning oriented notes.
    Logic,
}

impl NoteType {
    /// All note types in display order.
    pub const ALL: [NoteType; 3] = [NoteType::Theory, NoteType::Code, NoteType::Logic];

    /// Wire identifier, also used inside the system instruction.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteType::Theory => "theory",
            NoteType::Code => "code",
            NoteType::Logic => "logic",
        }
    }

    /// Label shown on the selector button.
    pub fn label(&self) -> &'static str {
        match self {
            NoteType::Theory => "📖 Theory",
            NoteType::Code => "💻 Code",
            NoteType::Logic => "🧠 Logic",
        }
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NoteType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "theory" => Ok(NoteType::Theory),
            "code" => Ok(NoteType::Code),
            "logic" => Ok(NoteType::Logic),
            other => Err(ValidationError::invalid_format(
                "note_type",
                format!("unknown note type '{}'", other),
            )),
        }
    }
}

/// Requested response length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// Brief summary.
    #[default]
    Concise,
    /// Comprehensive content.
    Detailed,
}

impl DetailLevel {
    /// Maps the "detailed" switch to a level.
    pub fn from_detailed(detailed: bool) -> Self {
        if detailed {
            DetailLevel::Detailed
        } else {
            DetailLevel::Concise
        }
    }

    /// Returns true for the detailed level.
    pub fn is_detailed(&self) -> bool {
        matches!(self, DetailLevel::Detailed)
    }

    /// Wire identifier, also used inside the system instruction.
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::Concise => "concise",
            DetailLevel::Detailed => "detailed",
        }
    }

    /// Label shown next to the toggle.
    pub fn label(&self) -> &'static str {
        match self {
            DetailLevel::Concise => "Concise Notes",
            DetailLevel::Detailed => "Detailed Notes",
        }
    }

    /// Hint shown under the toggle.
    pub fn hint(&self) -> &'static str {
        match self {
            DetailLevel::Concise => "Brief summary",
            DetailLevel::Detailed => "Comprehensive content",
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
