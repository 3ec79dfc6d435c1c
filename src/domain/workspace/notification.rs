//! Dismissible notifications shown to the user.

use serde::Serialize;

/// Which of the two error kinds a notification reports, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Local input problem (empty prompt, nothing to export).
    Validation,
    /// The generation service or the PDF pipeline failed.
    ExternalCall,
}

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A short title plus description, shown once until dismissed or replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl Notification {
    fn destructive(title: &str, description: &str, kind: ErrorKind) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: NotificationVariant::Destructive,
            error_kind: Some(kind),
        }
    }

    pub fn prompt_required() -> Self {
        Self::destructive(
            "Prompt required",
            "Please enter a topic or question to generate notes",
            ErrorKind::Validation,
        )
    }

    pub fn generation_failed() -> Self {
        Self::destructive(
            "Generation failed",
            "There was a problem generating your notes. Please try again.",
            ErrorKind::ExternalCall,
        )
    }

    pub fn nothing_to_export() -> Self {
        Self::destructive(
            "Nothing to export",
            "Please generate notes first before exporting to PDF.",
            ErrorKind::Validation,
        )
    }

    pub fn export_in_progress() -> Self {
        Self::destructive(
            "Export in progress",
            "Please wait for the current export to finish.",
            ErrorKind::Validation,
        )
    }

    pub fn export_succeeded() -> Self {
        Self {
            title: "Export successful".to_string(),
            description: "Your notes have been exported to PDF".to_string(),
            variant: NotificationVariant::Default,
            error_kind: None,
        }
    }

    pub fn export_failed() -> Self {
        Self::destructive(
            "Export failed",
            "There was a problem exporting your notes. Please try again.",
            ErrorKind::ExternalCall,
        )
    }

    /// Returns true for notifications that report an error.
    pub fn is_error(&self) -> bool {
        self.error_kind.is_some()
    }
}
