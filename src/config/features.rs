//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureFlags {
    /// Serve notes from the built-in templates instead of the remote endpoint
    #[serde(default)]
    pub offline_templates: bool,

    /// Show provider and exporter error details in API responses
    #[serde(default)]
    pub verbose_errors: bool,
}
