//! PDF export configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_EXPORT_TIMEOUT_SECS: u64 = 600;

/// Rasterizer configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Path to `wkhtmltopdf`; searched on PATH when unset
    pub rasterizer_path: Option<String>,

    /// Seconds a single conversion may take
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ExportConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > MAX_EXPORT_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout {
                max: MAX_EXPORT_TIMEOUT_SECS,
            });
        }
        if self
            .rasterizer_path
            .as_ref()
            .is_some_and(|p| p.trim().is_empty())
        {
            return Err(ValidationError::MissingRequired("YELLOW_NOTES__EXPORT__RASTERIZER_PATH"));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            rasterizer_path: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    60
}
