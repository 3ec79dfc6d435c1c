//! Configuration loaded from the environment.
//!
//! Every key lives under the `YELLOW_NOTES` prefix with `__` between
//! sections, e.g. `YELLOW_NOTES__AI__API_KEY` or `YELLOW_NOTES__SERVER__PORT`.
//! A `.env` file in the working directory is read first when present.
//!
//! ```no_run
//! use yellow_notes::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! # Ok(())
//! # }
//! ```

mod ai;
mod error;
mod export;
mod features;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "YELLOW_NOTES";

/// All settings, one field per section.
///
/// Every section has defaults, so an empty environment loads; `validate`
/// decides whether the result is usable.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Reads `.env` (if any), then the process environment.
    ///
    /// Fails only when a value cannot be parsed into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load from the process environment only, skipping `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section; the API key may be absent only in offline
    /// template mode.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate(!self.features.offline_templates)?;
        self.export.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
