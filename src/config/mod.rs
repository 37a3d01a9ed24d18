pub mod schema;

pub use schema::{EngineConfig, PracticalStyle};

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::ConfigError;

impl EngineConfig {
    /// Load and validate a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        info!(path = %path.display(), "loaded engine config");
        Ok(config)
    }
}
