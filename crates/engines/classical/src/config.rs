//! Search configuration loaded from TOML
//!
//! ```toml
//! depth = 5
//! algorithm = "alpha-beta"   # or "minimax"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::select::Algorithm;

/// Deepest search a config may request.
pub const MAX_DEPTH: u8 = 16;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read search config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse search config")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize search config")]
    Serialize(#[from] toml::ser::Error),

    #[error("search depth must be between 1 and {max}, got {depth}")]
    InvalidDepth { depth: u8, max: u8 },
}

/// Engine search settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Search depth in plies, counting the root move
    pub depth: u8,
    pub algorithm: Algorithm,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            algorithm: Algorithm::AlphaBeta,
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ConfigError::InvalidDepth {
                depth: self.depth,
                max: MAX_DEPTH,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
