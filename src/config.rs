//! Game tree configuration.
//!
//! The maximum game depth is external to positions: it decides where the
//! trace starts and is passed to [`Position::trace_index`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::bits::MAX_POSITION_DEPTH;
use crate::core::position::{Position, PositionError};

/// Default maximum game depth.
pub const DEFAULT_MAX_DEPTH: u32 = 4;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config is not valid JSON for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Max depth is outside `1..=63`.
    #[error("invalid max depth {0}")]
    InvalidMaxDepth(u32),
}

/// Dispute game tree configuration.
///
/// Only constructed through validating paths, so `max_depth` is always in
/// `1..=63`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    max_depth: u32,
}

/// Unvalidated wire form.
#[derive(Deserialize)]
#[serde(default)]
struct RawGameConfig {
    max_depth: u32,
}

impl Default for RawGameConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Self::new(raw.max_depth)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl GameConfig {
    /// Create a validated config.
    pub fn new(max_depth: u32) -> Result<Self, ConfigError> {
        let config = Self { max_depth };
        config.validate()?;
        Ok(config)
    }

    /// Depth of the leaves, where trace steps live.
    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawGameConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Load and validate a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        debug!("Loaded game config from {}: max_depth={}", path.display(), config.max_depth());
        Ok(config)
    }

    /// Check that the max depth fits a `u64` trace index.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 || self.max_depth > MAX_POSITION_DEPTH {
            return Err(ConfigError::InvalidMaxDepth(self.max_depth));
        }
        Ok(())
    }

    /// Number of trace steps (leaves).
    pub fn leaf_count(&self) -> u64 {
        1u64 << self.max_depth
    }

    /// Trace index of a position under this config.
    pub fn trace_index(&self, position: &Position) -> Result<u64, PositionError> {
        position.trace_index(self.max_depth)
    }

    /// Trace index the root claim commits to (the last trace step).
    pub fn root_trace_index(&self) -> Result<u64, PositionError> {
        self.trace_index(&Position::root())
    }
}
