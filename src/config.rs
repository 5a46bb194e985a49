//! World configuration
//!
//! Shifts are fixed for the lifetime of a world; a file saved with one leaf
//! shift can only be loaded by a world running the same leaf shift.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::limits::{
    DEFAULT_GLOBAL_SHIFT, DEFAULT_LEAF_SHIFT, MAX_GLOBAL_SHIFT, MAX_LEAF_SHIFT, MIN_LEAF_SHIFT,
};
use crate::error::{EngineError, EngineResult, ErrorContext};

/// What to do when a world file ends in the middle of a leaf chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingChunkPolicy {
    /// Drop the partial chunk and finish the load (logged as a warning)
    #[default]
    Ignore,
    /// Fail the load with a truncation error
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// log2 of the world cube side
    pub global_shift: u8,
    /// log2 of the dense leaf side
    pub leaf_shift: u8,
    pub trailing_chunk: TrailingChunkPolicy,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            global_shift: DEFAULT_GLOBAL_SHIFT,
            leaf_shift: DEFAULT_LEAF_SHIFT,
            trailing_chunk: TrailingChunkPolicy::Ignore,
        }
    }
}

impl WorldConfig {
    pub fn from_toml_str(source: &str) -> EngineResult<Self> {
        let config: WorldConfig = toml::from_str(source).map_err(|e| EngineError::ParseError {
            value: e.to_string(),
            expected_type: "WorldConfig".to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).with_path(path)?;
        log::debug!("[WorldConfig::load] read {}", path.display());
        Self::from_toml_str(&source)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> EngineResult<()> {
        if self.leaf_shift < MIN_LEAF_SHIFT || self.leaf_shift > MAX_LEAF_SHIFT {
            return Err(EngineError::InvalidConfig {
                field: "leaf_shift".to_string(),
                value: self.leaf_shift.to_string(),
                reason: format!("must be in {}..={}", MIN_LEAF_SHIFT, MAX_LEAF_SHIFT),
            });
        }

        if self.global_shift < self.leaf_shift {
            return Err(EngineError::InvalidConfig {
                field: "global_shift".to_string(),
                value: self.global_shift.to_string(),
                reason: format!("must be at least leaf_shift ({})", self.leaf_shift),
            });
        }

        if self.global_shift > MAX_GLOBAL_SHIFT {
            return Err(EngineError::InvalidConfig {
                field: "global_shift".to_string(),
                value: self.global_shift.to_string(),
                reason: format!("exceeds maximum of {}", MAX_GLOBAL_SHIFT),
            });
        }

        log::info!(
            "[WorldConfig] Validation: global_shift={}, leaf_shift={}, leaf_bytes={}",
            self.global_shift,
            self.leaf_shift,
            1usize << (3 * self.leaf_shift as usize)
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config = WorldConfig::from_toml_str(
            r#"
            global_shift = 12
            leaf_shift = 5
            trailing_chunk = "reject"
            "#,
        )
        .expect("valid config");
        assert_eq!(config.global_shift, 12);
        assert_eq!(config.leaf_shift, 5);
        assert_eq!(config.trailing_chunk, TrailingChunkPolicy::Reject);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = WorldConfig::from_toml_str("global_shift = 16").expect("valid config");
        assert_eq!(config.leaf_shift, DEFAULT_LEAF_SHIFT);
        assert_eq!(config.trailing_chunk, TrailingChunkPolicy::Ignore);
    }

    #[test]
    fn test_rejects_inverted_shifts() {
        let result = WorldConfig::from_toml_str("global_shift = 3\nleaf_shift = 4");
        assert!(matches!(
            result,
            Err(EngineError::InvalidConfig { ref field, .. }) if field == "global_shift"
        ));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let result = WorldConfig::from_toml_str("global_shift = \"big\"");
        assert!(matches!(result, Err(EngineError::ParseError { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().expect("Failed to create temporary directory for test");
        let path = dir.path().join("world.toml");
        std::fs::write(&path, "leaf_shift = 3\nglobal_shift = 8\n").expect("write config");

        let config = WorldConfig::load(&path).expect("valid config");
        assert_eq!(config.leaf_shift, 3);

        let missing = WorldConfig::load(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(EngineError::IoError { .. })));
    }
}
