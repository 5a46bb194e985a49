//! Crate-wide error handling
//!
//! Module errors ([`WorldError`], [`PersistenceError`]) stay precise where
//! they are raised; this type aggregates them for callers that mix world,
//! persistence and configuration work.

use std::error::Error as StdError;
use std::fmt;
use std::path::Path;

use crate::persistence::PersistenceError;
use crate::world::WorldError;

/// Main error type for the world crate
#[derive(Debug)]
pub enum EngineError {
    World(WorldError),
    Persistence(PersistenceError),

    // Configuration Errors
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
    ParseError {
        value: String,
        expected_type: String,
    },

    // System Errors
    IoError {
        path: String,
        error: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::World(e) => write!(f, "World error: {}", e),
            EngineError::Persistence(e) => write!(f, "Persistence error: {}", e),
            EngineError::InvalidConfig {
                field,
                value,
                reason,
            } => write!(f, "Invalid config: {} = {} ({})", field, value, reason),
            EngineError::ParseError {
                value,
                expected_type,
            } => write!(
                f,
                "Parse error: '{}' is not a valid {}",
                value, expected_type
            ),
            EngineError::IoError { path, error } => write!(f, "IO error for {}: {}", path, error),
        }
    }
}

impl StdError for EngineError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            EngineError::World(e) => Some(e),
            EngineError::Persistence(e) => Some(e),
            _ => None,
        }
    }
}

/// Type alias for Results in this crate
pub type EngineResult<T> = Result<T, EngineError>;

impl From<WorldError> for EngineError {
    fn from(error: WorldError) -> Self {
        EngineError::World(error)
    }
}

impl From<PersistenceError> for EngineError {
    fn from(error: PersistenceError) -> Self {
        EngineError::Persistence(error)
    }
}

/// Attach the offending path to I/O failures
pub trait ErrorContext<T> {
    fn with_path(self, path: &Path) -> EngineResult<T>;
}

impl<T> ErrorContext<T> for Result<T, std::io::Error> {
    fn with_path(self, path: &Path) -> EngineResult<T> {
        self.map_err(|e| EngineError::IoError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::InvalidConfig {
            field: "leaf_shift".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid config: leaf_shift = 0 (must be at least 1)"
        );
    }

    #[test]
    fn test_with_path() {
        let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        let err = result
            .with_path(Path::new("worlds/main.toml"))
            .expect_err("should carry the path");
        assert_eq!(err.to_string(), "IO error for worlds/main.toml: file not found");
    }

    #[test]
    fn test_world_error_converts() {
        let err: EngineError = WorldError::InvalidShift {
            global_shift: 2,
            leaf_shift: 4,
            reason: "global shift smaller than leaf shift".to_string(),
        }
        .into();
        assert!(matches!(err, EngineError::World(_)));
        assert!(err.source().is_some());
    }
}
