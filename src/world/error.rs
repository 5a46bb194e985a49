/// World Error Handling
///
/// Provides error types and utilities for the sparse world.
use super::VoxelPos;

/// World-specific result type
pub type WorldResult<T> = Result<T, WorldError>;

#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("Voxel position {pos} is outside the world cube of side {side}")]
    OutOfBounds { pos: VoxelPos, side: i64 },

    #[error("Invalid shifts (global={global_shift}, leaf={leaf_shift}): {reason}")]
    InvalidShift {
        global_shift: u8,
        leaf_shift: u8,
        reason: String,
    },
}

/// Error context for world lookups that come back empty
pub trait WorldErrorContext<T> {
    fn or_out_of_bounds(self, pos: VoxelPos, side: i64) -> WorldResult<T>;
}

impl<T> WorldErrorContext<T> for Option<T> {
    fn or_out_of_bounds(self, pos: VoxelPos, side: i64) -> WorldResult<T> {
        self.ok_or(WorldError::OutOfBounds { pos, side })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = WorldError::OutOfBounds {
            pos: VoxelPos::new(-1, 2, 3),
            side: 128,
        };
        assert_eq!(
            err.to_string(),
            "Voxel position (-1, 2, 3) is outside the world cube of side 128"
        );
    }

    #[test]
    fn test_or_out_of_bounds() {
        let missing: Option<u8> = None;
        let result = missing.or_out_of_bounds(VoxelPos::new(0, 0, 0), 16);
        assert!(matches!(result, Err(WorldError::OutOfBounds { side: 16, .. })));
        assert_eq!(Some(3u8).or_out_of_bounds(VoxelPos::new(0, 0, 0), 16).ok(), Some(3));
    }
}
