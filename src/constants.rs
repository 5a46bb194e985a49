//! Engine-wide constants
//!
//! Single source of truth for the world file layout and the shift limits
//! every world must respect.

use static_assertions::const_assert;
use static_assertions::const_assert_eq;

/// World file layout (little-endian, no index, no footer)
pub mod format {
    /// Signature at the start of every world file
    pub const WORLD_SIGNATURE: [u8; 4] = *b"wrld";

    /// Signature at the start of every leaf chunk
    pub const LEAF_SIGNATURE: [u8; 4] = *b"leaf";

    /// Newest format version this build reads and the one it writes
    pub const FORMAT_VERSION: u16 = 1;

    /// signature(4) + version(2) + global shift(1) + leaf shift(1) + reserved(6)
    pub const HEADER_LEN: usize = 14;

    /// Reserved header bytes, written as zero and ignored on read
    pub const HEADER_RESERVED_LEN: usize = 6;

    /// signature(4) + iorg(4) + jorg(4) + korg(4)
    pub const CHUNK_HEADER_LEN: usize = 16;

    /// Total chunk length for a given leaf shift
    pub const fn chunk_len(leaf_shift: u8) -> usize {
        CHUNK_HEADER_LEN + (1usize << (3 * leaf_shift as usize))
    }
}

/// Shift limits and defaults
pub mod limits {
    /// Coordinates are i32 and must stay positive inside the root cube
    pub const MAX_GLOBAL_SHIFT: u8 = 30;

    /// 2^24 bytes per leaf
    pub const MAX_LEAF_SHIFT: u8 = 8;

    pub const MIN_LEAF_SHIFT: u8 = 1;

    pub const DEFAULT_GLOBAL_SHIFT: u8 = 10;
    pub const DEFAULT_LEAF_SHIFT: u8 = 4;

    /// Children per interior node (one bit of subdivision per axis)
    pub const OCTANT_COUNT: usize = 8;

    /// Every level splits one bit per axis
    pub const RANGE_SHIFT: u8 = 1;
}

const_assert_eq!(
    format::HEADER_LEN,
    4 + 2 + 1 + 1 + format::HEADER_RESERVED_LEN
);
const_assert_eq!(format::CHUNK_HEADER_LEN, 4 * 4);
const_assert_eq!(limits::OCTANT_COUNT, 1 << (3 * limits::RANGE_SHIFT as usize));
const_assert!(limits::MAX_LEAF_SHIFT <= limits::MAX_GLOBAL_SHIFT);
const_assert!(limits::DEFAULT_LEAF_SHIFT <= limits::DEFAULT_GLOBAL_SHIFT);
