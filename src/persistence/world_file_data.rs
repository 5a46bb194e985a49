//! Fixed-layout records of the world file

use super::{PersistenceError, PersistenceResult};
use crate::constants::format::{
    CHUNK_HEADER_LEN, FORMAT_VERSION, HEADER_LEN, LEAF_SIGNATURE, WORLD_SIGNATURE,
};
use crate::world::VoxelPos;

/// File header. `version` is kept signed so that corrupt negative values
/// can be reported as such.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldFileHeader {
    pub version: i16,
    pub global_shift: u8,
    pub leaf_shift: u8,
}

impl WorldFileHeader {
    /// Header for the current format version
    pub fn new(global_shift: u8, leaf_shift: u8) -> Self {
        Self {
            version: FORMAT_VERSION as i16,
            global_shift,
            leaf_shift,
        }
    }

    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        bytes[0..4].copy_from_slice(&WORLD_SIGNATURE);
        bytes[4..6].copy_from_slice(&self.version.to_le_bytes());
        bytes[6] = self.global_shift;
        bytes[7] = self.leaf_shift;
        // bytes[8..14] reserved
        bytes
    }

    /// Parse and check signature and version. Shift checks are left to the
    /// loader, which knows the running configuration.
    pub fn decode(bytes: &[u8; HEADER_LEN]) -> PersistenceResult<Self> {
        if bytes[0..4] != WORLD_SIGNATURE {
            return Err(PersistenceError::signature(&WORLD_SIGNATURE, &bytes[0..4]));
        }

        let version = i16::from_le_bytes([bytes[4], bytes[5]]);
        if version <= 0 || version as u16 > FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: version,
                supported: FORMAT_VERSION,
            });
        }

        Ok(Self {
            version,
            global_shift: bytes[6],
            leaf_shift: bytes[7],
        })
    }
}

/// Per-leaf chunk prefix; the payload follows directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub origin: VoxelPos,
}

impl ChunkHeader {
    pub fn encode(&self) -> [u8; CHUNK_HEADER_LEN] {
        let mut bytes = [0u8; CHUNK_HEADER_LEN];
        bytes[0..4].copy_from_slice(&LEAF_SIGNATURE);
        bytes[4..8].copy_from_slice(&self.origin.x.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.origin.y.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.origin.z.to_le_bytes());
        bytes
    }

    pub fn decode(bytes: &[u8]) -> PersistenceResult<Self> {
        if bytes.len() < CHUNK_HEADER_LEN {
            return Err(PersistenceError::TruncatedChunk {
                expected: CHUNK_HEADER_LEN,
                found: bytes.len(),
            });
        }
        if bytes[0..4] != LEAF_SIGNATURE {
            return Err(PersistenceError::signature(&LEAF_SIGNATURE, &bytes[0..4]));
        }

        let read_i32 =
            |at: usize| i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
        Ok(Self {
            origin: VoxelPos::new(read_i32(4), read_i32(8), read_i32(12)),
        })
    }
}
