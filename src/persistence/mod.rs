//! World persistence
//!
//! A world file is a 14-byte header followed by one chunk per non-empty
//! leaf, little-endian throughout:
//!
//! ```text
//! header: "wrld" | version u16 | global shift u8 | leaf shift u8 | 6 reserved
//! chunk:  "leaf" | iorg i32 | jorg i32 | korg i32 | 2^(3 * leaf shift) voxels
//! ```
//!
//! The end of the stream is the end of the world. Streams come from a
//! [`WorldStorage`] and live only for the duration of one save or load.

// Data modules
pub mod world_file_data;

// Operations modules
pub mod storage;
pub mod world_file_operations;

pub use storage::{DirectoryStorage, MemoryStorage, WorldStorage};
pub use world_file_data::{ChunkHeader, WorldFileHeader};
pub use world_file_operations::{
    load, load_from_reader, read_header, save, save_to_writer, SaveSummary,
};

use crate::world::{VoxelPos, WorldError};

pub type PersistenceResult<T> = Result<T, PersistenceError>;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Signature mismatch: expected {expected:?}, found {found:?}")]
    SignatureMismatch { expected: String, found: String },
    #[error("Unsupported version {found} (this build reads 1..={supported})")]
    UnsupportedVersion { found: i16, supported: u16 },
    #[error("Leaf shift mismatch: file uses {file}, world runs {running}")]
    LeafShiftMismatch { file: u8, running: u8 },
    #[error("Truncated header: expected {expected} bytes, found {found}")]
    TruncatedHeader { expected: usize, found: usize },
    #[error("Chunk origin {origin} is not aligned to the leaf side {side}")]
    MisalignedChunk { origin: VoxelPos, side: i32 },
    #[error("Truncated chunk: expected {expected} bytes, found {found}")]
    TruncatedChunk { expected: usize, found: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("World error: {0}")]
    World(#[from] WorldError),
}

impl PersistenceError {
    pub(crate) fn signature(expected: &[u8], found: &[u8]) -> Self {
        PersistenceError::SignatureMismatch {
            expected: String::from_utf8_lossy(expected).into_owned(),
            found: String::from_utf8_lossy(found).into_owned(),
        }
    }
}
