//! World file save and load
//!
//! Saving walks every leaf with [`AcceptAll`] and writes one chunk per leaf
//! holding at least one non-zero voxel. Loading rebuilds the tree by
//! force-creating each chunk's leaf and copying the payload in verbatim.

use std::io::{self, Read, Write};

use super::world_file_data::{ChunkHeader, WorldFileHeader};
use super::{PersistenceError, PersistenceResult, WorldStorage};
use crate::config::TrailingChunkPolicy;
use crate::constants::format::{chunk_len, CHUNK_HEADER_LEN, HEADER_LEN};
use crate::world::{AcceptAll, Leaf, NodeFactory, Visitor, World, WorldErrorContext};

/// Outcome of one save
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveSummary {
    pub leaves_written: usize,
    /// Leaves that exist but hold only zeros
    pub leaves_skipped: usize,
    pub bytes: usize,
}

/// Leaf-only visitor writing chunks through a scratch buffer owned by the
/// enclosing save call
struct ChunkWriter<'a, W: Write> {
    writer: &'a mut W,
    scratch: &'a mut Vec<u8>,
    summary: SaveSummary,
}

impl<W: Write> Visitor for ChunkWriter<'_, W> {
    type Error = io::Error;

    fn visit_leaf(&mut self, leaf: &Leaf) -> io::Result<()> {
        // Same shift for every leaf, so this only allocates on the first call
        self.scratch.resize(leaf.voxels().len(), 0);
        leaf.copy_to(&mut self.scratch[..]);

        if self.scratch.iter().all(|&b| b == 0) {
            self.summary.leaves_skipped += 1;
            return Ok(());
        }

        let header = ChunkHeader {
            origin: leaf.origin(),
        };
        self.writer.write_all(&header.encode())?;
        self.writer.write_all(&self.scratch[..])?;
        self.summary.leaves_written += 1;
        self.summary.bytes += CHUNK_HEADER_LEN + self.scratch.len();
        Ok(())
    }
}

/// Write `world` to `writer`. Output depends only on the tree contents, so
/// saving an unchanged world twice yields identical bytes.
pub fn save_to_writer<W, F>(world: &World<F>, writer: &mut W) -> PersistenceResult<SaveSummary>
where
    W: Write,
    F: NodeFactory,
{
    let header = WorldFileHeader::new(world.global_shift(), world.leaf_shift());
    writer.write_all(&header.encode())?;

    let mut scratch = Vec::with_capacity(Leaf::volume_for(world.leaf_shift()));
    let mut chunks = ChunkWriter {
        writer,
        scratch: &mut scratch,
        summary: SaveSummary {
            bytes: HEADER_LEN,
            ..Default::default()
        },
    };
    world.visit(&mut AcceptAll, &mut chunks)?;

    log::debug!(
        "[save_to_writer] {} chunks written, {} empty leaves skipped",
        chunks.summary.leaves_written,
        chunks.summary.leaves_skipped
    );
    Ok(chunks.summary)
}

/// Read and validate just the header
pub fn read_header<R: Read>(reader: &mut R) -> PersistenceResult<WorldFileHeader> {
    let mut bytes = [0u8; HEADER_LEN];
    let found = read_up_to(reader, &mut bytes)?;
    if found < HEADER_LEN {
        return Err(PersistenceError::TruncatedHeader {
            expected: HEADER_LEN,
            found,
        });
    }
    WorldFileHeader::decode(&bytes)
}

/// Build a world from `reader`.
///
/// The file's leaf shift must match `factory`; the global shift is taken
/// from the file. A final chunk cut short is handled per `policy`.
pub fn load_from_reader<R, F>(
    reader: &mut R,
    factory: F,
    policy: TrailingChunkPolicy,
) -> PersistenceResult<World<F>>
where
    R: Read,
    F: NodeFactory,
{
    let header = read_header(reader)?;
    if header.leaf_shift != factory.leaf_shift() {
        return Err(PersistenceError::LeafShiftMismatch {
            file: header.leaf_shift,
            running: factory.leaf_shift(),
        });
    }

    let mut world = World::new(factory, header.global_shift)?;
    let mut chunk = vec![0u8; chunk_len(header.leaf_shift)];
    let mut leaves_read = 0usize;

    loop {
        let found = read_up_to(reader, &mut chunk)?;
        if found == 0 {
            break;
        }
        if found < chunk.len() {
            match policy {
                TrailingChunkPolicy::Ignore => {
                    log::warn!(
                        "[load_from_reader] dropping incomplete trailing chunk ({} of {} bytes)",
                        found,
                        chunk.len()
                    );
                    break;
                }
                TrailingChunkPolicy::Reject => {
                    return Err(PersistenceError::TruncatedChunk {
                        expected: chunk.len(),
                        found,
                    });
                }
            }
        }

        let origin = ChunkHeader::decode(&chunk)?.origin;
        // An unaligned origin would land the payload in the enclosing leaf
        let leaf_mask = (1i32 << header.leaf_shift) - 1;
        if (origin.x | origin.y | origin.z) & leaf_mask != 0 {
            return Err(PersistenceError::MisalignedChunk {
                origin,
                side: leaf_mask + 1,
            });
        }

        let side = world.side();
        let leaf = world
            .leaf_for_indices(origin, true)
            .or_out_of_bounds(origin, side)?;
        leaf.copy_from(&chunk[CHUNK_HEADER_LEN..]);
        leaves_read += 1;
    }

    log::debug!("[load_from_reader] {} chunks read", leaves_read);
    Ok(world)
}

/// Save `world` under `name`, replacing any previous contents
pub fn save<S, F>(world: &World<F>, storage: &S, name: &str) -> PersistenceResult<SaveSummary>
where
    S: WorldStorage,
    F: NodeFactory,
{
    let _span = tracing::debug_span!("world_save", name).entered();

    let mut writer = storage.truncate(name)?;
    let summary = save_to_writer(world, &mut writer)?;
    writer.flush()?;

    log::info!(
        "[save] '{}': {} leaves written, {} skipped, {} bytes",
        name,
        summary.leaves_written,
        summary.leaves_skipped,
        summary.bytes
    );
    Ok(summary)
}

/// Load the world stored under `name`
pub fn load<S, F>(
    storage: &S,
    name: &str,
    factory: F,
    policy: TrailingChunkPolicy,
) -> PersistenceResult<World<F>>
where
    S: WorldStorage,
    F: NodeFactory,
{
    let _span = tracing::debug_span!("world_load", name).entered();

    let mut reader = storage.open(name)?;
    let world = load_from_reader(&mut reader, factory, policy)?;

    log::info!(
        "[load] '{}': global_shift={}, leaf_shift={}",
        name,
        world.global_shift(),
        world.leaf_shift()
    );
    Ok(world)
}

/// Fill `buf` as far as the stream allows; returns the bytes read, which is
/// less than `buf.len()` only at end of stream
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
