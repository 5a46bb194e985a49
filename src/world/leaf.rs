//! Dense leaf - a cube of `2^leaf_shift` voxels per side stored as raw bytes.
//!
//! Local offsets are laid out with x fastest, then y, then z:
//! `offset = (dz << 2*shift) | (dy << shift) | dx`.

use super::VoxelPos;

#[derive(Clone)]
pub struct Leaf {
    origin: VoxelPos,
    shift: u8,
    voxels: Box<[u8]>,
}

impl Leaf {
    /// Create an all-empty leaf. `origin` must be aligned to `2^shift`.
    pub fn new(origin: VoxelPos, shift: u8) -> Self {
        debug_assert!(
            [origin.x, origin.y, origin.z]
                .iter()
                .all(|v| v & ((1 << shift) - 1) == 0),
            "leaf origin {} not aligned to side {}",
            origin,
            1 << shift
        );
        Self {
            origin,
            shift,
            voxels: vec![0u8; Self::volume_for(shift)].into_boxed_slice(),
        }
    }

    /// Number of voxels in a leaf of the given shift
    pub const fn volume_for(shift: u8) -> usize {
        1usize << (3 * shift as usize)
    }

    pub fn origin(&self) -> VoxelPos {
        self.origin
    }

    pub fn shift(&self) -> u8 {
        self.shift
    }

    pub fn side(&self) -> i32 {
        1 << self.shift
    }

    #[inline]
    fn local_index(&self, pos: VoxelPos) -> usize {
        let mask = (1 << self.shift) - 1;
        let dx = ((pos.x - self.origin.x) & mask) as usize;
        let dy = ((pos.y - self.origin.y) & mask) as usize;
        let dz = ((pos.z - self.origin.z) & mask) as usize;
        let s = self.shift as usize;
        (dz << (2 * s)) | (dy << s) | dx
    }

    pub fn get(&self, pos: VoxelPos) -> u8 {
        self.voxels[self.local_index(pos)]
    }

    pub fn set(&mut self, pos: VoxelPos, value: u8) {
        let index = self.local_index(pos);
        self.voxels[index] = value;
    }

    /// Every backing byte in offset order
    pub fn voxels(&self) -> &[u8] {
        &self.voxels
    }

    pub fn voxels_mut(&mut self) -> &mut [u8] {
        &mut self.voxels
    }

    /// True if no voxel has been set to a non-zero value
    pub fn is_empty(&self) -> bool {
        self.voxels.iter().all(|&v| v == 0)
    }

    /// Copy the payload into `out`, which must be exactly one leaf volume long
    pub fn copy_to(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.voxels);
    }

    /// Overwrite the payload from `src`, which must be exactly one leaf volume long
    pub fn copy_from(&mut self, src: &[u8]) {
        self.voxels.copy_from_slice(src);
    }
}

impl std::fmt::Debug for Leaf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Leaf")
            .field("origin", &self.origin)
            .field("shift", &self.shift)
            .field("non_empty", &self.voxels.iter().filter(|&&v| v != 0).count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_leaf_is_empty() {
        let leaf = Leaf::new(VoxelPos::new(16, 0, 32), 4);
        assert_eq!(leaf.voxels().len(), 4096);
        assert_eq!(leaf.side(), 16);
        assert!(leaf.is_empty());
    }

    #[test]
    fn test_set_get_is_bijective() {
        let origin = VoxelPos::new(8, 16, 24);
        let mut leaf = Leaf::new(origin, 3);
        let mut value = 1u8;
        for z in 0..8 {
            for y in 0..8 {
                for x in 0..8 {
                    leaf.set(VoxelPos::new(origin.x + x, origin.y + y, origin.z + z), value);
                    value = value.wrapping_add(1).max(1);
                }
            }
        }

        // Every slot written exactly once means no two coordinates share an offset
        assert!(leaf.voxels().iter().all(|&v| v != 0));

        let mut value = 1u8;
        for z in 0..8 {
            for y in 0..8 {
                for x in 0..8 {
                    let pos = VoxelPos::new(origin.x + x, origin.y + y, origin.z + z);
                    assert_eq!(leaf.get(pos), value, "mismatch at {}", pos);
                    value = value.wrapping_add(1).max(1);
                }
            }
        }
    }

    #[test]
    fn test_offset_layout_x_fastest() {
        let mut leaf = Leaf::new(VoxelPos::ORIGIN, 2);
        leaf.set(VoxelPos::new(1, 0, 0), 1);
        leaf.set(VoxelPos::new(0, 1, 0), 2);
        leaf.set(VoxelPos::new(0, 0, 1), 3);
        assert_eq!(leaf.voxels()[1], 1);
        assert_eq!(leaf.voxels()[4], 2);
        assert_eq!(leaf.voxels()[16], 3);
    }

    #[test]
    fn test_copy_roundtrip() {
        let mut source = Leaf::new(VoxelPos::ORIGIN, 2);
        source.set(VoxelPos::new(3, 2, 1), 42);

        let mut buffer = vec![0u8; Leaf::volume_for(2)];
        source.copy_to(&mut buffer);

        let mut target = Leaf::new(VoxelPos::ORIGIN, 2);
        target.copy_from(&buffer);
        assert_eq!(target.get(VoxelPos::new(3, 2, 1)), 42);
        assert!(!target.is_empty());
    }
}
