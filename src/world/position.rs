use std::fmt;

/// Absolute voxel coordinate (i, j, k)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub const ORIGIN: VoxelPos = VoxelPos { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// True if every axis lies in `[0, 2^shift)`
    pub fn is_within_shift(&self, shift: u8) -> bool {
        let side = 1i64 << shift;
        [self.x, self.y, self.z]
            .iter()
            .all(|&v| v >= 0 && (v as i64) < side)
    }

    /// Octant index relative to `origin` for a cube of side `2 * half`.
    /// Bit 0 = x upper half, bit 1 = y, bit 2 = z.
    pub fn octant_in(&self, origin: VoxelPos, half: i32) -> usize {
        let mut octant = 0;
        if self.x - origin.x >= half {
            octant |= 1;
        }
        if self.y - origin.y >= half {
            octant |= 2;
        }
        if self.z - origin.z >= half {
            octant |= 4;
        }
        octant
    }

    /// Origin of the sub-cube selected by `octant`
    pub fn octant_origin(&self, octant: usize, half: i32) -> VoxelPos {
        VoxelPos {
            x: self.x + (octant & 1) as i32 * half,
            y: self.y + ((octant >> 1) & 1) as i32 * half,
            z: self.z + ((octant >> 2) & 1) as i32 * half,
        }
    }
}

impl From<(i32, i32, i32)> for VoxelPos {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for VoxelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
