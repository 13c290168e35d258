//! Spatial regions that bounded voxel structures are sized for.

use crate::VoxelPosition;

/// A 3D spatial dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    X = 0,
    Y = 1,
    Z = 2,
}

/// A box of voxel positions given by a center and the number of voxels the
/// region spans along each axis.
///
/// Along an axis with extent `n`, the region covers the coordinates
/// `center - n/2 .. center - n/2 + n`, where `n/2` rounds down. A coordinate's
/// local offset is its distance from the lower end of that range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub center: VoxelPosition,
    pub extents: [u32; 3],
}

impl Dimension {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Returns the index of the dimension (`0` for `X`, `1` for `Y` and `2` for
    /// `Z`).
    pub const fn idx(self) -> usize {
        self as usize
    }
}

impl Region {
    /// The largest supported extent along any axis. It equals the widest
    /// storable window of [`CoordinateCodec`](crate::CoordinateCodec), so a
    /// larger region could not hold any additional positions.
    pub const MAX_EXTENT: u32 = 4096;

    pub const fn new(center: VoxelPosition, extents: [u32; 3]) -> Self {
        Self { center, extents }
    }

    /// Whether no extent exceeds [`Self::MAX_EXTENT`].
    pub fn has_supported_extents(&self) -> bool {
        self.extents.iter().all(|&extent| extent <= Self::MAX_EXTENT)
    }

    /// Returns the local offset of the given coordinate along the given
    /// dimension, or [`None`] if the coordinate lies outside the region along
    /// that dimension.
    pub fn local_offset(&self, dim: Dimension, coord: i32) -> Option<usize> {
        let extent = self.extents[dim.idx()];
        let offset = i64::from(coord) - i64::from(self.center[dim.idx()])
            + i64::from(extent / 2);
        (0..i64::from(extent))
            .contains(&offset)
            .then_some(offset as usize)
    }

    /// Returns the local offsets of the given position along each dimension,
    /// or [`None`] if the position lies outside the region.
    pub fn local_offsets(&self, position: VoxelPosition) -> Option<[usize; 3]> {
        Some([
            self.local_offset(Dimension::X, position[0])?,
            self.local_offset(Dimension::Y, position[1])?,
            self.local_offset(Dimension::Z, position[2])?,
        ])
    }

    /// Returns the coordinate along the given dimension corresponding to the
    /// given local offset.
    pub fn coordinate_at_offset(&self, dim: Dimension, offset: usize) -> i32 {
        let coord = offset as i64 - i64::from(self.extents[dim.idx()] / 2)
            + i64::from(self.center[dim.idx()]);
        coord as i32
    }

    /// Whether the region contains the given position.
    pub fn contains(&self, position: VoxelPosition) -> bool {
        self.local_offsets(position).is_some()
    }
}
