//! Axis-aligned boxes of voxel positions.

use crate::VoxelPosition;
use std::fmt;

/// An axis-aligned box of voxel positions, given by its lower and upper
/// corners. Both corners are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelBox {
    corners: [VoxelPosition; 2],
}

impl VoxelBox {
    /// Creates a new box with the given lower and upper corners.
    ///
    /// # Panics
    /// In debug builds, if any component of the lower corner exceeds the
    /// corresponding component of the upper corner.
    pub fn new(lower_corner: VoxelPosition, upper_corner: VoxelPosition) -> Self {
        debug_assert!(
            (0..3).all(|dim| lower_corner[dim] <= upper_corner[dim]),
            "Lower corner {lower_corner:?} exceeds upper corner {upper_corner:?}"
        );
        Self {
            corners: [lower_corner, upper_corner],
        }
    }

    /// Creates the tightest box containing all the given positions, or
    /// [`None`] if there are no positions.
    pub fn bounding_positions(positions: impl IntoIterator<Item = VoxelPosition>) -> Option<Self> {
        let mut positions = positions.into_iter();
        let first = positions.next()?;

        let (lower_corner, upper_corner) =
            positions.fold((first, first), |(lower, upper), position| {
                (
                    [0, 1, 2].map(|dim| lower[dim].min(position[dim])),
                    [0, 1, 2].map(|dim| upper[dim].max(position[dim])),
                )
            });

        Some(Self::new(lower_corner, upper_corner))
    }

    /// The corner with the smallest coordinates.
    pub fn lower_corner(&self) -> VoxelPosition {
        self.corners[0]
    }

    /// The corner with the largest coordinates.
    pub fn upper_corner(&self) -> VoxelPosition {
        self.corners[1]
    }

    /// The number of voxel positions the box spans along each axis.
    pub fn voxel_counts(&self) -> [u64; 3] {
        [0, 1, 2].map(|dim| {
            (i64::from(self.corners[1][dim]) - i64::from(self.corners[0][dim]) + 1) as u64
        })
    }

    /// Whether the box contains the given position.
    pub fn contains(&self, position: VoxelPosition) -> bool {
        (0..3).all(|dim| {
            position[dim] >= self.corners[0][dim] && position[dim] <= self.corners[1][dim]
        })
    }
}

impl fmt::Display for VoxelBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [lx, ly, lz] = self.lower_corner();
        let [ux, uy, uz] = self.upper_corner();
        write!(f, "[{lx}, {ly}, {lz}] to [{ux}, {uy}, {uz}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_no_positions_gives_none() {
        assert_eq!(VoxelBox::bounding_positions([]), None);
    }

    #[test]
    fn bounding_single_position_gives_degenerate_box() {
        let aabb = VoxelBox::bounding_positions([[5, -10, 3]]).unwrap();
        assert_eq!(aabb.lower_corner(), [5, -10, 3]);
        assert_eq!(aabb.upper_corner(), [5, -10, 3]);
        assert_eq!(aabb.voxel_counts(), [1, 1, 1]);
    }

    #[test]
    fn bounding_positions_takes_extremes_per_axis() {
        let aabb = VoxelBox::bounding_positions([[5, 10, 3], [2, 5, 3], [1, 20, 0]]).unwrap();
        assert_eq!(aabb, VoxelBox::new([1, 5, 0], [5, 20, 3]));
        assert_eq!(aabb.voxel_counts(), [5, 16, 4]);
    }

    #[test]
    fn box_contains_positions_on_its_boundary() {
        let aabb = VoxelBox::new([0, 0, 0], [2, 2, 2]);
        assert!(aabb.contains([0, 2, 1]));
        assert!(!aabb.contains([0, 3, 1]));
        assert!(!aabb.contains([-1, 0, 0]));
    }

    #[test]
    fn box_displays_both_corners() {
        let aabb = VoxelBox::new([-1, 0, 2], [3, 4, 5]);
        assert_eq!(aabb.to_string(), "[-1, 0, 2] to [3, 4, 5]");
    }
}
