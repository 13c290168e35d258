//! Compact sets of bounded voxel positions with incrementally maintained
//! axis-aligned bounding boxes.

pub mod aabb;
pub mod codec;
pub mod position_set;
pub mod region;
pub mod relaxed;
pub mod voxel_box;

#[cfg(feature = "serde")]
mod persist;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

pub use aabb::IncrementalAabb;
pub use codec::CoordinateCodec;
pub use position_set::{BoundedPositionSet, NaivePositionSet, PositionSet, PositionSetAabb};
pub use region::{Dimension, Region};
pub use relaxed::{DensePositions, RelaxedPositions, for_each_relaxed};
pub use voxel_box::VoxelBox;

use blockbox_containers::OccupancyError;
use thiserror::Error;

/// Integer coordinates of a voxel.
pub type VoxelPosition = [i32; 3];

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoxelSetError {
    #[error("Position {position:?} is outside the storable window around center {center:?}")]
    OutOfRange {
        position: VoxelPosition,
        center: VoxelPosition,
    },

    #[error(transparent)]
    Occupancy(#[from] OccupancyError),

    #[error("Compressed key {key} occurs more than once")]
    DuplicateKey { key: i32 },

    #[error("Position set center {set_center:?} does not match region center {region_center:?}")]
    CenterMismatch {
        set_center: VoxelPosition,
        region_center: VoxelPosition,
    },

    #[error("Region extents {extents:?} exceed the maximum extent {}", Region::MAX_EXTENT)]
    RegionTooLarge { extents: [u32; 3] },
}
