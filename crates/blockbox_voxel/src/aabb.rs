//! Position sets with an incrementally maintained bounding box.

use crate::{
    BoundedPositionSet, DensePositions, Dimension, PositionSet, PositionSetAabb, Region, VoxelBox,
    VoxelPosition, VoxelSetError,
};
use blockbox_containers::OccupancyTracker;

/// A [`BoundedPositionSet`] that keeps track of the bounding box of its
/// positions as they are added and removed.
///
/// For each axis, an [`OccupancyTracker`] counts how many positions have each
/// coordinate within the [`Region`] the set was created for. The bounding box
/// is then given directly by the smallest and largest occupied coordinate
/// along each axis.
///
/// A position can only be stored if it lies both within the storable window
/// of the position set and within the region.
#[derive(Clone, Debug)]
pub struct IncrementalAabb {
    region: Region,
    positions: BoundedPositionSet,
    trackers: [OccupancyTracker; 3],
}

impl IncrementalAabb {
    /// Creates an empty set for positions in the given region. The position
    /// set is centered on the region center.
    ///
    /// # Panics
    /// If any region extent exceeds [`Region::MAX_EXTENT`].
    pub fn new(region: Region) -> Self {
        assert!(
            region.has_supported_extents(),
            "Region extents {:?} exceed the maximum extent {}",
            region.extents,
            Region::MAX_EXTENT
        );
        Self {
            region,
            positions: BoundedPositionSet::new(region.center),
            trackers: Self::create_trackers(&region),
        }
    }

    /// Creates an empty set for positions in the given region, like
    /// [`Self::new`].
    ///
    /// # Errors
    /// Returns [`VoxelSetError::RegionTooLarge`] if any region extent exceeds
    /// [`Region::MAX_EXTENT`].
    pub fn try_new(region: Region) -> Result<Self, VoxelSetError> {
        Self::from_position_set(region, BoundedPositionSet::new(region.center))
    }

    /// Creates a set for positions in the given region, holding the positions
    /// of the given set. The occupancy along each axis is rebuilt by visiting
    /// every position.
    ///
    /// # Errors
    /// Returns an error if
    /// - any region extent exceeds [`Region::MAX_EXTENT`]
    ///   ([`VoxelSetError::RegionTooLarge`]).
    /// - the position set is not centered on the region center
    ///   ([`VoxelSetError::CenterMismatch`]).
    /// - any of the positions lies outside the region
    ///   ([`VoxelSetError::OutOfRange`]).
    pub fn from_position_set(
        region: Region,
        positions: BoundedPositionSet,
    ) -> Result<Self, VoxelSetError> {
        if !region.has_supported_extents() {
            return Err(VoxelSetError::RegionTooLarge {
                extents: region.extents,
            });
        }
        if positions.center() != region.center {
            return Err(VoxelSetError::CenterMismatch {
                set_center: positions.center(),
                region_center: region.center,
            });
        }

        let mut trackers = Self::create_trackers(&region);

        for position in positions.positions() {
            let offsets = region
                .local_offsets(position)
                .ok_or(VoxelSetError::OutOfRange {
                    position,
                    center: region.center,
                })?;
            for (tracker, offset) in trackers.iter_mut().zip(offsets) {
                tracker.increment(offset)?;
            }
        }

        Ok(Self {
            region,
            positions,
            trackers,
        })
    }

    /// The region the set was created for.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// The underlying position set.
    pub fn position_set(&self) -> &BoundedPositionSet {
        &self.positions
    }

    /// Consumes the set and returns the underlying position set.
    pub fn into_position_set(self) -> BoundedPositionSet {
        self.positions
    }

    /// The occupancy tracker for the given axis.
    pub fn tracker(&self, dim: Dimension) -> &OccupancyTracker {
        &self.trackers[dim.idx()]
    }

    fn create_trackers(region: &Region) -> [OccupancyTracker; 3] {
        region
            .extents
            .map(|extent| OccupancyTracker::new(extent as usize))
    }

    fn checked_offsets(&self, position: VoxelPosition) -> Result<[usize; 3], VoxelSetError> {
        self.region
            .local_offsets(position)
            .filter(|_| self.positions.can_store(position))
            .ok_or(VoxelSetError::OutOfRange {
                position,
                center: self.region.center,
            })
    }
}

impl PositionSet for IncrementalAabb {
    fn add(&mut self, position: VoxelPosition) -> Result<bool, VoxelSetError> {
        let offsets = self.checked_offsets(position)?;

        if !self.positions.add(position)? {
            return Ok(false);
        }
        for (tracker, offset) in self.trackers.iter_mut().zip(offsets) {
            tracker.increment(offset)?;
        }
        Ok(true)
    }

    fn remove(&mut self, position: VoxelPosition) -> Result<bool, VoxelSetError> {
        let offsets = self.checked_offsets(position)?;

        if !self.positions.remove(position)? {
            return Ok(false);
        }
        for (tracker, offset) in self.trackers.iter_mut().zip(offsets) {
            tracker.decrement(offset)?;
        }
        Ok(true)
    }

    fn contains(&self, position: VoxelPosition) -> bool {
        self.positions.contains(position)
    }

    fn can_store(&self, position: VoxelPosition) -> bool {
        self.checked_offsets(position).is_ok()
    }

    fn len(&self) -> usize {
        self.positions.len()
    }

    fn clear(&mut self) {
        if self.positions.is_empty() {
            return;
        }
        blockbox_log::trace!(
            "Clearing {} positions from incremental AABB around {:?}",
            self.positions.len(),
            self.region.center
        );
        self.positions.clear();
        for tracker in &mut self.trackers {
            tracker.clear();
        }
    }

    fn positions(&self) -> impl Iterator<Item = VoxelPosition> + '_ {
        self.positions.positions()
    }
}

impl PositionSetAabb for IncrementalAabb {
    fn bounding_box(&self) -> Option<VoxelBox> {
        let mut lower_corner = [0; 3];
        let mut upper_corner = [0; 3];

        for dim in Dimension::ALL {
            let tracker = &self.trackers[dim.idx()];
            lower_corner[dim.idx()] = self.region.coordinate_at_offset(dim, tracker.front()?);
            upper_corner[dim.idx()] = self.region.coordinate_at_offset(dim, tracker.back()?);
        }

        Some(VoxelBox::new(lower_corner, upper_corner))
    }
}

impl DensePositions for IncrementalAabb {
    fn position_at_slot(&self, slot: usize) -> Option<VoxelPosition> {
        self.positions.position_at_slot(slot)
    }
}

impl PartialEq for IncrementalAabb {
    fn eq(&self, other: &Self) -> bool {
        self.content_eq(other)
    }
}

impl Eq for IncrementalAabb {}
