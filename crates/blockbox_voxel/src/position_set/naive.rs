//! Reference position set without any storage restrictions.

use crate::{PositionSet, PositionSetAabb, VoxelBox, VoxelPosition, VoxelSetError};
use blockbox_containers::hash_set::HashSet;

/// A [`PositionSet`] backed by a plain hash set of full positions. It can
/// store any position, and computes its bounding box by visiting every
/// position.
///
/// Mainly useful as a reference to check the compact implementations
/// against.
#[derive(Clone, Debug, Default)]
pub struct NaivePositionSet {
    positions: HashSet<VoxelPosition>,
}

impl NaivePositionSet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PositionSet for NaivePositionSet {
    fn add(&mut self, position: VoxelPosition) -> Result<bool, VoxelSetError> {
        Ok(self.positions.insert(position))
    }

    fn remove(&mut self, position: VoxelPosition) -> Result<bool, VoxelSetError> {
        Ok(self.positions.remove(&position))
    }

    fn contains(&self, position: VoxelPosition) -> bool {
        self.positions.contains(&position)
    }

    fn can_store(&self, _position: VoxelPosition) -> bool {
        true
    }

    fn len(&self) -> usize {
        self.positions.len()
    }

    fn clear(&mut self) {
        self.positions.clear();
    }

    fn positions(&self) -> impl Iterator<Item = VoxelPosition> + '_ {
        self.positions.iter().copied()
    }
}

impl PositionSetAabb for NaivePositionSet {
    fn bounding_box(&self) -> Option<VoxelBox> {
        VoxelBox::bounding_positions(self.positions())
    }
}

impl PartialEq for NaivePositionSet {
    fn eq(&self, other: &Self) -> bool {
        self.positions == other.positions
    }
}

impl Eq for NaivePositionSet {}

impl FromIterator<VoxelPosition> for NaivePositionSet {
    fn from_iter<I: IntoIterator<Item = VoxelPosition>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}
