//! Sets of voxel positions.

mod bounded;
mod naive;

pub use bounded::BoundedPositionSet;
pub use naive::NaivePositionSet;

use crate::{VoxelBox, VoxelPosition, VoxelSetError};

/// A set of voxel positions that may store them in whatever representation
/// it likes. Implementations are not required to be able to store every
/// position; [`PositionSet::can_store`] tells which positions are accepted.
pub trait PositionSet {
    /// Adds the given position to the set.
    ///
    /// # Returns
    /// `true` if the position was not already present.
    ///
    /// # Errors
    /// Returns [`VoxelSetError::OutOfRange`] if the set cannot store the
    /// position.
    fn add(&mut self, position: VoxelPosition) -> Result<bool, VoxelSetError>;

    /// Removes the given position from the set.
    ///
    /// # Returns
    /// `true` if the position was present.
    ///
    /// # Errors
    /// Returns [`VoxelSetError::OutOfRange`] if the set cannot store the
    /// position.
    fn remove(&mut self, position: VoxelPosition) -> Result<bool, VoxelSetError>;

    /// Whether the set holds the given position. Positions the set cannot
    /// store are never contained.
    fn contains(&self, position: VoxelPosition) -> bool;

    /// Whether the set is able to hold the given position.
    fn can_store(&self, position: VoxelPosition) -> bool;

    /// The number of positions in the set.
    fn len(&self) -> usize;

    /// Removes all positions.
    fn clear(&mut self);

    /// Returns an iterator over all positions in the set, in no particular
    /// order.
    fn positions(&self) -> impl Iterator<Item = VoxelPosition> + '_;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls the given closure with each position in the set.
    fn for_each_position(&self, f: &mut impl FnMut(VoxelPosition)) {
        for position in self.positions() {
            f(position);
        }
    }

    /// Adds each of the given positions.
    ///
    /// # Returns
    /// `true` if any of the positions was not already present.
    ///
    /// # Errors
    /// Returns an error on the first position the set cannot store. Positions
    /// before it remain added.
    fn add_all(
        &mut self,
        positions: impl IntoIterator<Item = VoxelPosition>,
    ) -> Result<bool, VoxelSetError> {
        let mut modified = false;
        for position in positions {
            modified |= self.add(position)?;
        }
        Ok(modified)
    }

    /// Removes each of the given positions.
    ///
    /// # Returns
    /// `true` if any of the positions was present.
    ///
    /// # Errors
    /// Returns an error on the first position the set cannot store. Positions
    /// before it remain removed.
    fn remove_all(
        &mut self,
        positions: impl IntoIterator<Item = VoxelPosition>,
    ) -> Result<bool, VoxelSetError> {
        let mut modified = false;
        for position in positions {
            modified |= self.remove(position)?;
        }
        Ok(modified)
    }

    /// Removes every position for which the given predicate returns `false`.
    ///
    /// # Returns
    /// `true` if any position was removed.
    fn retain(
        &mut self,
        mut keep: impl FnMut(VoxelPosition) -> bool,
    ) -> Result<bool, VoxelSetError> {
        let discarded: Vec<_> = self.positions().filter(|&position| !keep(position)).collect();
        self.remove_all(discarded)
    }

    /// Whether every position of the other set is in this set.
    fn contains_all(&self, other: &impl PositionSet) -> bool {
        other.positions().all(|position| self.contains(position))
    }

    /// Whether the two sets hold exactly the same positions, regardless of how
    /// they store them.
    fn content_eq(&self, other: &impl PositionSet) -> bool {
        self.len() == other.len() && self.contains_all(other)
    }
}

/// A [`PositionSet`] that can produce the tightest axis-aligned box
/// containing all its positions.
pub trait PositionSetAabb: PositionSet {
    /// Returns the bounding box of all positions in the set, or [`None`] if
    /// the set is empty.
    fn bounding_box(&self) -> Option<VoxelBox>;
}
