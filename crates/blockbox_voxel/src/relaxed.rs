//! Iteration over shared position sets without holding a lock for the whole
//! traversal.

use crate::VoxelPosition;
use parking_lot::RwLock;

/// A position container whose positions occupy the contiguous slots
/// `0..len`, so that they can be visited by slot index.
pub trait DensePositions {
    /// Returns the position in the given slot, or [`None`] if the slot is
    /// past the end.
    fn position_at_slot(&self, slot: usize) -> Option<VoxelPosition>;
}

/// Iterator over the positions of a container behind a [`RwLock`] that only
/// holds the read lock while fetching each individual position.
///
/// Writers may therefore modify the container between any two steps of the
/// iteration. When that happens, some positions may be visited twice or
/// skipped, but every yielded position was present at the moment it was
/// read. Iteration ends at the first slot found to be past the end.
#[derive(Debug)]
pub struct RelaxedPositions<'a, S> {
    shared: &'a RwLock<S>,
    slot: usize,
}

impl<'a, S: DensePositions> RelaxedPositions<'a, S> {
    pub fn new(shared: &'a RwLock<S>) -> Self {
        Self { shared, slot: 0 }
    }
}

impl<S: DensePositions> Iterator for RelaxedPositions<'_, S> {
    type Item = VoxelPosition;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.shared.read().position_at_slot(self.slot)?;
        self.slot += 1;
        Some(position)
    }
}

/// Calls the given closure with each position of the shared container,
/// taking the read lock separately for each position. See
/// [`RelaxedPositions`] for what this means under concurrent modification.
pub fn for_each_relaxed<S: DensePositions>(shared: &RwLock<S>, mut f: impl FnMut(VoxelPosition)) {
    for position in RelaxedPositions::new(shared) {
        f(position);
    }
}
