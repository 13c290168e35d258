//! Compact position set for a bounded window around a center.

use crate::{
    CoordinateCodec, DensePositions, PositionSet, VoxelPosition, VoxelSetError,
};
use blockbox_containers::KeyIndexMapper;

/// A [`PositionSet`] storing each position as a single compressed `i32` key
/// (see [`CoordinateCodec`]), which limits it to positions within a fixed
/// window around its center.
///
/// The keys are kept densely packed in a vector alongside a hash index from
/// each key to its slot in the vector. Adding appends to the vector, and
/// removing moves the last key into the vacated slot, so adding, removing and
/// looking up positions all take O(1) average time.
#[derive(Clone, Debug)]
pub struct BoundedPositionSet {
    codec: CoordinateCodec,
    keys: KeyIndexMapper<i32>,
}

impl BoundedPositionSet {
    /// Creates an empty set for positions around the given center.
    pub fn new(center: VoxelPosition) -> Self {
        Self::with_capacity(center, 0)
    }

    /// Creates an empty set for positions around the given center, with room
    /// for at least `capacity` positions.
    pub fn with_capacity(center: VoxelPosition, capacity: usize) -> Self {
        Self {
            codec: CoordinateCodec::new(center),
            keys: KeyIndexMapper::with_capacity(capacity),
        }
    }

    /// Creates a set around the given center directly from previously
    /// compressed keys, without decompressing them.
    ///
    /// # Errors
    /// Returns [`VoxelSetError::DuplicateKey`] if a key occurs more than once.
    pub fn from_compressed_keys(
        center: VoxelPosition,
        keys: impl IntoIterator<Item = i32>,
    ) -> Result<Self, VoxelSetError> {
        let keys = KeyIndexMapper::try_from_keys(keys)
            .map_err(|key| VoxelSetError::DuplicateKey { key })?;
        Ok(Self {
            codec: CoordinateCodec::new(center),
            keys,
        })
    }

    /// The codec used to compress positions.
    pub fn codec(&self) -> &CoordinateCodec {
        &self.codec
    }

    /// The center of the storable window.
    pub fn center(&self) -> VoxelPosition {
        self.codec.center()
    }

    /// The compressed keys of all positions, in slot order.
    pub fn compressed_keys(&self) -> &[i32] {
        self.keys.keys_at_indices()
    }

    fn checked_key(&self, position: VoxelPosition) -> Result<i32, VoxelSetError> {
        self.codec.try_compress(position)
    }
}

impl PositionSet for BoundedPositionSet {
    fn add(&mut self, position: VoxelPosition) -> Result<bool, VoxelSetError> {
        let key = self.checked_key(position)?;
        Ok(self.keys.try_push_key(key).is_ok())
    }

    fn remove(&mut self, position: VoxelPosition) -> Result<bool, VoxelSetError> {
        let key = self.checked_key(position)?;
        Ok(self.keys.swap_remove_key_if_present(key).is_some())
    }

    fn contains(&self, position: VoxelPosition) -> bool {
        self.codec.can_store(position) && self.keys.contains_key(self.codec.compress(position))
    }

    fn can_store(&self, position: VoxelPosition) -> bool {
        self.codec.can_store(position)
    }

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn clear(&mut self) {
        self.keys.clear();
    }

    fn positions(&self) -> impl Iterator<Item = VoxelPosition> + '_ {
        self.keys
            .key_at_each_idx()
            .map(|key| self.codec.decompress(key))
    }
}

impl DensePositions for BoundedPositionSet {
    fn position_at_slot(&self, slot: usize) -> Option<VoxelPosition> {
        self.keys
            .get_key_at_idx(slot)
            .map(|key| self.codec.decompress(key))
    }
}

impl PartialEq for BoundedPositionSet {
    fn eq(&self, other: &Self) -> bool {
        self.content_eq(other)
    }
}

impl Eq for BoundedPositionSet {}
