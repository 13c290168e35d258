//! Dense vector of keys paired with a hash index from each key to its slot.

use anyhow::{Result, anyhow};
use hashbrown::{HashMap, hash_map::Entry};
use rustc_hash::FxBuildHasher;
use std::{
    fmt::{self, Debug},
    hash::{BuildHasher, Hash},
};

/// Map for keeping track of which slot in an underlying [`Vec`] each key
/// occupies.
///
/// Keys are stored contiguously in the order they were pushed, except that
/// removal moves the last key into the slot of the removed one (a swap
/// removal). The slot index of every key is always available in O(1) through
/// the hash index, so keys can be looked up, added and removed without ever
/// shifting the remaining keys.
pub struct KeyIndexMapper<K, S = FxBuildHasher> {
    indices_for_keys: HashMap<K, usize, S>,
    keys_at_indices: Vec<K>,
}

impl<K> KeyIndexMapper<K, FxBuildHasher>
where
    K: Copy + Hash + Eq + Debug,
{
    /// Creates a new mapper with no keys.
    pub fn new() -> Self {
        Self::with_capacity_and_hasher(0, FxBuildHasher)
    }

    /// Creates a new mapper with room for at least `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher)
    }
}

impl<K, S> KeyIndexMapper<K, S>
where
    K: Copy + Hash + Eq + Debug,
    S: BuildHasher + Default,
{
    /// Creates a new mapper with room for at least `capacity` keys, using the
    /// given hasher for the index.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            indices_for_keys: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            keys_at_indices: Vec::with_capacity(capacity),
        }
    }

    /// Creates a mapper holding the keys of the given iterator, with each key
    /// placed in the slot matching its position in the iterator.
    ///
    /// # Errors
    /// Returns the first key that occurs more than once.
    pub fn try_from_keys(key_iter: impl IntoIterator<Item = K>) -> Result<Self, K> {
        let key_iter = key_iter.into_iter();
        let mut mapper = Self::with_capacity_and_hasher(key_iter.size_hint().0, S::default());
        for key in key_iter {
            if mapper.try_push_key(key).is_err() {
                return Err(key);
            }
        }
        Ok(mapper)
    }

    /// The number of keys in the mapper.
    pub fn len(&self) -> usize {
        self.keys_at_indices.len()
    }

    /// Whether the mapper has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys_at_indices.is_empty()
    }

    /// Whether the given key has a slot.
    pub fn contains_key(&self, key: K) -> bool {
        self.indices_for_keys.contains_key(&key)
    }

    /// Returns the slot of the given key.
    ///
    /// # Panics
    /// If the key is absent.
    pub fn idx(&self, key: K) -> usize {
        self.indices_for_keys[&key]
    }

    /// Returns the key in the given slot, or [`None`] if the slot is past the
    /// end of the key vector.
    pub fn get_key_at_idx(&self, idx: usize) -> Option<K> {
        self.keys_at_indices.get(idx).copied()
    }

    /// Returns all keys in slot order.
    pub fn keys_at_indices(&self) -> &[K] {
        &self.keys_at_indices
    }

    /// Returns an iterator over all keys in slot order.
    pub fn key_at_each_idx(&self) -> impl ExactSizeIterator<Item = K> + '_ {
        self.keys_at_indices.iter().copied()
    }

    /// Appends the given key in a new slot at the end.
    ///
    /// # Errors
    /// Returns the slot of the key if it is already present.
    pub fn try_push_key(&mut self, key: K) -> Result<(), usize> {
        match self.indices_for_keys.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(self.keys_at_indices.len());
                self.keys_at_indices.push(key);
                Ok(())
            }
            Entry::Occupied(entry) => Err(*entry.get()),
        }
    }

    /// Appends the given key in a new slot at the end.
    ///
    /// # Panics
    /// If the key is already present.
    pub fn push_key(&mut self, key: K) {
        self.try_push_key(key)
            .expect("Tried to push a key that is already present");
    }

    /// Removes the given key if present. Unless the key was in the last slot,
    /// the key in the last slot is moved into the vacated slot and its index
    /// entry is updated.
    ///
    /// # Returns
    /// The slot the removed key occupied, or [`None`] if the key was absent.
    pub fn swap_remove_key_if_present(&mut self, key: K) -> Option<usize> {
        let idx_of_removed_key = self.indices_for_keys.remove(&key)?;

        let removed_key = self.keys_at_indices.swap_remove(idx_of_removed_key);
        debug_assert_eq!(removed_key, key);

        if let Some(&moved_key) = self.keys_at_indices.get(idx_of_removed_key) {
            self.indices_for_keys.insert(moved_key, idx_of_removed_key);
        }
        Some(idx_of_removed_key)
    }

    /// Removes the given key, see [`Self::swap_remove_key_if_present`].
    ///
    /// # Errors
    /// Returns an error if the key is absent.
    pub fn try_swap_remove_key(&mut self, key: K) -> Result<usize> {
        self.swap_remove_key_if_present(key)
            .ok_or_else(|| anyhow!("Tried to remove absent key {key:?}"))
    }

    /// Removes the given key, see [`Self::try_swap_remove_key`].
    ///
    /// # Panics
    /// If the key is absent.
    pub fn swap_remove_key(&mut self, key: K) -> usize {
        self.try_swap_remove_key(key)
            .expect("Tried to remove a key that is not present")
    }

    /// Removes all keys.
    pub fn clear(&mut self) {
        self.indices_for_keys.clear();
        self.keys_at_indices.clear();
    }
}

impl<K, S> Clone for KeyIndexMapper<K, S>
where
    K: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            indices_for_keys: self.indices_for_keys.clone(),
            keys_at_indices: self.keys_at_indices.clone(),
        }
    }
}

impl<K, S> Default for KeyIndexMapper<K, S>
where
    K: Copy + Hash + Eq + Debug,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_capacity_and_hasher(0, S::default())
    }
}

impl<K: Debug, S> Debug for KeyIndexMapper<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyIndexMapper")
            .field("len", &self.keys_at_indices.len())
            .field("keys_at_indices", &self.keys_at_indices)
            .finish()
    }
}
