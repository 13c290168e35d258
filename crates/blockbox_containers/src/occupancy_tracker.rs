//! Per-key occupancy counts with constant-time access to the smallest and
//! largest occupied key.

use std::iter::FusedIterator;
use thiserror::Error;

/// Tracks how many items currently occupy each key in the range
/// `0..capacity`, and which occupied keys are the smallest and largest.
///
/// Every occupied key is linked into an ascending doubly linked list. The list
/// nodes live in a flat array indexed by key, with links stored as indices
/// into the same array, so the front and back of the list (the minimum and
/// maximum occupied key) can be read directly.
///
/// Unlinking a key is always O(1), as is linking a key that becomes the new
/// front or back. Linking a key that falls strictly between the current front
/// and back requires scanning down from the key to its nearest occupied
/// neighbor, which costs time proportional to that distance.
#[derive(Clone, Debug)]
pub struct OccupancyTracker {
    nodes: Vec<OccupancyNode>,
    front: u32,
    back: u32,
    total_count: usize,
}

/// Errors from invalid [`OccupancyTracker`] updates. All of these indicate a
/// logic error in the calling code.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OccupancyError {
    #[error("Key {key} is outside the occupancy tracker capacity {capacity}")]
    InvalidKey { key: usize, capacity: usize },

    #[error("Tried to decrement an empty occupancy tracker")]
    EmptyStructure,

    #[error("Tried to decrement key {key}, which has no occupancy")]
    InvalidValue { key: usize },
}

/// Iterator over the occupied keys of an [`OccupancyTracker`] in ascending
/// order.
#[derive(Clone, Debug)]
pub struct OccupiedKeys<'a> {
    nodes: &'a [OccupancyNode],
    current: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OccupancyNode {
    count: u32,
    prev: u32,
    next: u32,
}

const NIL: u32 = u32::MAX;

impl OccupancyTracker {
    /// Creates a new tracker for the keys `0..capacity`, with no occupancy.
    ///
    /// # Panics
    /// If `capacity` does not fit in a `u32` link (`capacity >= u32::MAX`).
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity < NIL as usize,
            "Occupancy tracker capacity {capacity} is too large"
        );
        Self {
            nodes: vec![OccupancyNode::UNLINKED; capacity],
            front: NIL,
            back: NIL,
            total_count: 0,
        }
    }

    /// The number of keys the tracker covers.
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// The sum of the occupancy counts of all keys.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Whether no key is occupied.
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// The smallest occupied key, or [`None`] if no key is occupied.
    pub fn front(&self) -> Option<usize> {
        link_to_key(self.front)
    }

    /// The largest occupied key, or [`None`] if no key is occupied.
    pub fn back(&self) -> Option<usize> {
        link_to_key(self.back)
    }

    /// Returns the occupancy count of the given key.
    ///
    /// # Errors
    /// Returns [`OccupancyError::InvalidKey`] if the key is outside the
    /// capacity.
    pub fn count(&self, key: usize) -> Result<u32, OccupancyError> {
        let idx = self.checked_idx(key)?;
        Ok(self.node(idx).count)
    }

    /// Returns an iterator over all occupied keys in ascending order.
    pub fn occupied_keys(&self) -> OccupiedKeys<'_> {
        OccupiedKeys {
            nodes: &self.nodes,
            current: self.front,
        }
    }

    /// Increases the occupancy of the given key by one, linking the key into
    /// the occupied list if it was unoccupied.
    ///
    /// # Errors
    /// Returns [`OccupancyError::InvalidKey`] if the key is outside the
    /// capacity.
    pub fn increment(&mut self, key: usize) -> Result<(), OccupancyError> {
        let idx = self.checked_idx(key)?;

        if self.node(idx).count == 0 {
            self.link(idx);
        }
        self.node_mut(idx).count += 1;
        self.total_count += 1;

        Ok(())
    }

    /// Decreases the occupancy of the given key by one, unlinking the key from
    /// the occupied list if it becomes unoccupied.
    ///
    /// # Errors
    /// Returns an error if
    /// - the tracker is empty ([`OccupancyError::EmptyStructure`]).
    /// - the key is outside the capacity ([`OccupancyError::InvalidKey`]).
    /// - the key is not occupied ([`OccupancyError::InvalidValue`]).
    pub fn decrement(&mut self, key: usize) -> Result<(), OccupancyError> {
        if self.is_empty() {
            return Err(OccupancyError::EmptyStructure);
        }
        let idx = self.checked_idx(key)?;

        match self.node(idx).count {
            0 => return Err(OccupancyError::InvalidValue { key }),
            1 => {
                self.unlink(idx);
                self.node_mut(idx).count = 0;
            }
            _ => {
                self.node_mut(idx).count -= 1;
            }
        }
        self.total_count -= 1;

        Ok(())
    }

    /// Removes all occupancy. Takes time proportional to the capacity.
    pub fn clear(&mut self) {
        self.nodes.fill(OccupancyNode::UNLINKED);
        self.front = NIL;
        self.back = NIL;
        self.total_count = 0;
    }

    fn checked_idx(&self, key: usize) -> Result<u32, OccupancyError> {
        if key < self.capacity() {
            // The capacity is asserted to fit in a `u32` on construction
            Ok(key as u32)
        } else {
            Err(OccupancyError::InvalidKey {
                key,
                capacity: self.capacity(),
            })
        }
    }

    fn link(&mut self, idx: u32) {
        if self.front == NIL {
            self.front = idx;
            self.back = idx;
        } else if idx < self.front {
            let old_front = self.front;
            self.node_mut(idx).next = old_front;
            self.node_mut(old_front).prev = idx;
            self.front = idx;
        } else if idx > self.back {
            let old_back = self.back;
            self.node_mut(idx).prev = old_back;
            self.node_mut(old_back).next = idx;
            self.back = idx;
        } else {
            // `front < idx < back` here, so the scan stops at `front` at the
            // latest
            let mut prev = idx - 1;
            while self.node(prev).count == 0 {
                prev -= 1;
            }
            let next = self.node(prev).next;

            let node = self.node_mut(idx);
            node.prev = prev;
            node.next = next;

            self.node_mut(prev).next = idx;
            self.node_mut(next).prev = idx;
        }
    }

    fn unlink(&mut self, idx: u32) {
        let OccupancyNode { prev, next, .. } = *self.node(idx);

        if prev == NIL {
            self.front = next;
        } else {
            self.node_mut(prev).next = next;
        }

        if next == NIL {
            self.back = prev;
        } else {
            self.node_mut(next).prev = prev;
        }

        let node = self.node_mut(idx);
        node.prev = NIL;
        node.next = NIL;
    }

    fn node(&self, idx: u32) -> &OccupancyNode {
        &self.nodes[idx as usize]
    }

    fn node_mut(&mut self, idx: u32) -> &mut OccupancyNode {
        &mut self.nodes[idx as usize]
    }
}

impl OccupancyNode {
    const UNLINKED: Self = Self {
        count: 0,
        prev: NIL,
        next: NIL,
    };
}

impl Iterator for OccupiedKeys<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let key = link_to_key(self.current)?;
        self.current = self.nodes[key].next;
        Some(key)
    }
}

impl FusedIterator for OccupiedKeys<'_> {}

fn link_to_key(link: u32) -> Option<usize> {
    (link != NIL).then_some(link as usize)
}
