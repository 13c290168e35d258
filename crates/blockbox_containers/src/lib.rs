//! Containers and data structures.

mod key_index_mapper;
mod occupancy_tracker;

pub use key_index_mapper::KeyIndexMapper;
pub use occupancy_tracker::{OccupancyError, OccupancyTracker, OccupiedKeys};

pub use hashbrown::hash_set;
