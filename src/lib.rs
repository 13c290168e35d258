//! Compact voxel position sets with incrementally maintained bounding boxes.

pub mod build;

pub use blockbox_containers as containers;
pub use blockbox_io as io;
pub use blockbox_log as log;
pub use blockbox_voxel as voxel;
