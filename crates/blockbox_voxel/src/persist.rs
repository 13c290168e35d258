//! Serialization of position sets.
//!
//! A [`BoundedPositionSet`] is stored as its compressed keys together with
//! its center:
//!
//! ```json
//! { "positions": [0, 4097], "centerX": 0, "centerY": 64, "centerZ": 0 }
//! ```
//!
//! An [`IncrementalAabb`] is stored as its position set together with its
//! region. The per-axis occupancy is never stored, and is rebuilt from the
//! positions when deserializing:
//!
//! ```json
//! {
//!   "blockPosSet": { "positions": [], "centerX": 0, "centerY": 64, "centerZ": 0 },
//!   "centerX": 0, "centerY": 64, "centerZ": 0,
//!   "xSize": 512, "ySize": 128, "zSize": 512
//! }
//! ```

use crate::{BoundedPositionSet, IncrementalAabb, Region};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PositionSetRecordRef<'a> {
    positions: &'a [i32],
    center_x: i32,
    center_y: i32,
    center_z: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PositionSetRecord {
    positions: Vec<i32>,
    center_x: i32,
    center_y: i32,
    center_z: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IncrementalAabbRecordRef<'a> {
    block_pos_set: &'a BoundedPositionSet,
    center_x: i32,
    center_y: i32,
    center_z: i32,
    x_size: u32,
    y_size: u32,
    z_size: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IncrementalAabbRecord {
    block_pos_set: BoundedPositionSet,
    center_x: i32,
    center_y: i32,
    center_z: i32,
    x_size: u32,
    y_size: u32,
    z_size: u32,
}

impl Serialize for BoundedPositionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let [center_x, center_y, center_z] = self.center();
        PositionSetRecordRef {
            positions: self.compressed_keys(),
            center_x,
            center_y,
            center_z,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BoundedPositionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = PositionSetRecord::deserialize(deserializer)?;
        BoundedPositionSet::from_compressed_keys(
            [record.center_x, record.center_y, record.center_z],
            record.positions,
        )
        .map_err(de::Error::custom)
    }
}

impl Serialize for IncrementalAabb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Region {
            center: [center_x, center_y, center_z],
            extents: [x_size, y_size, z_size],
        } = *self.region();
        IncrementalAabbRecordRef {
            block_pos_set: self.position_set(),
            center_x,
            center_y,
            center_z,
            x_size,
            y_size,
            z_size,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IncrementalAabb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = IncrementalAabbRecord::deserialize(deserializer)?;
        let region = Region::new(
            [record.center_x, record.center_y, record.center_z],
            [record.x_size, record.y_size, record.z_size],
        );
        let n_positions = record.block_pos_set.compressed_keys().len();

        blockbox_log::with_trace_logging!(
            "Rebuilding occupancy of {} positions in region {:?}", n_positions, region;
            IncrementalAabb::from_position_set(region, record.block_pos_set)
        )
        .map_err(|error| {
            blockbox_log::warn!("Rejected stored incremental AABB: {error}");
            de::Error::custom(error)
        })
    }
}
