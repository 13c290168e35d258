//! Packing of bounded voxel positions into single integer keys.

use crate::{VoxelPosition, VoxelSetError};
use std::ops::RangeInclusive;

/// Packs voxel positions near a fixed center into `i32` keys.
///
/// Each position is stored as its signed offset from the center, with the
/// three offsets occupying disjoint bit fields of the key:
///
/// | Bits    | Field    | Offset range     |
/// |---------|----------|------------------|
/// | 0..12   | x offset | `-2048..=2047`   |
/// | 12..20  | y offset | `-128..=127`     |
/// | 20..32  | z offset | `-2048..=2047`   |
///
/// The packing is a bijection between the storable window and the full `i32`
/// range, so every `i32` is the key of exactly one storable position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoordinateCodec {
    center: VoxelPosition,
}

const X_BITS: u32 = 12;
const Y_BITS: u32 = 8;
const Z_BITS: u32 = 12;

const Y_SHIFT: u32 = X_BITS;
const Z_SHIFT: u32 = X_BITS + Y_BITS;

const X_MASK: u32 = (1 << X_BITS) - 1;
const Y_MASK: u32 = (1 << Y_BITS) - 1;
const Z_MASK: u32 = (1 << Z_BITS) - 1;

const _: () = assert!(X_BITS + Y_BITS + Z_BITS == i32::BITS);

impl CoordinateCodec {
    /// The offsets from the center that can be stored along each axis.
    pub const OFFSET_RANGES: [RangeInclusive<i32>; 3] = [
        offset_range(X_BITS),
        offset_range(Y_BITS),
        offset_range(Z_BITS),
    ];

    /// Creates a codec for positions around the given center.
    pub const fn new(center: VoxelPosition) -> Self {
        Self { center }
    }

    /// The center the stored offsets are relative to.
    pub const fn center(&self) -> VoxelPosition {
        self.center
    }

    /// Whether the offset of the given position from the center fits in the
    /// bit field of each axis.
    pub fn can_store(&self, position: VoxelPosition) -> bool {
        (0..3).all(|dim| {
            let offset = i64::from(position[dim]) - i64::from(self.center[dim]);
            let range = &Self::OFFSET_RANGES[dim];
            offset >= i64::from(*range.start()) && offset <= i64::from(*range.end())
        })
    }

    /// Packs the given position into a key, after checking that it can be
    /// stored.
    ///
    /// # Errors
    /// Returns [`VoxelSetError::OutOfRange`] if the position is outside the
    /// storable window.
    pub fn try_compress(&self, position: VoxelPosition) -> Result<i32, VoxelSetError> {
        if self.can_store(position) {
            Ok(self.compress(position))
        } else {
            Err(VoxelSetError::OutOfRange {
                position,
                center: self.center,
            })
        }
    }

    /// Packs the given position into a key. The result is only meaningful for
    /// positions accepted by [`Self::can_store`].
    pub fn compress(&self, position: VoxelPosition) -> i32 {
        debug_assert!(self.can_store(position));

        let [x, y, z] = position;
        let [cx, cy, cz] = self.center;

        let x_bits = (x.wrapping_sub(cx) as u32) & X_MASK;
        let y_bits = (y.wrapping_sub(cy) as u32) & Y_MASK;
        let z_bits = (z.wrapping_sub(cz) as u32) & Z_MASK;

        (x_bits | (y_bits << Y_SHIFT) | (z_bits << Z_SHIFT)) as i32
    }

    /// Unpacks the position stored in the given key.
    pub fn decompress(&self, key: i32) -> VoxelPosition {
        // Shift each field up against the sign bit and arithmetically back
        // down to sign-extend it
        let x_offset = (key << (i32::BITS - X_BITS)) >> (i32::BITS - X_BITS);
        let y_offset = (key << (i32::BITS - Z_SHIFT)) >> (i32::BITS - Y_BITS);
        let z_offset = key >> Z_SHIFT;

        let [cx, cy, cz] = self.center;
        [
            cx.wrapping_add(x_offset),
            cy.wrapping_add(y_offset),
            cz.wrapping_add(z_offset),
        ]
    }
}

const fn offset_range(bits: u32) -> RangeInclusive<i32> {
    let half = 1 << (bits - 1);
    -half..=(half - 1)
}
