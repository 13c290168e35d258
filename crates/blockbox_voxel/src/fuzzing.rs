//! Fuzzing of incremental bounding boxes against brute-force recomputation.

use crate::{
    IncrementalAabb, NaivePositionSet, PositionSet, PositionSetAabb, Region, VoxelPosition,
};
use arbitrary::{Arbitrary, Result, Unstructured};
use std::mem;

const MAX_CENTER_COORD: i32 = 1 << 20;
const MAX_EXTENT: u32 = 64;
const MAX_OFFSET: i32 = 40;

#[derive(Clone, Copy, Debug)]
pub struct ArbitraryRegion(pub Region);

/// A position given as an offset from the center of the fuzzed region. The
/// offsets reach somewhat beyond the largest region extent, so that some
/// positions fall outside the region.
#[derive(Clone, Copy, Debug)]
pub struct ArbitraryOffset(pub VoxelPosition);

#[derive(Clone, Copy, Debug, Arbitrary)]
pub enum ArbitraryOperation {
    Add(ArbitraryOffset),
    Remove(ArbitraryOffset),
    Clear,
}

impl Arbitrary<'_> for ArbitraryRegion {
    fn arbitrary(u: &mut Unstructured<'_>) -> Result<Self> {
        let center = [
            u.int_in_range(-MAX_CENTER_COORD..=MAX_CENTER_COORD)?,
            u.int_in_range(-MAX_CENTER_COORD..=MAX_CENTER_COORD)?,
            u.int_in_range(-MAX_CENTER_COORD..=MAX_CENTER_COORD)?,
        ];
        let extents = [
            u.int_in_range(1..=MAX_EXTENT)?,
            u.int_in_range(1..=MAX_EXTENT)?,
            u.int_in_range(1..=MAX_EXTENT)?,
        ];
        Ok(Self(Region::new(center, extents)))
    }

    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        let size = 3 * mem::size_of::<i32>() + 3 * mem::size_of::<u32>();
        (size, Some(size))
    }
}

impl Arbitrary<'_> for ArbitraryOffset {
    fn arbitrary(u: &mut Unstructured<'_>) -> Result<Self> {
        Ok(Self([
            u.int_in_range(-MAX_OFFSET..=MAX_OFFSET)?,
            u.int_in_range(-MAX_OFFSET..=MAX_OFFSET)?,
            u.int_in_range(-MAX_OFFSET..=MAX_OFFSET)?,
        ]))
    }

    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        let size = 3 * mem::size_of::<i32>();
        (size, Some(size))
    }
}

pub fn fuzz_test_incremental_aabb_against_naive(
    (region, operations): (ArbitraryRegion, Vec<ArbitraryOperation>),
) {
    let region = region.0;
    let mut aabb = IncrementalAabb::new(region);
    let mut naive = NaivePositionSet::new();

    let to_position =
        |offset: ArbitraryOffset| [0, 1, 2].map(|dim| region.center[dim] + offset.0[dim]);

    for operation in operations {
        match operation {
            ArbitraryOperation::Add(offset) => {
                let position = to_position(offset);
                let result = aabb.add(position);
                if region.contains(position) {
                    assert_eq!(result, naive.add(position), "Adding {position:?}");
                } else {
                    assert!(result.is_err(), "Added {position:?} outside {region:?}");
                }
            }
            ArbitraryOperation::Remove(offset) => {
                let position = to_position(offset);
                let result = aabb.remove(position);
                if region.contains(position) {
                    assert_eq!(result, naive.remove(position), "Removing {position:?}");
                } else {
                    assert!(result.is_err(), "Removed {position:?} outside {region:?}");
                }
            }
            ArbitraryOperation::Clear => {
                aabb.clear();
                naive.clear();
            }
        }
        assert_eq!(aabb.len(), naive.len());
        assert_eq!(aabb.bounding_box(), naive.bounding_box());
    }

    assert!(aabb.content_eq(&naive));
}
