#![no_main]

use blockbox::voxel::fuzzing::{
    ArbitraryOperation, ArbitraryRegion, fuzz_test_incremental_aabb_against_naive,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (ArbitraryRegion, Vec<ArbitraryOperation>)| {
    fuzz_test_incremental_aabb_against_naive(input);
});
