use blockbox::voxel::{
    BoundedPositionSet, IncrementalAabb, NaivePositionSet, PositionSet, PositionSetAabb, Region,
    VoxelPosition,
};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

const REGION: Region = Region::new([0, 64, 0], [512, 256, 512]);

fn shell_positions(radius: i32) -> Vec<VoxelPosition> {
    let mut positions = Vec::new();
    for x in -radius..=radius {
        for y in -radius..=radius {
            for z in -radius..=radius {
                let r_squared = x * x + y * y + z * z;
                if (radius - 1).pow(2) < r_squared && r_squared <= radius.pow(2) {
                    positions.push([x, 64 + y, z]);
                }
            }
        }
    }
    positions
}

fn slab_positions() -> Vec<VoxelPosition> {
    let mut positions = Vec::new();
    for z in -200..200 {
        for y in -64..64 {
            for x in -20..20 {
                positions.push([x, y, z]);
            }
        }
    }
    positions
}

pub fn bench_bounded_position_set_add(c: &mut Criterion) {
    let positions = shell_positions(60);
    c.bench_function("bounded_position_set_add", |b| {
        b.iter(|| {
            let mut set = BoundedPositionSet::with_capacity(REGION.center, positions.len());
            for &position in &positions {
                set.add(position).unwrap();
            }
            black_box(set)
        })
    });
}

pub fn bench_bounded_position_set_add_and_query_slab(c: &mut Criterion) {
    let positions = slab_positions();
    c.bench_function("bounded_position_set_add_and_query_slab", |b| {
        b.iter(|| {
            let mut set = BoundedPositionSet::with_capacity([0, 0, 0], positions.len());
            for &position in &positions {
                set.add(position).unwrap();
            }
            for &position in &positions {
                black_box(set.contains(position));
            }
            black_box(set)
        })
    });
}

pub fn bench_incremental_aabb_add(c: &mut Criterion) {
    let positions = shell_positions(60);
    c.bench_function("incremental_aabb_add", |b| {
        b.iter(|| {
            let mut aabb = IncrementalAabb::new(REGION);
            for &position in &positions {
                aabb.add(position).unwrap();
            }
            black_box(aabb)
        })
    });
}

pub fn bench_incremental_aabb_peel_and_query(c: &mut Criterion) {
    let positions = shell_positions(60);
    let mut aabb = IncrementalAabb::new(REGION);
    aabb.add_all(positions.iter().copied()).unwrap();

    c.bench_function("incremental_aabb_peel_and_query", |b| {
        b.iter_batched(
            || aabb.clone(),
            |mut aabb| {
                for &position in &positions {
                    aabb.remove(position).unwrap();
                    black_box(aabb.bounding_box());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

pub fn bench_naive_peel_and_query(c: &mut Criterion) {
    let positions = shell_positions(20);
    let naive: NaivePositionSet = positions.iter().copied().collect();

    c.bench_function("naive_peel_and_query", |b| {
        b.iter_batched(
            || naive.clone(),
            |mut naive| {
                for &position in &positions {
                    naive.remove(position).unwrap();
                    black_box(naive.bounding_box());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_bounded_position_set_add,
    bench_bounded_position_set_add_and_query_slab,
    bench_incremental_aabb_add,
    bench_incremental_aabb_peel_and_query,
    bench_naive_peel_and_query,
);
criterion_main!(benches);
