use blockbox::voxel::{IncrementalAabb, PositionSet, PositionSetAabb, Region, VoxelBox};

fn region() -> Region {
    Region::new([0, 0, 0], [1024, 1024, 1024])
}

fn bounds(lower: [i32; 3], upper: [i32; 3]) -> Option<VoxelBox> {
    Some(VoxelBox::new(lower, upper))
}

#[test]
fn adding_and_removing_positions_updates_bounding_box() {
    let mut aabb = IncrementalAabb::new(region());

    assert!(aabb.add([5, 10, 3]).unwrap());
    assert_eq!(aabb.bounding_box(), bounds([5, 10, 3], [5, 10, 3]));

    assert!(aabb.add([2, 5, 3]).unwrap());
    assert_eq!(aabb.bounding_box(), bounds([2, 5, 3], [5, 10, 3]));

    assert!(aabb.add([1, 20, 0]).unwrap());
    assert_eq!(aabb.bounding_box(), bounds([1, 5, 0], [5, 20, 3]));

    assert!(!aabb.add([1, 20, 0]).unwrap());
    assert_eq!(aabb.bounding_box(), bounds([1, 5, 0], [5, 20, 3]));

    assert!(!aabb.remove([6, 7, 8]).unwrap());
    assert_eq!(aabb.bounding_box(), bounds([1, 5, 0], [5, 20, 3]));

    assert!(aabb.remove([5, 10, 3]).unwrap());
    assert!(aabb.remove([2, 5, 3]).unwrap());
    assert!(aabb.remove([1, 20, 0]).unwrap());
    assert_eq!(aabb.bounding_box(), None);
    assert!(aabb.is_empty());
}

#[test]
fn clearing_nonempty_incremental_aabb_removes_bounding_box() {
    let mut aabb = IncrementalAabb::new(region());
    aabb.add_all([[5, 10, 3], [2, 5, 3], [1, 20, 0]]).unwrap();

    aabb.clear();

    assert_eq!(aabb.bounding_box(), None);
    assert_eq!(aabb.len(), 0);
    assert_eq!(aabb.positions().count(), 0);
}

#[test]
fn removing_extreme_position_exposes_next_extreme() {
    let mut aabb = IncrementalAabb::new(region());
    aabb.add_all([[0, 0, 0], [10, 0, 0], [4, 0, 0], [-3, 0, 0], [7, 0, 0]])
        .unwrap();

    aabb.remove([10, 0, 0]).unwrap();
    assert_eq!(aabb.bounding_box(), bounds([-3, 0, 0], [7, 0, 0]));

    aabb.remove([-3, 0, 0]).unwrap();
    assert_eq!(aabb.bounding_box(), bounds([0, 0, 0], [7, 0, 0]));

    aabb.remove([0, 0, 0]).unwrap();
    aabb.remove([7, 0, 0]).unwrap();
    assert_eq!(aabb.bounding_box(), bounds([4, 0, 0], [4, 0, 0]));
}

#[test]
fn shared_coordinates_keep_extreme_until_last_position_leaves() {
    let mut aabb = IncrementalAabb::new(region());
    aabb.add_all([[-8, 1, 1], [-8, 2, 2], [0, 0, 0]]).unwrap();

    aabb.remove([-8, 1, 1]).unwrap();
    assert_eq!(aabb.bounding_box(), bounds([-8, 0, 0], [0, 2, 2]));

    aabb.remove([-8, 2, 2]).unwrap();
    assert_eq!(aabb.bounding_box(), bounds([0, 0, 0], [0, 0, 0]));
}
