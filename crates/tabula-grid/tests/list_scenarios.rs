//! Integration tests: end-to-end List2D and Array2D scenarios.

use indexmap::IndexSet;
use smallvec::SmallVec;
use tabula_core::{Bounds2D, CollectionError, FindResult, Index2D};
use tabula_grid::{Array2D, List2D, ListConfig};
use tabula_test_utils::{sample_list, DropCounter, DropProbe, SAMPLE_3X3};

// ── Search ──────────────────────────────────────────────────────────

#[test]
fn find_first_and_last_greater_than_five() {
    let list = sample_list();
    assert_eq!(
        list.find_index_2d(|x: &i32| *x > 5),
        FindResult::Success(Index2D::new(1, 1))
    );
    assert_eq!(
        list.find_last_index_2d(|x: &i32| *x > 5),
        FindResult::Success(Index2D::new(2, 0))
    );
}

#[test]
fn comparable_search_after_capacity_growth() {
    let mut list = List2D::from_rows(vec![vec![2, 3], vec![4, 9], vec![8, 2]]).unwrap();
    let bounds = list.bounds();
    list.increase_capacity(bounds).unwrap();
    assert_eq!(list.capacity(), Bounds2D::new(6, 4));
    assert_eq!(list.bounds(), bounds);
    assert_eq!(
        list.index_of_comparable(&9),
        FindResult::Success(Index2D::new(1, 1))
    );
    assert_eq!(
        list.last_index_of_comparable(&2),
        FindResult::Success(Index2D::new(2, 1))
    );
}

#[test]
fn backward_range_accepts_inclusive_span_only() {
    let list = sample_list();
    let start = Index2D::new(1, 1);
    // Linear position 4 covers five cells back to the origin.
    let found = list
        .find_last_index_2d_range(start, 5, |x: &i32| *x == 2)
        .unwrap();
    assert_eq!(found, FindResult::Success(Index2D::ORIGIN));
    assert!(matches!(
        list.find_last_index_2d_range(start, 6, |_: &i32| true),
        Err(CollectionError::OutOfRange { argument: "count", .. })
    ));
}

#[test]
fn find_all_into_ecosystem_collections() {
    let list = sample_list();
    let unique: IndexSet<i32> = list.find_all(|x: &i32| *x < 4).unwrap();
    assert_eq!(unique.into_iter().collect::<Vec<_>>(), vec![2, 3, 1]);

    let inline: SmallVec<[Index2D; 4]> = list.find_all_indices(|x: &i32| *x == 2).unwrap();
    assert_eq!(
        inline.as_slice(),
        &[Index2D::new(0, 0), Index2D::new(2, 1)]
    );
}

// ── Copy ────────────────────────────────────────────────────────────

#[test]
fn native_round_trip_preserves_cells() {
    let list = List2D::from_native(&SAMPLE_3X3);
    let mut target = [[0; 3]; 3];
    list.copy_to(&mut target).unwrap();
    assert_eq!(target, SAMPLE_3X3);
}

#[test]
fn empty_native_round_trip() {
    let source: [[u8; 0]; 0] = [];
    let list = List2D::from_native(&source);
    assert_eq!(list.bounds(), Bounds2D::EMPTY);
    let mut target: [[u8; 0]; 0] = [];
    list.copy_to(&mut target).unwrap();
    assert_eq!(list.to_array_2d().unwrap(), Array2D::default());
}

#[test]
fn copy_into_too_small_destination_fails() {
    let list = List2D::<u8>::from_rows(vec![vec![1; 5]; 3]).unwrap();
    let mut target = [[0u8; 5]; 2];
    assert!(matches!(
        list.copy_to(&mut target),
        Err(CollectionError::InvalidArgument { argument: "destination", .. })
    ));
    assert_eq!(target, [[0; 5]; 2]);
}

#[test]
fn copy_to_negative_destination_index_fails() {
    let list = List2D::<u8>::from_rows(vec![vec![1; 5]; 3]).unwrap();
    let mut target = [[0u8; 5]; 3];
    assert!(matches!(
        list.copy_to_at(&mut target, Index2D::new(-1, 0)),
        Err(CollectionError::OutOfRange { argument: "destination_index", .. })
    ));
}

#[test]
fn indices_on_the_far_edge_are_out_of_range() {
    let list = List2D::<u8>::from_rows(vec![vec![1; 5]; 3]).unwrap();

    let mut target = [[0u8; 5]; 3];
    assert!(matches!(
        list.copy_to_at(&mut target, Index2D::new(3, 0)),
        Err(CollectionError::OutOfRange { argument: "destination_index", .. })
    ));

    let mut flat = [0u8; 15];
    assert!(matches!(
        list.copy_to_slice_at(&mut flat, 15),
        Err(CollectionError::OutOfRange { argument: "destination_index", .. })
    ));

    assert!(matches!(
        list.get_sector(Index2D::new(3, 0), Bounds2D::new(0, 5)),
        Err(CollectionError::OutOfRange { argument: "source_index", .. })
    ));
    assert_eq!(target, [[0; 5]; 3]);
    assert_eq!(flat, [0; 15]);
}

#[test]
fn sector_copy_between_arrays() {
    let list = sample_list();
    let sector = list
        .get_sector(Index2D::new(1, 1), Bounds2D::new(2, 2))
        .unwrap();
    let mut array = Array2D::filled(Bounds2D::new(3, 3), -1).unwrap();
    sector.copy_to_at(&mut array, Index2D::new(1, 0)).unwrap();
    assert_eq!(array.as_slice(), &[-1, -1, -1, 9, 1, -1, 2, 3, -1]);
}

// ── Lifecycle ───────────────────────────────────────────────────────

#[test]
fn removal_and_clear_release_values() {
    let counter = DropCounter::new();
    let rows: Vec<Vec<DropProbe>> = (0..3)
        .map(|r| (0..3).map(|c| counter.probe(r * 3 + c)).collect())
        .collect();
    let mut list = List2D::from_rows(rows).unwrap();
    assert_eq!(counter.live(), 9);

    list.remove_rows(0, 1).unwrap();
    assert_eq!(counter.live(), 6);
    list.remove_columns(1, 2).unwrap();
    assert_eq!(counter.live(), 2);
    assert_eq!(list[(0, 0)].value, 3);
    assert_eq!(list[(1, 0)].value, 6);

    list.add_column().unwrap();
    assert!(!list[(0, 1)].is_tracked());

    list.clear();
    assert_eq!(counter.live(), 0);
}

#[test]
fn relayout_moves_values_without_cloning() {
    let counter = DropCounter::new();
    let mut list: List2D<DropProbe> = List2D::with_capacity(Bounds2D::new(1, 1)).unwrap();
    list.add_row().unwrap();
    list.add_column().unwrap();
    list[(0, 0)] = counter.probe(7);
    for _ in 0..5 {
        list.insert_row(0).unwrap();
        list.insert_column(0).unwrap();
    }
    assert_eq!(counter.live(), 1);
    assert_eq!(list[(5, 5)].value, 7);
}

#[test]
fn cursor_detects_structural_change() {
    let mut list = sample_list();
    let mut cursor = list.cursor();
    let mut total = 0;
    while cursor.move_next(&list).unwrap() {
        total += cursor.current(&list).unwrap().copied().unwrap_or(0);
    }
    assert_eq!(total, 37);

    cursor.reset();
    assert!(cursor.move_next(&list).unwrap());
    list.remove_column(0).unwrap();
    assert!(matches!(
        cursor.move_next(&list),
        Err(CollectionError::InvalidState { .. })
    ));
}

#[test]
fn configured_growth_factor_applies_per_dimension() {
    let config = ListConfig {
        initial_capacity: Bounds2D::new(2, 2),
        growth_factor: 3,
    };
    let mut list: List2D<u16> = List2D::with_config(config).unwrap();
    list.increase_bounds(1, 3).unwrap();
    assert_eq!(list.capacity(), Bounds2D::new(2, 9));
    list.add_rows(2).unwrap();
    assert_eq!(list.capacity(), Bounds2D::new(9, 9));
}
