//! Property tests for the generator and the search filter.

use std::collections::HashSet;

use proptest::prelude::*;

use pick4_core::{filter_combinations, generate, generate_with};
use pick4_model::{BoxGrid, GRID_SIZE, Pick4Error, Traversal};

fn any_cell() -> impl Strategy<Value = char> {
    any::<char>()
}

fn filled_grid() -> impl Strategy<Value = BoxGrid> {
    prop::collection::vec(any_cell(), GRID_SIZE * GRID_SIZE).prop_map(|chars| {
        let mut grid = BoxGrid::new();
        for (index, value) in chars.into_iter().enumerate() {
            grid.set(index / GRID_SIZE, index % GRID_SIZE, Some(value));
        }
        grid
    })
}

fn distinct_row_grid() -> impl Strategy<Value = BoxGrid> {
    prop::collection::vec(
        prop::sample::subsequence(('a'..='z').collect::<Vec<_>>(), GRID_SIZE)
            .prop_shuffle(),
        GRID_SIZE,
    )
    .prop_map(|rows| {
        let rows: Vec<String> = rows.into_iter().map(|row| row.into_iter().collect()).collect();
        BoxGrid::from_rows(&rows).expect("four characters per row")
    })
}

proptest! {
    #[test]
    fn filled_grid_yields_256_four_char_strings(grid in filled_grid()) {
        for traversal in [Traversal::Rows, Traversal::Columns] {
            let set = generate_with(&grid, traversal).unwrap();
            prop_assert_eq!(set.len(), 256);
            prop_assert!(set.iter().all(|combination| combination.chars().count() == 4));
        }
    }

    #[test]
    fn generation_is_deterministic(grid in filled_grid()) {
        prop_assert_eq!(generate(&grid).unwrap(), generate(&grid).unwrap());
    }

    #[test]
    fn distinct_rows_give_distinct_combinations(grid in distinct_row_grid()) {
        let set = generate(&grid).unwrap();
        prop_assert_eq!(set.distinct_count(), 256);
    }

    #[test]
    fn combinations_pick_one_cell_per_row(grid in filled_grid()) {
        let set = generate(&grid).unwrap();
        for combination in set.iter() {
            for (row, value) in combination.chars().enumerate() {
                prop_assert!(grid.row(row).contains(&Some(value)));
            }
        }
    }

    #[test]
    fn fails_iff_some_cell_is_empty(
        grid in filled_grid(),
        holes in prop::collection::btree_set(0..GRID_SIZE * GRID_SIZE, 0..4),
    ) {
        let mut grid = grid;
        for index in &holes {
            grid.set(index / GRID_SIZE, index % GRID_SIZE, None);
        }
        match generate(&grid) {
            Ok(set) => {
                prop_assert!(holes.is_empty());
                prop_assert_eq!(set.len(), 256);
            }
            Err(Pick4Error::IncompleteInput { empty }) => {
                let expected: Vec<(usize, usize)> = holes
                    .iter()
                    .map(|index| (index / GRID_SIZE, index % GRID_SIZE))
                    .collect();
                prop_assert_eq!(empty, expected);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_query_is_identity(list in prop::collection::vec("[0-9]{4}", 0..50)) {
        let filtered = filter_combinations(&list, "");
        let expected: Vec<&str> = list.iter().map(String::as_str).collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn filter_returns_ordered_matching_subsequence(
        list in prop::collection::vec("[0-9]{4}", 0..50),
        query in "[0-9]{0,3}",
    ) {
        let filtered = filter_combinations(&list, &query);
        prop_assert!(filtered.iter().all(|entry| entry.contains(query.as_str())));
        let expected: Vec<&str> = list
            .iter()
            .map(String::as_str)
            .filter(|entry| entry.contains(query.as_str()))
            .collect();
        prop_assert_eq!(filtered, expected);
    }
}

#[test]
fn concrete_scenario_is_complete_and_distinct() {
    let grid = BoxGrid::from_rows(&["ABCD", "1234", "XYZW", "9876"]).unwrap();
    let set = generate(&grid).unwrap();
    assert_eq!(set.first(), Some("A1X9"));
    assert_eq!(set.last(), Some("D4W6"));
    let unique: HashSet<&str> = set.iter().collect();
    assert_eq!(unique.len(), 256);
}
