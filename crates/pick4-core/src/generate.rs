use tracing::debug;

use pick4_model::{BoxGrid, COMBINATION_COUNT, CombinationSet, GRID_SIZE, Result, Traversal};

/// Generates all 256 combinations of a filled box using the row traversal.
///
/// Fails with `IncompleteInput` when any of the 16 cells is empty.
pub fn generate(grid: &BoxGrid) -> Result<CombinationSet> {
    generate_with(grid, Traversal::Rows)
}

/// Generates all 256 combinations of a filled box.
///
/// Indices `a`, `b`, `c`, `d` each run over `0..4` with `a` outermost. For
/// [`Traversal::Rows`] the combination is `box[0][a] box[1][b] box[2][c]
/// box[3][d]`; for [`Traversal::Columns`] it is `box[a][0] box[b][1]
/// box[c][2] box[d][3]`. Output order follows the index quadruple, not the
/// resulting strings.
pub fn generate_with(grid: &BoxGrid, traversal: Traversal) -> Result<CombinationSet> {
    let cells = grid.filled()?;
    let pick = |position: usize, index: usize| match traversal {
        Traversal::Rows => cells[position][index],
        Traversal::Columns => cells[index][position],
    };

    let mut combinations = Vec::with_capacity(COMBINATION_COUNT);
    for a in 0..GRID_SIZE {
        for b in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                for d in 0..GRID_SIZE {
                    let combination: String =
                        [pick(0, a), pick(1, b), pick(2, c), pick(3, d)].iter().collect();
                    combinations.push(combination);
                }
            }
        }
    }
    debug!(
        traversal = %traversal,
        count = combinations.len(),
        "generated combinations"
    );
    Ok(CombinationSet::new(traversal, combinations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pick4_model::Pick4Error;

    fn scenario() -> BoxGrid {
        BoxGrid::from_rows(&["ABCD", "1234", "XYZW", "9876"]).unwrap()
    }

    #[test]
    fn rows_scenario_first_and_last() {
        let set = generate(&scenario()).unwrap();
        assert_eq!(set.len(), 256);
        assert_eq!(set.first(), Some("A1X9"));
        assert_eq!(set.last(), Some("D4W6"));
        assert_eq!(set.distinct_count(), 256);
        assert_eq!(set.traversal, Traversal::Rows);
    }

    #[test]
    fn rows_innermost_index_walks_last_row() {
        let set = generate(&scenario()).unwrap();
        let head: Vec<&str> = set.iter().take(5).collect();
        assert_eq!(head, vec!["A1X9", "A1X8", "A1X7", "A1X6", "A1Y9"]);
    }

    #[test]
    fn columns_scenario_first_and_last() {
        let set = generate_with(&scenario(), Traversal::Columns).unwrap();
        assert_eq!(set.len(), 256);
        assert_eq!(set.first(), Some("ABCD"));
        assert_eq!(set.last(), Some("9876"));
        assert_eq!(set.as_slice()[1], "ABC4");
        assert_eq!(set.traversal, Traversal::Columns);
    }

    #[test]
    fn repeated_characters_yield_duplicates() {
        let grid = BoxGrid::from_rows(&["AAAA", "1234", "XYZW", "9876"]).unwrap();
        let set = generate(&grid).unwrap();
        assert_eq!(set.len(), 256);
        assert_eq!(set.distinct_count(), 64);
    }

    #[test]
    fn non_digit_characters_are_kept_verbatim() {
        let grid = BoxGrid::from_rows(&["#  é", "1234", "XYZW", "9876"]).unwrap();
        let set = generate(&grid).unwrap();
        assert_eq!(set.first(), Some("#1X9"));
        assert!(set.iter().any(|combination| combination == " 2Y8"));
        assert!(set.iter().all(|combination| combination.chars().count() == 4));
    }

    #[test]
    fn single_empty_cell_blocks_generation() {
        let mut grid = scenario();
        grid.set(2, 1, None);
        match generate(&grid) {
            Err(Pick4Error::IncompleteInput { empty }) => assert_eq!(empty, vec![(2, 1)]),
            other => panic!("expected incomplete input, got {other:?}"),
        }
    }
}
