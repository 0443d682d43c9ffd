//! Tests for building the box from CLI input.

use std::fs;

use pick4_cli::input::{load_grid_file, read_grid};

#[test]
fn rows_build_grid() {
    let rows: Vec<String> = ["ABCD", "1234", "XYZW", "9876"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let grid = read_grid(&rows, None).unwrap();
    assert!(grid.is_complete());
    assert_eq!(grid.get(3, 0), Some('9'));
}

#[test]
fn wrong_row_count_is_an_error() {
    let rows = vec!["ABCD".to_string()];
    let error = read_grid(&rows, None).unwrap_err();
    assert!(format!("{error:#}").contains("exactly four are required"));
}

#[test]
fn grid_file_keeps_empty_cells() {
    let mut path = std::env::temp_dir();
    path.push(format!("pick4_cli_grid_{}.json", std::process::id()));
    fs::write(
        &path,
        r#"[["A","","C","D"],["1","2","3","4"],["X","Y","Z","W"],["9","8","7",""]]"#,
    )
    .unwrap();
    let grid = load_grid_file(&path).unwrap();
    assert_eq!(grid.empty_cells(), vec![(0, 1), (3, 3)]);
    fs::remove_file(&path).ok();
}

#[test]
fn grid_file_rejects_multi_character_cells() {
    let mut path = std::env::temp_dir();
    path.push(format!("pick4_cli_grid_bad_{}.json", std::process::id()));
    fs::write(
        &path,
        r#"[["AB","B","C","D"],["1","2","3","4"],["X","Y","Z","W"],["9","8","7","6"]]"#,
    )
    .unwrap();
    let error = load_grid_file(&path).unwrap_err();
    assert!(format!("{error:#}").contains("at most one is allowed"));
    fs::remove_file(&path).ok();
}
