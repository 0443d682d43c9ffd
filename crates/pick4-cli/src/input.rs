//! Building the box from command-line input.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use pick4_model::BoxGrid;

/// Builds the box from `--row` values or a JSON grid file.
pub fn read_grid(rows: &[String], grid_file: Option<&Path>) -> Result<BoxGrid> {
    match grid_file {
        Some(path) => load_grid_file(path),
        None => BoxGrid::from_rows(rows).context("read --row values"),
    }
}

/// Reads a box stored as a 4x4 JSON array of strings.
pub fn load_grid_file(path: &Path) -> Result<BoxGrid> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read grid file: {}", path.display()))?;
    let grid: BoxGrid = serde_json::from_str(&contents)
        .with_context(|| format!("parse grid file: {}", path.display()))?;
    debug!(
        path = %path.display(),
        empty = grid.empty_cells().len(),
        "loaded grid file"
    );
    Ok(grid)
}
