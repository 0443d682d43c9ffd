use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Pick4Error {
    #[error("please fill all 16 boxes ({} empty: {})", .empty.len(), format_cells(.empty))]
    IncompleteInput { empty: Vec<(usize, usize)> },

    #[error("cell ({row}, {col}) holds {len} characters; at most one is allowed")]
    InvalidCell { row: usize, col: usize, len: usize },

    #[error("row {row} holds {len} characters; at most four are allowed")]
    InvalidRow { row: usize, len: usize },

    #[error("grid has {rows} rows; exactly four are required")]
    InvalidShape { rows: usize },

    #[error("combination library not found at {path}")]
    MissingData {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed combination library {path}: {message}")]
    MalformedData { path: PathBuf, message: String },

    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Pick4Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MalformedData {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Cells are reported 1-based, the way a user counts boxes on screen.
fn format_cells(cells: &[(usize, usize)]) -> String {
    cells
        .iter()
        .map(|(row, col)| format!("r{}c{}", row + 1, col + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, Pick4Error>;
