pub mod category;
pub mod combination;
pub mod error;
pub mod grid;
pub mod library;

pub use category::Category;
pub use combination::{COMBINATION_COUNT, CombinationSet, Traversal};
pub use error::{Pick4Error, Result};
pub use grid::{BoxGrid, GRID_SIZE};
pub use library::CombinationLibrary;
