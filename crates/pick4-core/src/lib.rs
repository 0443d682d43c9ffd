//! Pick 4 combination core.
//!
//! - [`generate`]: the 256-way Cartesian product over a 4×4 box
//! - [`filter`]: substring search over combination lists
//! - [`classify`]: digit-repeat categories for 4-digit combinations
//! - [`library`]: loading and resolving the categorized combination library
//! - [`verify`]: consistency checks for a loaded library

#![deny(unsafe_code)]

pub mod classify;
pub mod filter;
pub mod generate;
pub mod library;
pub mod verify;

pub use classify::{classify, is_box_form};
pub use filter::{CategoryMatches, SearchResults, filter_combinations, search_library};
pub use generate::{generate, generate_with};
pub use library::{
    LIBRARY_ENV_VAR, LibrarySource, LoadedLibrary, bundled_library, load_library,
    reference_library, resolve_library, sha256_hex,
};
pub use verify::{IssueKind, LibraryIssue, LibraryReport, verify_library};
