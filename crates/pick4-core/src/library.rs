//! Combination library loading.
//!
//! The library is resolved once per run from, in order:
//! 1. an explicit path
//! 2. the `PICK4_LIBRARY` environment variable
//! 3. the chart bundled into the binary

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use sha2::Digest;
use tracing::{debug, info};

use pick4_model::{Category, CombinationLibrary, Pick4Error, Result};

use crate::classify::{classify, is_box_form};

/// Environment variable for overriding the library file.
pub const LIBRARY_ENV_VAR: &str = "PICK4_LIBRARY";

const BUNDLED_LIBRARY_NAME: &str = "pick4_combinations.json";
const BUNDLED_LIBRARY_JSON: &str = include_str!("../data/pick4_combinations.json");

static BUNDLED_LIBRARY: OnceLock<CombinationLibrary> = OnceLock::new();

/// Where a loaded library came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibrarySource {
    Bundled,
    File(PathBuf),
}

impl fmt::Display for LibrarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibrarySource::Bundled => write!(f, "bundled {BUNDLED_LIBRARY_NAME}"),
            LibrarySource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A library together with its origin and content digest.
#[derive(Debug, Clone)]
pub struct LoadedLibrary {
    pub library: Cow<'static, CombinationLibrary>,
    pub source: LibrarySource,
    /// SHA-256 of the JSON document the library was parsed from.
    pub sha256: String,
}

impl LoadedLibrary {
    pub fn library(&self) -> &CombinationLibrary {
        &self.library
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}

fn parse_library(path: &Path, contents: &str) -> Result<CombinationLibrary> {
    serde_json::from_str(contents).map_err(|error| Pick4Error::malformed(path, error.to_string()))
}

/// Returns the chart compiled into the binary, parsed on first use.
pub fn bundled_library() -> Result<&'static CombinationLibrary> {
    if let Some(library) = BUNDLED_LIBRARY.get() {
        return Ok(library);
    }
    let parsed = parse_library(Path::new(BUNDLED_LIBRARY_NAME), BUNDLED_LIBRARY_JSON)?;
    debug!(total = parsed.total(), "parsed bundled combination library");
    Ok(BUNDLED_LIBRARY.get_or_init(|| parsed))
}

/// Reads and parses a library JSON file.
pub fn load_library(path: &Path) -> Result<LoadedLibrary> {
    let contents = std::fs::read_to_string(path).map_err(|source| Pick4Error::MissingData {
        path: path.to_path_buf(),
        source,
    })?;
    let library = parse_library(path, &contents)?;
    Ok(LoadedLibrary {
        library: Cow::Owned(library),
        source: LibrarySource::File(path.to_path_buf()),
        sha256: sha256_hex(contents.as_bytes()),
    })
}

/// Resolves the library for this run.
pub fn resolve_library(explicit: Option<&Path>) -> Result<LoadedLibrary> {
    let from_env = std::env::var_os(LIBRARY_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    let loaded = match explicit.map(Path::to_path_buf).or(from_env) {
        Some(path) => load_library(&path)?,
        None => LoadedLibrary {
            library: Cow::Borrowed(bundled_library()?),
            source: LibrarySource::Bundled,
            sha256: sha256_hex(BUNDLED_LIBRARY_JSON.as_bytes()),
        },
    };
    info!(
        source = %loaded.source,
        total = loaded.library.total(),
        "loaded combination library"
    );
    Ok(loaded)
}

/// Builds the full Pick 4 box chart.
///
/// Every digit multiset from `0000` to `9999` appears once, written with its
/// digits in non-decreasing order, ascending within each category.
pub fn reference_library() -> CombinationLibrary {
    let mut lists: Vec<(Category, Vec<String>)> = Category::ALL
        .into_iter()
        .map(|category| (category, Vec::new()))
        .collect();
    for value in 0..10_000u32 {
        let combination = format!("{value:04}");
        if !is_box_form(&combination) {
            continue;
        }
        if let Some(category) = classify(&combination)
            && let Some((_, list)) = lists.iter_mut().find(|(c, _)| *c == category)
        {
            list.push(combination);
        }
    }
    CombinationLibrary::from_entries(lists)
}
