use pick4_core::{LibraryReport, LibrarySource};
use pick4_model::{Category, CombinationSet};
use pick4_output::{ExportTarget, Theme};

/// Table styling for the current run.
#[derive(Debug, Clone, Copy)]
pub struct TableStyle {
    pub theme: Theme,
    pub styled: bool,
}

#[derive(Debug)]
pub struct GenerateResult {
    pub set: CombinationSet,
    pub target: ExportTarget,
}

#[derive(Debug)]
pub struct ExportResult {
    pub source: LibrarySource,
    pub total: usize,
    pub target: ExportTarget,
}

#[derive(Debug)]
pub struct CopyResult {
    pub combination: String,
    pub category: Option<Category>,
}

#[derive(Debug)]
pub struct VerifyResult {
    pub source: LibrarySource,
    pub sha256: String,
    pub report: LibraryReport,
}
