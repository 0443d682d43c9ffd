use std::collections::HashSet;

use serde::Serialize;
use tracing::warn;

use pick4_model::{Category, CombinationLibrary};

use crate::classify::{classify, is_box_form};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// Not exactly four ASCII digits.
    Malformed,
    /// A valid combination filed under the wrong category.
    Misplaced { expected: Category },
    /// Digits not written in non-decreasing order.
    NotBoxForm,
    /// Listed more than once in the same category.
    Duplicate,
}

impl IssueKind {
    pub fn describe(&self) -> String {
        match self {
            IssueKind::Malformed => "not a 4-digit combination".to_string(),
            IssueKind::Misplaced { expected } => format!("belongs in {expected}"),
            IssueKind::NotBoxForm => "digits not in box order".to_string(),
            IssueKind::Duplicate => "listed more than once".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LibraryIssue {
    pub category: Category,
    pub entry: String,
    #[serde(flatten)]
    pub kind: IssueKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct LibraryReport {
    pub counts: Vec<(Category, usize)>,
    pub issues: Vec<LibraryIssue>,
}

impl LibraryReport {
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Checks that every entry is a 4-digit combination in box form, filed
/// under the category its digit repeats call for, with no repeats inside a
/// category. An entry can raise more than one issue.
pub fn verify_library(library: &CombinationLibrary) -> LibraryReport {
    let mut counts = Vec::with_capacity(Category::ALL.len());
    let mut issues = Vec::new();
    for (category, list) in library.iter() {
        counts.push((category, list.len()));
        let mut seen = HashSet::new();
        for entry in list {
            let mut kinds = Vec::new();
            match classify(entry) {
                None => kinds.push(IssueKind::Malformed),
                Some(expected) => {
                    if expected != category {
                        kinds.push(IssueKind::Misplaced { expected });
                    }
                    if !is_box_form(entry) {
                        kinds.push(IssueKind::NotBoxForm);
                    }
                }
            }
            if !seen.insert(entry.as_str()) {
                kinds.push(IssueKind::Duplicate);
            }
            for kind in kinds {
                warn!(
                    category = %category,
                    entry = %entry,
                    issue = %kind.describe(),
                    "library entry failed verification"
                );
                issues.push(LibraryIssue {
                    category,
                    entry: entry.clone(),
                    kind,
                });
            }
        }
    }
    LibraryReport { counts, issues }
}
