use serde::Serialize;

use pick4_model::{Category, CombinationLibrary};

/// Returns the entries of `list` containing `query`, in their original order.
///
/// Matching is a case-sensitive substring test. An empty query matches
/// every entry.
pub fn filter_combinations<'a, S: AsRef<str>>(list: &'a [S], query: &str) -> Vec<&'a str> {
    list.iter()
        .map(|entry| entry.as_ref())
        .filter(|entry| entry.contains(query))
        .collect()
}

/// Matches for one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryMatches<'a> {
    pub category: Category,
    /// Number of entries in the category before filtering.
    pub available: usize,
    pub matches: Vec<&'a str>,
}

/// Per-category search output, in chart order.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    pub query: String,
    pub categories: Vec<CategoryMatches<'a>>,
}

impl SearchResults<'_> {
    pub fn total_matches(&self) -> usize {
        self.categories.iter().map(|c| c.matches.len()).sum()
    }
}

/// Filters each selected category of the library.
///
/// An empty `categories` slice selects all five categories. Results keep
/// chart order regardless of the order categories were requested in.
pub fn search_library<'a>(
    library: &'a CombinationLibrary,
    query: &str,
    categories: &[Category],
) -> SearchResults<'a> {
    let categories = library
        .iter()
        .filter(|(category, _)| categories.is_empty() || categories.contains(category))
        .map(|(category, list)| CategoryMatches {
            category,
            available: list.len(),
            matches: filter_combinations(list, query),
        })
        .collect();
    SearchResults {
        query: query.to_string(),
        categories,
    }
}
