use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of combinations in one full generation pass (4^4).
pub const COMBINATION_COUNT: usize = 256;

/// How one character is picked from the box for each combination position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    /// Position `i` takes a character from row `i` (canonical).
    #[default]
    Rows,
    /// Position `i` takes a character from column `i`.
    Columns,
}

impl Traversal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Traversal::Rows => "rows",
            Traversal::Columns => "columns",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Traversal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rows" | "row" => Ok(Traversal::Rows),
            "columns" | "column" | "cols" => Ok(Traversal::Columns),
            _ => Err(format!("Unknown traversal: {s}")),
        }
    }
}

/// The ordered output of one generation pass.
///
/// Duplicates are kept; a box with repeated characters in a row produces
/// repeated combinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationSet {
    pub traversal: Traversal,
    combinations: Vec<String>,
}

impl CombinationSet {
    pub fn new(traversal: Traversal, combinations: Vec<String>) -> Self {
        Self {
            traversal,
            combinations,
        }
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.combinations.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.combinations
    }

    pub fn first(&self) -> Option<&str> {
        self.combinations.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.combinations.last().map(String::as_str)
    }

    /// Number of pairwise-distinct combinations.
    pub fn distinct_count(&self) -> usize {
        self.combinations
            .iter()
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.combinations
    }
}

impl<'a> IntoIterator for &'a CombinationSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.combinations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_count_ignores_repeats() {
        let set = CombinationSet::new(
            Traversal::Rows,
            vec!["AAAA".to_string(), "AAAB".to_string(), "AAAA".to_string()],
        );
        assert_eq!(set.len(), 3);
        assert_eq!(set.distinct_count(), 2);
        assert_eq!(set.first(), Some("AAAA"));
        assert_eq!(set.last(), Some("AAAA"));
    }

    #[test]
    fn traversal_parses_aliases() {
        assert_eq!("cols".parse::<Traversal>().unwrap(), Traversal::Columns);
        assert_eq!("Rows".parse::<Traversal>().unwrap(), Traversal::Rows);
        assert!("diagonal".parse::<Traversal>().is_err());
        assert_eq!(Traversal::default(), Traversal::Rows);
    }
}
