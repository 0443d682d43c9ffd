//! Pick 4 combination categories.
//!
//! A category is decided by how often each digit repeats inside a
//! combination:
//!
//! - **Singles**: four different digits (`0123`)
//! - **Doubles**: one digit twice, two others once (`0012`)
//! - **Double pairs**: two digits twice each (`0011`)
//! - **Triples**: one digit three times (`0001`)
//! - **Quads**: one digit four times (`0000`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Singles,
    Doubles,
    DoublePairs,
    Triples,
    Quads,
}

impl Category {
    /// All categories in chart order.
    pub const ALL: [Category; 5] = [
        Category::Singles,
        Category::Doubles,
        Category::DoublePairs,
        Category::Triples,
        Category::Quads,
    ];

    /// Returns the wire name used as the JSON key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Singles => "singles",
            Category::Doubles => "doubles",
            Category::DoublePairs => "doublePairs",
            Category::Triples => "triples",
            Category::Quads => "quads",
        }
    }

    /// Returns the capitalized tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Singles => "Singles",
            Category::Doubles => "Doubles",
            Category::DoublePairs => "Double Pairs",
            Category::Triples => "Triples",
            Category::Quads => "Quads",
        }
    }

    /// Digit multiplicities, largest first, that place a combination here.
    pub fn multiplicities(&self) -> &'static [u8] {
        match self {
            Category::Singles => &[1, 1, 1, 1],
            Category::Doubles => &[2, 1, 1],
            Category::DoublePairs => &[2, 2],
            Category::Triples => &[3, 1],
            Category::Quads => &[4],
        }
    }

    /// Finds the category with the given multiplicity pattern (largest first).
    pub fn from_multiplicities(pattern: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.multiplicities() == pattern)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parse a wire name (case-insensitive; `double-pairs` and
    /// `double_pairs` are accepted for `doublePairs`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "singles" => Ok(Category::Singles),
            "doubles" => Ok(Category::Doubles),
            "doublepairs" => Ok(Category::DoublePairs),
            "triples" => Ok(Category::Triples),
            "quads" => Ok(Category::Quads),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!("singles".parse::<Category>().unwrap(), Category::Singles);
        assert_eq!(
            "doublePairs".parse::<Category>().unwrap(),
            Category::DoublePairs
        );
        assert_eq!(
            "double-pairs".parse::<Category>().unwrap(),
            Category::DoublePairs
        );
        assert_eq!(" QUADS ".parse::<Category>().unwrap(), Category::Quads);
        assert!("pairs".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_uses_wire_names() {
        let json = serde_json::to_string(&Category::DoublePairs).unwrap();
        assert_eq!(json, "\"doublePairs\"");
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_multiplicities_round_trip() {
        for category in Category::ALL {
            assert_eq!(
                Category::from_multiplicities(category.multiplicities()),
                Some(category)
            );
            let total: u8 = category.multiplicities().iter().sum();
            assert_eq!(total, 4);
        }
        assert_eq!(Category::from_multiplicities(&[1, 1, 2]), None);
    }
}
