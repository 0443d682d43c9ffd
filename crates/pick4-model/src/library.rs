//! The categorized combination library.
//!
//! The library is read-only once built. Its JSON form is an object keyed by
//! category wire name, written in chart order.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::category::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationLibrary {
    entries: BTreeMap<Category, Vec<String>>,
}

impl CombinationLibrary {
    /// Builds a library; categories not supplied are empty.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Category, Vec<String>)>,
    {
        let mut map: BTreeMap<Category, Vec<String>> = Category::ALL
            .into_iter()
            .map(|category| (category, Vec::new()))
            .collect();
        for (category, list) in entries {
            map.insert(category, list);
        }
        Self { entries: map }
    }

    /// Returns the entries of one category in their stored order.
    pub fn get(&self, category: Category) -> &[String] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates categories in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.entries
            .iter()
            .map(|(category, list)| (*category, list.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Returns the first category listing `combination`, if any.
    pub fn find(&self, combination: &str) -> Option<Category> {
        self.iter()
            .find(|(_, list)| list.iter().any(|entry| entry == combination))
            .map(|(category, _)| category)
    }
}

impl Serialize for CombinationLibrary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, list) in &self.entries {
            map.serialize_entry(category.as_str(), list)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CombinationLibrary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LibraryVisitor)
    }
}

struct LibraryVisitor;

impl<'de> Visitor<'de> for LibraryVisitor {
    type Value = CombinationLibrary;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object of combination lists keyed by category")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = BTreeMap::new();
        while let Some(key) = map.next_key::<String>()? {
            let category = key.parse::<Category>().map_err(A::Error::custom)?;
            if category.as_str() != key {
                return Err(A::Error::custom(format!(
                    "category key `{key}` must be written `{category}`"
                )));
            }
            if entries.contains_key(&category) {
                return Err(A::Error::custom(format!("duplicate category `{category}`")));
            }
            entries.insert(category, map.next_value::<Vec<String>>()?);
        }
        for category in Category::ALL {
            if !entries.contains_key(&category) {
                return Err(A::Error::custom(format!("missing category `{category}`")));
            }
        }
        Ok(CombinationLibrary { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CombinationLibrary {
        CombinationLibrary::from_entries([
            (Category::Singles, vec!["0123".to_string(), "0124".to_string()]),
            (Category::Quads, vec!["0000".to_string()]),
        ])
    }

    #[test]
    fn missing_categories_are_empty() {
        let library = sample();
        assert_eq!(library.get(Category::Doubles), &[] as &[String]);
        assert_eq!(library.total(), 3);
        assert_eq!(library.iter().count(), 5);
    }

    #[test]
    fn find_locates_category() {
        let library = sample();
        assert_eq!(library.find("0000"), Some(Category::Quads));
        assert_eq!(library.find("9999"), None);
    }

    #[test]
    fn serializes_in_chart_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"singles":["0123","0124"],"doubles":[],"doublePairs":[],"triples":[],"quads":["0000"]}"#
        );
        let back: CombinationLibrary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn deserialize_requires_every_category() {
        let error = serde_json::from_str::<CombinationLibrary>(r#"{"singles":[]}"#).unwrap_err();
        assert!(error.to_string().contains("missing category `doubles`"));
    }

    #[test]
    fn deserialize_rejects_unknown_keys() {
        let json = r#"{"singles":[],"doubles":[],"doublePairs":[],"triples":[],"quads":[],"pairs":[]}"#;
        assert!(serde_json::from_str::<CombinationLibrary>(json).is_err());
    }

    #[test]
    fn deserialize_rejects_repeated_category() {
        let json = r#"{"singles":["0123"],"doubles":[],"doublePairs":[],"triples":[],"quads":[],"singles":[]}"#;
        let error = serde_json::from_str::<CombinationLibrary>(json).unwrap_err();
        assert!(error.to_string().contains("duplicate category `singles`"));
    }
}
