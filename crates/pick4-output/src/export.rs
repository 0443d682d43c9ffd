use pick4_model::{CombinationLibrary, CombinationSet, Result};

/// Suggested filename for a generated combination set.
pub const TEXT_EXPORT_FILENAME: &str = "4d_combinations.txt";

/// Suggested filename for the categorized library.
pub const JSON_EXPORT_FILENAME: &str = "pick4_combinations.json";

/// Renders a combination set as newline-separated text.
///
/// Lines are joined with `\n` and there is no trailing newline.
pub fn render_combinations_text(set: &CombinationSet) -> String {
    set.as_slice().join("\n")
}

/// Renders the library as pretty-printed JSON with two-space indentation.
pub fn render_library_json(library: &CombinationLibrary) -> Result<String> {
    Ok(serde_json::to_string_pretty(library)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pick4_model::{Category, Traversal};

    #[test]
    fn text_has_no_trailing_newline() {
        let set = CombinationSet::new(
            Traversal::Rows,
            vec!["A1X9".to_string(), "A1X8".to_string()],
        );
        assert_eq!(render_combinations_text(&set), "A1X9\nA1X8");
    }

    #[test]
    fn json_mirrors_library_structure() {
        let library = CombinationLibrary::from_entries([(
            Category::Quads,
            vec!["0000".to_string(), "1111".to_string()],
        )]);
        let json = render_library_json(&library).unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "singles": [],
          "doubles": [],
          "doublePairs": [],
          "triples": [],
          "quads": [
            "0000",
            "1111"
          ]
        }
        "#);
    }
}
