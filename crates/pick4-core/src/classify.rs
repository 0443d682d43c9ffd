use pick4_model::Category;

/// Returns the category of a 4-digit combination.
///
/// The category depends only on how many times each digit repeats, so
/// `1123`, `1213` and `3211` are all doubles. Anything other than exactly
/// four ASCII digits has no category.
pub fn classify(combination: &str) -> Option<Category> {
    let bytes = combination.as_bytes();
    if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let mut counts = [0u8; 10];
    for byte in bytes {
        counts[usize::from(byte - b'0')] += 1;
    }
    let mut pattern: Vec<u8> = counts.into_iter().filter(|count| *count > 0).collect();
    pattern.sort_unstable_by(|a, b| b.cmp(a));
    Category::from_multiplicities(&pattern)
}

/// Returns true when the digits are in non-decreasing order, the form the
/// chart lists each combination in.
pub fn is_box_form(combination: &str) -> bool {
    combination
        .as_bytes()
        .windows(2)
        .all(|pair| pair[0] <= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_pattern() {
        assert_eq!(classify("1234"), Some(Category::Singles));
        assert_eq!(classify("1123"), Some(Category::Doubles));
        assert_eq!(classify("3121"), Some(Category::Doubles));
        assert_eq!(classify("1212"), Some(Category::DoublePairs));
        assert_eq!(classify("7877"), Some(Category::Triples));
        assert_eq!(classify("0000"), Some(Category::Quads));
    }

    #[test]
    fn rejects_non_combinations() {
        assert_eq!(classify("123"), None);
        assert_eq!(classify("12345"), None);
        assert_eq!(classify("12a4"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("١٢٣٤"), None);
    }

    #[test]
    fn box_form_requires_sorted_digits() {
        assert!(is_box_form("0012"));
        assert!(is_box_form("9999"));
        assert!(!is_box_form("1021"));
    }
}
