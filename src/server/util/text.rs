/// Trims `value` and drops it when nothing is left.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Turns a legacy category key such as `root-canal` into `Root Canal`.
pub fn title_case(key: &str) -> String {
    key.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_trims_and_filters() {
        assert_eq!(non_empty(Some("  hi ".to_string())), Some("hi".to_string()));
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn title_cases_legacy_keys() {
        assert_eq!(title_case("root-canal"), "Root Canal");
        assert_eq!(title_case("implants"), "Implants");
        assert_eq!(title_case("full_mouth reconstruction"), "Full Mouth Reconstruction");
    }

    #[test]
    fn counts_words() {
        assert_eq!(word_count("  one two\nthree  "), 3);
        assert_eq!(word_count(""), 0);
    }
}
