//! Entity extraction over a text span.
//!
//! Given a span of text, return every known term it contains: technology and
//! tool names by case-insensitive substring containment, design-pattern names
//! by the dictionary's hyphen/space-insensitive matchers. The result is
//! deduplicated and sorted so repeated runs on the same input produce
//! identical signals.

use crate::patterns::TermDictionary;
use std::collections::BTreeSet;

/// Known terms found in `text`. Empty input yields an empty set; this never
/// fails.
pub(crate) fn extract_entities(text: &str, dict: &TermDictionary) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lower = text.to_lowercase();

    let mut found: BTreeSet<&str> = dict.contained_terms(&lower).collect();
    found.extend(dict.matched_patterns(text));

    found.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_technologies_and_tools() {
        let dict = TermDictionary::builtin();
        let entities = extract_entities("Deployed with Docker, linted with ESLint", &dict);

        assert!(entities.contains(&"docker".to_string()));
        assert!(entities.contains(&"eslint".to_string()));
    }

    #[test]
    fn finds_design_patterns_with_space_or_hyphen() {
        let dict = TermDictionary::builtin();

        let entities = extract_entities("switch to cursor pagination", &dict);
        assert!(entities.contains(&"cursor-pagination".to_string()));
    }

    #[test]
    fn empty_input_yields_empty_set() {
        let dict = TermDictionary::builtin();
        assert!(extract_entities("", &dict).is_empty());
    }

    #[test]
    fn result_is_sorted_and_deduplicated() {
        let dict = TermDictionary::builtin();
        let entities = extract_entities("redis and Redis and kafka", &dict);

        let mut sorted = entities.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(entities, sorted);
    }

    #[test]
    fn custom_minimal_dictionary() {
        let dict = TermDictionary::new(&["foodb"], &["bar-pattern"], &[]);
        let entities = extract_entities("FooDB with bar pattern", &dict);

        assert_eq!(entities, vec!["bar-pattern".to_string(), "foodb".to_string()]);
    }
}
