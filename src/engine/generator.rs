//! Candidate generation.
//!
//! One global pass per pattern over the whole input. Every match becomes a
//! candidate signal; overlap between candidates is expected and resolved
//! later (`dedup.rs`). Decisions get the full treatment (rationale window,
//! entity extraction over match + rationale, additive scoring); preferences
//! and problems use the flat heuristics of their kind.

use crate::engine::{rationale, score};
use crate::entities::extract_entities;
use crate::patterns::Library;
use crate::{Signal, SignalKind, truncate_chars};

/// Maximum stored matched-text length, in chars.
pub(crate) const MATCH_MAX_CHARS: usize = 300;

/// Confidence for a preference match containing at least one known term.
const PREFERENCE_WITH_ENTITIES: f64 = 0.8;
/// Confidence for a preference match with no known terms.
const PREFERENCE_BARE: f64 = 0.6;
/// Flat confidence for every problem match.
const PROBLEM_CONFIDENCE: f64 = 0.75;

/// Run every pattern group over `text` and collect raw candidates.
pub(crate) fn generate(text: &str, library: &Library) -> Vec<Signal> {
    let mut candidates = Vec::new();

    for pattern in &library.decisions {
        for caps in pattern.regex.captures_iter(text) {
            let Some(m) = caps.get(0) else { continue };
            let Some(chosen) = caps.get(pattern.chosen_group) else { continue };
            // the noun charset admits '.' for names like "next.js", so a
            // sentence-final period rides along; strip it with the whitespace
            let chosen = chosen.as_str().trim().trim_end_matches('.');
            // a one-character "choice" is noise, not a decision
            if chosen.chars().count() < 2 {
                continue;
            }

            let alternatives = pattern
                .alternative_group
                .and_then(|group| caps.get(group))
                .map(|g| vec![g.as_str().trim().trim_end_matches('.').to_string()]);

            let matched_text = truncate_chars(m.as_str(), MATCH_MAX_CHARS).to_string();
            let rationale = rationale::extract_rationale(text, m.start(), &library.rationales);

            // entities are drawn from the match plus its rationale clause
            let entities = match &rationale {
                Some(clause) => {
                    extract_entities(&format!("{matched_text} {clause}"), &library.terms)
                }
                None => extract_entities(&matched_text, &library.terms),
            };

            let confidence = score::score(
                &matched_text,
                rationale.is_some(),
                alternatives.is_some(),
                entities.len(),
            );

            candidates.push(Signal {
                kind: SignalKind::Decision,
                confidence,
                matched_text,
                entities,
                rationale,
                alternatives,
                position: m.start(),
            });
        }
    }

    for pattern in &library.preferences {
        for m in pattern.regex.find_iter(text) {
            let matched_text = truncate_chars(m.as_str(), MATCH_MAX_CHARS).to_string();
            let entities = extract_entities(&matched_text, &library.terms);
            let confidence =
                if entities.is_empty() { PREFERENCE_BARE } else { PREFERENCE_WITH_ENTITIES };

            candidates.push(Signal {
                kind: SignalKind::Preference,
                confidence,
                matched_text,
                entities,
                rationale: None,
                alternatives: None,
                position: m.start(),
            });
        }
    }

    for pattern in &library.problems {
        for m in pattern.regex.find_iter(text) {
            let matched_text = truncate_chars(m.as_str(), MATCH_MAX_CHARS).to_string();
            let entities = extract_entities(&matched_text, &library.terms);

            candidates.push(Signal {
                kind: SignalKind::Problem,
                confidence: PROBLEM_CONFIDENCE,
                matched_text,
                entities,
                rationale: None,
                alternatives: None,
                position: m.start(),
            });
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_decision_carries_alternative() {
        let library = Library::builtin();
        let text = "Let's use PostgreSQL instead of MongoDB because it has better JSON support";

        let signals = generate(text, &library);
        let decision = signals
            .iter()
            .filter(|s| s.kind == SignalKind::Decision)
            .max_by(|a, b| a.confidence.partial_cmp(&b.confidence).unwrap())
            .unwrap();

        assert_eq!(decision.alternatives.as_deref(), Some(&["MongoDB".to_string()][..]));
        assert!(decision.rationale.as_deref().unwrap().contains("it has better JSON support"));
        assert!(decision.entities.iter().any(|e| e == "postgresql"));
        assert!(decision.entities.iter().any(|e| e == "mongodb"));
    }

    #[test]
    fn preference_confidence_depends_on_entities() {
        let library = Library::builtin();

        let with = generate("I prefer TypeScript for everything", &library);
        let pref = with.iter().find(|s| s.kind == SignalKind::Preference).unwrap();
        assert_eq!(pref.confidence, PREFERENCE_WITH_ENTITIES);

        let without = generate("I prefer quiet mornings and long walks", &library);
        let pref = without.iter().find(|s| s.kind == SignalKind::Preference).unwrap();
        assert_eq!(pref.confidence, PREFERENCE_BARE);
    }

    #[test]
    fn problems_score_flat() {
        let library = Library::builtin();
        let signals = generate("The parser is broken and we keep seeing errors in CI", &library);

        let problems: Vec<_> = signals.iter().filter(|s| s.kind == SignalKind::Problem).collect();
        assert!(!problems.is_empty());
        assert!(problems.iter().all(|s| s.confidence == PROBLEM_CONFIDENCE));
    }

    #[test]
    fn one_character_choice_is_discarded() {
        let library = Library::builtin();
        // "chose X" with a single-letter item
        let signals = generate("in the end we chose x, reluctantly", &library);
        assert!(signals.iter().all(|s| s.kind != SignalKind::Decision));
    }
}
