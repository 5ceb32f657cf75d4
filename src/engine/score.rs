//! Confidence scoring.
//!
//! A deterministic additive heuristic over a matched span and its auxiliary
//! signals. Pure and total; the clamp keeps every score strictly inside
//! (0, 1) so downstream consumers can treat 0.0/1.0 as impossible values.

/// Lower clamp bound for any confidence value.
pub(crate) const MIN_CONFIDENCE: f64 = 0.1;
/// Upper clamp bound for any confidence value.
pub(crate) const MAX_CONFIDENCE: f64 = 0.99;

/// Matches "decided" / "chose" / "selected" as whole words.
fn decisive_verb_hit(text: &str) -> bool {
    regex!(r"(?i)\b(decided|chose|selected)\b").is_match(text)
}

/// Score a matched span.
///
/// ```text
/// base                 0.50
/// decisive verb       +0.20   ("decided" | "chose" | "selected", whole word)
/// rationale present   +0.15
/// alternatives        +0.10
/// >= 1 entity         +0.05
/// >= 2 entities       +0.05   (additive with the previous line)
/// short match (<20)   -0.10   (matched text under 20 chars)
/// clamp to [0.10, 0.99]
/// ```
pub(crate) fn score(
    matched_text: &str,
    has_rationale: bool,
    has_alternatives: bool,
    entity_count: usize,
) -> f64 {
    let mut confidence: f64 = 0.5;

    if decisive_verb_hit(matched_text) {
        confidence += 0.2;
    }
    if has_rationale {
        confidence += 0.15;
    }
    if has_alternatives {
        confidence += 0.1;
    }
    if entity_count >= 1 {
        confidence += 0.05;
    }
    if entity_count >= 2 {
        confidence += 0.05;
    }
    if matched_text.chars().count() < 20 {
        confidence -= 0.1;
    }

    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}
