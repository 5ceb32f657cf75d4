extern crate self as signalis;

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod engine;
mod entities;
mod patterns;

pub use api::{
    DetectDetails, IntentReport, IntentReportVerbose, Options, Signal, SignalKind, detect_intent,
    detect_intent_verbose, detect_intent_verbose_with, detect_intent_with,
};
pub use engine::metrics::RunMetrics;
pub use engine::trigger::{has_decision_language, has_problem_language};
pub use patterns::{Library, TermDictionary};

// --- Internal types ---------------------------------------------------------

/// Byte span a candidate occupies in the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

impl Span {
    /// Half-open interval intersection test.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A decision pattern: a regex plus its capture-group layout.
///
/// Group conventions across the decision library:
///
/// ```text
/// group 1: verb phrase  ("let's use", "decided on", ...)
/// group 2: chosen item
/// group 3: rejected alternative (comparison forms only)
/// ```
///
/// The `Regex` is stored as a static reference (created via the `regex!`
/// helper macro in `src/macros.rs`).
pub(crate) struct DecisionPattern {
    pub name: &'static str,
    pub regex: &'static Regex,
    /// Capture group holding the chosen item.
    pub chosen_group: usize,
    /// Capture group holding the rejected alternative, for "X over Y" forms.
    pub alternative_group: Option<usize>,
}

/// A preference or problem pattern. Only the whole match (group 0) is used.
pub(crate) struct MatchPattern {
    pub name: &'static str,
    pub regex: &'static Regex,
}

/// A rationale pattern. The causal clause is always capture group 1.
pub(crate) struct RationalePattern {
    pub name: &'static str,
    pub regex: &'static Regex,
}

impl std::fmt::Debug for DecisionPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionPattern")
            .field("name", &self.name)
            .field("chosen_group", &self.chosen_group)
            .field("alternative_group", &self.alternative_group)
            .finish()
    }
}

impl std::fmt::Debug for MatchPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchPattern").field("name", &self.name).finish()
    }
}

impl std::fmt::Debug for RationalePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RationalePattern").field("name", &self.name).finish()
    }
}

/// Truncate `s` to at most `max_chars` characters, respecting char boundaries.
pub(crate) fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_overlap_is_half_open() {
        let a = Span { start: 0, end: 5 };
        let b = Span { start: 5, end: 10 };
        let c = Span { start: 4, end: 6 };

        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        // multi-byte chars count as one
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }
}
