//! Trigger scanning (cheap input pre-classification).
//!
//! A lowercase keyword scan over the raw input, independent of the full
//! pattern library. Callers that only need a boolean ("might this message
//! contain a decision at all?") use this instead of paying for a full
//! detection run.
//!
//! This is a *heuristic* scan: false positives are expected and acceptable,
//! since anything acting on a specific signal still runs the full engine.

use bitflags::bitflags;

bitflags! {
    /// Coarse characteristics detected from the raw input.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct TriggerMask: u8 {
        /// Input contains decision-flavored keywords.
        const DECISIONISH = 1 << 0;
        /// Input contains problem-flavored keywords.
        const PROBLEMISH = 1 << 1;
    }
}

const DECISION_KEYWORDS: &[&str] = &[
    "decided",
    "decision",
    "chose",
    "chosen",
    "choose",
    "picked",
    "selected",
    "let's use",
    "lets use",
    "going with",
    "went with",
    "settled on",
    "instead of",
];

const PROBLEM_KEYWORDS: &[&str] = &[
    "error",
    "bug",
    "broken",
    "failing",
    "fails",
    "crash",
    "exception",
    "timeout",
    "not working",
    "doesn't work",
];

/// Scan `input` for coarse trigger keywords.
///
/// Note: uses `to_lowercase()` so mixed-case chat text matches; the keyword
/// lists themselves are plain ASCII.
pub(crate) fn scan(input: &str) -> TriggerMask {
    let lower = input.to_lowercase();
    let mut mask = TriggerMask::empty();

    if DECISION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        mask |= TriggerMask::DECISIONISH;
    }
    if PROBLEM_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        mask |= TriggerMask::PROBLEMISH;
    }

    mask
}

/// Cheap, lower-precision check for decision-flavored language.
///
/// Keyword containment only; no pattern library, no scoring. Use
/// [`crate::detect_intent`] when the actual signals are needed.
pub fn has_decision_language(text: &str) -> bool {
    scan(text).contains(TriggerMask::DECISIONISH)
}

/// Cheap, lower-precision check for problem-flavored language.
pub fn has_problem_language(text: &str) -> bool {
    scan(text).contains(TriggerMask::PROBLEMISH)
}
