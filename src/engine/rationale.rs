//! Windowed causal-clause search.
//!
//! Given the full input and the byte position of a match, look for a causal
//! connective in a bounded window around the match: 50 bytes of context
//! before it and 300 after. The rationale patterns are tried in their fixed
//! library order and the first hit wins; patterns are never combined. The
//! fixed window keeps per-candidate cost independent of input length.

use crate::{RationalePattern, truncate_chars};

/// Context bytes searched before the match position.
const WINDOW_BEFORE: usize = 50;
/// Bytes searched from the match position onward.
const WINDOW_AFTER: usize = 300;
/// Maximum stored rationale length, in chars.
pub(crate) const RATIONALE_MAX_CHARS: usize = 200;

/// First causal clause found near `position`, trimmed and truncated.
pub(crate) fn extract_rationale(
    full_text: &str,
    position: usize,
    patterns: &[RationalePattern],
) -> Option<String> {
    let start = snap_back(full_text, position.saturating_sub(WINDOW_BEFORE));
    let end = snap_forward(full_text, position.saturating_add(WINDOW_AFTER).min(full_text.len()));
    let window = &full_text[start..end];

    for pattern in patterns {
        if let Some(caps) = pattern.regex.captures(window) {
            if let Some(clause) = caps.get(1) {
                let clause = clause.as_str().trim();
                if !clause.is_empty() {
                    return Some(truncate_chars(clause, RATIONALE_MAX_CHARS).to_string());
                }
            }
        }
    }

    None
}

/// Largest char boundary at or below `idx`.
fn snap_back(s: &str, mut idx: usize) -> usize {
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Smallest char boundary at or above `idx` (capped at the string end).
fn snap_forward(s: &str, mut idx: usize) -> usize {
    while idx < s.len() && !s.is_char_boundary(idx) {
        idx += 1;
    }
    idx.min(s.len())
}
