//! Preference patterns: stated habits and style choices.
//!
//! Preferences use only the whole match (group 0); the engine scores them
//! with a flat heuristic (0.8 with entities, 0.6 without) rather than the
//! full confidence scorer.

use crate::MatchPattern;

pub(crate) fn get() -> Vec<MatchPattern> {
    vec![
        // "I prefer X", "I prefer X over/to Y"
        MatchPattern {
            name: "I prefer <item>",
            regex: regex!(
                r"(?i)\bi\s+(?:really\s+|personally\s+|strongly\s+)?prefer\s+[\w+#./-]+(?:\s+(?:over|to|rather than)\s+[\w+#./-]+)?"
            ),
        },
        // "I always use X", "I never use X"
        MatchPattern {
            name: "I always/never use <item>",
            regex: regex!(r"(?i)\bi\s+(?:always|never|usually)\s+use\s+[\w+#./-]+(?:\s+[\w+#./-]+)?"),
        },
        // "my preference is (for) X"
        MatchPattern {
            name: "my preference is <item>",
            regex: regex!(
                r"(?i)\bmy\s+preference\s+is\s+(?:for\s+|to\s+use\s+)?[\w+#./-]+(?:\s+[\w+#./-]+){0,2}"
            ),
        },
        // "style should be X"
        MatchPattern {
            name: "style should be <item>",
            regex: regex!(r"(?i)\bstyle\s+should\s+be\s+[\w+#./-]+(?:\s+[\w+#./-]+){0,2}"),
        },
        // "don't use X"
        MatchPattern {
            name: "don't use <item>",
            regex: regex!(r"(?i)\bdon'?t\s+use\s+[\w+#./-]+(?:\s+[\w+#./-]+)?"),
        },
    ]
}
