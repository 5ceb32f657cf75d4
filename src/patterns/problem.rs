//! Problem patterns: issue reports.
//!
//! Structured forms come first; the generic issue-noun pattern is last so a
//! structured match is the first to claim its region during overlap
//! resolution. Problems score a flat 0.75.

use crate::MatchPattern;

pub(crate) fn get() -> Vec<MatchPattern> {
    vec![
        // "the X is broken", "the X keeps failing", "the X crashed"
        MatchPattern {
            name: "the <subject> is broken",
            regex: regex!(
                r"(?i)\bthe\s+[\w-]+(?:\s+[\w-]+){0,2}?\s+(?:is\s+broken|is\s+failing|is\s+not\s+working|isn'?t\s+working|keeps\s+failing|fails|crashes|crashed|stopped\s+working)"
            ),
        },
        // "getting an error with X", "seeing errors in X"
        MatchPattern {
            name: "getting an error with <subject>",
            regex: regex!(
                r"(?i)\b(?:getting|seeing|got|having)\s+(?:an?\s+)?(?:error|errors|exception|exceptions|issue|issues|problem|problems)\s+(?:with|in|on)\s+[\w+#./-]+(?:\s+[\w+#./-]+)?"
            ),
        },
        // "fails to X"
        MatchPattern {
            name: "fails to <action>",
            regex: regex!(r"(?i)\bfails?\s+to\s+[\w+#./-]+(?:\s+[\w+#./-]+){0,3}"),
        },
        // "timeout in X", "exception in X", "crash on X"
        MatchPattern {
            name: "<fault> in <subject>",
            regex: regex!(
                r"(?i)\b(?:timeout|exception|crash|panic|failure|deadlock)s?\s+(?:in|on|at|with)\s+[\w+#./-]+(?:\s+[\w+#./-]+)?"
            ),
        },
        // bare issue nouns
        MatchPattern {
            name: "issue noun",
            regex: regex!(r"(?i)\b(?:error|bug|broken|failing|crash|exception|timeout)s?\b"),
        },
    ]
}
