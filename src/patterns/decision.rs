//! Decision patterns: explicit choice language.
//!
//! Capture-group contract (see `DecisionPattern` in the crate root):
//! group 1 is the verb phrase, group 2 the chosen item, and group 3 (present
//! only on comparison forms) the rejected alternative.
//!
//! The chosen/rejected captures are short noun phrases: word characters
//! extended with the punctuation that shows up in technology names (`c++`,
//! `socket.io`, `ci/cd`, `c#`), one to three words. Comparison forms keep the
//! capture to two words so a greedy match cannot swallow the connective.
//!
//! Comparison forms are listed first so that, at equal start offsets, an
//! explicit "X instead of Y" claim is the first candidate to take a region
//! during overlap resolution.

use crate::DecisionPattern;

pub(crate) fn get() -> Vec<DecisionPattern> {
    vec![
        // "chose X over Y", "use X instead of Y", "picked X rather than Y".
        // The rejected side is a single token so a greedy capture cannot
        // swallow a following connective ("... instead of MongoDB because").
        DecisionPattern {
            name: "comparison <chosen> over <rejected>",
            regex: regex!(
                r"(?i)\b(chose|chosen|picked|selected|went with|going with|decided on|use|using)\s+([\w+#./-]+(?:\s+[\w+#./-]+)?)\s+(?:over|instead of|rather than|versus|vs\.?)\s+([\w+#./-]+)"
            ),
            chosen_group: 2,
            alternative_group: Some(3),
        },
        // "let's use X", "we'll use X", "going to use X"
        DecisionPattern {
            name: "let's use <chosen>",
            regex: regex!(
                r"(?i)\b(let'?s use|let'?s go with|we'?ll use|we will use|going to use)\s+([\w+#./-]+(?:\s+[\w+#./-]+){0,2})"
            ),
            chosen_group: 2,
            alternative_group: None,
        },
        // "decided on X", "decided to use X", "settled on X"
        DecisionPattern {
            name: "decided on <chosen>",
            regex: regex!(
                r"(?i)\b(decided on|decided to use|settled on)\s+([\w+#./-]+(?:\s+[\w+#./-]+){0,2})"
            ),
            chosen_group: 2,
            alternative_group: None,
        },
        // "chose X", "picked X", "selected X"
        DecisionPattern {
            name: "chose <chosen>",
            regex: regex!(r"(?i)\b(chose|picked|selected)\s+([\w+#./-]+(?:\s+[\w+#./-]+){0,2})"),
            chosen_group: 2,
            alternative_group: None,
        },
        // "using X for Y"
        DecisionPattern {
            name: "using <chosen> for <purpose>",
            regex: regex!(r"(?i)\b(using)\s+([\w+#./-]+(?:\s+[\w+#./-]+)?)\s+for\s+[\w+#./-]+"),
            chosen_group: 2,
            alternative_group: None,
        },
        // "implementing the X approach"
        DecisionPattern {
            name: "implementing <chosen> approach",
            regex: regex!(
                r"(?i)\b(implementing|we'?re implementing)\s+(?:the\s+|an?\s+)?([\w+#./-]+(?:\s+[\w+#./-]+)?)\s+approach"
            ),
            chosen_group: 2,
            alternative_group: None,
        },
        // "the approach is (to) X"
        DecisionPattern {
            name: "the approach is <chosen>",
            regex: regex!(
                r"(?i)\bthe\s+(approach|strategy|plan)\s+is\s+(?:to\s+)?([\w+#./-]+(?:\s+[\w+#./-]+){0,2})"
            ),
            chosen_group: 2,
            alternative_group: None,
        },
        // "I decided (to/on/that) X"
        DecisionPattern {
            name: "I decided <chosen>",
            regex: regex!(
                r"(?i)\b(i'?ve decided|i decided|we'?ve decided|we decided)\s+(?:to\s+|on\s+|that\s+)?([\w+#./-]+(?:\s+[\w+#./-]+){0,2})"
            ),
            chosen_group: 2,
            alternative_group: None,
        },
    ]
}
