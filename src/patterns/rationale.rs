//! Rationale patterns: causal connectives.
//!
//! Order matters: the rationale extractor tries these top to bottom and keeps
//! the first hit, so the strongest connective ("because") is first. The
//! clause is capture group 1 and runs to the next sentence break.

use crate::RationalePattern;

pub(crate) fn get() -> Vec<RationalePattern> {
    vec![
        RationalePattern {
            name: "because <clause>",
            regex: regex!(r"(?i)\bbecause\s+(?:of\s+)?([^.!?;\n]+)"),
        },
        RationalePattern { name: "since <clause>", regex: regex!(r"(?i)\bsince\s+([^.!?;\n]+)") },
        RationalePattern { name: "due to <clause>", regex: regex!(r"(?i)\bdue\s+to\s+([^.!?;\n]+)") },
        RationalePattern {
            name: "to avoid <clause>",
            regex: regex!(r"(?i)\bto\s+avoid\s+([^.!?;\n]+)"),
        },
        RationalePattern {
            name: "for <benefit>",
            regex: regex!(
                r"(?i)\bfor\s+((?:better|faster|easier|simpler|improved|cleaner)\s+[^.!?;\n]+)"
            ),
        },
        RationalePattern {
            name: "so that <clause>",
            regex: regex!(r"(?i)\bso\s+that\s+([^.!?;\n]+)"),
        },
        RationalePattern {
            name: "in order to <clause>",
            regex: regex!(r"(?i)\bin\s+order\s+to\s+([^.!?;\n]+)"),
        },
        RationalePattern { name: "as it <clause>", regex: regex!(r"(?i)\bas\s+it\s+([^.!?;\n]+)") },
    ]
}
