//! The static pattern library.
//!
//! A [`Library`] bundles everything the engine matches against: the decision,
//! preference and problem pattern groups, the ordered rationale patterns, and
//! the term dictionaries used for entity extraction. It is plain immutable
//! data with no side effects; the engine takes it by reference so multiple
//! libraries with different dictionaries can coexist and tests can substitute
//! a minimal one.
//!
//! Each pattern group lives in its own file, one `get()` assembly function
//! per file:
//!
//! - `decision.rs`: explicit choice language ("let's use X", "chose X over Y")
//! - `preference.rs`: stated preferences ("I prefer X", "never use X")
//! - `problem.rs`: issue reports ("the X is broken", generic issue nouns)
//! - `rationale.rs`: causal connectives ("because ...", "to avoid ...")
//! - `terms.rs`: technology / design-pattern / tool dictionaries

pub(crate) mod decision;
pub(crate) mod preference;
pub(crate) mod problem;
pub(crate) mod rationale;
mod terms;


pub use terms::TermDictionary;

use crate::{DecisionPattern, MatchPattern, RationalePattern};

/// An immutable set of match patterns and term dictionaries.
///
/// Construct with [`Library::builtin`] for the stock English library, or
/// [`Library::with_terms`] to swap in a custom dictionary.
#[derive(Debug)]
pub struct Library {
    pub(crate) decisions: Vec<DecisionPattern>,
    pub(crate) preferences: Vec<MatchPattern>,
    pub(crate) problems: Vec<MatchPattern>,
    pub(crate) rationales: Vec<RationalePattern>,
    pub(crate) terms: TermDictionary,
}

impl Library {
    /// The built-in English pattern groups and term dictionaries.
    pub fn builtin() -> Self {
        Self::with_terms(TermDictionary::builtin())
    }

    /// The built-in pattern groups with a caller-supplied term dictionary.
    pub fn with_terms(terms: TermDictionary) -> Self {
        Library {
            decisions: decision::get(),
            preferences: preference::get(),
            problems: problem::get(),
            rationales: rationale::get(),
            terms,
        }
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::builtin()
    }
}
