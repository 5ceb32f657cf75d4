//! Engine run metrics.
//!
//! Small opt-in timing structs for the verbose detection path. The normal
//! [`crate::detect_intent`] path does not collect these; callers that want
//! visibility (the CLI debug report, regression profiling) go through
//! [`crate::detect_intent_verbose_with`].

use std::time::Duration;

/// Timings for one detection run.
#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Time spent generating candidates (pattern scan + rationale + entities
    /// + scoring).
    pub generate: Duration,
    /// Time spent resolving overlapping candidates.
    pub dedup: Duration,
}
