//! Detection engine.
//!
//! The engine turns one input string into a deduplicated set of signals. It
//! is a pure, synchronous pipeline with no I/O and no state shared across
//! calls; a [`crate::Library`] is read-only after construction, so one
//! library value can serve concurrent callers without locking.
//!
//! ```text
//! input ───┬─ length guard (< 10 chars short-circuits in api.rs)
//!          │
//!          v
//!   generator::generate          (generator.rs)
//!     - global regex scan, every pattern group
//!     - rationale window search  (rationale.rs)
//!     - entity extraction        (../entities.rs)
//!     - confidence scoring       (score.rs)
//!          │
//!          v  candidates
//!   dedup::resolve_overlaps      (dedup.rs)
//!     - positional, same-kind-replace
//!          │
//!          v  survivors
//!   partition + summary          (../api.rs)
//! ```
//!
//! Per-candidate cost is bounded: the rationale search looks at a fixed
//! 350-byte window, and every pattern scan is a single linear pass of the
//! `regex` engine over the input, so overall work is O(patterns × input).

pub(crate) mod dedup;
pub(crate) mod generator;
pub(crate) mod metrics;
pub(crate) mod rationale;
pub(crate) mod score;
pub(crate) mod trigger;
