use crate::Span;
use crate::engine::dedup::resolve_overlaps;
use crate::engine::generator;
use crate::engine::metrics::RunMetrics;
use crate::patterns::Library;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::time::Instant;

static DEFAULT_LIBRARY: Lazy<Library> = Lazy::new(Library::builtin);

/// Summary used when the input is too short to run any patterns.
const SUMMARY_TOO_SHORT: &str = "No intents detected (prompt too short)";
/// Summary used when patterns ran but every partition came back empty.
const SUMMARY_EMPTY: &str = "No intents detected";

/// The kind of a detected signal.
///
/// `Question` and `Instruction` are forward-compatibility placeholders: no
/// pattern group produces them today, but overlap resolution and report
/// partitioning are generic over kind equality, so adding pattern groups for
/// them later requires no engine change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum SignalKind {
    Decision,
    Preference,
    Problem,
    Question,
    Instruction,
}

impl SignalKind {
    /// Human-readable singular label, used in summaries and the CLI report.
    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::Decision => "decision",
            SignalKind::Preference => "preference",
            SignalKind::Problem => "problem",
            SignalKind::Question => "question",
            SignalKind::Instruction => "instruction",
        }
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One structured extraction produced from a text span.
///
/// Signals are ephemeral: built fresh for each detection run, never mutated
/// after construction (overlap resolution replaces them wholesale).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// What this signal is.
    pub kind: SignalKind,
    /// Heuristic confidence, always within `[0.1, 0.99]`.
    pub confidence: f64,
    /// The exact substring that triggered the signal, capped at 300 chars.
    pub matched_text: String,
    /// Known terms found in the matched text (and rationale, for decisions).
    /// Sorted and deduplicated.
    pub entities: Vec<String>,
    /// Causal clause associated with the match, capped at 200 chars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    /// Rejected alternatives, present only for comparison-form decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
    /// Byte offset of the match start in the original input. Used for
    /// ordering and overlap computation only.
    pub position: usize,
}

impl Signal {
    /// Byte span this signal's matched text occupies.
    pub(crate) fn span(&self) -> Span {
        Span { start: self.position, end: self.position + self.matched_text.len() }
    }
}

/// Options that affect detection behavior.
///
/// This is intentionally minimal today; the defaults reproduce the stock
/// engine behavior and are what [`detect_intent`] uses.
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum confidence for a decision to appear in the `decisions`
    /// partition. Preferences and problems are not gated.
    pub decision_threshold: f64,
    /// Inputs shorter than this many chars short-circuit to an empty report.
    pub min_input_chars: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options { decision_threshold: 0.7, min_input_chars: 10 }
    }
}

/// Result of [`detect_intent`] and [`detect_intent_with`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentReport {
    /// Every surviving signal, in ascending span order.
    pub all: Vec<Signal>,
    /// Decisions at or above the confidence threshold.
    pub decisions: Vec<Signal>,
    /// All surviving preferences (no confidence gate).
    pub preferences: Vec<Signal>,
    /// All surviving problems (no confidence gate).
    pub problems: Vec<Signal>,
    /// Human-readable one-liner, e.g. `"Detected: 2 decisions, 1 preference"`.
    pub summary: String,
}

impl IntentReport {
    fn empty(summary: &str) -> Self {
        IntentReport {
            all: Vec::new(),
            decisions: Vec::new(),
            preferences: Vec::new(),
            problems: Vec::new(),
            summary: summary.to_string(),
        }
    }
}

/// Extra details returned by the verbose detection path.
///
/// Meant for debugging and profiling without dumping the entire internal
/// state; the normal [`detect_intent`] path does not allocate these.
#[derive(Debug, Clone)]
pub struct DetectDetails {
    /// Run timings.
    pub metrics: RunMetrics,
    /// Every raw candidate before overlap resolution, in generation order.
    pub candidates: Vec<Signal>,
    /// How many candidates overlap resolution discarded or replaced.
    pub discarded: usize,
}

/// Result of [`detect_intent_verbose`] and [`detect_intent_verbose_with`].
#[derive(Debug, Clone)]
pub struct IntentReportVerbose {
    pub report: IntentReport,
    pub details: DetectDetails,
}

/// Detect intent signals in `text` using the built-in library and defaults.
///
/// Total over all inputs: never fails, never panics, and returns an empty
/// report (with an explanatory summary) for inputs under 10 chars.
///
/// # Example
/// ```
/// use signalis::detect_intent;
///
/// let report = detect_intent("Let's use PostgreSQL instead of MongoDB because of JSON support");
/// assert_eq!(report.decisions.len(), 1);
/// ```
pub fn detect_intent(text: &str) -> IntentReport {
    detect_intent_with(text, &DEFAULT_LIBRARY, &Options::default())
}

/// Detect intent signals using a caller-supplied library and options.
///
/// Use this to substitute a minimal term dictionary in tests, or to run
/// several differently-configured engines side by side.
pub fn detect_intent_with(text: &str, library: &Library, options: &Options) -> IntentReport {
    if text.chars().count() < options.min_input_chars {
        return IntentReport::empty(SUMMARY_TOO_SHORT);
    }

    let candidates = generator::generate(text, library);
    let all = resolve_overlaps(candidates, Signal::span, |s| s.kind, |s| s.confidence);
    partition(all, options)
}

/// Like [`detect_intent`], with timing and candidate details attached.
pub fn detect_intent_verbose(text: &str) -> IntentReportVerbose {
    detect_intent_verbose_with(text, &DEFAULT_LIBRARY, &Options::default())
}

/// Detect with timing and pre-resolution candidates attached.
///
/// This powers the CLI debug report; the default [`detect_intent_with`] path
/// does not collect these extras.
pub fn detect_intent_verbose_with(
    text: &str,
    library: &Library,
    options: &Options,
) -> IntentReportVerbose {
    let run_start = Instant::now();

    if text.chars().count() < options.min_input_chars {
        return IntentReportVerbose {
            report: IntentReport::empty(SUMMARY_TOO_SHORT),
            details: DetectDetails {
                metrics: RunMetrics { total: run_start.elapsed(), ..Default::default() },
                candidates: Vec::new(),
                discarded: 0,
            },
        };
    }

    let generate_start = Instant::now();
    let candidates = generator::generate(text, library);
    let generate = generate_start.elapsed();

    let dedup_start = Instant::now();
    let all = resolve_overlaps(candidates.clone(), Signal::span, |s| s.kind, |s| s.confidence);
    let dedup = dedup_start.elapsed();

    let discarded = candidates.len() - all.len();
    let report = partition(all, options);

    IntentReportVerbose {
        report,
        details: DetectDetails {
            metrics: RunMetrics { total: run_start.elapsed(), generate, dedup },
            candidates,
            discarded,
        },
    }
}

/// Split surviving signals into the report partitions and build the summary.
fn partition(all: Vec<Signal>, options: &Options) -> IntentReport {
    let decisions: Vec<Signal> = all
        .iter()
        .filter(|s| s.kind == SignalKind::Decision && s.confidence >= options.decision_threshold)
        .cloned()
        .collect();
    let preferences: Vec<Signal> =
        all.iter().filter(|s| s.kind == SignalKind::Preference).cloned().collect();
    let problems: Vec<Signal> =
        all.iter().filter(|s| s.kind == SignalKind::Problem).cloned().collect();

    let summary = build_summary(decisions.len(), preferences.len(), problems.len());

    IntentReport { all, decisions, preferences, problems, summary }
}

/// Comma-joined pluralized clauses in fixed partition order.
fn build_summary(decisions: usize, preferences: usize, problems: usize) -> String {
    if decisions == 0 && preferences == 0 && problems == 0 {
        return SUMMARY_EMPTY.to_string();
    }

    let mut clauses: Vec<String> = Vec::with_capacity(3);
    for (count, kind) in [
        (decisions, SignalKind::Decision),
        (preferences, SignalKind::Preference),
        (problems, SignalKind::Problem),
    ] {
        if count > 0 {
            clauses.push(count_clause(count, kind.label()));
        }
    }

    format!("Detected: {}", clauses.join(", "))
}

fn count_clause(count: usize, noun: &str) -> String {
    if count == 1 { format!("1 {noun}") } else { format!("{count} {noun}s") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::TermDictionary;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn comparison_decision_end_to_end() {
        let report = detect_intent(
            "Let's use PostgreSQL instead of MongoDB because it has better JSON support",
        );

        assert_eq!(report.decisions.len(), 1);
        let decision = &report.decisions[0];
        assert_eq!(decision.kind, SignalKind::Decision);
        // 0.5 base + 0.15 rationale + 0.1 alternatives + 0.1 two entities;
        // "use" alone is not a decisive verb
        assert_close(decision.confidence, 0.85);
        assert!(decision.entities.contains(&"postgresql".to_string()));
        assert!(decision.entities.contains(&"mongodb".to_string()));
        assert_eq!(decision.alternatives.as_deref(), Some(&["MongoDB".to_string()][..]));
        assert!(decision.rationale.as_deref().unwrap().contains("it has better JSON support"));
    }

    #[test]
    fn preference_with_known_terms() {
        let report = detect_intent("I prefer TypeScript over JavaScript");

        assert_eq!(report.preferences.len(), 1);
        let pref = &report.preferences[0];
        assert_eq!(pref.confidence, 0.8);
        assert!(pref.entities.contains(&"typescript".to_string()));
        assert!(pref.entities.contains(&"javascript".to_string()));
    }

    #[test]
    fn problem_report_scores_flat() {
        let report = detect_intent("The login endpoint is broken and throws a timeout exception");

        assert!(!report.problems.is_empty());
        assert!(report.problems.iter().all(|s| s.confidence == 0.75));
    }

    #[test]
    fn short_input_short_circuits() {
        for text in ["", "ok", "hi there!"] {
            let report = detect_intent(text);
            assert!(report.all.is_empty());
            assert_eq!(report.summary, SUMMARY_TOO_SHORT);
        }
    }

    #[test]
    fn overlapping_decisions_keep_the_stronger() {
        let verbose =
            detect_intent_verbose("decided on Redis instead of Memcached because of latency spikes");

        let candidate_decisions: Vec<_> = verbose
            .details
            .candidates
            .iter()
            .filter(|s| s.kind == SignalKind::Decision)
            .collect();
        assert!(candidate_decisions.len() >= 2, "expected overlapping decision candidates");

        let kept: Vec<_> =
            verbose.report.all.iter().filter(|s| s.kind == SignalKind::Decision).collect();
        assert_eq!(kept.len(), 1);

        let best = candidate_decisions
            .iter()
            .map(|s| s.confidence)
            .fold(f64::MIN, f64::max);
        assert_eq!(kept[0].confidence, best);
        assert!(verbose.details.discarded >= 1);
    }

    #[test]
    fn weak_decision_stays_out_of_decisions_partition() {
        let report = detect_intent("the plan is to migrate slowly next quarter");

        let weak = report.all.iter().find(|s| s.kind == SignalKind::Decision).unwrap();
        assert!(weak.confidence < 0.7);
        assert!(report.decisions.is_empty());
        // the summary reflects the partitions, not `all`
        assert_eq!(report.summary, SUMMARY_EMPTY);
    }

    #[test]
    fn threshold_is_configurable() {
        let options = Options { decision_threshold: 0.4, ..Options::default() };
        let report = detect_intent_with(
            "the plan is to migrate slowly next quarter",
            &DEFAULT_LIBRARY,
            &options,
        );
        assert_eq!(report.decisions.len(), 1);
    }

    #[test]
    fn summary_pluralizes_each_partition() {
        assert_eq!(build_summary(2, 1, 0), "Detected: 2 decisions, 1 preference");
        assert_eq!(build_summary(1, 0, 3), "Detected: 1 decision, 3 problems");
        assert_eq!(build_summary(0, 0, 1), "Detected: 1 problem");
        assert_eq!(build_summary(0, 0, 0), SUMMARY_EMPTY);
    }

    #[test]
    fn summary_depends_only_on_partition_sizes() {
        let a = detect_intent("I prefer TypeScript over JavaScript");
        let b = detect_intent("I always use neovim for editing");
        assert_eq!(a.summary, b.summary);
    }

    #[test]
    fn detection_is_deterministic() {
        let text = "We chose Kafka over RabbitMQ because of throughput, but the consumer \
                    keeps failing with a timeout in production. I prefer explicit retries.";

        let first = detect_intent(text);
        let second = detect_intent(text);
        assert_eq!(first, second);
    }

    #[test]
    fn custom_library_with_minimal_dictionary() {
        let terms = TermDictionary::new(&["frobdb"], &[], &[]);
        let library = Library::with_terms(terms);

        let report =
            detect_intent_with("I prefer FrobDB for analytics", &library, &Options::default());
        assert_eq!(report.preferences.len(), 1);
        assert_eq!(report.preferences[0].entities, vec!["frobdb".to_string()]);
        assert_eq!(report.preferences[0].confidence, 0.8);
    }

    proptest! {
        #[test]
        fn engine_is_total_and_bounded(text in ".{0,400}") {
            let report = detect_intent(&text);

            for signal in &report.all {
                prop_assert!(signal.confidence >= 0.1 && signal.confidence <= 0.99);
                prop_assert!(signal.matched_text.chars().count() <= 300);
                if let Some(rationale) = &signal.rationale {
                    prop_assert!(rationale.chars().count() <= 200);
                }
            }
        }

        #[test]
        fn decisions_partition_matches_filter(text in ".{0,400}") {
            let report = detect_intent(&text);

            let expected: Vec<_> = report
                .all
                .iter()
                .filter(|s| s.kind == SignalKind::Decision && s.confidence >= 0.7)
                .cloned()
                .collect();
            prop_assert_eq!(report.decisions, expected);
        }

        #[test]
        fn no_same_kind_overlap_survives(text in ".{0,400}") {
            let report = detect_intent(&text);

            for (i, a) in report.all.iter().enumerate() {
                for b in report.all.iter().skip(i + 1) {
                    if a.kind == b.kind {
                        let a_end = a.position + a.matched_text.len();
                        let b_end = b.position + b.matched_text.len();
                        prop_assert!(a_end <= b.position || b_end <= a.position);
                    }
                }
            }
        }

        #[test]
        fn repeated_runs_are_identical(text in ".{0,200}") {
            prop_assert_eq!(detect_intent(&text), detect_intent(&text));
        }
    }
}
