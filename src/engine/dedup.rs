//! Positional overlap resolution.
//!
//! Candidate generation runs every pattern group over the whole input, so
//! several patterns routinely claim overlapping text regions. Without a
//! stable resolution policy the engine would report the same utterance
//! twice, and output order would depend on pattern iteration order.
//!
//! The policy here is *spatial priority with same-key replace*, a variant of
//! interval scheduling with a priority and a partition key:
//!
//! - Candidates are processed in ascending span order (stable sort, so
//!   candidates at the same offset keep library order).
//! - A candidate overlapping nothing kept so far is appended.
//! - A candidate overlapping a kept entry may only *replace* a kept entry of
//!   the same key with strictly lower priority; otherwise it is discarded.
//!   The overlap test itself ignores the key, so a different-key candidate
//!   can never coexist with an already-claimed region.
//!
//! The function is generic over the key and priority extractors so it can be
//! unit-tested independently of the pattern-matching code and reused by
//! future signal kinds without change.

use crate::Span;

/// Resolve overlapping candidates.
///
/// `span` extracts the half-open byte range of an item, `key` its partition
/// key (kind), and `priority` the value that decides same-key replacement
/// (strictly greater wins; ties keep the earlier item).
pub(crate) fn resolve_overlaps<T, K, FS, FK, FP>(
    candidates: Vec<T>,
    span: FS,
    key: FK,
    priority: FP,
) -> Vec<T>
where
    K: PartialEq,
    FS: Fn(&T) -> Span,
    FK: Fn(&T) -> K,
    FP: Fn(&T) -> f64,
{
    let mut sorted = candidates;
    sorted.sort_by_key(|c| {
        let s = span(c);
        (s.start, s.end)
    });

    let mut kept: Vec<T> = Vec::with_capacity(sorted.len());

    for candidate in sorted {
        let c_span = span(&candidate);

        let overlaps_any = kept.iter().any(|k| span(k).overlaps(&c_span));
        if !overlaps_any {
            kept.push(candidate);
            continue;
        }

        let same_key_idx = kept
            .iter()
            .position(|k| span(k).overlaps(&c_span) && key(k) == key(&candidate));

        match same_key_idx {
            Some(idx) if priority(&candidate) > priority(&kept[idx]) => {
                kept[idx] = candidate;
            }
            _ => {} // discarded: region already claimed
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        start: usize,
        end: usize,
        kind: char,
        priority: f64,
    }

    fn item(start: usize, end: usize, kind: char, priority: f64) -> Item {
        Item { start, end, kind, priority }
    }

    fn resolve(items: Vec<Item>) -> Vec<Item> {
        resolve_overlaps(
            items,
            |i| Span { start: i.start, end: i.end },
            |i| i.kind,
            |i| i.priority,
        )
    }

    #[test]
    fn disjoint_items_all_survive() {
        let out = resolve(vec![item(0, 5, 'a', 0.5), item(10, 15, 'a', 0.5), item(5, 10, 'b', 0.5)]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn higher_priority_same_kind_replaces() {
        let out = resolve(vec![item(0, 10, 'a', 0.6), item(5, 12, 'a', 0.9)]);
        assert_eq!(out, vec![item(5, 12, 'a', 0.9)]);
    }

    #[test]
    fn lower_priority_same_kind_is_discarded() {
        let out = resolve(vec![item(0, 10, 'a', 0.9), item(5, 12, 'a', 0.6)]);
        assert_eq!(out, vec![item(0, 10, 'a', 0.9)]);
    }

    #[test]
    fn equal_priority_keeps_first() {
        let out = resolve(vec![item(0, 10, 'a', 0.75), item(5, 12, 'a', 0.75)]);
        assert_eq!(out, vec![item(0, 10, 'a', 0.75)]);
    }

    #[test]
    fn different_kind_never_evicts() {
        // 'b' has higher priority but overlaps a claimed region of kind 'a'
        let out = resolve(vec![item(0, 10, 'a', 0.5), item(5, 12, 'b', 0.99)]);
        assert_eq!(out, vec![item(0, 10, 'a', 0.5)]);
    }

    #[test]
    fn processing_is_in_ascending_span_order() {
        // given out of order, the leftmost claims first
        let out = resolve(vec![item(20, 30, 'a', 0.5), item(0, 25, 'a', 0.5)]);
        assert_eq!(out, vec![item(0, 25, 'a', 0.5)]);
    }

    #[test]
    fn wide_replacement_subsumes_later_candidates() {
        // the wide 0.9 candidate replaces the first kept entry it overlaps,
        // then shadows the region the last candidate would have claimed
        let out = resolve(vec![
            item(0, 5, 'a', 0.5),
            item(6, 12, 'a', 0.5),
            item(3, 10, 'a', 0.9),
        ]);
        assert_eq!(out, vec![item(3, 10, 'a', 0.9)]);
    }
}
