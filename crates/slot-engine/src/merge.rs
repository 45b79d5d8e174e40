//! Pairwise interval merging and list coalescing.
//!
//! Two intervals are *mergeable* when they overlap or touch: once the pair
//! is ordered by start, `first.end >= second.start`. A touching pair
//! (`first.end == second.start`) leaves a zero-width gap and counts as
//! mergeable. [`merge_two`] resolves one pair; [`merge_all`] coalesces an
//! arbitrary set into the minimal list of disjoint, non-touching intervals
//! with the same total coverage.

use std::cmp::Ordering;

use crate::interval::{pmax, Interval};

/// Merges two intervals into one when they overlap or touch.
///
/// The inputs may come in either order. A one-element result is the merged
/// interval covering both inputs; a two-element result means no merge
/// happened and returns the inputs untouched, sorted by start.
///
/// The merged end is the maximum of the *original* ends: after ordering by
/// start, the earlier-starting interval may still end later.
///
/// # Examples
///
/// ```
/// use slot_engine::{merge_two, Range};
///
/// let a = Range::new(1.0, 8.0).unwrap();
/// let b = Range::new(4.0, 12.0).unwrap();
/// assert_eq!(merge_two(a, b), vec![Range::new(1.0, 12.0).unwrap()]);
///
/// let c = Range::new(12.0, 19.0).unwrap();
/// assert_eq!(merge_two(c, a), vec![a, c]);
/// ```
pub fn merge_two<T>(a: Interval<T>, b: Interval<T>) -> Vec<Interval<T>>
where
    T: Copy + PartialOrd,
{
    let (first, second) = if a.start() <= b.start() { (a, b) } else { (b, a) };
    if first.end() >= second.start() {
        vec![Interval::new_unchecked(
            first.start(),
            pmax(a.end(), b.end()),
        )]
    } else {
        vec![first, second]
    }
}

/// Coalesces a set of intervals into the minimal covering set.
///
/// The result is sorted by start and pairwise disjoint: between any two
/// adjacent output intervals there is a gap of positive width. Chains of
/// transitively overlapping or touching inputs collapse into a single
/// interval. The input slice is copied, never mutated.
///
/// # Examples
///
/// ```
/// use slot_engine::{merge_all, Range};
///
/// let busy = [
///     Range::new(1.0, 8.0).unwrap(),
///     Range::new(4.0, 12.0).unwrap(),
///     Range::new(12.0, 19.0).unwrap(),
///     Range::new(21.0, 28.0).unwrap(),
/// ];
/// let merged = merge_all(&busy);
/// assert_eq!(merged, vec![
///     Range::new(1.0, 19.0).unwrap(),
///     Range::new(21.0, 28.0).unwrap(),
/// ]);
/// ```
pub fn merge_all<T>(intervals: &[Interval<T>]) -> Vec<Interval<T>>
where
    T: Copy + PartialOrd,
{
    let mut sorted = intervals.to_vec();
    // Incomparable starts (e.g. NaN bounds) sort as equal rather than panic.
    sorted.sort_by(|a, b| a.start().partial_cmp(&b.start()).unwrap_or(Ordering::Equal));

    let mut merged: Vec<Interval<T>> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(last) if last.end() >= interval.start() => {
                *last = Interval::new_unchecked(last.start(), pmax(last.end(), interval.end()));
            }
            _ => merged.push(interval),
        }
    }
    merged
}

// ── Tests ───────────────────────────────────────────────────────────────────
