//! Free-slot discovery: the complement of a busy set on the timeline.
//!
//! [`find_free_slots`] computes the gaps left between a set of busy
//! intervals, optionally bounded by a limit interval that clips internal
//! gaps and contributes leading/trailing free segments. [`is_slot_free`]
//! answers whether one candidate interval is clear of a busy set.

use std::ops::Sub;

use crate::conflict::overlaps;
use crate::interval::{pmax, pmin, Interval};
use crate::merge::merge_all;

/// Finds the free slots between busy intervals.
///
/// The busy list is coalesced first, so input order and redundancy do not
/// matter. Without a limit, the result is exactly the internal gaps between
/// coalesced busy intervals. With a limit:
///
/// - a limit lying entirely outside the busy span (or only touching it) is
///   returned whole — all of it is free;
/// - internal gaps are clipped to the limit, and gaps wholly outside it
///   are dropped;
/// - when the limit extends before the first busy interval or past the
///   last one, the uncovered head and tail become leading/trailing free
///   slots.
///
/// The result is ordered left to right. An empty busy list yields the
/// whole limit, or nothing when no limit is given.
///
/// # Examples
///
/// ```
/// use slot_engine::{find_free_slots, Range};
///
/// let busy = [
///     Range::new(1.0, 8.0).unwrap(),
///     Range::new(4.0, 12.0).unwrap(),
///     Range::new(12.0, 19.0).unwrap(),
///     Range::new(21.0, 28.0).unwrap(),
/// ];
/// assert_eq!(find_free_slots(&busy, None), vec![Range::new(19.0, 21.0).unwrap()]);
///
/// let workday = Range::new(0.0, 30.0).unwrap();
/// assert_eq!(find_free_slots(&busy, Some(workday)), vec![
///     Range::new(0.0, 1.0).unwrap(),
///     Range::new(19.0, 21.0).unwrap(),
///     Range::new(28.0, 30.0).unwrap(),
/// ]);
/// ```
pub fn find_free_slots<T>(busy: &[Interval<T>], limit: Option<Interval<T>>) -> Vec<Interval<T>>
where
    T: Copy + PartialOrd,
{
    let merged = merge_all(busy);
    let (Some(first), Some(last)) = (merged.first(), merged.last()) else {
        return limit.into_iter().collect();
    };

    let mut free = Vec::new();
    match limit {
        None => {
            for pair in merged.windows(2) {
                free.push(Interval::new_unchecked(pair[0].end(), pair[1].start()));
            }
        }
        Some(limit) => {
            // A limit disjoint from the busy span (or touching it) is free
            // as a whole.
            if limit.end() <= first.start() || limit.start() >= last.end() {
                return vec![limit];
            }

            if limit.start() < first.start() {
                free.push(Interval::new_unchecked(limit.start(), first.start()));
            }
            for pair in merged.windows(2) {
                let (gap_start, gap_end) = (pair[0].end(), pair[1].start());
                if limit.start() < gap_end && gap_start < limit.end() {
                    free.push(Interval::new_unchecked(
                        pmax(gap_start, limit.start()),
                        pmin(gap_end, limit.end()),
                    ));
                }
            }
            // The coalesced list is sorted and disjoint, so the last
            // element carries the maximum end.
            if last.end() < limit.end() {
                free.push(Interval::new_unchecked(last.end(), limit.end()));
            }
        }
    }
    free
}

/// `true` if `candidate` strictly overlaps no busy interval.
///
/// Uses the strict [`overlaps`] predicate: a candidate that only touches
/// busy boundaries (zero-width intersection) is still free. A negative
/// `tolerance` additionally demands clearance of `|tolerance|` around every
/// busy interval; a positive one forgives shallow overlaps up to the
/// tolerance.
///
/// # Examples
///
/// ```
/// use slot_engine::{is_slot_free, Range};
///
/// let busy = [Range::new(1.0, 8.0).unwrap(), Range::new(12.0, 19.0).unwrap()];
/// assert!(is_slot_free(Range::new(8.0, 12.0).unwrap(), &busy, 0.0));
/// assert!(!is_slot_free(Range::new(7.0, 12.0).unwrap(), &busy, 0.0));
/// ```
pub fn is_slot_free<T, D>(candidate: Interval<T>, busy: &[Interval<T>], tolerance: D) -> bool
where
    T: Copy + PartialOrd + Sub<Output = D>,
    D: PartialOrd + Copy,
{
    !busy.iter().any(|interval| overlaps(candidate, *interval, tolerance))
}

// ── Tests ───────────────────────────────────────────────────────────────────
