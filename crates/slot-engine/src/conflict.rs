//! Tolerance-aware overlap detection between intervals.
//!
//! The overlap amount of a pair is `first.end - second.start` once the pair
//! is ordered by start: positive when the intervals share interior,
//! zero when they touch, negative when a gap separates them. Every
//! predicate compares that amount against a signed `tolerance` in the
//! timeline's distance type (`f64` for [`Range`](crate::Range)s,
//! [`chrono::Duration`] for [`Period`](crate::Period)s):
//!
//! - `tolerance = 0` — the plain overlap test
//! - `tolerance > 0` — only overlaps deeper than the tolerance count
//! - `tolerance < 0` — a gap of up to `|tolerance|` still counts

use std::ops::Sub;

use crate::interval::Interval;

/// How far past `second`'s start the earlier interval reaches.
fn overlap_amount<T, D>(a: Interval<T>, b: Interval<T>) -> D
where
    T: Copy + PartialOrd + Sub<Output = D>,
{
    let (first, second) = if a.start() <= b.start() { (a, b) } else { (b, a) };
    first.end() - second.start()
}

/// `true` if the intervals overlap by strictly more than `tolerance`.
///
/// Boundary-touching intervals do not overlap at zero tolerance; see
/// [`overlaps_or_touches`] for the boundary-inclusive test.
///
/// # Examples
///
/// ```
/// use slot_engine::{overlaps, Range};
///
/// let a = Range::new(1.0, 8.0).unwrap();
/// let b = Range::new(4.0, 12.0).unwrap();
/// assert!(overlaps(a, b, 0.0));
/// assert!(overlaps(a, b, 3.0));
/// assert!(!overlaps(a, b, 4.0));
/// ```
pub fn overlaps<T, D>(a: Interval<T>, b: Interval<T>, tolerance: D) -> bool
where
    T: Copy + PartialOrd + Sub<Output = D>,
    D: PartialOrd,
{
    overlap_amount(a, b) > tolerance
}

/// `true` if the intervals overlap by at least `tolerance`.
///
/// The boundary-inclusive variant of [`overlaps`]: at zero tolerance a
/// touching pair counts, and at a negative tolerance a gap of exactly
/// `|tolerance|` still counts.
pub fn overlaps_or_touches<T, D>(a: Interval<T>, b: Interval<T>, tolerance: D) -> bool
where
    T: Copy + PartialOrd + Sub<Output = D>,
    D: PartialOrd,
{
    overlap_amount(a, b) >= tolerance
}

/// Short-circuiting existential scan over every unordered pair.
fn any_pair<T>(items: &[T], mut pred: impl FnMut(&T, &T) -> bool) -> bool {
    for (i, left) in items.iter().enumerate() {
        for right in &items[i + 1..] {
            if pred(left, right) {
                return true;
            }
        }
    }
    false
}

/// `true` if any pair in the list satisfies [`overlaps`] at `tolerance`.
///
/// Every unordered pair is considered, not just neighbors by start.
pub fn any_overlap<T, D>(intervals: &[Interval<T>], tolerance: D) -> bool
where
    T: Copy + PartialOrd + Sub<Output = D>,
    D: PartialOrd + Copy,
{
    any_pair(intervals, |a, b| overlaps(*a, *b, tolerance))
}

/// `true` if any pair in the list satisfies [`overlaps_or_touches`] at
/// `tolerance`.
pub fn any_overlap_or_touch<T, D>(intervals: &[Interval<T>], tolerance: D) -> bool
where
    T: Copy + PartialOrd + Sub<Output = D>,
    D: PartialOrd + Copy,
{
    any_pair(intervals, |a, b| overlaps_or_touches(*a, *b, tolerance))
}

// ── Tests ───────────────────────────────────────────────────────────────────
