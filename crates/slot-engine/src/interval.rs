//! The interval value type shared by both timeline representations.
//!
//! [`Interval`] is generic over its point type: any `Copy + PartialOrd`
//! type is a valid timeline. The two representations the engine works with
//! are [`Range`] (unit-less `f64` points) and [`Period`] (UTC datetime
//! points). Algorithms elsewhere in the crate are written once against the
//! generic type, so both representations share one code path and a list of
//! intervals can never mix the two.

use std::fmt;
use std::ops::Sub;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// An interval on a linear timeline, bounded by a start and an end point.
///
/// The constructor enforces `start <= end`; a zero-width interval
/// (`start == end`) is valid and called *degenerate*. Values are immutable
/// once built — every operation in the crate returns new intervals rather
/// than mutating existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval<T> {
    start: T,
    end: T,
}

/// A numeric interval on the canonical unit-less timeline.
pub type Range = Interval<f64>;

/// A calendar interval with UTC datetime endpoints.
pub type Period = Interval<DateTime<Utc>>;

/// Returns `a` if `b` is not comparable.
pub(crate) fn pmin<T: PartialOrd + Copy>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// Returns `a` if `b` is not comparable.
pub(crate) fn pmax<T: PartialOrd + Copy>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

impl<T: Copy + PartialOrd> Interval<T> {
    /// Creates a new interval from its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::InvalidInterval`] if `start > end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_engine::Range;
    ///
    /// let slot = Range::new(9.0, 17.0).unwrap();
    /// assert_eq!(slot.start(), 9.0);
    /// assert!(Range::new(17.0, 9.0).is_err());
    /// ```
    pub fn new(start: T, end: T) -> Result<Self> {
        if start > end {
            return Err(SlotError::InvalidInterval);
        }
        Ok(Self { start, end })
    }

    /// Builds an interval from bounds already known to be ordered.
    pub(crate) fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(!(start > end), "interval bounds out of order");
        Self { start, end }
    }

    /// The inclusive start bound.
    pub fn start(&self) -> T {
        self.start
    }

    /// The end bound.
    pub fn end(&self) -> T {
        self.end
    }

    /// `true` if the interval has zero width (`start == end`).
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// `true` if `point` lies within `[start, end)`.
    pub fn contains_point(&self, point: T) -> bool {
        self.start <= point && point < self.end
    }

    /// The overlapping part of two intervals, or `None` if they are
    /// disjoint or only touch at a boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_engine::Range;
    ///
    /// let a = Range::new(0.0, 10.0).unwrap();
    /// let b = Range::new(5.0, 15.0).unwrap();
    /// assert_eq!(a.intersection(b), Some(Range::new(5.0, 10.0).unwrap()));
    /// ```
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let start = pmax(self.start, other.start);
        let end = pmin(self.end, other.end);
        if start < end {
            Some(Self::new_unchecked(start, end))
        } else {
            None
        }
    }
}

impl<T, D> Interval<T>
where
    T: Copy + Sub<Output = D>,
{
    /// The distance between the bounds (`end - start`).
    ///
    /// For a [`Range`] this is an `f64`; for a [`Period`] it is a
    /// [`chrono::Duration`].
    pub fn length(&self) -> D {
        self.end - self.start
    }
}

// ── Calendar projection ─────────────────────────────────────────────────────

impl Period {
    /// Projects the period onto the numeric timeline as milliseconds since
    /// the Unix epoch. Sub-millisecond precision is truncated.
    pub fn to_range(self) -> Range {
        Range::new_unchecked(
            self.start.timestamp_millis() as f64,
            self.end.timestamp_millis() as f64,
        )
    }

    /// Reconstructs a period from its millisecond projection.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::TimestampOutOfRange`] if a bound does not fit
    /// chrono's representable datetime range, or
    /// [`SlotError::InvalidInterval`] if the range is inverted.
    pub fn from_range(range: Range) -> Result<Period> {
        let start = millis_to_datetime(range.start())?;
        let end = millis_to_datetime(range.end())?;
        Period::new(start, end)
    }
}

fn millis_to_datetime(millis: f64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis as i64)
        .ok_or(SlotError::TimestampOutOfRange(millis))
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn range(start: f64, end: f64) -> Range {
        Range::new(start, end).unwrap()
    }

    fn instant(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let iv = range(1.0, 8.0);
        assert_eq!(iv.start(), 1.0);
        assert_eq!(iv.end(), 8.0);
        assert!(!iv.is_degenerate());
    }

    #[test]
    fn test_new_degenerate() {
        let iv = range(5.0, 5.0);
        assert!(iv.is_degenerate());
        assert_eq!(iv.length(), 0.0);
    }

    #[test]
    fn test_new_inverted_returns_error() {
        let result = Range::new(8.0, 1.0);
        assert!(matches!(result, Err(SlotError::InvalidInterval)));
    }

    #[test]
    fn test_new_period() {
        let period = Period::new(instant(1, 9), instant(1, 17)).unwrap();
        assert_eq!(period.length(), chrono::Duration::hours(8));
        assert!(Period::new(instant(2, 0), instant(1, 0)).is_err());
    }

    #[test]
    fn test_contains_point() {
        let iv = range(0.0, 10.0);
        assert!(iv.contains_point(0.0));
        assert!(iv.contains_point(9.5));
        assert!(!iv.contains_point(10.0));
        assert!(!iv.contains_point(-1.0));
    }

    #[test]
    fn test_intersection() {
        let a = range(0.0, 10.0);
        assert_eq!(a.intersection(range(5.0, 15.0)), Some(range(5.0, 10.0)));
        assert_eq!(a.intersection(range(2.0, 8.0)), Some(range(2.0, 8.0)));
        // Touching boundaries share no interior
        assert_eq!(a.intersection(range(10.0, 20.0)), None);
        assert_eq!(a.intersection(range(12.0, 20.0)), None);
    }

    #[test]
    fn test_length() {
        assert_eq!(range(3.0, 10.5).length(), 7.5);
    }

    #[test]
    fn test_projection_round_trip() {
        let period = Period::new(instant(4, 0), instant(12, 0)).unwrap();
        let projected = period.to_range();
        assert_eq!(Period::from_range(projected).unwrap(), period);
    }

    #[test]
    fn test_projection_is_order_preserving() {
        let earlier = Period::new(instant(1, 0), instant(8, 0)).unwrap();
        let later = Period::new(instant(12, 0), instant(19, 0)).unwrap();
        assert!(earlier.to_range().end() < later.to_range().start());
    }

    #[test]
    fn test_from_range_out_of_range_timestamp() {
        let too_far = range(0.0, 1e300);
        assert!(matches!(
            Period::from_range(too_far),
            Err(SlotError::TimestampOutOfRange(_))
        ));
    }

    #[test]
    fn test_serde_round_trip_range() {
        let iv = range(1.0, 8.0);
        let json = serde_json::to_string(&iv).unwrap();
        assert_eq!(json, r#"{"start":1.0,"end":8.0}"#);
        let back: Range = serde_json::from_str(&json).unwrap();
        assert_eq!(back, iv);
    }

    #[test]
    fn test_serde_round_trip_period() {
        let period = Period::new(instant(4, 0), instant(12, 0)).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, period);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", range(1.0, 8.0)), "[1, 8]");
    }
}
