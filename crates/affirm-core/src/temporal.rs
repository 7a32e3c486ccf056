//! Tolerance-based comparison of instants and times of day.

use crate::error::UsageError;
use crate::tolerance::{IntoTolerance, TICKS_PER_DAY};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// A value with a position on a tick (100 ns) time line.
///
/// Ticks are `i128` so subtracting any two values cannot overflow, even at
/// the edges of the representable range.
pub trait Temporal: Copy {
    fn ticks(&self) -> i128;

    /// Absolute distance in ticks.
    fn distance(&self, other: &Self) -> u128 {
        self.ticks().abs_diff(other.ticks())
    }
}

impl Temporal for OffsetDateTime {
    /// Offset-independent: two values naming the same moment have equal ticks.
    fn ticks(&self) -> i128 {
        self.unix_timestamp_nanos().div_euclid(100)
    }
}

impl Temporal for PrimitiveDateTime {
    fn ticks(&self) -> i128 {
        self.assume_utc().ticks()
    }
}

impl Temporal for Date {
    fn ticks(&self) -> i128 {
        i128::from(self.to_julian_day()) * TICKS_PER_DAY
    }
}

impl Temporal for Time {
    fn ticks(&self) -> i128 {
        let (h, m, s, nanos) = self.as_hms_nano();
        let seconds = i128::from(h) * 3600 + i128::from(m) * 60 + i128::from(s);
        seconds * 10_000_000 + i128::from(nanos / 100)
    }

    /// Shortest way around the 24 hour clock.
    fn distance(&self, other: &Self) -> u128 {
        let direct = self.ticks().abs_diff(other.ticks());
        let day = TICKS_PER_DAY.unsigned_abs();
        direct.min(day - direct)
    }
}

/// Whether `subject` lies within `tolerance` of `expected`.
///
/// The tolerance is validated before anything else. An absent subject is
/// never close.
///
/// # Errors
/// Returns `UsageError::NegativeTolerance` if the tolerance is negative.
pub fn is_close_to<T, D>(
    subject: Option<&T>,
    expected: &T,
    tolerance: D,
) -> Result<bool, UsageError>
where
    T: Temporal,
    D: IntoTolerance,
{
    let tolerance = tolerance.into_tolerance()?;
    Ok(subject.is_some_and(|s| tolerance.admits(s.distance(expected))))
}

/// Negation of [`is_close_to`] for present subjects. An absent subject is
/// not "not close" either, so callers must handle it before asking.
///
/// # Errors
/// Returns `UsageError::NegativeTolerance` if the tolerance is negative.
pub fn is_not_close_to<T, D>(
    subject: Option<&T>,
    expected: &T,
    tolerance: D,
) -> Result<bool, UsageError>
where
    T: Temporal,
    D: IntoTolerance,
{
    let tolerance = tolerance.into_tolerance()?;
    Ok(subject.is_some_and(|s| !tolerance.admits(s.distance(expected))))
}

/// Offset-independent equality.
#[must_use]
pub fn same_instant<T: Temporal>(a: &T, b: &T) -> bool {
    a.ticks() == b.ticks()
}
