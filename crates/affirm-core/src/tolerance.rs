//! Non-negative durations at tick (100 ns) resolution.

use crate::error::UsageError;

pub const TICKS_PER_MICROSECOND: i128 = 10;
pub const TICKS_PER_MILLISECOND: i128 = 10_000;
pub const TICKS_PER_SECOND: i128 = 10_000_000;
pub const TICKS_PER_MINUTE: i128 = 60 * TICKS_PER_SECOND;
pub const TICKS_PER_HOUR: i128 = 60 * TICKS_PER_MINUTE;
pub const TICKS_PER_DAY: i128 = 24 * TICKS_PER_HOUR;

const NANOS_PER_TICK: i128 = 100;

/// Maximum allowed difference for close-to comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tolerance {
    ticks: i128,
}

impl Tolerance {
    pub const ZERO: Self = Self { ticks: 0 };

    /// # Errors
    /// Returns `UsageError::NegativeTolerance` if `ticks` is negative.
    pub const fn from_ticks(ticks: i128) -> Result<Self, UsageError> {
        if ticks < 0 {
            return Err(UsageError::NegativeTolerance { ticks });
        }
        Ok(Self { ticks })
    }

    #[must_use]
    pub const fn ticks(self) -> i128 {
        self.ticks
    }

    /// Whether a distance in ticks falls within this tolerance.
    #[must_use]
    pub fn admits(self, distance: u128) -> bool {
        // ticks is never negative, so the conversion cannot fail.
        u128::try_from(self.ticks).is_ok_and(|t| distance <= t)
    }
}

/// Conversion into a validated [`Tolerance`].
pub trait IntoTolerance {
    /// # Errors
    /// Returns `UsageError::NegativeTolerance` for negative durations.
    fn into_tolerance(self) -> Result<Tolerance, UsageError>;
}

impl IntoTolerance for Tolerance {
    fn into_tolerance(self) -> Result<Tolerance, UsageError> {
        Ok(self)
    }
}

impl IntoTolerance for time::Duration {
    fn into_tolerance(self) -> Result<Tolerance, UsageError> {
        Tolerance::try_from(self)
    }
}

impl IntoTolerance for std::time::Duration {
    fn into_tolerance(self) -> Result<Tolerance, UsageError> {
        Ok(Tolerance::from(self))
    }
}

impl TryFrom<time::Duration> for Tolerance {
    type Error = UsageError;

    /// Sub-tick nanoseconds are rounded down, so any negative duration is rejected.
    fn try_from(value: time::Duration) -> Result<Self, Self::Error> {
        Self::from_ticks(value.whole_nanoseconds().div_euclid(NANOS_PER_TICK))
    }
}

impl From<std::time::Duration> for Tolerance {
    fn from(value: std::time::Duration) -> Self {
        let ticks = value.as_nanos() / NANOS_PER_TICK.unsigned_abs();
        Self {
            ticks: i128::try_from(ticks).unwrap_or(i128::MAX),
        }
    }
}
