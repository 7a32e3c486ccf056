//! Assertions on dates, times of day and instants.

use crate::context::{Context, WithContext, show_list};
use affirm_core::{
    Error, FormatValue, IntoTolerance, Temporal, Tolerance, is_close_to, is_not_close_to,
    same_instant,
};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

/// A temporal type with a default subject name.
pub trait TemporalSubject: Temporal + FormatValue {
    const NAME: &'static str;
}

impl TemporalSubject for Date {
    const NAME: &'static str = "date";
}

impl TemporalSubject for Time {
    const NAME: &'static str = "time";
}

impl TemporalSubject for PrimitiveDateTime {
    const NAME: &'static str = "date and time";
}

impl TemporalSubject for OffsetDateTime {
    const NAME: &'static str = "date and time with offset";
}

/// Equality and ordering are by instant, so two offset values naming the
/// same moment are equal. Use [`TemporalAssertions::be_exactly`] to also
/// compare offsets.
pub struct TemporalAssertions<T: TemporalSubject> {
    subject: Option<T>,
    ctx: Context,
}

impl<T: TemporalSubject> WithContext for TemporalAssertions<T> {
    fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }
}

impl<T: TemporalSubject> TemporalAssertions<T> {
    #[must_use]
    pub fn new(subject: Option<T>) -> Self {
        Self {
            subject,
            ctx: Context::new(T::NAME),
        }
    }

    fn shown(&self) -> String {
        self.ctx.show(&self.subject)
    }

    /// # Errors
    /// Fails unless the subject names the same instant as `expected`.
    pub fn be(self, expected: T) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject.is_some_and(|s| same_instant(&s, &expected)),
            |because| {
                format!(
                    "Expected {} to be {}{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(&expected),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails if the subject names the same instant as `unexpected`.
    pub fn not_be(self, unexpected: T) -> Result<Self, Error> {
        self.ctx.check(
            || !self.subject.is_some_and(|s| same_instant(&s, &unexpected)),
            |because| {
                format!(
                    "Did not expect {} to be {}{because}, but it was.",
                    self.ctx.name(),
                    self.ctx.show(&unexpected)
                )
            },
        )?;
        Ok(self)
    }

    /// Times of day are compared around the clock, so `23:59` is within two
    /// minutes of `00:01`.
    ///
    /// # Errors
    /// Returns `UsageError::NegativeTolerance` for a negative tolerance, even
    /// when the subject is absent. Fails if the subject is absent or further
    /// than `tolerance` from `expected`.
    pub fn be_close_to(self, expected: T, tolerance: impl IntoTolerance) -> Result<Self, Error> {
        let tolerance = tolerance.into_tolerance()?;
        let Some(subject) = self.subject else {
            return self.fail_absent("be within", tolerance, &expected);
        };
        let close = is_close_to(Some(&subject), &expected, tolerance)?;
        self.ctx.check(
            || close,
            |because| {
                format!(
                    "Expected {} to be within {} from {}{because}, but {} was off by {}.",
                    self.ctx.name(),
                    self.ctx.show(&tolerance),
                    self.ctx.show(&expected),
                    self.shown(),
                    self.show_distance(&subject, &expected)
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Returns `UsageError::NegativeTolerance` for a negative tolerance, even
    /// when the subject is absent. Fails if the subject is absent or within
    /// `tolerance` of `expected`.
    pub fn not_be_close_to(
        self,
        unexpected: T,
        tolerance: impl IntoTolerance,
    ) -> Result<Self, Error> {
        let tolerance = tolerance.into_tolerance()?;
        let Some(subject) = self.subject else {
            return self.fail_absent("not be within", tolerance, &unexpected);
        };
        let far = is_not_close_to(Some(&subject), &unexpected, tolerance)?;
        self.ctx.check(
            || far,
            |because| {
                format!(
                    "Did not expect {} to be within {} from {}{because}, but it was {}.",
                    self.ctx.name(),
                    self.ctx.show(&tolerance),
                    self.ctx.show(&unexpected),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    fn fail_absent(self, verb: &str, tolerance: Tolerance, other: &T) -> Result<Self, Error> {
        self.ctx.fail(|because| {
            format!(
                "Expected {} to {verb} {} from {}{because}, but found <null>.",
                self.ctx.name(),
                self.ctx.show(&tolerance),
                self.ctx.show(other)
            )
        })?;
        Ok(self)
    }

    fn show_distance(&self, a: &T, b: &T) -> String {
        i128::try_from(a.distance(b)).map_or_else(
            |_| "more than can be shown".to_string(),
            |ticks| affirm_core::format_ticks(ticks, &self.ctx.config().culture),
        )
    }

    fn ordered(
        self,
        relation: &str,
        other: &T,
        holds: impl Fn(i128, i128) -> bool,
    ) -> Result<Self, Error> {
        self.ctx.check(
            || {
                self.subject
                    .is_some_and(|s| holds(s.ticks(), other.ticks()))
            },
            |because| {
                format!(
                    "Expected {} to be {relation} {}{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(other),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails unless the subject lies strictly before `other`.
    pub fn be_before(self, other: T) -> Result<Self, Error> {
        self.ordered("before", &other, |s, o| s < o)
    }

    /// # Errors
    /// Fails unless the subject lies strictly after `other`.
    pub fn be_after(self, other: T) -> Result<Self, Error> {
        self.ordered("after", &other, |s, o| s > o)
    }

    /// # Errors
    /// Fails if the subject lies after `other`.
    pub fn be_on_or_before(self, other: T) -> Result<Self, Error> {
        self.ordered("on or before", &other, |s, o| s <= o)
    }

    /// # Errors
    /// Fails if the subject lies before `other`.
    pub fn be_on_or_after(self, other: T) -> Result<Self, Error> {
        self.ordered("on or after", &other, |s, o| s >= o)
    }

    /// # Errors
    /// Fails unless the subject names the same instant as one of `candidates`.
    pub fn be_one_of(self, candidates: &[T]) -> Result<Self, Error> {
        self.ctx.check(
            || {
                self.subject
                    .is_some_and(|s| candidates.iter().any(|c| same_instant(&s, c)))
            },
            |because| {
                format!(
                    "Expected {} to be one of {}{because}, but found {}.",
                    self.ctx.name(),
                    show_list(&self.ctx, candidates),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails if the subject is absent.
    pub fn have_value(self) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject.is_some(),
            |because| {
                format!(
                    "Expected {} to have a value{because}, but found <null>.",
                    self.ctx.name()
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails if the subject is present.
    pub fn be_null(self) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject.is_none(),
            |because| {
                format!(
                    "Did not expect {} to have a value{because}, but found {}.",
                    self.ctx.name(),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }
}

impl TemporalAssertions<OffsetDateTime> {
    /// # Errors
    /// Fails unless the subject has the same instant and the same offset.
    pub fn be_exactly(self, expected: OffsetDateTime) -> Result<Self, Error> {
        self.ctx.check(
            || {
                self.subject
                    .is_some_and(|s| s == expected && s.offset() == expected.offset())
            },
            |because| {
                format!(
                    "Expected {} to be exactly {}{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(&expected),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails if the subject has the same instant and the same offset.
    pub fn not_be_exactly(self, unexpected: OffsetDateTime) -> Result<Self, Error> {
        self.ctx.check(
            || {
                !self
                    .subject
                    .is_some_and(|s| s == unexpected && s.offset() == unexpected.offset())
            },
            |because| {
                format!(
                    "Did not expect {} to be exactly {}{because}, but it was.",
                    self.ctx.name(),
                    self.ctx.show(&unexpected)
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails unless the subject carries `offset`.
    pub fn have_offset(self, offset: UtcOffset) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject.is_some_and(|s| s.offset() == offset),
            |because| {
                format!(
                    "Expected {} to have offset {}{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(&offset),
                    self.subject
                        .map_or_else(|| "<null>".to_string(), |s| self.ctx.show(&s.offset()))
                )
            },
        )?;
        Ok(self)
    }
}
