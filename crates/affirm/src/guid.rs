//! Assertions on GUID subjects.

use crate::context::{Context, WithContext};
use affirm_core::{Error, UsageError};
use uuid::Uuid;

pub struct GuidAssertions {
    subject: Option<Uuid>,
    ctx: Context,
}

impl WithContext for GuidAssertions {
    fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }
}

impl GuidAssertions {
    #[must_use]
    pub fn new(subject: Option<Uuid>) -> Self {
        Self {
            subject,
            ctx: Context::new("GUID"),
        }
    }

    /// # Errors
    /// Fails unless the subject is the nil GUID.
    pub fn be_empty(self) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject.is_some_and(|g| g.is_nil()),
            |because| {
                format!(
                    "Expected {} to be empty{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(&self.subject)
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails if the subject is absent or the nil GUID.
    pub fn not_be_empty(self) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject.is_some_and(|g| !g.is_nil()),
            |because| {
                format!(
                    "Did not expect {} to be empty{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(&self.subject)
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails unless the subject equals `expected`.
    pub fn be(self, expected: Uuid) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject == Some(expected),
            |because| {
                format!(
                    "Expected {} to be {}{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(&expected),
                    self.ctx.show(&self.subject)
                )
            },
        )?;
        Ok(self)
    }

    /// Compare against the textual form of a GUID.
    ///
    /// # Errors
    /// Returns `UsageError::InvalidGuid` if `expected` does not parse, and
    /// fails unless the subject equals it.
    pub fn be_str(self, expected: &str) -> Result<Self, Error> {
        let parsed = Uuid::parse_str(expected).map_err(|source| UsageError::InvalidGuid {
            text: expected.to_string(),
            source,
        })?;
        self.be(parsed)
    }

    /// # Errors
    /// Fails if the subject equals `unexpected`.
    pub fn not_be(self, unexpected: Uuid) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject != Some(unexpected),
            |because| {
                format!(
                    "Did not expect {} to be {}{because}.",
                    self.ctx.name(),
                    self.ctx.show(&unexpected)
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
                    self.ctx.show(&self.subject)
                )
            },
        )?;
        Ok(self)
    }
}
