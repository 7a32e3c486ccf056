//! Assertions on `bool` subjects.

use crate::context::{Context, WithContext};
use affirm_core::Error;

pub struct BooleanAssertions {
    subject: Option<bool>,
    ctx: Context,
}

impl WithContext for BooleanAssertions {
    fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }
}

impl BooleanAssertions {
    #[must_use]
    pub fn new(subject: Option<bool>) -> Self {
        Self {
            subject,
            ctx: Context::new("boolean"),
        }
    }

    /// # Errors
    /// Fails unless the subject is `true`.
    pub fn be_true(self) -> Result<Self, Error> {
        self.be(true)
    }

    /// # Errors
    /// Fails unless the subject is `false`.
    pub fn be_false(self) -> Result<Self, Error> {
        self.be(false)
    }

    /// # Errors
    /// Fails unless the subject equals `expected`.
    pub fn be(self, expected: bool) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject == Some(expected),
            |because| {
                format!(
                    "Expected {} to be {expected}{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(&self.subject)
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails if the subject equals `unexpected`.
    pub fn not_be(self, unexpected: bool) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject != Some(unexpected),
            |because| {
                format!(
                    "Expected {} not to be {unexpected}{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(&self.subject)
                )
            },
        )?;
        Ok(self)
    }

    /// Logical implication: a `true` subject requires a `true` consequent.
    ///
    /// # Errors
    /// Fails if the subject is absent, or `true` while `consequent` is `false`.
    pub fn imply(self, consequent: bool) -> Result<Self, Error> {
        let Some(antecedent) = self.subject else {
            self.ctx.fail(|because| {
                format!(
                    "Expected {} to imply {consequent}{because}, but found <null>.",
                    self.ctx.name()
                )
            })?;
            return Ok(self);
        };
        self.ctx.check(
            || !antecedent || consequent,
            |because| {
                format!(
                    "Expected {} ({antecedent}) to imply {consequent}{because}, but it did not.",
                    self.ctx.name()
                )
            },
        )?;
        Ok(self)
    }
}
