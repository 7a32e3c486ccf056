//! Assertions on enum values.

use crate::context::{Context, WithContext, show_list};
use affirm_core::{DebugValue, Error};
use std::fmt::Debug;
use std::mem::discriminant;

pub struct EnumAssertions<'a, E> {
    subject: Option<&'a E>,
    ctx: Context,
}

impl<E> WithContext for EnumAssertions<'_, E> {
    fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }
}

impl<'a, E: Debug> EnumAssertions<'a, E> {
    #[must_use]
    pub fn new(subject: Option<&'a E>) -> Self {
        Self {
            subject,
            ctx: Context::new("enum"),
        }
    }

    fn shown(&self) -> String {
        self.ctx.show(&self.subject.map(DebugValue))
    }

    /// # Errors
    /// Fails unless the subject equals `expected`, payload included.
    pub fn be(self, expected: &E) -> Result<Self, Error>
    where
        E: PartialEq,
    {
        self.ctx.check(
            || self.subject == Some(expected),
            |because| {
                format!(
                    "Expected {} to be {}{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(&DebugValue(expected)),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails if the subject equals `unexpected`.
    pub fn not_be(self, unexpected: &E) -> Result<Self, Error>
    where
        E: PartialEq,
    {
        self.ctx.check(
            || self.subject != Some(unexpected),
            |because| {
                format!(
                    "Did not expect {} to be {}{because}.",
                    self.ctx.name(),
                    self.ctx.show(&DebugValue(unexpected))
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails unless the subject equals one of `candidates`.
    pub fn be_one_of(self, candidates: &[E]) -> Result<Self, Error>
    where
        E: PartialEq,
    {
        self.ctx.check(
            || self.subject.is_some_and(|s| candidates.contains(s)),
            |because| {
                let shown: Vec<_> = candidates.iter().map(DebugValue).collect();
                format!(
                    "Expected {} to be one of {}{because}, but found {}.",
                    self.ctx.name(),
                    show_list(&self.ctx, &shown),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// Same variant as `other`, whatever the payloads.
    ///
    /// # Errors
    /// Fails if the subject is absent or a different variant.
    pub fn be_variant_of(self, other: &E) -> Result<Self, Error> {
        self.ctx.check(
            || {
                self.subject
                    .is_some_and(|s| discriminant(s) == discriminant(other))
            },
            |because| {
                format!(
                    "Expected {} to be the same variant as {}{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(&DebugValue(other)),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails if the subject is the same variant as `other`.
    pub fn not_be_variant_of(self, other: &E) -> Result<Self, Error> {
        self.ctx.check(
            || {
                !self
                    .subject
                    .is_some_and(|s| discriminant(s) == discriminant(other))
            },
            |because| {
                format!(
                    "Did not expect {} to be the same variant as {}{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(&DebugValue(other)),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }
}
