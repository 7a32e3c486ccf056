//! Identity and runtime type checks on type-erased references.

use crate::context::{Context, WithContext};
use affirm_core::Error;
use std::any::{Any, type_name};

pub struct ReferenceAssertions<'a> {
    subject: Option<&'a dyn Any>,
    /// Known only when the reference was erased by us.
    type_name: Option<&'static str>,
    ctx: Context,
}

impl WithContext for ReferenceAssertions<'_> {
    fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }
}

impl<'a> ReferenceAssertions<'a> {
    #[must_use]
    pub fn new<T: Any>(subject: Option<&'a T>) -> Self {
        Self {
            subject: subject.map(|s| s as &dyn Any),
            type_name: Some(type_name::<T>()),
            ctx: Context::new("reference"),
        }
    }

    #[must_use]
    pub fn from_any(subject: Option<&'a dyn Any>) -> Self {
        Self {
            subject,
            type_name: None,
            ctx: Context::new("reference"),
        }
    }

    fn found(&self) -> &'static str {
        match (self.subject, self.type_name) {
            (None, _) => "<null>",
            (Some(_), Some(name)) => name,
            (Some(_), None) => "another type",
        }
    }

    /// # Errors
    /// Fails if the subject is absent or not a `U`.
    pub fn be_of_type<U: Any>(self) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject.is_some_and(|s| s.is::<U>()),
            |because| {
                format!(
                    "Expected {} to be of type {}{because}, but found {}.",
                    self.ctx.name(),
                    type_name::<U>(),
                    self.found()
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails if the subject is absent or a `U`.
    pub fn not_be_of_type<U: Any>(self) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject.is_some_and(|s| !s.is::<U>()),
            |because| {
                format!(
                    "Expected {} not to be of type {}{because}, but found {}.",
                    self.ctx.name(),
                    type_name::<U>(),
                    self.found()
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails if the subject is absent or lives at a different address.
    pub fn be_same_as<T: Any>(self, other: &T) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject.is_some_and(|s| std::ptr::addr_eq(s, other)),
            |because| {
                format!(
                    "Expected {} to refer to the same {} instance{because}, but it did not.",
                    self.ctx.name(),
                    type_name::<T>()
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails if the subject lives at the same address as `other`.
    pub fn not_be_same_as<T: Any>(self, other: &T) -> Result<Self, Error> {
        self.ctx.check(
            || !self.subject.is_some_and(|s| std::ptr::addr_eq(s, other)),
            |because| {
                format!(
                    "Did not expect {} to refer to the same {} instance{because}.",
                    self.ctx.name(),
                    type_name::<T>()
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
                    "Expected {} to be <null>{because}, but found {}.",
                    self.ctx.name(),
                    self.found()
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails if the subject is absent.
    pub fn not_be_null(self) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject.is_some(),
            |because| format!("Expected {} not to be <null>{because}.", self.ctx.name()),
        )?;
        Ok(self)
    }
}
