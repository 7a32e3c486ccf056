//! Assertions on arbitrary values, shown through their `Debug` form.

use crate::context::{Context, WithContext, show_list};
use affirm_core::{DebugValue, EqualityComparer, Error};
use std::any::{TypeId, type_name};
use std::fmt::Debug;

pub struct ObjectAssertions<'a, T: ?Sized> {
    subject: Option<&'a T>,
    ctx: Context,
}

impl<T: ?Sized> WithContext for ObjectAssertions<'_, T> {
    fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }
}

impl<'a, T: Debug + ?Sized> ObjectAssertions<'a, T> {
    #[must_use]
    pub fn new(subject: Option<&'a T>) -> Self {
        Self {
            subject,
            ctx: Context::new("object"),
        }
    }

    fn shown(&self) -> String {
        self.ctx.show(&self.subject.map(DebugValue))
    }

    /// # Errors
    /// Fails unless the subject equals `expected`.
    pub fn be(self, expected: &T) -> Result<Self, Error>
    where
        T: PartialEq,
    {
        self.be_with(expected, |a: &T, b: &T| a == b)
    }

    /// # Errors
    /// Fails if the subject equals `unexpected`.
    pub fn not_be(self, unexpected: &T) -> Result<Self, Error>
    where
        T: PartialEq,
    {
        self.ctx.check(
            || self.subject.is_none_or(|s| s != unexpected),
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

    /// Equality decided by `comparer` instead of `PartialEq`.
    ///
    /// # Errors
    /// Fails if the subject is absent or `comparer` says it differs.
    pub fn be_with(self, expected: &T, comparer: impl EqualityComparer<T>) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject.is_some_and(|s| comparer.equals(s, expected)),
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

    /// `description` names the condition in the failure message.
    ///
    /// # Errors
    /// Fails if the subject is absent or `predicate` returns false.
    pub fn satisfy(
        self,
        description: &str,
        predicate: impl FnOnce(&T) -> bool,
    ) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject.is_some_and(predicate),
            |because| {
                format!(
                    "Expected {} to satisfy {description}{because}, but found {}.",
                    self.ctx.name(),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails unless the subject equals one of `candidates`.
    pub fn be_one_of(self, candidates: &[&T]) -> Result<Self, Error>
    where
        T: PartialEq,
    {
        self.ctx.check(
            || {
                self.subject
                    .is_some_and(|s| candidates.iter().any(|c| s == *c))
            },
            |because| {
                let shown: Vec<_> = candidates.iter().map(|c| DebugValue(*c)).collect();
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

    /// Identity: the subject must be the very value `other` refers to.
    ///
    /// # Errors
    /// Fails if the subject is absent or lives at a different address.
    pub fn be_same_as(self, other: &T) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject.is_some_and(|s| std::ptr::addr_eq(s, other)),
            |because| {
                format!(
                    "Expected {} to refer to {}{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(&DebugValue(other)),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails if the subject lives at the same address as `other`.
    pub fn not_be_same_as(self, other: &T) -> Result<Self, Error> {
        self.ctx.check(
            || !self.subject.is_some_and(|s| std::ptr::addr_eq(s, other)),
            |because| {
                format!(
                    "Did not expect {} to refer to {}{because}.",
                    self.ctx.name(),
                    self.ctx.show(&DebugValue(other))
                )
            },
        )?;
        Ok(self)
    }

    /// Compares the static type of the subject with `U`.
    ///
    /// # Errors
    /// Fails if the subject is absent or `T` is not `U`.
    pub fn be_of_type<U: ?Sized + 'static>(self) -> Result<Self, Error>
    where
        T: 'static,
    {
        self.ctx.check(
            || self.subject.is_some() && TypeId::of::<T>() == TypeId::of::<U>(),
            |because| match self.subject {
                Some(_) => format!(
                    "Expected type to be {}{because}, but found {}.",
                    type_name::<U>(),
                    type_name::<T>()
                ),
                None => format!(
                    "Expected type to be {}{because}, but found <null>.",
                    type_name::<U>()
                ),
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails if the subject is absent or `T` is `U`.
    pub fn not_be_of_type<U: ?Sized + 'static>(self) -> Result<Self, Error>
    where
        T: 'static,
    {
        self.ctx.check(
            || self.subject.is_some() && TypeId::of::<T>() != TypeId::of::<U>(),
            |because| match self.subject {
                Some(_) => format!(
                    "Expected type not to be {}{because}, but it is.",
                    type_name::<U>()
                ),
                None => format!(
                    "Expected type not to be {}{because}, but found <null>.",
                    type_name::<U>()
                ),
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
                    self.shown()
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
