//! Assertions on string subjects.

use crate::context::{Context, WithContext, show_list};
use affirm_core::{
    Error, StringOptions, UsageError, WildcardPattern, compile_regex, locate_mismatch_with,
    render_mismatch,
};

pub struct StringAssertions<'a> {
    subject: Option<&'a str>,
    ctx: Context,
}

impl WithContext for StringAssertions<'_> {
    fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }
}

impl<'a> StringAssertions<'a> {
    #[must_use]
    pub fn new(subject: Option<&'a str>) -> Self {
        Self {
            subject,
            ctx: Context::new("string"),
        }
    }

    fn shown(&self) -> String {
        self.ctx.show(&self.subject)
    }

    /// Exact equality. Failure messages point at the first difference.
    ///
    /// # Errors
    /// Fails if the subject is absent or differs from `expected`.
    pub fn be(self, expected: &str) -> Result<Self, Error> {
        self.be_with_options(expected, StringOptions::ORDINAL, "be")
    }

    /// Equality after applying `options` to both sides.
    ///
    /// # Errors
    /// Fails if the subject is absent or not equivalent to `expected`.
    pub fn be_equivalent_to(self, expected: &str, options: StringOptions) -> Result<Self, Error> {
        self.be_with_options(expected, options, "be equivalent to")
    }

    /// Compares normalized text but quotes the strings as given.
    fn be_with_options(
        self,
        expected: &str,
        options: StringOptions,
        verb: &str,
    ) -> Result<Self, Error> {
        let Some(actual) = self.subject else {
            self.ctx.fail(|because| {
                format!(
                    "Expected {} to {verb} {}{because}, but found <null>.",
                    self.ctx.name(),
                    self.ctx.show(expected)
                )
            })?;
            return Ok(self);
        };
        let mismatch = locate_mismatch_with(actual, expected, options);

        self.ctx.check(
            || mismatch.is_none(),
            |because| {
                let Some(m) = mismatch else {
                    return String::new();
                };
                let block = render_mismatch(actual, expected, &m);
                let actual_len = actual.chars().count();
                let expected_len = expected.chars().count();
                if actual_len == expected_len {
                    format!(
                        "Expected {} to {verb} {}{because}, but it differs {}:\n{block}.",
                        self.ctx.name(),
                        self.ctx.show(expected),
                        m.location()
                    )
                } else {
                    format!(
                        "Expected {} to {verb} {} with a length of {expected_len}{because}, \
                         but {} has a length of {actual_len}, differs {}:\n{block}.",
                        self.ctx.name(),
                        self.ctx.show(expected),
                        self.ctx.show(actual),
                        m.location()
                    )
                }
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails if the subject equals `unexpected`.
    pub fn not_be(self, unexpected: &str) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject != Some(unexpected),
            |because| {
                format!(
                    "Expected {} not to be {}{because}.",
                    self.ctx.name(),
                    self.ctx.show(unexpected)
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails unless the subject is present and has no characters.
    pub fn be_empty(self) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject == Some(""),
            |because| {
                format!(
                    "Expected {} to be empty{because}, but found {}.",
                    self.ctx.name(),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// An absent subject is not empty.
    ///
    /// # Errors
    /// Fails if the subject is the empty string.
    pub fn not_be_empty(self) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject != Some(""),
            |because| format!("Did not expect {} to be empty{because}.", self.ctx.name()),
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

    /// # Errors
    /// Fails if the subject has any characters.
    pub fn be_null_or_empty(self) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject.is_none_or(str::is_empty),
            |because| {
                format!(
                    "Expected {} to be <null> or empty{because}, but found {}.",
                    self.ctx.name(),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails if the subject is absent or empty.
    pub fn not_be_null_or_empty(self) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject.is_some_and(|s| !s.is_empty()),
            |because| {
                format!(
                    "Expected {} not to be <null> or empty{because}, but found {}.",
                    self.ctx.name(),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    fn require_pattern(what: &'static str, pattern: &str) -> Result<(), UsageError> {
        if pattern.is_empty() {
            return Err(UsageError::EmptyPattern(what));
        }
        Ok(())
    }

    fn affix(
        self,
        relation: &str,
        what: &'static str,
        pattern: &str,
        holds: impl FnOnce(&str) -> bool,
    ) -> Result<Self, Error> {
        Self::require_pattern(what, pattern)?;
        self.ctx.check(
            || self.subject.is_some_and(holds),
            |because| {
                format!(
                    "Expected {} to {relation} {}{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(pattern),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Returns `UsageError::EmptyPattern` for an empty prefix. Fails if the
    /// subject is absent or does not start with `prefix`.
    pub fn start_with(self, prefix: &str) -> Result<Self, Error> {
        self.affix("start with", "prefix", prefix, |s| s.starts_with(prefix))
    }

    /// # Errors
    /// Returns `UsageError::EmptyPattern` for an empty suffix. Fails if the
    /// subject is absent or does not end with `suffix`.
    pub fn end_with(self, suffix: &str) -> Result<Self, Error> {
        self.affix("end with", "suffix", suffix, |s| s.ends_with(suffix))
    }

    /// # Errors
    /// Returns `UsageError::EmptyPattern` for an empty needle. Fails if the
    /// subject is absent or does not contain `needle`.
    pub fn contain(self, needle: &str) -> Result<Self, Error> {
        self.affix("contain", "substring", needle, |s| s.contains(needle))
    }

    /// An absent subject contains nothing.
    ///
    /// # Errors
    /// Returns `UsageError::EmptyPattern` for an empty needle. Fails if the
    /// subject contains `needle`.
    pub fn not_contain(self, needle: &str) -> Result<Self, Error> {
        Self::require_pattern("substring", needle)?;
        self.ctx.check(
            || !self.subject.is_some_and(|s| s.contains(needle)),
            |because| {
                format!(
                    "Did not expect {} to contain {}{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(needle),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// Length in characters.
    ///
    /// # Errors
    /// Fails if the subject is absent or has a different length.
    pub fn have_length(self, expected: usize) -> Result<Self, Error> {
        let actual = self.subject.map(|s| s.chars().count());
        self.ctx.check(
            || actual == Some(expected),
            |because| match actual {
                Some(len) => format!(
                    "Expected {} with length {expected}{because}, but {} has length {len}.",
                    self.ctx.name(),
                    self.shown()
                ),
                None => format!(
                    "Expected {} with length {expected}{because}, but found <null>.",
                    self.ctx.name()
                ),
            },
        )?;
        Ok(self)
    }

    /// `*` matches any run of characters, `?` a single one.
    ///
    /// # Errors
    /// Returns `UsageError::EmptyPattern` for an empty pattern. Fails if the
    /// subject is absent or does not match.
    pub fn match_wildcard(self, pattern: &str, options: StringOptions) -> Result<Self, Error> {
        let compiled = WildcardPattern::new(pattern, options)?;
        self.ctx.check(
            || self.subject.is_some_and(|s| compiled.matches(s, options)),
            |because| {
                format!(
                    "Expected {} to match {}{because}, but {} does not.",
                    self.ctx.name(),
                    self.ctx.show(pattern),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// An absent subject matches nothing.
    ///
    /// # Errors
    /// Returns `UsageError::EmptyPattern` for an empty pattern. Fails if the
    /// subject matches.
    pub fn not_match_wildcard(self, pattern: &str, options: StringOptions) -> Result<Self, Error> {
        let compiled = WildcardPattern::new(pattern, options)?;
        self.ctx.check(
            || !self.subject.is_some_and(|s| compiled.matches(s, options)),
            |because| {
                format!(
                    "Did not expect {} to match {}{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(pattern),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// Unanchored: the pattern may match any part of the subject.
    ///
    /// # Errors
    /// Returns `UsageError::EmptyPattern` or `UsageError::InvalidRegex` for
    /// an unusable pattern. Fails if the subject is absent or has no match.
    pub fn match_regex(self, pattern: &str) -> Result<Self, Error> {
        let regex = compile_regex(pattern)?;
        self.ctx.check(
            || self.subject.is_some_and(|s| regex.is_match(s)),
            |because| {
                format!(
                    "Expected {} to match regex {}{because}, but {} does not.",
                    self.ctx.name(),
                    self.ctx.show(pattern),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// An absent subject matches nothing.
    ///
    /// # Errors
    /// Returns `UsageError::EmptyPattern` or `UsageError::InvalidRegex` for
    /// an unusable pattern. Fails if the subject matches.
    pub fn not_match_regex(self, pattern: &str) -> Result<Self, Error> {
        let regex = compile_regex(pattern)?;
        self.ctx.check(
            || !self.subject.is_some_and(|s| regex.is_match(s)),
            |because| {
                format!(
                    "Did not expect {} to match regex {}{because}, but found {}.",
                    self.ctx.name(),
                    self.ctx.show(pattern),
                    self.shown()
                )
            },
        )?;
        Ok(self)
    }

    /// # Errors
    /// Fails unless the subject equals one of `candidates`.
    pub fn be_one_of(self, candidates: &[&str]) -> Result<Self, Error> {
        self.ctx.check(
            || self.subject.is_some_and(|s| candidates.contains(&s)),
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
}
