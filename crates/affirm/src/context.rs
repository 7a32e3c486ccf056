//! State shared by every assertion on one subject.

use affirm_core::{AssertConfig, Error, FormatValue, Reason, evaluate};
use std::borrow::Cow;

/// Subject name, reason and configuration for a chain of assertions.
#[derive(Debug, Clone)]
pub struct Context {
    name: Cow<'static, str>,
    reason: Option<Reason>,
    config: AssertConfig,
}

impl Context {
    #[must_use]
    pub fn new(default_name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(default_name),
            reason: None,
            config: AssertConfig::default(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn config(&self) -> &AssertConfig {
        &self.config
    }

    /// Render a value for a message under this context's configuration.
    #[must_use]
    pub fn show<T: FormatValue + ?Sized>(&self, value: &T) -> String {
        value.format_value(&self.config.format_options())
    }

    /// The rendered reason clause, empty when no reason was given.
    #[must_use]
    pub fn because(&self) -> String {
        self.reason
            .as_ref()
            .map(|r| r.render_because(&self.config.format_options()))
            .unwrap_or_default()
    }

    /// Evaluate one assertion. `message` receives the rendered reason clause
    /// and is only called when `predicate` is false.
    ///
    /// # Errors
    /// Returns `Error::Failed` when the predicate is false.
    pub fn check<P, M>(&self, predicate: P, message: M) -> Result<(), Error>
    where
        P: FnOnce() -> bool,
        M: FnOnce(&str) -> String,
    {
        evaluate(predicate, || message(&self.because()))
            .into_result()
            .map_err(Error::from)
    }

    /// Fail unconditionally, for subjects that are absent.
    ///
    /// # Errors
    /// Always returns `Error::Failed`.
    pub fn fail<M>(&self, message: M) -> Result<(), Error>
    where
        M: FnOnce(&str) -> String,
    {
        self.check(|| false, message)
    }
}

/// Decorators available on every assertion type.
pub trait WithContext: Sized {
    fn context_mut(&mut self) -> &mut Context;

    /// Name the subject in failure messages.
    #[must_use]
    fn named(mut self, name: impl Into<String>) -> Self {
        self.context_mut().name = Cow::Owned(name.into());
        self
    }

    /// Explain why the following assertions should hold.
    #[must_use]
    fn because(mut self, reason: impl Into<Reason>) -> Self {
        self.context_mut().reason = Some(reason.into());
        self
    }

    #[must_use]
    fn with_config(mut self, config: AssertConfig) -> Self {
        self.context_mut().config = config;
        self
    }
}

/// Render a list of values as `{a, b, c}`.
pub(crate) fn show_list<T: FormatValue>(ctx: &Context, items: &[T]) -> String {
    let shown: Vec<String> = items.iter().map(|item| ctx.show(item)).collect();
    format!("{{{}}}", shown.join(", "))
}
