//! Collecting failures from many assertions and reporting them together.

use affirm_core::{AssertionFailed, Error, UsageError};
use serde::Serialize;
use tracing::debug;

/// Gathers failed assertions instead of stopping at the first one.
///
/// Usage errors are not collected: they are bugs in the test, not in the
/// code under test, so [`AssertionScope::check`] hands them straight back.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssertionScope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub checked: usize,
    pub failures: Vec<String>,
}

impl AssertionScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Record the result of one assertion.
    ///
    /// # Errors
    /// Returns the usage error if the assertion was misused.
    pub fn check<T>(&mut self, result: Result<T, Error>) -> Result<(), UsageError> {
        self.checked += 1;
        match result {
            Ok(_) => Ok(()),
            Err(Error::Failed(failed)) => {
                self.failures.push(failed.message);
                Ok(())
            }
            Err(Error::Usage(usage)) => Err(usage),
        }
    }

    #[must_use]
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Close the scope.
    ///
    /// # Errors
    /// Returns one `AssertionFailed` whose message lists every failure, one
    /// per line.
    pub fn into_result(self) -> Result<(), AssertionFailed> {
        debug!(
            scope = self.name.as_deref().unwrap_or("<unnamed>"),
            checked = self.checked,
            failed = self.failures.len(),
            "assertion scope closed"
        );
        if self.failures.is_empty() {
            return Ok(());
        }
        let mut message = match &self.name {
            Some(name) => format!("{name}: "),
            None => String::new(),
        };
        message.push_str(&self.failures.join("\n"));
        Err(AssertionFailed::new(message))
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}
