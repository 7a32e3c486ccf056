//! Pass/fail results with lazily built failure messages.

use crate::error::AssertionFailed;
use tracing::{debug, trace};

/// The result of one assertion, consumed once by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an outcome does nothing until it is turned into a result"]
pub struct AssertionOutcome {
    pub passed: bool,
    pub failure_message: Option<String>,
}

impl AssertionOutcome {
    pub const fn pass() -> Self {
        Self {
            passed: true,
            failure_message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            failure_message: Some(message.into()),
        }
    }

    /// # Errors
    /// Returns `AssertionFailed` carrying the message if the assertion did not pass.
    pub fn into_result(self) -> Result<(), AssertionFailed> {
        if self.passed {
            Ok(())
        } else {
            Err(AssertionFailed::new(self.failure_message.unwrap_or_default()))
        }
    }
}

/// Run `predicate`; build the message with `on_failure` only if it is false.
pub fn evaluate<P, M>(predicate: P, on_failure: M) -> AssertionOutcome
where
    P: FnOnce() -> bool,
    M: FnOnce() -> String,
{
    if predicate() {
        trace!("assertion passed");
        AssertionOutcome::pass()
    } else {
        let message = on_failure();
        debug!(%message, "assertion failed");
        AssertionOutcome::fail(message)
    }
}
