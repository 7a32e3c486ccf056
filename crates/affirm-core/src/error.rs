//! Error taxonomy: API misuse versus false assertions.

use thiserror::Error;

/// Misuse of the assertion API. Raised before any comparison work is done.
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("tolerance must be non-negative, but got {ticks} ticks")]
    NegativeTolerance { ticks: i128 },
    #[error("cannot match against an empty {0} pattern")]
    EmptyPattern(&'static str),
    #[error("{0} must not be absent")]
    NullArgument(&'static str),
    #[error("invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("'{text}' is not a GUID: {source}")]
    InvalidGuid {
        text: String,
        #[source]
        source: uuid::Error,
    },
}

/// An assertion whose predicate evaluated to false.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AssertionFailed {
    pub message: String,
}

impl AssertionFailed {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Either kind of assertion error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Failed(#[from] AssertionFailed),
    #[error("invalid assertion usage: {0}")]
    Usage(#[from] UsageError),
}

impl Error {
    /// Whether this is a false assertion rather than API misuse.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The failure message, if this is a false assertion.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed(f) => Some(&f.message),
            Self::Usage(_) => None,
        }
    }
}
