//! Shared helpers for integration tests

use affirm::Error;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// The failure message of a false assertion, or `None` if it passed or was
/// misused.
pub fn failure<T>(result: Result<T, Error>) -> Option<String> {
    result
        .err()
        .and_then(|e| e.failure_message().map(String::from))
}

/// Whether the assertion was rejected as misuse.
pub const fn is_usage<T>(result: &Result<T, Error>) -> bool {
    matches!(result, Err(Error::Usage(_)))
}
