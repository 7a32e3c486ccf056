//! "Because" clause tests

use super::common::failure;
use affirm::prelude::*;
use affirm::{AssertConfig, Culture, Reason};

#[test]
fn test_reason_with_arguments() {
    let result = false
        .should()
        .because(Reason::new("{0} retries were allowed").arg(3))
        .be_true();
    assert_eq!(
        failure(result).as_deref(),
        Some("Expected boolean to be true because 3 retries were allowed, but found false.")
    );
}

#[test]
fn test_reason_rendered_with_explicit_culture() {
    let config = AssertConfig {
        culture: Culture::new("nl-NL", ',', Some('.')),
        ..AssertConfig::default()
    };
    let result = false
        .should()
        .with_config(config)
        .because(
            Reason::new("the ratio is {0} of {1}")
                .arg(0.75)
                .arg(1_234_567),
        )
        .be_true();
    assert_eq!(
        failure(result).as_deref(),
        Some("Expected boolean to be true because the ratio is 0,75 of 1.234.567, but found false.")
    );
}

#[test]
fn test_leading_because_not_doubled() {
    let result = false.should().because("because it was set").be_true();
    assert_eq!(
        failure(result).as_deref(),
        Some("Expected boolean to be true because it was set, but found false.")
    );
}

#[test]
fn test_malformed_reason_still_fails_with_message() {
    let message = failure(false.should().because("missing {2}").be_true()).unwrap_or_default();
    assert!(message.starts_with("Expected boolean to be true because missing {2}"));
    assert!(message.contains("malformed reason"));
}
