//! GUID assertion tests

use super::common::{TestResult, failure, is_usage};
use affirm::prelude::*;
use uuid::Uuid;

const TEXT: &str = "11111111-aaaa-bbbb-cccc-999999999999";

#[test]
fn test_equality_by_value_and_text() -> TestResult {
    let id = Uuid::parse_str(TEXT)?;
    id.should()
        .be(id)?
        .be_str(TEXT)?
        .not_be(Uuid::nil())?
        .not_be_empty()?;
    Ok(())
}

#[test]
fn test_message_uses_braces() -> TestResult {
    let id = Uuid::parse_str(TEXT)?;
    assert_eq!(
        failure(id.should().be_empty()).as_deref(),
        Some("Expected GUID to be empty, but found {11111111-aaaa-bbbb-cccc-999999999999}.")
    );
    Ok(())
}

#[test]
fn test_optional_guid() -> TestResult {
    None::<Uuid>.should().be_null()?;
    assert!(None::<Uuid>.should().have_value().is_err());
    Some(Uuid::nil()).should().have_value()?.be_empty()?;
    Ok(())
}

#[test]
fn test_unparsable_expectation_is_misuse() {
    assert!(is_usage(&Uuid::nil().should().be_str("{nope}")));
}
