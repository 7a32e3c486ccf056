//! Enum assertion tests

use super::common::{TestResult, failure};
use affirm::prelude::*;

#[derive(Debug, PartialEq)]
enum Status {
    Pending,
    Done { code: u8 },
}

#[test]
fn test_value_and_variant() -> TestResult {
    let status = Status::Done { code: 0 };
    that_enum(&status)
        .be(&Status::Done { code: 0 })?
        .not_be(&Status::Pending)?
        .be_variant_of(&Status::Done { code: 7 })?
        .not_be_variant_of(&Status::Pending)?
        .be_one_of(&[Status::Pending, Status::Done { code: 0 }])?;
    Ok(())
}

#[test]
fn test_message_uses_debug_form() {
    let status = Status::Pending;
    let result = that_enum(&status)
        .named("status")
        .be_variant_of(&Status::Done { code: 1 });
    assert_eq!(
        failure(result).as_deref(),
        Some("Expected status to be the same variant as Done { code: 1 }, but found Pending.")
    );
}
