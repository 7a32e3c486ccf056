//! Boolean assertion tests

use super::common::{TestResult, failure};
use affirm::prelude::*;

#[test]
fn test_true_and_false() -> TestResult {
    true.should().be_true()?.not_be(false)?;
    false.should().be_false()?.be(false)?;
    Ok(())
}

#[test]
fn test_named_subject_in_message() {
    let result = false.should().named("is_ready").be_true();
    assert_eq!(
        failure(result).as_deref(),
        Some("Expected is_ready to be true, but found false.")
    );
}

#[test]
fn test_absent_subject() {
    assert_eq!(
        failure(None::<bool>.should().be_false()).as_deref(),
        Some("Expected boolean to be false, but found <null>.")
    );
    assert!(None::<bool>.should().not_be(true).is_ok());
}

#[test]
fn test_imply() -> TestResult {
    false.should().imply(false)?;
    true.should().imply(true)?;
    assert_eq!(
        failure(true.should().named("logged_in").imply(false)).as_deref(),
        Some("Expected logged_in (true) to imply false, but it did not.")
    );
    Ok(())
}
