//! Time-of-day assertion tests

use super::common::{TestResult, failure, is_usage};
use affirm::prelude::*;
use time::macros::time;
use time::{Duration, Time};

#[test]
fn test_close_to_wraps_midnight() -> TestResult {
    time!(23:59)
        .should()
        .be_close_to(time!(0:01), Duration::minutes(2))?;
    time!(0:01)
        .should()
        .be_close_to(time!(23:59), Duration::minutes(2))?;
    time!(23:58)
        .should()
        .not_be_close_to(time!(0:01), Duration::minutes(2))?;
    Ok(())
}

#[test]
fn test_close_to_boundary_is_inclusive() -> TestResult {
    time!(12:00:02)
        .should()
        .be_close_to(time!(12:00), std::time::Duration::from_secs(2))?;
    Ok(())
}

#[test]
fn test_close_to_message() {
    let result = time!(12:05)
        .should()
        .because("the job runs on schedule")
        .be_close_to(time!(12:00), Duration::minutes(2));
    assert_eq!(
        failure(result).as_deref(),
        Some(
            "Expected time to be within 2m from <12:00:00> because the job runs on schedule, \
             but <12:05:00> was off by 5m."
        )
    );
}

#[test]
fn test_negative_tolerance_checked_before_subject() {
    let absent = None::<Time>;
    assert!(is_usage(
        &absent
            .should()
            .be_close_to(time!(12:00), Duration::seconds(-1))
    ));
    assert!(is_usage(
        &absent
            .should()
            .not_be_close_to(time!(12:00), Duration::seconds(-1))
    ));
}

#[test]
fn test_absent_subject_is_never_close() {
    let result = None::<Time>
        .should()
        .be_close_to(time!(12:00), Duration::minutes(1));
    assert_eq!(
        failure(result).as_deref(),
        Some("Expected time to be within 1m from <12:00:00>, but found <null>.")
    );
    assert!(
        None::<Time>
            .should()
            .not_be_close_to(time!(12:00), Duration::minutes(1))
            .is_err()
    );
}

#[test]
fn test_sub_second_formatting() {
    let result = time!(10:00:00.5).should().be(time!(10:00));
    assert_eq!(
        failure(result).as_deref(),
        Some("Expected time to be <10:00:00>, but found <10:00:00.5000000>.")
    );
}
