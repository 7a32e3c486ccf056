//! Date-and-time assertion tests

use super::common::{TestResult, failure};
use affirm::prelude::*;
use time::macros::datetime;
use time::{Duration, PrimitiveDateTime};

#[test]
fn test_close_to_is_symmetric() -> TestResult {
    let a = datetime!(2024-06-01 12:00:00);
    let b = datetime!(2024-06-01 12:00:30);
    a.should().be_close_to(b, Duration::seconds(30))?;
    b.should().be_close_to(a, Duration::seconds(30))?;
    a.should().be_close_to(a, Duration::ZERO)?;
    Ok(())
}

#[test]
fn test_extremes_do_not_overflow() -> TestResult {
    PrimitiveDateTime::MIN
        .should()
        .not_be_close_to(PrimitiveDateTime::MAX, Duration::days(1))?;
    PrimitiveDateTime::MAX
        .should()
        .be_close_to(PrimitiveDateTime::MAX, Duration::ZERO)?;
    Ok(())
}

#[test]
fn test_distance_across_days() {
    let result = datetime!(2024-06-02 13:00)
        .should()
        .be_close_to(datetime!(2024-06-01 12:00), Duration::hours(1));
    assert_eq!(
        failure(result).as_deref(),
        Some(
            "Expected date and time to be within 1h from <2024-06-01 12:00:00>, \
             but <2024-06-02 13:00:00> was off by 1d 1h."
        )
    );
}

#[test]
fn test_named_optional_subject() {
    let result = None::<PrimitiveDateTime>
        .should()
        .named("created_at")
        .have_value();
    assert_eq!(
        failure(result).as_deref(),
        Some("Expected created_at to have a value, but found <null>.")
    );
}
