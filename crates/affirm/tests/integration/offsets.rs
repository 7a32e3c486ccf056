//! Offset date-and-time assertion tests

use super::common::{TestResult, failure};
use affirm::prelude::*;
use time::Duration;
use time::macros::{datetime, offset};

#[test]
fn test_same_instant_is_equal_across_offsets() -> TestResult {
    let utc = datetime!(2024-05-01 10:00 UTC);
    let amsterdam = datetime!(2024-05-01 12:00 +2);
    amsterdam
        .should()
        .be(utc)?
        .be_close_to(utc, Duration::ZERO)?;
    utc.should()
        .be_on_or_after(amsterdam)?
        .be_on_or_before(amsterdam)?;
    Ok(())
}

#[test]
fn test_exactly_requires_matching_offset() -> TestResult {
    let utc = datetime!(2024-05-01 10:00 UTC);
    let amsterdam = datetime!(2024-05-01 12:00 +2);
    amsterdam
        .should()
        .be_exactly(amsterdam)?
        .not_be_exactly(utc)?
        .have_offset(offset!(+2))?;
    assert_eq!(
        failure(amsterdam.should().be_exactly(utc)).as_deref(),
        Some(
            "Expected date and time with offset to be exactly <2024-05-01 10:00:00 +00:00>, \
             but found <2024-05-01 12:00:00 +02:00>."
        )
    );
    Ok(())
}

#[test]
fn test_have_offset_message() {
    let result = datetime!(2024-05-01 10:00 -5:30)
        .should()
        .have_offset(offset!(UTC));
    assert_eq!(
        failure(result).as_deref(),
        Some("Expected date and time with offset to have offset +00:00, but found -05:30.")
    );
}
