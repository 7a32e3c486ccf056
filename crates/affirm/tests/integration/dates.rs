//! Date assertion tests

use super::common::{TestResult, failure};
use affirm::prelude::*;
use time::Duration;
use time::macros::date;

#[test]
fn test_ordering() -> TestResult {
    let leap = date!(2024-02-29);
    leap.should()
        .be_before(date!(2024-03-01))?
        .be_after(date!(2024-02-28))?
        .be_on_or_before(leap)?
        .be_on_or_after(leap)?;
    Ok(())
}

#[test]
fn test_before_message() {
    let result = date!(2024-03-02).should().be_before(date!(2024-03-01));
    assert_eq!(
        failure(result).as_deref(),
        Some("Expected date to be before <2024-03-01>, but found <2024-03-02>.")
    );
}

#[test]
fn test_close_to_in_days() -> TestResult {
    date!(2024-01-10)
        .should()
        .be_close_to(date!(2024-01-08), Duration::days(2))?
        .not_be_close_to(date!(2024-01-01), Duration::days(2))?;
    Ok(())
}

#[test]
fn test_one_of() {
    let result = date!(2024-01-03)
        .should()
        .be_one_of(&[date!(2024-01-01), date!(2024-01-02)]);
    assert_eq!(
        failure(result).as_deref(),
        Some("Expected date to be one of {<2024-01-01>, <2024-01-02>}, but found <2024-01-03>.")
    );
}
