//! Assertion scope tests

use super::common::TestResult;
use affirm::AssertionScope;
use affirm::prelude::*;
use time::Duration;
use time::macros::time;

#[test]
fn test_collects_every_failure() -> TestResult {
    let mut scope = AssertionScope::named("profile");
    scope.check("Ann".should().named("name").start_with("B"))?;
    scope.check(true.should().be_true())?;
    scope.check(false.should().named("active").be_true())?;

    let err = scope.into_result().err().ok_or("scope should fail")?;
    assert_eq!(
        err.message,
        "profile: Expected name to start with \"B\", but found \"Ann\".\n\
         Expected active to be true, but found false."
    );
    Ok(())
}

#[test]
fn test_misuse_is_not_collected() {
    let mut scope = AssertionScope::new();
    let misuse = scope.check(
        time!(12:00)
            .should()
            .be_close_to(time!(12:00), Duration::seconds(-5)),
    );
    assert!(misuse.is_err());
    assert!(scope.is_clean());
    assert!(scope.into_result().is_ok());
}

#[test]
fn test_json_report_lists_failures() -> TestResult {
    let mut scope = AssertionScope::new();
    scope.check(1.5_f64.to_string().should().be("1.50"))?;
    let report: serde_json::Value = serde_json::from_str(&scope.to_json())?;
    assert_eq!(report["checked"], 1);
    assert!(report.get("name").is_none());
    let first = report["failures"][0].as_str().unwrap_or_default();
    assert!(first.starts_with("Expected string to be \"1.50\" with a length of 4"));
    Ok(())
}
