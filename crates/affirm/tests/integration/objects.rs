//! Object assertion tests

use super::common::{TestResult, failure};
use affirm::prelude::*;
use affirm::{StringOptions, that_opt};

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: String,
    age: u32,
}

fn alice() -> User {
    User {
        name: "Alice".to_string(),
        age: 30,
    }
}

#[test]
fn test_equality_and_identity() -> TestResult {
    let user = alice();
    let copy = user.clone();
    that(&user)
        .be(&copy)?
        .be_same_as(&user)?
        .not_be_same_as(&copy)?
        .be_one_of(&[&copy])?
        .be_of_type::<User>()?
        .not_be_of_type::<String>()?;
    Ok(())
}

#[test]
fn test_custom_comparer() -> TestResult {
    let user = alice();
    let shouting = User {
        name: "ALICE".to_string(),
        age: 30,
    };
    let by_name = |a: &User, b: &User| {
        affirm::EqualityComparer::<str>::equals(&StringOptions::equivalent(), &a.name, &b.name)
    };
    that(&user).be_with(&shouting, by_name)?;
    Ok(())
}

#[test]
fn test_satisfy_message() {
    let user = alice();
    let result = that(&user)
        .named("user")
        .satisfy("an adult under 30", |u| u.age < 30);
    assert_eq!(
        failure(result).as_deref(),
        Some(
            "Expected user to satisfy an adult under 30, but found \
             User { name: \"Alice\", age: 30 }."
        )
    );
}

#[test]
fn test_absent_object() -> TestResult {
    that_opt::<User>(None).be_null()?;
    assert_eq!(
        failure(that_opt::<User>(None).be(&alice())).as_deref(),
        Some("Expected object to be User { name: \"Alice\", age: 30 }, but found <null>.")
    );
    Ok(())
}

#[test]
fn test_unsized_subject() -> TestResult {
    let numbers = vec![1, 2, 3];
    that(numbers.as_slice())
        .be(&[1, 2, 3][..])?
        .satisfy("sorted", |s| s.is_sorted())?;
    Ok(())
}
