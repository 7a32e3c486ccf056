//! Reference identity and runtime type tests

use super::common::{TestResult, failure};
use affirm::prelude::*;
use affirm::that_any;
use std::any::Any;

#[test]
fn test_runtime_type_of_boxed_value() -> TestResult {
    let values: Vec<Box<dyn Any>> = vec![Box::new(1_u32), Box::new("text")];
    that_any(values[0].as_ref()).be_of_type::<u32>()?;
    that_any(values[1].as_ref())
        .be_of_type::<&str>()?
        .not_be_of_type::<u32>()?;
    Ok(())
}

#[test]
fn test_identity() -> TestResult {
    let shared = String::from("shared");
    let other = shared.clone();
    that_ref(&shared)
        .be_same_as(&shared)?
        .not_be_same_as(&other)?;
    assert!(that_ref(&shared).be_same_as(&other).is_err());
    Ok(())
}

#[test]
fn test_type_message_names_static_type() {
    let value = 3_i64;
    assert_eq!(
        failure(that_ref(&value).named("count").be_of_type::<u8>()).as_deref(),
        Some("Expected count to be of type u8, but found i64.")
    );
}
