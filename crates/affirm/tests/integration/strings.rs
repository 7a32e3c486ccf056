//! String assertion tests

use super::common::{TestResult, failure, is_usage};
use affirm::StringOptions;
use affirm::prelude::*;

const SENTENCE: &str = "ThisIsUsedTo CheckADifferenceInThe WordBoundaryAlgorithm";

#[test]
fn test_trailing_space_reported_at_index_3() {
    let message = failure("ABC".should().be("ABC ")).unwrap_or_default();
    assert!(message.starts_with(
        "Expected string to be \"ABC \" with a length of 4, but \"ABC\" has a length of 3, \
         differs at index 3:"
    ));
    assert!(message.ends_with("\u{2191} (expected)."));
}

#[test]
fn test_empty_actual_reported_at_index_0() {
    let message = failure("".should().be("ABC")).unwrap_or_default();
    assert!(message.starts_with(
        "Expected string to be \"ABC\" with a length of 3, but \"\" has a length of 0, \
         differs at index 0:"
    ));
}

#[test]
fn test_excerpt_starts_on_word_boundary() {
    let variant = SENTENCE.replace("Difference", "Differenze");
    let message = failure(SENTENCE.should().be(&variant)).unwrap_or_default();
    assert!(message.contains("but it differs at index 27:\n"));
    assert!(message.contains("\"…CheckADifferenceInThe WordBoundary…\""));
    assert!(message.contains("\"…CheckADifferenzeInThe WordBoundary…\""));
}

#[test]
fn test_multiline_reports_line_and_column() {
    let result = "First line\nSecond line"
        .should()
        .be("First line\nSecond lime");
    let message = failure(result).unwrap_or_default();
    assert!(message.contains("differs on line 2 and column 10 (index 20):"));
    assert!(message.contains("\"…Second line\""));
    assert!(message.contains("\"…Second lime\""));
}

#[test]
fn test_equivalence_options() -> TestResult {
    "Hello World"
        .should()
        .be_equivalent_to("hello world", StringOptions::equivalent())?;
    "a\r\nb"
        .should()
        .be_equivalent_to("a\nb", StringOptions::ORDINAL.ignoring_newline_style())?;
    "  padded  ".should().be_equivalent_to(
        "padded",
        StringOptions::ORDINAL
            .ignoring_leading_whitespace()
            .ignoring_trailing_whitespace(),
    )?;
    assert!("Hello".should().be("hello").is_err());
    Ok(())
}

#[test]
fn test_affixes_and_substrings() -> TestResult {
    "affirm-core"
        .should()
        .start_with("affirm")?
        .end_with("core")?
        .contain("m-c")?
        .not_contain("xyz")?;
    None::<&str>.should().not_contain("x")?;
    assert_eq!(
        failure("affirm".should().start_with("core")).as_deref(),
        Some("Expected string to start with \"core\", but found \"affirm\".")
    );
    Ok(())
}

#[test]
fn test_empty_pattern_is_misuse_even_when_absent() {
    let absent = None::<&str>;
    assert!(is_usage(&absent.should().start_with("")));
    assert!(is_usage(&absent.should().end_with("")));
    assert!(is_usage(&absent.should().contain("")));
    assert!(is_usage(&absent.should().not_contain("")));
    assert!(is_usage(&absent.should().match_wildcard("", StringOptions::ORDINAL)));
    assert!(is_usage(&absent.should().match_regex("")));
}

#[test]
fn test_emptiness() -> TestResult {
    "".should().be_empty()?.be_null_or_empty()?.not_be_null()?;
    "x".should().not_be_empty()?.not_be_null_or_empty()?;
    None::<String>
        .should()
        .be_null()?
        .be_null_or_empty()?
        .not_be_empty()?;
    assert!(None::<&str>.should().be_empty().is_err());
    Ok(())
}

#[test]
fn test_length_counts_characters() -> TestResult {
    "héllo".should().have_length(5)?;
    assert_eq!(
        failure("abc".should().have_length(2)).as_deref(),
        Some("Expected string with length 2, but \"abc\" has length 3.")
    );
    Ok(())
}

#[test]
fn test_wildcards() -> TestResult {
    "main.rs".should().match_wildcard("*.rs", StringOptions::ORDINAL)?;
    "MAIN.RS".should().match_wildcard("main.??", StringOptions::equivalent())?;
    "main.rs".should().not_match_wildcard("*.toml", StringOptions::ORDINAL)?;
    assert!(
        "main.rsx"
            .should()
            .match_wildcard("*.rs", StringOptions::ORDINAL)
            .is_err()
    );
    Ok(())
}

#[test]
fn test_regex() -> TestResult {
    "order 123".should().match_regex(r"\d{3}")?.not_match_regex(r"^\d")?;
    assert!(is_usage(&"x".should().match_regex("(")));
    Ok(())
}

#[test]
fn test_one_of_message() {
    let owned = String::from("c");
    assert_eq!(
        failure(owned.should().be_one_of(&["a", "b"])).as_deref(),
        Some("Expected string to be one of {\"a\", \"b\"}, but found \"c\".")
    );
}

#[test]
fn test_equivalence_message_shows_strings_as_given() {
    let result = "HeLLo World"
        .should()
        .be_equivalent_to("hello there", StringOptions::equivalent());
    let message = failure(result).unwrap_or_default();
    assert!(message.starts_with(
        "Expected string to be equivalent to \"hello there\", but it differs at index 6:"
    ));
    assert!(message.contains("  \"HeLLo World\"\n  \"hello there\"\n"));
}

#[test]
fn test_equivalence_mismatch_after_ignored_whitespace() {
    let options = StringOptions::equivalent().ignoring_leading_whitespace();
    let result = "  Main.RS".should().be_equivalent_to("main.txt", options);
    let message = failure(result).unwrap_or_default();
    assert!(message.contains("\"  Main.RS\" has a length of 9, differs at index 7:"));
    assert!(message.contains("  \"  Main.RS\"\n"));
}

#[test]
fn test_negated_matches_pass_when_absent() -> TestResult {
    None::<&str>
        .should()
        .not_match_wildcard("*.rs", StringOptions::ORDINAL)?;
    None::<&str>.should().not_match_regex(r"\d")?;
    assert!(is_usage(&None::<&str>.should().not_match_regex("(")));
    Ok(())
}
