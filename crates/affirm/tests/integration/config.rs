//! Configuration loading tests

use super::common::{TestResult, failure};
use affirm::prelude::*;
use affirm::{ConfigOverrides, Reason, apply_overrides, load_config};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_file_drives_message_culture() -> TestResult {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("affirm.config.yaml"),
        "culture:\n  name: de-DE\n  decimal-separator: ','\n  group-separator: '.'\n",
    )?;
    let config = load_config(dir.path())?;
    let result = false
        .should()
        .with_config(config)
        .because(Reason::new("{0} is the limit").arg(2.5))
        .be_true();
    assert_eq!(
        failure(result).as_deref(),
        Some("Expected boolean to be true because 2,5 is the limit, but found false.")
    );
    Ok(())
}

#[test]
fn test_missing_file_gives_defaults_and_overrides_apply() -> TestResult {
    let dir = TempDir::new()?;
    let config = load_config(dir.path())?;
    assert_eq!(config, affirm::AssertConfig::default());

    let overrides = ConfigOverrides {
        max_lines: Some(1),
        ..ConfigOverrides::default()
    };
    let config = apply_overrides(config, &overrides);
    let message = failure("one\ntwo".should().with_config(config).be_empty()).unwrap_or_default();
    assert!(message.contains("\"one…\""), "{message}");
    Ok(())
}
