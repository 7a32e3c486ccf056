//! Core engine for the affirm assertion library.
//!
//! This crate holds everything that has real logic behind a fluent assertion:
//! - Close-to comparison of instants and times of day with tolerance
//! - Locating and displaying the first difference between two strings
//! - Pass/fail outcomes with lazily built messages
//! - Culture-explicit rendering of values and "because" reasons
//! - Wildcard and regex matching
//! - Configuration loading

pub mod comparer;
pub mod config;
pub mod culture;
pub mod error;
pub mod format;
pub mod mismatch;
pub mod outcome;
pub mod reason;
pub mod temporal;
pub mod tolerance;
pub mod wildcard;

pub use comparer::{DefaultComparer, EqualityComparer, SourcedChar, StringOptions};
pub use config::{
    AssertConfig, CONFIG_FILE, ConfigError, ConfigOverrides, apply_overrides, load_config,
    validate_config,
};
pub use culture::Culture;
pub use error::{AssertionFailed, Error, UsageError};
pub use format::{DebugValue, FormatOptions, FormatValue, NULL, format_ticks};
pub use mismatch::{
    Mismatch, MismatchWindow, locate_mismatch, locate_mismatch_with, render_mismatch,
};
pub use outcome::{AssertionOutcome, evaluate};
pub use reason::{Reason, format_template};
pub use temporal::{Temporal, is_close_to, is_not_close_to, same_instant};
pub use tolerance::{IntoTolerance, Tolerance};
pub use wildcard::{WildcardPattern, compile_regex};
