//! Wildcard (`*`, `?`) and regex matching of whole strings.

use crate::comparer::StringOptions;
use crate::error::UsageError;
use regex::{Regex, RegexBuilder};

/// A compiled wildcard pattern. `*` matches any run of characters
/// (including none), `?` exactly one; everything else is literal.
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    regex: Regex,
}

impl WildcardPattern {
    /// # Errors
    /// Returns `UsageError::EmptyPattern` for an empty pattern.
    pub fn new(pattern: &str, options: StringOptions) -> Result<Self, UsageError> {
        if pattern.is_empty() {
            return Err(UsageError::EmptyPattern("wildcard"));
        }
        let normalized = options.normalize(pattern);
        let mut translated = String::with_capacity(normalized.len() + 8);
        translated.push('^');
        let mut literal = String::new();
        for c in normalized.chars() {
            match c {
                '*' | '?' => {
                    translated.push_str(&regex::escape(&literal));
                    literal.clear();
                    translated.push_str(if c == '*' { ".*" } else { "." });
                }
                _ => literal.push(c),
            }
        }
        translated.push_str(&regex::escape(&literal));
        translated.push('$');

        let regex = RegexBuilder::new(&translated)
            .dot_matches_new_line(true)
            .case_insensitive(options.ignore_case)
            .build()
            .map_err(|source| UsageError::InvalidRegex {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the whole of `text` matches. `options` must be the ones the
    /// pattern was built with.
    #[must_use]
    pub fn matches(&self, text: &str, options: StringOptions) -> bool {
        self.regex.is_match(&options.normalize(text))
    }
}

/// Compile a user-supplied regular expression.
///
/// # Errors
/// Returns `UsageError::EmptyPattern` for an empty pattern and
/// `UsageError::InvalidRegex` if it does not compile.
pub fn compile_regex(pattern: &str) -> Result<Regex, UsageError> {
    if pattern.is_empty() {
        return Err(UsageError::EmptyPattern("regular expression"));
    }
    Regex::new(pattern).map_err(|source| UsageError::InvalidRegex {
        pattern: pattern.to_string(),
        source,
    })
}
