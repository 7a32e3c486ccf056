//! Explicit number formatting conventions.

use serde::{Deserialize, Serialize};

/// Formatting conventions applied when values are rendered into messages.
///
/// There is no process-wide "current culture": every formatting call takes
/// one of these explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Culture {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(rename = "decimal-separator", default = "default_decimal_separator")]
    pub decimal_separator: char,
    #[serde(rename = "group-separator", default)]
    pub group_separator: Option<char>,
}

fn default_name() -> String {
    "invariant".to_string()
}

const fn default_decimal_separator() -> char {
    '.'
}

impl Default for Culture {
    fn default() -> Self {
        Self::invariant()
    }
}

impl Culture {
    /// `.` as decimal separator, no digit grouping.
    #[must_use]
    pub fn invariant() -> Self {
        Self {
            name: default_name(),
            decimal_separator: default_decimal_separator(),
            group_separator: None,
        }
    }

    #[must_use]
    pub fn new(name: &str, decimal_separator: char, group_separator: Option<char>) -> Self {
        Self {
            name: name.to_string(),
            decimal_separator,
            group_separator,
        }
    }

    /// Render an integer, grouping digits in threes when a group separator is set.
    #[must_use]
    pub fn format_integer(&self, value: i128) -> String {
        let digits = value.unsigned_abs().to_string();
        let grouped = self
            .group_separator
            .map_or_else(|| digits.clone(), |sep| group_digits(&digits, sep));
        if value < 0 {
            format!("-{grouped}")
        } else {
            grouped
        }
    }

    /// Render a float using the shortest round-trip representation.
    #[must_use]
    pub fn format_float(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let raw = value.to_string();
        let (int_part, frac_part) = raw
            .split_once('.')
            .map_or((raw.as_str(), None), |(i, f)| (i, Some(f)));
        let (negative, int_digits) = int_part
            .strip_prefix('-')
            .map_or((false, int_part), |rest| (true, rest));

        let mut out = String::with_capacity(raw.len() + 4);
        if negative {
            out.push('-');
        }
        match self.group_separator {
            Some(sep) => out.push_str(&group_digits(int_digits, sep)),
            None => out.push_str(int_digits),
        }
        if let Some(frac) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }
}

fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}
