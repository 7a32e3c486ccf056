//! Locating the first difference between two strings and the excerpt shown
//! around it.
//!
//! Positions are `char` indices. The excerpt tries to start and end on a
//! word boundary so the reader sees whole words around the difference:
//!
//! - the start is the boundary nearest the mismatch that lies 5 to 15
//!   characters before it, or 10 characters before it when there is none;
//! - the end is the boundary nearest the mismatch that lies 15 to 25
//!   characters after it, or 20 characters after it when there is none.
//!
//! Excerpts that do not reach the start or end of their string are marked
//! with `…`.

use crate::comparer::{SourcedChar, StringOptions};
use std::ops::RangeInclusive;

/// Range searched backwards from the mismatch for the excerpt start.
pub const SEARCH_BEFORE: RangeInclusive<usize> = 5..=15;
/// Excerpt start when no boundary is found before the mismatch.
pub const FALLBACK_BEFORE: usize = 10;
/// Range searched forwards from the mismatch for the excerpt end.
pub const SEARCH_AFTER: RangeInclusive<usize> = 15..=25;
/// Excerpt end when no boundary is found after the mismatch.
pub const FALLBACK_AFTER: usize = 20;

const ELLIPSIS: char = '…';
const INDENT: usize = 2;

/// The excerpt of one string shown around a mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MismatchWindow {
    pub start: usize,
    pub len: usize,
}

impl MismatchWindow {
    #[must_use]
    pub const fn end(self) -> usize {
        self.start + self.len
    }

    fn around(chars: &[char], index: usize) -> Self {
        let start = window_start(chars, index);
        let end = window_end(chars, index);
        Self {
            start,
            len: end - start,
        }
    }
}

/// Where two strings first differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub index: usize,
    /// Position of the mismatch in the expected string. Differs from `index`
    /// only when both strings were normalized before comparing.
    pub expected_index: usize,
    /// 1-based line of the mismatch in the actual string.
    pub line: usize,
    /// 1-based column of the mismatch on that line.
    pub column: usize,
    pub actual: MismatchWindow,
    pub expected: MismatchWindow,
}

impl Mismatch {
    fn between(a: &[char], e: &[char], index: usize, expected_index: usize) -> Self {
        let before = &a[..index];
        let line = 1 + before.iter().filter(|&&c| c == '\n').count();
        let column = before
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(index + 1, |nl| index - nl);
        Self {
            index,
            expected_index,
            line,
            column,
            actual: MismatchWindow::around(a, index),
            expected: MismatchWindow::around(e, expected_index),
        }
    }

    /// `at index I`, or `on line L and column C (index I)` past the first line.
    #[must_use]
    pub fn location(&self) -> String {
        if self.line > 1 {
            format!(
                "on line {} and column {} (index {})",
                self.line, self.column, self.index
            )
        } else {
            format!("at index {}", self.index)
        }
    }
}

/// Find the first difference between `actual` and `expected`.
///
/// Returns `None` when the strings are equal. When one string is a strict
/// prefix of the other the mismatch sits at the shorter length, so an empty
/// string always mismatches at 0.
#[must_use]
pub fn locate_mismatch(actual: &str, expected: &str) -> Option<Mismatch> {
    let a: Vec<char> = actual.chars().collect();
    let e: Vec<char> = expected.chars().collect();

    let index = first_difference(&a, &e)?;
    Some(Mismatch::between(&a, &e, index, index))
}

/// Find the first difference after applying `options` to both strings.
///
/// The strings are compared in normalized form, but every position and
/// window in the result refers to the strings as given.
#[must_use]
pub fn locate_mismatch_with(
    actual: &str,
    expected: &str,
    options: StringOptions,
) -> Option<Mismatch> {
    let traced_a = options.normalize_traced(actual);
    let traced_e = options.normalize_traced(expected);
    let norm_a: Vec<char> = traced_a.iter().map(|c| c.ch).collect();
    let norm_e: Vec<char> = traced_e.iter().map(|c| c.ch).collect();

    let at = first_difference(&norm_a, &norm_e)?;
    let a: Vec<char> = actual.chars().collect();
    let e: Vec<char> = expected.chars().collect();
    Some(Mismatch::between(
        &a,
        &e,
        source_index(&traced_a, at),
        source_index(&traced_e, at),
    ))
}

/// Input position of normalized position `at`. Past the end of the
/// normalized text this is just after its last source character.
fn source_index(traced: &[SourcedChar], at: usize) -> usize {
    traced
        .get(at)
        .map_or_else(|| traced.last().map_or(0, |c| c.end), |c| c.start)
}

fn first_difference(a: &[char], e: &[char]) -> Option<usize> {
    if a.is_empty() || e.is_empty() {
        return (a.len() != e.len()).then_some(0);
    }
    a.iter()
        .zip(e)
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != e.len()).then(|| a.len().min(e.len())))
}

/// Start of string, end of string, or a change between alphanumeric and
/// non-alphanumeric characters.
fn is_boundary(chars: &[char], at: usize) -> bool {
    if at == 0 || at >= chars.len() {
        return true;
    }
    chars[at - 1].is_alphanumeric() != chars[at].is_alphanumeric()
}

fn window_start(chars: &[char], index: usize) -> usize {
    if let Some(hi) = index.checked_sub(*SEARCH_BEFORE.start()) {
        let lo = index.saturating_sub(*SEARCH_BEFORE.end());
        if let Some(at) = (lo..=hi).rev().find(|&at| is_boundary(chars, at)) {
            return at;
        }
    }
    index.saturating_sub(FALLBACK_BEFORE)
}

fn window_end(chars: &[char], index: usize) -> usize {
    let lo = index + SEARCH_AFTER.start();
    let hi = (index + SEARCH_AFTER.end()).min(chars.len());
    (lo..=hi)
        .find(|&at| is_boundary(chars, at))
        .unwrap_or_else(|| (index + FALLBACK_AFTER).min(chars.len()))
}

/// Quoted excerpts of both strings between `↓ (actual)` and `↑ (expected)`
/// markers that point at the first differing character.
#[must_use]
pub fn render_mismatch(actual: &str, expected: &str, mismatch: &Mismatch) -> String {
    let a: Vec<char> = actual.chars().collect();
    let e: Vec<char> = expected.chars().collect();
    let (actual_text, actual_col) = excerpt(&a, mismatch.actual, mismatch.index);
    let (expected_text, expected_col) =
        excerpt(&e, mismatch.expected, mismatch.expected_index);
    let col = actual_col.max(expected_col);

    let marker_pad = " ".repeat(INDENT + col);
    [
        format!("{marker_pad}\u{2193} (actual)"),
        format!("{}{actual_text}", " ".repeat(INDENT + col - actual_col)),
        format!("{}{expected_text}", " ".repeat(INDENT + col - expected_col)),
        format!("{marker_pad}\u{2191} (expected)"),
    ]
    .join("\n")
}

/// The quoted excerpt and the display column of the mismatch within it.
fn excerpt(chars: &[char], window: MismatchWindow, index: usize) -> (String, usize) {
    let mut text = String::from("\"");
    let mut col = 1;
    if window.start > 0 {
        text.push(ELLIPSIS);
        col += 1;
    }
    for (at, &c) in chars[window.start..window.end()].iter().enumerate() {
        let escaped = escape(c);
        if window.start + at < index {
            col += escaped.chars().count();
        }
        text.push_str(&escaped);
    }
    if window.end() < chars.len() {
        text.push(ELLIPSIS);
    }
    text.push('"');
    (text, col)
}

fn escape(c: char) -> String {
    match c {
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        _ => c.to_string(),
    }
}
