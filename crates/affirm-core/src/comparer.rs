//! Injected equality capabilities.

use std::borrow::Cow;

/// Decides whether two values count as equal for one assertion.
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> EqualityComparer<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Plain `PartialEq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultComparer;

impl<T: PartialEq + ?Sized> EqualityComparer<T> for DefaultComparer {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// How loosely two strings are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct StringOptions {
    pub ignore_case: bool,
    pub ignore_leading_whitespace: bool,
    pub ignore_trailing_whitespace: bool,
    /// Treat `\r\n` and `\r` as `\n`.
    pub ignore_newline_style: bool,
}

impl StringOptions {
    /// Exact comparison.
    pub const ORDINAL: Self = Self {
        ignore_case: false,
        ignore_leading_whitespace: false,
        ignore_trailing_whitespace: false,
        ignore_newline_style: false,
    };

    /// What "equivalent" means when nothing else is asked for.
    #[must_use]
    pub const fn equivalent() -> Self {
        Self {
            ignore_case: true,
            ..Self::ORDINAL
        }
    }

    #[must_use]
    pub const fn ignoring_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    #[must_use]
    pub const fn ignoring_leading_whitespace(mut self) -> Self {
        self.ignore_leading_whitespace = true;
        self
    }

    #[must_use]
    pub const fn ignoring_trailing_whitespace(mut self) -> Self {
        self.ignore_trailing_whitespace = true;
        self
    }

    #[must_use]
    pub const fn ignoring_newline_style(mut self) -> Self {
        self.ignore_newline_style = true;
        self
    }

    /// Apply the options so that equal outputs mean equivalent inputs.
    #[must_use]
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut out = Cow::Borrowed(text);
        if self.ignore_leading_whitespace {
            out = match out {
                Cow::Borrowed(s) => Cow::Borrowed(s.trim_start()),
                Cow::Owned(s) => Cow::Owned(s.trim_start().to_string()),
            };
        }
        if self.ignore_trailing_whitespace {
            out = match out {
                Cow::Borrowed(s) => Cow::Borrowed(s.trim_end()),
                Cow::Owned(s) => Cow::Owned(s.trim_end().to_string()),
            };
        }
        if self.ignore_newline_style && out.contains('\r') {
            out = Cow::Owned(out.replace("\r\n", "\n").replace('\r', "\n"));
        }
        if self.ignore_case {
            out = Cow::Owned(out.chars().flat_map(char::to_lowercase).collect());
        }
        out
    }

    /// Like [`normalize`](Self::normalize), keeping for every output character
    /// the range of `text` characters it came from.
    #[must_use]
    pub fn normalize_traced(&self, text: &str) -> Vec<SourcedChar> {
        let mut out: Vec<SourcedChar> = text
            .chars()
            .enumerate()
            .map(|(i, ch)| SourcedChar::new(ch, i, i + 1))
            .collect();
        if self.ignore_leading_whitespace {
            let skip = out.iter().take_while(|c| c.ch.is_whitespace()).count();
            out.drain(..skip);
        }
        if self.ignore_trailing_whitespace {
            let keep = out
                .iter()
                .rposition(|c| !c.ch.is_whitespace())
                .map_or(0, |at| at + 1);
            out.truncate(keep);
        }
        if self.ignore_newline_style {
            out = fold_newlines(out);
        }
        if self.ignore_case {
            out = out
                .into_iter()
                .flat_map(|c| c.ch.to_lowercase().map(move |ch| SourcedChar { ch, ..c }))
                .collect();
        }
        out
    }
}

/// A normalized character and the `start..end` characters of the input it
/// was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcedChar {
    pub ch: char,
    pub start: usize,
    pub end: usize,
}

impl SourcedChar {
    const fn new(ch: char, start: usize, end: usize) -> Self {
        Self { ch, start, end }
    }
}

/// `\r\n` becomes one `\n` spanning both inputs; a lone `\r` becomes `\n`.
fn fold_newlines(chars: Vec<SourcedChar>) -> Vec<SourcedChar> {
    let mut out: Vec<SourcedChar> = Vec::with_capacity(chars.len());
    for c in chars {
        match out.last_mut() {
            Some(prev) if prev.ch == '\r' && c.ch == '\n' => {
                prev.ch = '\n';
                prev.end = c.end;
            }
            _ => out.push(c),
        }
    }
    for c in &mut out {
        if c.ch == '\r' {
            c.ch = '\n';
        }
    }
    out
}

impl EqualityComparer<str> for StringOptions {
    fn equals(&self, a: &str, b: &str) -> bool {
        self.normalize(a) == self.normalize(b)
    }
}
