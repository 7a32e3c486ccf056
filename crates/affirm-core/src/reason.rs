//! Lazily rendered "because ..." explanations.

use crate::format::{FormatOptions, FormatValue};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

type Arg = Arc<dyn FormatValue + Send + Sync>;

/// A caller-supplied explanation with positional `{0}`, `{1}` placeholders.
///
/// Arguments are stored as-is and only formatted when a failure message is
/// built.
#[derive(Clone, Default)]
pub struct Reason {
    template: String,
    args: Vec<Arg>,
}

impl fmt::Debug for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reason")
            .field("template", &self.template)
            .field("args", &self.args.len())
            .finish()
    }
}

impl Reason {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            args: Vec::new(),
        }
    }

    /// Append the next positional argument.
    #[must_use]
    pub fn arg<T: FormatValue + Send + Sync + 'static>(mut self, value: T) -> Self {
        self.args.push(Arc::new(value));
        self
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.template.trim().is_empty()
    }

    /// The rendered text, without any "because" prefix.
    #[must_use]
    pub fn render(&self, opts: &FormatOptions<'_>) -> String {
        format_template(&self.template, &self.args, opts)
    }

    /// The clause that goes straight after the expectation: empty, or
    /// `" because ..."` with exactly one leading "because".
    #[must_use]
    pub fn render_because(&self, opts: &FormatOptions<'_>) -> String {
        let rendered = self.render(opts);
        let trimmed = rendered.trim();
        if trimmed.is_empty() {
            String::new()
        } else if starts_with_because(trimmed) {
            format!(" {trimmed}")
        } else {
            format!(" because {trimmed}")
        }
    }
}

impl From<&str> for Reason {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Reason {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// "because" as a whole leading word, in any case.
fn starts_with_because(text: &str) -> bool {
    text.split_at_checked(7).is_some_and(|(head, rest)| {
        head.eq_ignore_ascii_case("because") && rest.chars().next().is_none_or(char::is_whitespace)
    })
}

/// Why a template could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TemplateDefect {
    Unclosed(usize),
    NotAnIndex(String),
    MissingArgument(usize),
    StrayBrace(usize),
}

impl fmt::Display for TemplateDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unclosed(at) => write!(f, "unclosed '{{' at {at}"),
            Self::NotAnIndex(text) => write!(f, "'{{{text}}}' is not a positional placeholder"),
            Self::MissingArgument(index) => write!(f, "no argument for {{{index}}}"),
            Self::StrayBrace(at) => write!(f, "unmatched '}}' at {at}"),
        }
    }
}

/// Substitute `{N}` placeholders; `{{` and `}}` are literal braces.
///
/// A malformed template never fails: the raw template is returned with a
/// trailing diagnostic so the original assertion failure still surfaces.
#[must_use]
pub fn format_template(
    template: &str,
    args: &[impl AsRef<dyn FormatValue + Send + Sync>],
    opts: &FormatOptions<'_>,
) -> String {
    match try_format(template, args, opts) {
        Ok(text) => text,
        Err(defect) => {
            warn!(template, %defect, "malformed reason template");
            format!("{template} (malformed reason: {defect})")
        }
    }
}

fn try_format(
    template: &str,
    args: &[impl AsRef<dyn FormatValue + Send + Sync>],
    opts: &FormatOptions<'_>,
) -> Result<String, TemplateDefect> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((at, c)) = chars.next() {
        match c {
            '{' if chars.peek().is_some_and(|&(_, n)| n == '{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut inner = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, ch)) => inner.push(ch),
                        None => return Err(TemplateDefect::Unclosed(at)),
                    }
                }
                let index: usize = inner
                    .trim()
                    .parse()
                    .map_err(|_| TemplateDefect::NotAnIndex(inner.clone()))?;
                let arg = args
                    .get(index)
                    .ok_or(TemplateDefect::MissingArgument(index))?;
                out.push_str(&arg.as_ref().format_value(opts));
            }
            '}' if chars.peek().is_some_and(|&(_, n)| n == '}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(TemplateDefect::StrayBrace(at)),
            _ => out.push(c),
        }
    }
    Ok(out)
}
