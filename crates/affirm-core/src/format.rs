//! Rendering of values into failure messages.

use crate::culture::Culture;
use crate::tolerance::{
    TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MICROSECOND, TICKS_PER_MILLISECOND, TICKS_PER_MINUTE,
    TICKS_PER_SECOND, Tolerance,
};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};
use uuid::Uuid;

/// Placeholder for an absent value.
pub const NULL: &str = "<null>";

/// Formatting options shared by every value rendered in one message.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions<'a> {
    pub culture: &'a Culture,
    /// Lines of a multi-line string printed before it is cut.
    pub max_lines: usize,
}

/// A value that can describe itself in a failure message.
pub trait FormatValue {
    fn format_value(&self, opts: &FormatOptions<'_>) -> String;
}

impl<T: FormatValue + ?Sized> FormatValue for &T {
    fn format_value(&self, opts: &FormatOptions<'_>) -> String {
        (**self).format_value(opts)
    }
}

impl<T: FormatValue> FormatValue for Option<T> {
    fn format_value(&self, opts: &FormatOptions<'_>) -> String {
        self.as_ref()
            .map_or_else(|| NULL.to_string(), |v| v.format_value(opts))
    }
}

impl FormatValue for bool {
    fn format_value(&self, _opts: &FormatOptions<'_>) -> String {
        self.to_string()
    }
}

macro_rules! format_integer {
    ($($t:ty),*) => {
        $(impl FormatValue for $t {
            fn format_value(&self, opts: &FormatOptions<'_>) -> String {
                opts.culture.format_integer(i128::from(*self))
            }
        })*
    };
}

format_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl FormatValue for usize {
    fn format_value(&self, opts: &FormatOptions<'_>) -> String {
        i128::try_from(*self).map_or_else(|_| self.to_string(), |v| opts.culture.format_integer(v))
    }
}

impl FormatValue for f64 {
    fn format_value(&self, opts: &FormatOptions<'_>) -> String {
        opts.culture.format_float(*self)
    }
}

impl FormatValue for f32 {
    fn format_value(&self, opts: &FormatOptions<'_>) -> String {
        opts.culture.format_float(f64::from(*self))
    }
}

impl FormatValue for char {
    fn format_value(&self, _opts: &FormatOptions<'_>) -> String {
        format!("'{self}'")
    }
}

impl FormatValue for str {
    fn format_value(&self, opts: &FormatOptions<'_>) -> String {
        format!("\"{}\"", limit_lines(self, opts.max_lines))
    }
}

impl FormatValue for String {
    fn format_value(&self, opts: &FormatOptions<'_>) -> String {
        self.as_str().format_value(opts)
    }
}

impl FormatValue for Uuid {
    fn format_value(&self, _opts: &FormatOptions<'_>) -> String {
        format!("{{{self}}}")
    }
}

impl FormatValue for Date {
    fn format_value(&self, _opts: &FormatOptions<'_>) -> String {
        format!("<{}>", date_text(*self))
    }
}

impl FormatValue for Time {
    fn format_value(&self, _opts: &FormatOptions<'_>) -> String {
        format!("<{}>", time_text(*self))
    }
}

impl FormatValue for PrimitiveDateTime {
    fn format_value(&self, _opts: &FormatOptions<'_>) -> String {
        format!("<{} {}>", date_text(self.date()), time_text(self.time()))
    }
}

impl FormatValue for OffsetDateTime {
    fn format_value(&self, _opts: &FormatOptions<'_>) -> String {
        format!(
            "<{} {} {}>",
            date_text(self.date()),
            time_text(self.time()),
            offset_text(self.offset())
        )
    }
}

impl FormatValue for UtcOffset {
    fn format_value(&self, _opts: &FormatOptions<'_>) -> String {
        offset_text(*self)
    }
}

impl FormatValue for time::Duration {
    fn format_value(&self, opts: &FormatOptions<'_>) -> String {
        format_ticks(self.whole_nanoseconds().div_euclid(100), opts.culture)
    }
}

impl FormatValue for Tolerance {
    fn format_value(&self, opts: &FormatOptions<'_>) -> String {
        format_ticks(self.ticks(), opts.culture)
    }
}

/// Wrapper rendering any `Debug` value, for enums and objects.
pub struct DebugValue<'a, T: ?Sized>(pub &'a T);

impl<T: std::fmt::Debug + ?Sized> FormatValue for DebugValue<'_, T> {
    fn format_value(&self, _opts: &FormatOptions<'_>) -> String {
        format!("{:?}", self.0)
    }
}

fn date_text(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

fn time_text(time: Time) -> String {
    let formatted = if time.nanosecond() == 0 {
        time.format(&format_description!("[hour]:[minute]:[second]"))
    } else {
        time.format(&format_description!(
            "[hour]:[minute]:[second].[subsecond digits:7]"
        ))
    };
    formatted.unwrap_or_else(|_| time.to_string())
}

fn offset_text(offset: UtcOffset) -> String {
    let (h, m, _) = offset.as_hms();
    let sign = if offset.is_negative() { '-' } else { '+' };
    format!("{sign}{:02}:{:02}", h.unsigned_abs(), m.unsigned_abs())
}

/// Render a tick count as `1d 2h 3m 4s 5ms`.
///
/// Components that are zero are left out; sub-millisecond remainders are
/// shown as fractional microseconds.
#[must_use]
pub fn format_ticks(ticks: i128, culture: &Culture) -> String {
    if ticks == 0 {
        return "0s".to_string();
    }
    let mut rest = ticks.unsigned_abs();
    let mut parts = Vec::new();
    for (unit, suffix) in [
        (TICKS_PER_DAY, "d"),
        (TICKS_PER_HOUR, "h"),
        (TICKS_PER_MINUTE, "m"),
        (TICKS_PER_SECOND, "s"),
        (TICKS_PER_MILLISECOND, "ms"),
    ] {
        let unit = unit.unsigned_abs();
        let count = rest / unit;
        if count > 0 {
            parts.push(format!("{count}{suffix}"));
        }
        rest %= unit;
    }
    if rest > 0 {
        let micro = TICKS_PER_MICROSECOND.unsigned_abs();
        let whole = rest / micro;
        let frac = rest % micro;
        if frac == 0 {
            parts.push(format!("{whole}µs"));
        } else {
            parts.push(format!("{whole}{}{frac}µs", culture.decimal_separator));
        }
    }
    let joined = parts.join(" ");
    if ticks < 0 { format!("-{joined}") } else { joined }
}

fn limit_lines(text: &str, max_lines: usize) -> std::borrow::Cow<'_, str> {
    match text.match_indices('\n').nth(max_lines.saturating_sub(1)) {
        Some((cut, _)) if max_lines > 0 => format!("{}…", &text[..cut]).into(),
        _ => text.into(),
    }
}
