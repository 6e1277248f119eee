use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use humansize::{format_size as human_format_size, DECIMAL};
use std::cmp::Ordering;
use unicode_width::UnicodeWidthStr;

/// Shown for timestamps that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Turn a snake_case token into Title Case ("tail_length" -> "Tail Length")
pub fn title_case(token: &str) -> String {
    token
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive ordering with a byte-order tiebreak so the result is total
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// One decimal place with a percent sign.
///
/// Exact ties round away from zero ("12.25" -> "12.3%"), unlike `{:.1}` which
/// rounds them to even.
pub fn format_percent(value: f64) -> String {
    let magnitude = value.abs();
    // Only odd multiples of 0.25 sit exactly halfway between two tenths
    let quarters = magnitude * 4.0;
    let rounded = if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        (magnitude * 10.0).ceil() / 10.0
    } else {
        magnitude
    };
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{:.1}%", sign, rounded)
}

/// Format byte counts for display (e.g. "12.3 kB")
pub fn format_size(bytes: usize) -> String {
    human_format_size(bytes, DECIMAL)
}

/// Parse a history timestamp into local time.
///
/// Accepts RFC 3339 with an offset, naive ISO-8601 date-times (read as local
/// time) and bare dates (read as UTC midnight).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }

    const NAIVE_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return resolve_local(naive, |n| Local.from_local_datetime(n));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(&Local))
}

/// Pick a wall-clock time: the earlier instant when it is ambiguous, and one
/// hour later when it falls in a spring-forward gap.
fn resolve_local<T>(
    naive: NaiveDateTime,
    resolve: impl Fn(&NaiveDateTime) -> LocalResult<T>,
) -> Option<T> {
    match resolve(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt),
        LocalResult::None => resolve(&(naive + TimeDelta::hours(1))).earliest(),
    }
}

/// "Jan 5, 2025, 03:04 PM"
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Pad with spaces to a display width, counting wide characters correctly
pub fn pad_right(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    if current >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - current))
    }
}
