//! Display formatting for the dashboard UI.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a cost in cents as US dollars.
///
/// Grouped thousands, at most two fraction digits, no trailing zeros:
/// `10000` → `"$100"`, `12345` → `"$123.45"`, `10050` → `"$100.5"`.
pub fn format_currency(cents: f64) -> String {
    let dollars = cents / 100.0;
    let sign = if dollars < 0.0 { "-" } else { "" };

    let mut s = format!("{:.2}", dollars.abs());
    if s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }

    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (s, None),
    };

    let grouped = group_thousands(&int_part);
    match frac_part {
        Some(f) => format!("{sign}${grouped}.{f}"),
        None => format!("{sign}${grouped}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a duration in seconds using s / m s / h m tiers.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{seconds:.1}s")
    } else if seconds < 3600.0 {
        let minutes = (seconds / 60.0).floor() as u64;
        let remaining = seconds % 60.0;
        format!("{minutes}m {remaining:.1}s")
    } else {
        let hours = (seconds / 3600.0).floor() as u64;
        let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
        format!("{hours}h {minutes}m")
    }
}

/// Coarse "n units ago" rendering of how far `then` lies before `now`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let seconds = elapsed.num_seconds();

    if seconds < 60 {
        return "just now".to_string();
    }

    let (value, unit) = if seconds < 3600 {
        (seconds / 60, "minute")
    } else if seconds < 86400 {
        (seconds / 3600, "hour")
    } else {
        (seconds / 86400, "day")
    };

    if value == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{value} {unit}s ago")
    }
}

/// Render a timestamp like `Aug 23, 2025 16:04:33`.
pub fn format_datetime(t: DateTime<Utc>) -> String {
    t.format("%b %-d, %Y %H:%M:%S").to_string()
}

/// Render a timestamp in ISO 8601 / RFC 3339 form with millisecond
/// precision, e.g. `2025-08-23T16:04:33.285Z`.
pub fn format_iso_datetime(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Truncate text to `max_len` characters, appending an ellipsis when cut.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len).collect();
    format!("{cut}...")
}
