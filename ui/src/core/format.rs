//! Formatting helpers for presenting presence statistics.

use time::{macros::format_description, Date};

/// Compact duration label: `7h 05m`, `45m`, `<1m`.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "—".into();
    }
    let total_minutes = (seconds / 60.0).floor() as u64;
    if total_minutes == 0 {
        return "<1m".into();
    }
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours == 0 {
        format!("{minutes}m")
    } else {
        format!("{hours}h {minutes:02}m")
    }
}

pub fn format_percent(fraction: f64) -> String {
    if fraction.is_finite() {
        format!("{:.1}%", fraction * 100.0)
    } else {
        "—".into()
    }
}

/// Plain numbers drop a trailing `.0`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        "—".into()
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// `dd-MM-yyyy`
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[day]-[month]-[year]"))
        .unwrap_or_else(|_| "—".to_string())
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time part
/// (`2013-09-10T00:00:00`, `2013-09-10 08:00`).
pub fn parse_date(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    Date::parse(date_part, format_description!("[year]-[month]-[day]")).ok()
}
