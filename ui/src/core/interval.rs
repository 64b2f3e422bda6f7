//! Seconds-since-midnight values as displayable times of day.

use std::fmt;

use time::{macros::format_description, Duration, Time};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// A time of day with whole-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(Time);

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self(Time::MIDNIGHT);

    /// Seconds outside one day wrap around midnight.
    pub fn from_seconds(seconds: i64) -> Self {
        Self(Time::MIDNIGHT + Duration::seconds(seconds.rem_euclid(SECONDS_PER_DAY)))
    }

    pub fn seconds_since_midnight(&self) -> u32 {
        let (hour, minute, second) = self.0.as_hms();
        u32::from(hour) * 3600 + u32::from(minute) * 60 + u32::from(second)
    }

    pub fn as_time(&self) -> Time {
        self.0
    }

    /// `HH:mm:ss`
    pub fn format(&self) -> String {
        self.0
            .format(format_description!("[hour]:[minute]:[second]"))
            .unwrap_or_else(|_| "—".to_string())
    }

    /// Inverse of [`TimeOfDay::format`].
    pub fn parse(raw: &str) -> Option<Self> {
        Time::parse(raw.trim(), format_description!("[hour]:[minute]:[second]"))
            .ok()
            .map(Self)
    }
}

impl From<Time> for TimeOfDay {
    fn from(time: Time) -> Self {
        // Drop sub-second precision so equality matches the displayed value.
        let (hour, minute, second) = time.as_hms();
        Self::from_seconds(i64::from(hour) * 3600 + i64::from(minute) * 60 + i64::from(second))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Convert a backend interval (seconds, possibly fractional because some
/// statistics are means) into a time of day. Fractions are truncated;
/// non-finite input maps to midnight.
pub fn parse_interval(seconds: f64) -> TimeOfDay {
    if !seconds.is_finite() {
        return TimeOfDay::MIDNIGHT;
    }
    TimeOfDay::from_seconds(seconds.trunc() as i64)
}
