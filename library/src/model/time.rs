//! Helpers for `std::time::Duration`, the elapsed-time type used throughout the crate.

use std::time::Duration;

/// Builds a duration from fractional seconds. Negative and non-finite inputs clamp to zero.
pub fn from_seconds(seconds: f64) -> Duration {
    if seconds.is_finite() && seconds > 0.0 {
        Duration::from_secs_f64(seconds)
    } else {
        Duration::ZERO
    }
}

pub fn to_seconds(t: Duration) -> f64 {
    t.as_secs_f64()
}

/// Formats a duration with a small `strftime`-like pattern.
///
/// | token | meaning                               |
/// |-------|---------------------------------------|
/// | `%h`  | hours                                 |
/// | `%H`  | hours, two digits                     |
/// | `%m`  | minutes within the hour               |
/// | `%M`  | minutes within the hour, two digits   |
/// | `%s`  | seconds within the minute             |
/// | `%S`  | seconds within the minute, two digits |
/// | `%z`  | milliseconds                          |
/// | `%Z`  | milliseconds, three digits            |
/// | `%%`  | literal `%`                           |
///
/// Unknown tokens are copied through unchanged.
pub fn format_duration(t: Duration, pattern: &str) -> String {
    let total_secs = t.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let millis = t.subsec_millis();

    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('h') => out.push_str(&hours.to_string()),
            Some('H') => out.push_str(&format!("{:02}", hours)),
            Some('m') => out.push_str(&minutes.to_string()),
            Some('M') => out.push_str(&format!("{:02}", minutes)),
            Some('s') => out.push_str(&seconds.to_string()),
            Some('S') => out.push_str(&format!("{:02}", seconds)),
            Some('z') => out.push_str(&millis.to_string()),
            Some('Z') => out.push_str(&format!("{:03}", millis)),
            Some('%') => out.push('%'),
            Some(other) => {
                out.push('%');
                out.push(other);
            }
            None => out.push('%'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_seconds_clamps_invalid_input() {
        assert_eq!(from_seconds(-1.0), Duration::ZERO);
        assert_eq!(from_seconds(f64::NAN), Duration::ZERO);
        assert_eq!(from_seconds(1.5), Duration::from_millis(1500));
    }

    #[test]
    fn format_minute_second() {
        let t = Duration::from_secs(3 * 60 + 7);
        assert_eq!(format_duration(t, "%m:%S"), "3:07");
    }

    #[test]
    fn format_hour_minute() {
        let t = Duration::from_secs(2 * 3600 + 5 * 60 + 59);
        assert_eq!(format_duration(t, "%h:%M"), "2:05");
    }

    #[test]
    fn format_minutes_wrap_within_hour() {
        let t = Duration::from_secs(3600 + 60);
        assert_eq!(format_duration(t, "%m:00"), "1:00");
        assert_eq!(format_duration(t, "%H:%M:%S"), "01:01:00");
    }

    #[test]
    fn format_milliseconds() {
        let t = Duration::from_millis(1_042);
        assert_eq!(format_duration(t, "%s.%Z"), "1.042");
        assert_eq!(format_duration(t, "%z"), "42");
    }

    #[test]
    fn format_passes_unknown_tokens() {
        assert_eq!(format_duration(Duration::ZERO, "%q 100%%"), "%q 100%");
        assert_eq!(format_duration(Duration::ZERO, "end%"), "end%");
    }
}
