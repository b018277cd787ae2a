//! Time utilities: strict HH:MM parsing, lunch windows, durations and labels.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

const FULLWIDTH_COLON: char = '：';

fn hhmm_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("static HH:MM pattern")
    })
}

/// Parse a strict `HH:MM` clock time.
///
/// Surrounding whitespace is ignored and the fullwidth colon is accepted.
/// Anything else (single digits, seconds, out of range values) is `None`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let normalized = t.trim().replace(FULLWIDTH_COLON, ":");
    let caps = hhmm_regex().captures(&normalized)?;

    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Parse a clock time and anchor it to `day`.
pub fn parse_time_on(t: &str, day: NaiveDate) -> Option<NaiveDateTime> {
    parse_time(t).map(|time| day.and_time(time))
}

/// Like [`parse_time`] but failing loudly, for configuration values.
pub fn parse_required_time(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Parse a lunch window written as `HH:MM-HH:MM`.
pub fn parse_lunch_window(s: &str) -> Option<(NaiveTime, NaiveTime)> {
    let (start, end) = s.split_once('-')?;
    let start = parse_time(start)?;
    let end = parse_time(end)?;

    if end > start { Some((start, end)) } else { None }
}

/// Parse durations such as `8h`, `7h30m`, `45m` or a bare minute count.
pub fn parse_duration_to_minutes(s: &str) -> AppResult<i64> {
    let raw = s.trim().to_lowercase();
    let err = || AppError::InvalidDuration(s.to_string());

    if raw.is_empty() {
        return Err(err());
    }

    if let Ok(m) = raw.parse::<i64>() {
        return if m > 0 { Ok(m) } else { Err(err()) };
    }

    let (hours_part, rest) = match raw.split_once('h') {
        Some((h, rest)) => (Some(h), rest),
        None => (None, raw.as_str()),
    };

    let hours: i64 = match hours_part {
        Some(h) => h.trim().parse().map_err(|_| err())?,
        None => 0,
    };

    let rest = rest.trim();
    let minutes: i64 = if rest.is_empty() {
        0
    } else {
        rest.strip_suffix('m')
            .ok_or_else(err)?
            .trim()
            .parse()
            .map_err(|_| err())?
    };

    if hours < 0 || minutes < 0 {
        return Err(err());
    }

    match hours.checked_mul(60).and_then(|h| h.checked_add(minutes)) {
        Some(total) if total > 0 => Ok(total),
        _ => Err(err()),
    }
}

/// Minutes between two timestamps, seconds kept as a fraction.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / 60.0
}

pub fn format_hm(t: NaiveDateTime) -> String {
    t.format("%H:%M").to_string()
}

/// Label of a missing range: `HH:MM~HH:MM (N分)`, minutes truncated.
pub fn range_label(start: NaiveDateTime, end: NaiveDateTime, minutes: f64) -> String {
    format!(
        "{}~{} ({}分)",
        format_hm(start),
        format_hm(end),
        minutes.trunc() as i64
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ascii_and_fullwidth_colon() {
        let expected = NaiveTime::from_hms_opt(9, 15, 0);
        assert_eq!(parse_time("09:15"), expected);
        assert_eq!(parse_time("09：15"), expected);
        assert_eq!(parse_time("  09:15 \t"), expected);
    }

    #[test]
    fn rejects_malformed_times() {
        for bad in ["", "   ", "25:00", "9:5", "9:05", "09:5", "12:60", "09:15:00", "0915", "ab:cd"] {
            assert_eq!(parse_time(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn lunch_window_must_be_ordered() {
        let (s, e) = parse_lunch_window("12:00-13:00").unwrap();
        assert_eq!(s, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(e, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
        assert!(parse_lunch_window("13:00-12:00").is_none());
        assert!(parse_lunch_window("12:00").is_none());
    }

    #[test]
    fn durations() {
        assert_eq!(parse_duration_to_minutes("8h").unwrap(), 480);
        assert_eq!(parse_duration_to_minutes("9h").unwrap(), 540);
        assert_eq!(parse_duration_to_minutes("7h30m").unwrap(), 450);
        assert_eq!(parse_duration_to_minutes("45m").unwrap(), 45);
        assert_eq!(parse_duration_to_minutes("480").unwrap(), 480);
        assert!(parse_duration_to_minutes("").is_err());
        assert!(parse_duration_to_minutes("0h").is_err());
        assert!(parse_duration_to_minutes("eight").is_err());
        assert!(parse_duration_to_minutes("200000000000000000h").is_err());
        assert!(parse_duration_to_minutes("-1h").is_err());
    }

    #[test]
    fn label_truncates_minutes() {
        let day = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let s = parse_time_on("15:15", day).unwrap();
        let e = parse_time_on("15:30", day).unwrap();
        assert_eq!(range_label(s, e, 15.9), "15:15~15:30 (15分)");
    }
}
