//! Date helpers for selecting and displaying days.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

use crate::error::{CalNotesError, CalNotesResult};

/// Today in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a day given on the command line or at a prompt.
/// - `today`, `tomorrow`, `yesterday` (case-insensitive), relative to `today`
/// - YYYY-MM-DD
pub fn parse_day(input: &str, today: NaiveDate) -> CalNotesResult<NaiveDate> {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => Ok(today + Duration::days(1)),
        "yesterday" => Ok(today - Duration::days(1)),
        _ => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map_err(|_| CalNotesError::InvalidDate(input.to_string())),
    }
}

/// Human-readable label for a day (e.g. "Today", "Tomorrow", "Wed May 1 2024").
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}

/// Display form of a server timestamp (e.g. "5/1/2024, 9:30:00 AM").
pub fn display_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn parses_iso_days() {
        let today = day("2024-05-01");
        assert_eq!(parse_day("2024-02-29", today).unwrap(), day("2024-02-29"));
        assert_eq!(parse_day(" 2024-12-31 ", today).unwrap(), day("2024-12-31"));
    }

    #[test]
    fn parses_relative_days() {
        let today = day("2024-05-01");
        assert_eq!(parse_day("today", today).unwrap(), today);
        assert_eq!(parse_day("Tomorrow", today).unwrap(), day("2024-05-02"));
        assert_eq!(parse_day("yesterday", today).unwrap(), day("2024-04-30"));
    }

    #[test]
    fn rejects_malformed_days() {
        let today = day("2024-05-01");
        assert!(matches!(
            parse_day("2024-13-01", today),
            Err(CalNotesError::InvalidDate(_))
        ));
        assert!(parse_day("05/01/2024", today).is_err());
        assert!(parse_day("", today).is_err());
    }

    #[test]
    fn labels_nearby_days() {
        let today = day("2024-05-01");
        assert_eq!(day_label(today, today), "Today");
        assert_eq!(day_label(day("2024-05-02"), today), "Tomorrow");
        assert_eq!(day_label(day("2024-04-30"), today), "Yesterday");
        assert_eq!(day_label(day("2024-05-08"), today), "Wed May 8 2024");
    }

    #[test]
    fn formats_timestamps_for_display() {
        let ts = NaiveDateTime::parse_from_str("2024-05-01T21:05:09", "%Y-%m-%dT%H:%M:%S").unwrap();
        assert_eq!(display_timestamp(&ts), "5/1/2024, 9:05:09 PM");
    }
}
