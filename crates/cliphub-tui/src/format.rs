use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Timestamp shapes the hub has been seen to emit: SQLite CURRENT_TIMESTAMP,
/// ISO 8601 with and without fractional seconds, and bare dates.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
];

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Local).naive_local());
    }
    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Render a backend timestamp as `YYYY-MM-DD HH:MM`, or hand back the raw
/// string when it doesn't parse. Empty input stays empty.
pub fn format_date_time(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match parse_timestamp(raw) {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => raw.to_string(),
    }
}

/// Render a local time as `HH:MM`, with a placeholder when absent.
pub fn format_time_hm(time: Option<DateTime<Local>>) -> String {
    match time {
        Some(t) => t.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sqlite_timestamps_render_without_seconds() {
        assert_eq!(
            format_date_time("2024-03-05 09:41:22"),
            "2024-03-05 09:41"
        );
    }

    #[test]
    fn iso_timestamps_are_accepted() {
        assert_eq!(
            format_date_time("2024-03-05T09:41:22.123456"),
            "2024-03-05 09:41"
        );
    }

    #[test]
    fn bare_dates_render_as_midnight() {
        assert_eq!(format_date_time("2024-01-01"), "2024-01-01 00:00");
    }

    #[test]
    fn unparsable_values_fall_back_to_raw() {
        assert_eq!(format_date_time("three days ago"), "three days ago");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(format_date_time(""), "");
    }

    #[test]
    fn sync_time_placeholder() {
        assert_eq!(format_time_hm(None), "--:--");

        let t = Local.with_ymd_and_hms(2024, 3, 5, 7, 9, 0).unwrap();
        assert_eq!(format_time_hm(Some(t)), "07:09");
    }
}
