//! Myfxbook platform time handling

use chrono::{
    Datelike, FixedOffset, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc,
};
use tracing::warn;
use crate::config::SOURCE_UTC_OFFSET_SECS;

/// Format of `openTime` / `closeTime`, e.g. `09/13/2024 23:50`.
pub const SOURCE_TIME_FORMAT: &str = "%m/%d/%Y %H:%M";
/// Format written to Notion date fields.
pub const UTC_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn source_offset() -> FixedOffset {
    FixedOffset::east_opt(SOURCE_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

pub fn parse_source_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), SOURCE_TIME_FORMAT).ok()
}

/// Converts a platform timestamp to a UTC ISO-8601 string, or `None` if it
/// does not parse.
pub fn convert_to_utc(raw: &str) -> Option<String> {
    let Some(local) = parse_source_time(raw) else {
        warn!(raw = %raw, "Error parsing platform time");
        return None;
    };

    source_offset()
        .from_local_datetime(&local)
        .single()
        .map(|dt| dt.with_timezone(&Utc).format(UTC_TIME_FORMAT).to_string())
}

/// Current wall-clock time in the platform offset.
pub fn source_now() -> NaiveDateTime {
    Utc::now().with_timezone(&source_offset()).naive_local()
}

/// Sunday 23:59:59 of the previous week. On a Sunday this is a full week back.
pub fn last_week_boundary(now: NaiveDateTime) -> NaiveDateTime {
    let days_back = i64::from(now.weekday().num_days_from_monday()) + 1;
    let sunday = now.date() - TimeDelta::days(days_back);
    (sunday + TimeDelta::days(1)).and_time(NaiveTime::MIN) - TimeDelta::seconds(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn converts_platform_time_to_utc() {
        assert_eq!(
            convert_to_utc("09/13/2024 23:50").as_deref(),
            Some("2024-09-13T20:50:00")
        );
    }

    #[test]
    fn conversion_crosses_midnight() {
        assert_eq!(
            convert_to_utc("01/01/2024 01:15").as_deref(),
            Some("2023-12-31T22:15:00")
        );
    }

    #[test]
    fn malformed_time_yields_none() {
        assert_eq!(convert_to_utc("13/09/2024"), None);
        assert_eq!(convert_to_utc("13/09/2024 10:00"), None);
        assert_eq!(convert_to_utc(""), None);
    }

    #[test]
    fn week_boundary_midweek() {
        // Wednesday 2024-09-18
        assert_eq!(
            last_week_boundary(at(2024, 9, 18, 10, 30, 0)),
            at(2024, 9, 15, 23, 59, 59)
        );
    }

    #[test]
    fn week_boundary_on_monday_and_sunday() {
        assert_eq!(
            last_week_boundary(at(2024, 9, 16, 0, 0, 1)),
            at(2024, 9, 15, 23, 59, 59)
        );
        assert_eq!(
            last_week_boundary(at(2024, 9, 22, 12, 0, 0)),
            at(2024, 9, 15, 23, 59, 59)
        );
    }
}
