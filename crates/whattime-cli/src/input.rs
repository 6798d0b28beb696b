//! Interval input parsing.
//!
//! Availability blocks arrive as `START/END` pairs of RFC 3339 datetimes,
//! either as positional arguments or one pair per line on stdin.

use chrono::{DateTime, Utc};

use whattime_core::Interval;

use crate::error::{CliError, CliResult};

/// Parses a single `START/END` pair.
///
/// The pair must describe a non-empty range; `start >= end` is rejected
/// here so the formatter never sees an inverted interval.
pub fn parse_interval(spec: &str) -> CliResult<Interval> {
    let Some((start_raw, end_raw)) = spec.split_once('/') else {
        return Err(CliError::Input(format!(
            "expected START/END pair, got {spec:?}"
        )));
    };

    let start = parse_instant(start_raw)?;
    let end = parse_instant(end_raw)?;
    if start >= end {
        return Err(CliError::Input(format!(
            "start must be before end in {spec:?}"
        )));
    }

    Ok(Interval::new(start, end))
}

/// Parses a sequence of pair specs, skipping blank entries.
pub fn parse_intervals<'a, I>(specs: I) -> CliResult<Vec<Interval>>
where
    I: IntoIterator<Item = &'a str>,
{
    specs
        .into_iter()
        .map(str::trim)
        .filter(|spec| !spec.is_empty())
        .map(parse_interval)
        .collect()
}

fn parse_instant(raw: &str) -> CliResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CliError::Input(format!("invalid RFC 3339 datetime {raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn parses_pair() {
        let iv = parse_interval("2024-01-01T15:00:00Z/2024-01-01T16:00:00Z").unwrap();
        assert_eq!(iv.start, utc(2024, 1, 1, 15, 0, 0));
        assert_eq!(iv.end, utc(2024, 1, 1, 16, 0, 0));
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        let iv = parse_interval("2024-01-01T10:00:00-05:00/2024-01-01T11:00:00-05:00").unwrap();
        assert_eq!(iv.start, utc(2024, 1, 1, 15, 0, 0));
    }

    #[test]
    fn rejects_missing_separator() {
        let err = parse_interval("2024-01-01T15:00:00Z").unwrap_err();
        assert!(err.to_string().contains("START/END"));
    }

    #[test]
    fn rejects_bad_datetime() {
        let err = parse_interval("yesterday/2024-01-01T16:00:00Z").unwrap_err();
        assert!(err.to_string().contains("RFC 3339"));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = parse_interval("2024-01-01T16:00:00Z/2024-01-01T15:00:00Z").unwrap_err();
        assert!(err.to_string().contains("start must be before end"));
    }

    #[test]
    fn rejects_empty_range() {
        let err = parse_interval("2024-01-01T15:00:00Z/2024-01-01T15:00:00Z").unwrap_err();
        assert!(err.to_string().contains("start must be before end"));
    }

    #[test]
    fn skips_blank_lines() {
        let specs = [
            "2024-01-01T15:00:00Z/2024-01-01T16:00:00Z",
            "",
            "   ",
            "2024-01-02T09:00:00Z/2024-01-02T10:00:00Z",
        ];
        let intervals = parse_intervals(specs).unwrap();
        assert_eq!(intervals.len(), 2);
    }
}
