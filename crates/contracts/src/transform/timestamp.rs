use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};

use crate::error::{ContractError, Result};

/// Convert a Unix timestamp (seconds) to an ISO 8601 string with
/// millisecond precision and a `Z` suffix.
pub fn unix_to_iso(unix: i64) -> Result<String> {
    let date = DateTime::from_timestamp(unix, 0)
        .ok_or_else(|| ContractError::InvalidTimestamp(format!("seconds out of range: {unix}")))?;
    Ok(date_to_iso(date))
}

/// Convert an ISO 8601 string to a Unix timestamp (seconds).
///
/// Sub-second input is floored toward negative infinity, never rounded.
pub fn iso_to_unix(iso: &str) -> Result<i64> {
    Ok(iso_to_unix_ms(iso)?.div_euclid(1000))
}

/// Render an instant as ISO 8601 with millisecond precision and `Z`.
pub fn date_to_iso(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an ISO 8601 string into an instant.
///
/// Accepts full RFC 3339 timestamps and bare `YYYY-MM-DD` dates (read as
/// UTC midnight). Malformed input is an error, never a panic.
pub fn iso_to_date(iso: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(iso) {
        return Ok(date.with_timezone(&Utc));
    }
    if let Ok(date) = iso.parse::<NaiveDate>() {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(ContractError::InvalidTimestamp(iso.to_string()))
}

/// Convert a Unix timestamp (milliseconds) to an ISO 8601 string.
pub fn unix_ms_to_iso(unix_ms: i64) -> Result<String> {
    let date = DateTime::from_timestamp_millis(unix_ms).ok_or_else(|| {
        ContractError::InvalidTimestamp(format!("milliseconds out of range: {unix_ms}"))
    })?;
    Ok(date_to_iso(date))
}

/// Convert an ISO 8601 string to a Unix timestamp (milliseconds).
pub fn iso_to_unix_ms(iso: &str) -> Result<i64> {
    Ok(iso_to_date(iso)?.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_unix_to_iso() {
        assert_eq!(
            unix_to_iso(1_700_000_000).unwrap(),
            "2023-11-14T22:13:20.000Z"
        );
        assert_eq!(unix_to_iso(0).unwrap(), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_iso_to_unix_roundtrip() {
        for seconds in [0, 1, 1_700_000_000, -1, -86_400] {
            let iso = unix_to_iso(seconds).unwrap();
            assert_eq!(iso_to_unix(&iso).unwrap(), seconds, "roundtrip {iso}");
        }
    }

    #[test]
    fn test_iso_to_unix_floors_subseconds() {
        assert_eq!(iso_to_unix("2023-11-14T22:13:20.999Z").unwrap(), 1_700_000_000);
        // Pre-epoch: floor moves away from zero
        assert_eq!(iso_to_unix("1969-12-31T23:59:59.500Z").unwrap(), -1);
    }

    #[test]
    fn test_unix_ms_roundtrip() {
        for ms in [0, 1, 999, 1_700_000_000_123, -1, -1_001] {
            let iso = unix_ms_to_iso(ms).unwrap();
            assert_eq!(iso_to_unix_ms(&iso).unwrap(), ms, "roundtrip {iso}");
        }
    }

    #[test]
    fn test_date_to_iso_matches_iso_to_date() {
        let date = Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap();
        let iso = date_to_iso(date);
        assert_eq!(iso, "2024-02-01T09:30:00.000Z");
        assert_eq!(iso_to_date(&iso).unwrap(), date);
    }

    #[test]
    fn test_iso_to_date_accepts_offsets() {
        let date = iso_to_date("2024-02-01T09:30:00+02:00").unwrap();
        assert_eq!(date_to_iso(date), "2024-02-01T07:30:00.000Z");
    }

    #[test]
    fn test_iso_to_date_accepts_bare_dates() {
        let date = iso_to_date("2014-01-01").unwrap();
        assert_eq!(date_to_iso(date), "2014-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(matches!(
            iso_to_unix("not a date"),
            Err(ContractError::InvalidTimestamp(_))
        ));
        assert!(iso_to_date("").is_err());
        assert!(iso_to_unix_ms("2024-13-99T00:00:00Z").is_err());
    }

    #[test]
    fn test_out_of_range_seconds_are_an_error() {
        assert!(unix_to_iso(i64::MAX).is_err());
        assert!(unix_ms_to_iso(i64::MIN).is_err());
    }
}
