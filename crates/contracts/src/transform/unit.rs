/// Convert minutes to seconds (exact)
pub fn minutes_to_seconds(minutes: i64) -> i64 {
    minutes * 60
}

/// Convert seconds to whole minutes, floored toward negative infinity
pub fn seconds_to_minutes(seconds: i64) -> i64 {
    seconds.div_euclid(60)
}

/// Convert hours to seconds (exact)
pub fn hours_to_seconds(hours: i64) -> i64 {
    hours * 3600
}

/// Convert seconds to whole hours, floored toward negative infinity
pub fn seconds_to_hours(seconds: i64) -> i64 {
    seconds.div_euclid(3600)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_conversions() {
        assert_eq!(minutes_to_seconds(0), 0);
        assert_eq!(minutes_to_seconds(90), 5400);
        assert_eq!(hours_to_seconds(2), 7200);
    }

    #[test]
    fn test_floor_truncation() {
        assert_eq!(seconds_to_minutes(90), 1);
        assert_eq!(seconds_to_minutes(119), 1);
        assert_eq!(seconds_to_minutes(120), 2);
        assert_eq!(seconds_to_hours(3599), 0);
        assert_eq!(seconds_to_hours(7200), 2);
    }

    #[test]
    fn test_floor_is_toward_negative_infinity() {
        assert_eq!(seconds_to_minutes(-1), -1);
        assert_eq!(seconds_to_minutes(-60), -1);
        assert_eq!(seconds_to_hours(-3601), -2);
    }

    #[test]
    fn test_roundtrip_for_whole_units() {
        for m in [0, 1, 15, 1440] {
            assert_eq!(seconds_to_minutes(minutes_to_seconds(m)), m);
        }
        for h in [0, 1, 24] {
            assert_eq!(seconds_to_hours(hours_to_seconds(h)), h);
        }
    }
}
