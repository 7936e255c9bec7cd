use chrono::{DateTime, NaiveDate, Utc};

/// Time source for the transforms that depend on "now"
///
/// Injected explicitly so that age calculations stay deterministic in
/// tests. [`SystemClock`] is the production implementation; callers should
/// construct it at the outermost call site only.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date in UTC
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Reads the real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_today_derives_from_now() {
        struct Fixed;
        impl Clock for Fixed {
            fn now(&self) -> DateTime<Utc> {
                Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 59).unwrap()
            }
        }

        assert_eq!(
            Fixed.today(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_system_clock_reads_real_time() {
        // 2020-01-01T00:00:00Z, well in the past for any real clock
        assert!(SystemClock.now().timestamp() > 1_577_836_800);
    }
}
