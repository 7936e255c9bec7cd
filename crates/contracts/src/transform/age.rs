use chrono::{Datelike, NaiveDate};

use crate::clock::Clock;
use crate::error::{ContractError, Result};

use super::timestamp::iso_to_date;

/// Age in whole years as of the clock's current date.
///
/// The year difference is reduced by one when the birthday has not yet
/// been reached this year; an exact month-and-day match counts as already
/// reached. Inherently "as of now": the result changes across day
/// boundaries, which is why the clock is an explicit parameter.
pub fn birth_date_to_age(birth_date: &str, clock: &dyn Clock) -> Result<i32> {
    let birth = parse_birth_date(birth_date)?;
    let today = clock.today();

    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Ok(age)
}

/// Approximate birth date for an age, fabricated as January 1st.
///
/// Deliberately coarse: month and day information is lost, so this is not
/// an inverse of [`birth_date_to_age`].
pub fn age_to_birth_date(age: i32, clock: &dyn Clock) -> String {
    format!("{}-01-01", clock.today().year() - age)
}

fn parse_birth_date(s: &str) -> Result<NaiveDate> {
    if let Ok(date) = s.parse::<NaiveDate>() {
        return Ok(date);
    }
    // Full timestamps are accepted too; only the calendar date matters
    iso_to_date(s)
        .map(|date| date.date_naive())
        .map_err(|_| ContractError::InvalidBirthDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;

    fn clock_at(year: i32, month: u32, day: u32) -> MockClock {
        let mut clock = MockClock::new();
        clock
            .expect_today()
            .return_const(NaiveDate::from_ymd_opt(year, month, day).unwrap());
        clock
    }

    #[test]
    fn test_age_before_birthday() {
        let clock = clock_at(2024, 6, 14);
        assert_eq!(birth_date_to_age("2000-06-15", &clock).unwrap(), 23);
    }

    #[test]
    fn test_age_on_birthday() {
        let clock = clock_at(2024, 6, 15);
        assert_eq!(birth_date_to_age("2000-06-15", &clock).unwrap(), 24);
    }

    #[test]
    fn test_age_after_birthday() {
        let clock = clock_at(2024, 12, 31);
        assert_eq!(birth_date_to_age("2000-06-15", &clock).unwrap(), 24);
    }

    #[test]
    fn test_age_earlier_month_but_later_day() {
        // Month comparison wins over day-of-month
        let clock = clock_at(2024, 5, 30);
        assert_eq!(birth_date_to_age("2000-06-01", &clock).unwrap(), 23);
    }

    #[test]
    fn test_age_accepts_full_timestamps() {
        let clock = clock_at(2024, 6, 15);
        assert_eq!(
            birth_date_to_age("2000-06-15T12:00:00Z", &clock).unwrap(),
            24
        );
    }

    #[test]
    fn test_invalid_birth_date_is_an_error() {
        let clock = MockClock::new();
        assert_eq!(
            birth_date_to_age("soon", &clock).unwrap_err(),
            ContractError::InvalidBirthDate("soon".to_string())
        );
    }

    #[test]
    fn test_age_to_birth_date_is_january_first() {
        let clock = clock_at(2024, 3, 1);
        assert_eq!(age_to_birth_date(10, &clock), "2014-01-01");
        assert_eq!(age_to_birth_date(0, &clock), "2024-01-01");
    }
}
