use chrono::NaiveDate;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::ValidationError;

pub const BIRTH_DATE_MESSAGE: &str =
    "Birth date is invalid: expected DD.MM.YYYY and a date in the past";

const MIN_YEAR: i32 = 1900;

// ASCII classes only; `\d` would admit other Unicode digits.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birth date pattern is valid")
});

fn invalid() -> ValidationError {
    ValidationError::new("birth_date").with_message(Cow::Borrowed(BIRTH_DATE_MESSAGE))
}

/// Parses a `DD.MM.YYYY` birth date that lies strictly before `today`.
///
/// Every failure, structural or calendar, yields the same error.
pub fn parse_birth_date(value: Option<&str>, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let value = value.filter(|v| !v.trim().is_empty()).ok_or_else(invalid)?;

    if !DATE_PATTERN.is_match(value) {
        return Err(invalid());
    }

    let parts: Vec<&str> = value.split('.').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(invalid());
    };

    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) || year < MIN_YEAR {
        return Err(invalid());
    }

    if day > days_in_month(month, year) {
        return Err(invalid());
    }

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;

    if date >= today {
        return Err(invalid());
    }

    Ok(date)
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, Local};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rejects(value: &str) -> bool {
        parse_birth_date(Some(value), today()).is_err()
    }

    #[test]
    fn accepts_real_past_dates() {
        let cases = [
            ("15.06.1990", date(1990, 6, 15)),
            ("01.01.2000", date(2000, 1, 1)),
            ("31.12.1985", date(1985, 12, 31)),
            ("28.02.1999", date(1999, 2, 28)),
            ("31.01.1980", date(1980, 1, 31)),
            ("30.04.1995", date(1995, 4, 30)),
            ("01.01.1900", date(1900, 1, 1)),
        ];

        for (input, expected) in cases {
            assert_eq!(parse_birth_date(Some(input), today()), Ok(expected), "{input}");
        }
    }

    #[test]
    fn february_follows_leap_year_rule() {
        assert_eq!(
            parse_birth_date(Some("29.02.2000"), today()),
            Ok(date(2000, 2, 29))
        );
        assert_eq!(
            parse_birth_date(Some("29.02.1996"), today()),
            Ok(date(1996, 2, 29))
        );
        assert!(rejects("29.02.1999"));
        assert!(rejects("29.02.1900"));
        assert!(rejects("30.02.2000"));
        assert!(rejects("31.02.1990"));
    }

    #[test]
    fn thirty_day_months_reject_day_31() {
        for input in ["31.04.1990", "31.06.1990", "31.09.1990", "31.11.1990"] {
            assert!(rejects(input), "{input}");
        }
        assert!(parse_birth_date(Some("31.01.1990"), today()).is_ok());
        assert!(parse_birth_date(Some("31.12.1990"), today()).is_ok());
    }

    #[test]
    fn rejects_wrong_shapes() {
        for input in [
            "1990-06-15",
            "15/06/1990",
            "15-06-1990",
            "5.06.1990",
            "15.6.1990",
            "15.06.90",
            "invalid-date",
            " 15.06.1990",
            "15.06.1990 ",
            "15.06.1990\n",
            "１５.06.1990",
            "15.06.19900",
        ] {
            assert!(rejects(input), "{input:?}");
        }
    }

    #[test]
    fn rejects_out_of_range_components() {
        for input in ["00.00.0000", "32.13.1990", "15.13.1990", "00.06.1990", "15.00.1990", "31.12.1899"] {
            assert!(rejects(input), "{input}");
        }
    }

    #[test]
    fn rejects_blank_or_missing_values() {
        assert!(parse_birth_date(None, today()).is_err());
        for input in ["", "   ", "\t", "\n"] {
            assert!(rejects(input), "{input:?}");
        }
    }

    #[test]
    fn date_must_be_strictly_before_today() {
        assert!(rejects("01.06.2025"));
        assert!(rejects("02.06.2025"));
        assert!(rejects("15.06.2050"));
        assert_eq!(
            parse_birth_date(Some("31.05.2025"), today()),
            Ok(date(2025, 5, 31))
        );
    }

    #[test]
    fn today_on_the_system_clock_is_rejected() {
        let now = Local::now().date_naive();
        let formatted = now.format("%d.%m.%Y").to_string();
        let yesterday = now
            .checked_sub_days(Days::new(1))
            .unwrap()
            .format("%d.%m.%Y")
            .to_string();

        assert!(parse_birth_date(Some(&formatted), now).is_err());
        assert!(parse_birth_date(Some(&yesterday), now).is_ok());
    }

    #[test]
    fn every_failure_carries_the_same_message() {
        for input in ["", "1990-06-15", "31.04.1990", "15.06.2050"] {
            let err = parse_birth_date(Some(input), today()).unwrap_err();
            assert_eq!(err.message.as_deref(), Some(BIRTH_DATE_MESSAGE));
        }
    }
}
