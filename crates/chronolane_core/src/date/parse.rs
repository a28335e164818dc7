//! Date and year expression parser.
//!
//! Accepted inputs:
//! - CE years: `1`, `99`, `2015`, `+12`
//! - BCE years: `-354`, `1 BC`, `11 BCE`, `10 v.Chr.`
//! - Calendar dates: `2015-06-15`, `2015-6-5`, `500-01-01`

use crate::model::time_point::{Precision, TimePoint};
use chrono::{Datelike, Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static CALENDAR_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,4})-([0-9]{1,2})-([0-9]{1,2})$").expect("valid calendar date regex")
});
static NON_DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]").expect("valid non-digit regex"));

const MID_YEAR_MONTH: u32 = 7;
const MID_YEAR_DAY: u32 = 1;
/// Any four-digit year works; it is overwritten right after construction.
const PLACEHOLDER_YEAR: i32 = 2000;
/// Bare year `0` has no place in BC/AD numbering and reads as "1 BC".
const YEAR_ZERO_STAND_IN: i32 = -1;

/// Date parsing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Neither a calendar date nor anything with digits in it.
    InvalidDateFormat(String),
    /// Digits were found but the year cannot be represented.
    YearOutOfRange(String),
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateFormat(input) => write!(f, "invalid date format: `{input}`"),
            Self::YearOutOfRange(input) => write!(f, "year out of range: `{input}`"),
        }
    }
}

impl Error for DateError {}

/// Parses a date or year expression into a point on the timeline.
///
/// Calendar dates yield day precision; everything else is read as a year
/// anchored at July 1st.
///
/// # Errors
/// - `InvalidDateFormat` when the input is not a valid calendar date and
///   holds no digits.
/// - `YearOutOfRange` when the year exceeds the supported calendar range.
pub fn parse(input: &str) -> Result<TimePoint, DateError> {
    let trimmed = input.trim();
    if let Some(point) = parse_calendar_date(trimmed)? {
        return Ok(point);
    }
    let year = resolve_year(trimmed)?;
    year_point(year, trimmed)
}

/// Reads `Y-M-D` with up to 4/2/2 digits.
///
/// Out-of-range months and days roll over like a JavaScript `Date`:
/// `2015-02-30` is March 2nd, `2015-13-01` is January 1st 2016 and
/// day `0` is the last day of the previous month.
fn parse_calendar_date(input: &str) -> Result<Option<TimePoint>, DateError> {
    let Some(captures) = CALENDAR_DATE_RE.captures(input) else {
        return Ok(None);
    };
    let invalid = || DateError::InvalidDateFormat(input.to_string());
    let year = captures[1].parse::<i32>().map_err(|_| invalid())?;
    let month = captures[2].parse::<i32>().map_err(|_| invalid())?;
    let day = captures[3].parse::<u64>().map_err(|_| invalid())?;

    let month_index = month - 1;
    let month_start = u32::try_from(month_index.rem_euclid(12) + 1)
        .ok()
        .and_then(|month| {
            NaiveDate::from_ymd_opt(year + month_index.div_euclid(12), month, 1)
        });
    let date = match day {
        0 => month_start.and_then(|date| date.checked_sub_days(Days::new(1))),
        _ => month_start.and_then(|date| date.checked_add_days(Days::new(day - 1))),
    }
    .ok_or_else(|| DateError::YearOutOfRange(input.to_string()))?;

    Ok(Some(TimePoint::day(date)))
}

/// Signed integers are taken as-is; anything else is digit-stripped and
/// read as a BCE year.
///
/// Only plain decimal integers count as numbers: `1e3`, `0x10` and `12.5`
/// are digit-stripped into BCE years like any other decorated input.
fn resolve_year(input: &str) -> Result<i64, DateError> {
    if let Ok(year) = input.parse::<i64>() {
        return Ok(year);
    }

    let digits = NON_DIGIT_RE.replace_all(input, "");
    if digits.is_empty() {
        return Err(DateError::InvalidDateFormat(input.to_string()));
    }
    digits
        .parse::<i64>()
        .map(|year| -year)
        .map_err(|_| DateError::YearOutOfRange(input.to_string()))
}

fn year_point(year: i64, input: &str) -> Result<TimePoint, DateError> {
    let out_of_range = || DateError::YearOutOfRange(input.to_string());
    let year = i32::try_from(year).map_err(|_| out_of_range())?;

    let date = match year {
        0 => mid_year(YEAR_ZERO_STAND_IN),
        // Build on a placeholder, then overwrite, so two-digit years never
        // pick up a century.
        1..=99 => mid_year(PLACEHOLDER_YEAR).and_then(|date| date.with_year(year)),
        _ => mid_year(year),
    }
    .ok_or_else(out_of_range)?;

    Ok(TimePoint::new(date, Precision::Year))
}

fn mid_year(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, MID_YEAR_MONTH, MID_YEAR_DAY)
}

#[cfg(test)]
mod tests {
    use super::{parse, DateError};
    use crate::model::time_point::Precision;
    use chrono::{Datelike, NaiveDate};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn calendar_dates_keep_day_precision() {
        let point = parse("2015-06-15").expect("calendar date should parse");
        assert_eq!(point.date(), ymd(2015, 6, 15));
        assert_eq!(point.precision(), Precision::Day);
    }

    #[test]
    fn short_calendar_fields_are_calendar_dates() {
        let point = parse("2015-6-5").expect("short month and day should parse");
        assert_eq!(point.date(), ymd(2015, 6, 5));
        assert_eq!(point.precision(), Precision::Day);

        let point = parse("500-01-01").expect("three-digit year should parse");
        assert_eq!(point.date(), ymd(500, 1, 1));
        assert_eq!(point.year(), 500);

        assert_eq!(
            parse("5-07-04").expect("one-digit year should parse").year(),
            5
        );
    }

    #[test]
    fn impossible_calendar_days_roll_over() {
        assert_eq!(
            parse("2015-02-30").expect("day overflow should roll").date(),
            ymd(2015, 3, 2)
        );
        assert_eq!(
            parse("2015-13-01").expect("month overflow should roll").date(),
            ymd(2016, 1, 1)
        );
        assert_eq!(
            parse("2015-03-00").expect("day zero should roll back").date(),
            ymd(2015, 2, 28)
        );
        assert_eq!(
            parse("2015-00-10").expect("month zero should roll back").date(),
            ymd(2014, 12, 10)
        );
    }

    #[test]
    fn numeric_literals_are_digit_stripped() {
        assert_eq!(parse("1e3").expect("digits remain").year(), -13);
        assert_eq!(parse("12.5").expect("digits remain").year(), -125);
        assert_eq!(parse("0x10").expect("digits remain").year(), -10);
    }

    #[test]
    fn bare_years_sit_mid_year() {
        let point = parse("1848").expect("fixture should parse");
        assert_eq!(point.precision(), Precision::Year);
        assert_eq!(point.date().month(), 7);
        assert_eq!(point.date().day(), 1);
        assert_eq!(point.year(), 1848);
    }

    #[test]
    fn suffixed_years_are_bce() {
        assert_eq!(parse("1 BC").expect("fixture should parse").year(), -1);
        assert_eq!(parse("11 BCE").expect("fixture should parse").year(), -11);
        assert_eq!(parse("10 v.Chr.").expect("fixture should parse").year(), -10);
        assert_eq!(
            parse("-354").expect("signed year should parse"),
            parse("354 BC").expect("suffixed year should parse")
        );
    }

    #[test]
    fn explicit_plus_sign_is_ce() {
        assert_eq!(parse("+12").expect("fixture should parse").year(), 12);
    }

    #[test]
    fn year_zero_is_one_bc() {
        assert_eq!(parse("0").expect("fixture should parse").year(), -1);
        assert_eq!(
            parse("0").expect("year zero should parse"),
            parse("1 BC").expect("suffixed year should parse")
        );
    }

    #[test]
    fn two_digit_years_keep_their_century() {
        assert_eq!(parse("1").expect("fixture should parse").year(), 1);
        assert_eq!(parse("45").expect("fixture should parse").year(), 45);
        assert_eq!(parse("99").expect("fixture should parse").year(), 99);
        assert_eq!(parse("100").expect("fixture should parse").year(), 100);
    }

    #[test]
    fn inputs_without_digits_are_rejected() {
        assert!(matches!(
            parse("abc").unwrap_err(),
            DateError::InvalidDateFormat(_)
        ));
        assert!(matches!(
            parse("").unwrap_err(),
            DateError::InvalidDateFormat(_)
        ));
    }

    #[test]
    fn huge_years_are_out_of_range() {
        assert!(matches!(
            parse("99999999").unwrap_err(),
            DateError::YearOutOfRange(_)
        ));
        assert!(matches!(
            parse("123456789012345678901234567890 BC").unwrap_err(),
            DateError::YearOutOfRange(_)
        ));
    }
}
