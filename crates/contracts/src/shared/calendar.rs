use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки разбора календарной даты
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Empty date")]
    Empty,

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Week bucket used when timesheet and planning records are grouped by week.
///
/// `mese`/`anno` are the month/year of the Monday that opens the ISO week,
/// except for late-December dates that ISO already counts as week 1 of the
/// next year: those stay in the current year (see [`resolve_iso_week`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IsoWeekAssignment {
    pub week: u32,
    pub mese: u32,
    pub anno: i32,
}

impl IsoWeekAssignment {
    /// Key that sorts buckets chronologically
    pub fn sort_key(&self) -> (i32, u32, u32) {
        (self.anno, self.mese, self.week)
    }

    /// Label in format "YYYY-MM W##"
    pub fn label(&self) -> String {
        format!("{:04}-{:02} W{:02}", self.anno, self.mese, self.week)
    }
}

/// Monday of the ISO week containing `date`.
///
/// At the lower end of the chrono range the Monday may not exist; the date
/// itself is returned then.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Resolve the week bucket of a calendar day.
///
/// Late-December days that ISO-8601 assigns to week 1 of the next year are
/// re-bucketed into the tail of their own Gregorian year, so yearly reports
/// never pick up days from the previous December.
pub fn resolve_iso_week(date: NaiveDate) -> IsoWeekAssignment {
    let gregorian_year = date.year();
    let iso = date.iso_week();

    if iso.year() != gregorian_year && iso.week() == 1 {
        let dec_31 = NaiveDate::from_ymd_opt(gregorian_year, 12, 31).unwrap_or(date);
        let dec_31_iso = dec_31.iso_week();

        if dec_31_iso.year() != gregorian_year {
            let monday = week_start(date);
            return IsoWeekAssignment {
                week: 53,
                mese: monday.month(),
                anno: gregorian_year,
            };
        }

        let monday = week_start(dec_31);
        return IsoWeekAssignment {
            week: dec_31_iso.week(),
            mese: monday.month(),
            anno: monday.year(),
        };
    }

    let monday = week_start(date);
    IsoWeekAssignment {
        week: iso.week(),
        mese: monday.month(),
        anno: monday.year(),
    }
}

/// Parse "YYYY-MM-DD" or an ISO datetime ("2024-03-15T14:02:26[.123][Z]").
///
/// Years are limited to 0000..=9999. Only the date part of a datetime is
/// used; callers send the day already normalized to local time.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, CalendarError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CalendarError::Empty);
    }

    let invalid = || CalendarError::InvalidDate(value.to_string());

    let date_part = trimmed.get(..DATE_LEN).ok_or_else(invalid)?;
    if !is_date_layout(date_part) {
        return Err(invalid());
    }

    if trimmed.len() == DATE_LEN {
        return NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid());
    }

    if !trimmed[DATE_LEN..].starts_with('T') {
        return Err(invalid());
    }

    if let Ok(datetime) = trimmed.parse::<NaiveDateTime>() {
        return Ok(datetime.date());
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|datetime| datetime.date_naive())
        .map_err(|_| invalid())
}

const DATE_LEN: usize = "YYYY-MM-DD".len();

/// Four-digit year, two-digit month and day, '-' separators
fn is_date_layout(part: &str) -> bool {
    part.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// [`parse_calendar_date`] + [`resolve_iso_week`]
pub fn resolve_iso_week_str(value: &str) -> Result<IsoWeekAssignment, CalendarError> {
    parse_calendar_date(value).map(resolve_iso_week)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn assignment(week: u32, mese: u32, anno: i32) -> IsoWeekAssignment {
        IsoWeekAssignment { week, mese, anno }
    }

    #[test]
    fn test_mid_year_date() {
        assert_eq!(resolve_iso_week(ymd(2024, 6, 15)), assignment(24, 6, 2024));
    }

    #[test]
    fn test_week_starting_in_previous_month() {
        // Saturday 2024-06-01, week opened on Monday 2024-05-27
        assert_eq!(resolve_iso_week(ymd(2024, 6, 1)), assignment(22, 5, 2024));
    }

    #[test]
    fn test_early_january_in_previous_iso_year() {
        assert_eq!(resolve_iso_week(ymd(2023, 1, 1)), assignment(52, 12, 2022));
        assert_eq!(resolve_iso_week(ymd(2021, 1, 1)), assignment(53, 12, 2020));
    }

    #[test]
    fn test_week_one_opened_in_december() {
        // Tuesday 2019-01-01 belongs to ISO week 1 of 2019, Monday is 2018-12-31
        assert_eq!(resolve_iso_week(ymd(2019, 1, 1)), assignment(1, 12, 2018));
    }

    #[test]
    fn test_year_end_overflow_stays_in_year() {
        assert_eq!(resolve_iso_week(ymd(2024, 12, 31)), assignment(53, 12, 2024));
        assert_eq!(resolve_iso_week(ymd(2024, 12, 30)), assignment(53, 12, 2024));
        assert_eq!(resolve_iso_week(ymd(2025, 12, 29)), assignment(53, 12, 2025));
        assert_eq!(resolve_iso_week(ymd(2025, 12, 31)), assignment(53, 12, 2025));
    }

    #[test]
    fn test_real_week_53_untouched() {
        // 2020 has its own ISO week 53
        assert_eq!(resolve_iso_week(ymd(2020, 12, 31)), assignment(53, 12, 2020));
        // 2026-12-31 is a Thursday, week 53 of 2026
        assert_eq!(resolve_iso_week(ymd(2026, 12, 31)), assignment(53, 12, 2026));
    }

    #[test]
    fn test_idempotent() {
        let date = ymd(2025, 12, 29);
        assert_eq!(resolve_iso_week(date), resolve_iso_week(date));
    }

    #[test]
    fn test_year_boundaries_in_range() {
        for year in 2015..=2032 {
            for date in [ymd(year, 1, 1), ymd(year, 12, 31)] {
                let result = resolve_iso_week(date);
                assert!((1..=53).contains(&result.week), "{date}: {result:?}");
                assert!((1..=12).contains(&result.mese), "{date}: {result:?}");
            }
            // December 31 is always reported in its own year
            assert_eq!(resolve_iso_week(ymd(year, 12, 31)).anno, year);
        }
    }

    #[test]
    fn test_week_start() {
        assert_eq!(week_start(ymd(2024, 12, 31)), ymd(2024, 12, 30));
        assert_eq!(week_start(ymd(2024, 12, 30)), ymd(2024, 12, 30));
        assert_eq!(week_start(ymd(2023, 1, 1)), ymd(2022, 12, 26));
    }

    #[test]
    fn test_parse_calendar_date() {
        assert_eq!(parse_calendar_date("2024-03-15"), Ok(ymd(2024, 3, 15)));
        assert_eq!(
            parse_calendar_date("2024-03-15T14:02:26.123Z"),
            Ok(ymd(2024, 3, 15))
        );
        assert_eq!(parse_calendar_date("  2024-03-15 "), Ok(ymd(2024, 3, 15)));
    }

    #[test]
    fn test_parse_invalid_date() {
        assert_eq!(parse_calendar_date("   "), Err(CalendarError::Empty));
        assert_eq!(
            parse_calendar_date("2024-02-30"),
            Err(CalendarError::InvalidDate("2024-02-30".to_string()))
        );
        assert!(parse_calendar_date("15.03.2024").is_err());
    }

    #[test]
    fn test_parse_rejects_partial_input() {
        for value in [
            "2024-03-15Tgarbage",
            "2024-3-5",
            "2024-03-5",
            "2024-03-15 14:02:26",
            "2024-03-15T",
            "2024-03-15T25:00:00",
            "+2024-03-15",
            "2024/03/15",
        ] {
            assert_eq!(
                parse_calendar_date(value),
                Err(CalendarError::InvalidDate(value.to_string())),
                "{value}"
            );
        }
    }

    #[test]
    fn test_parse_datetime_variants() {
        for value in [
            "2024-03-15T14:02:26",
            "2024-03-15T14:02:26.123",
            "2024-03-15T14:02:26Z",
            "2024-03-15T23:30:00+02:00",
        ] {
            assert_eq!(parse_calendar_date(value), Ok(ymd(2024, 3, 15)), "{value}");
        }
    }

    #[test]
    fn test_parse_year_range() {
        assert_eq!(parse_calendar_date("0000-01-01"), Ok(ymd(0, 1, 1)));
        assert_eq!(parse_calendar_date("9999-12-31"), Ok(ymd(9999, 12, 31)));
        assert!(matches!(
            parse_calendar_date("-262143-01-01"),
            Err(CalendarError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_calendar_date("10000-01-01"),
            Err(CalendarError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_resolve_range_ends() {
        let first = resolve_iso_week_str("0000-01-01").unwrap();
        assert!((1..=53).contains(&first.week));
        let last = resolve_iso_week_str("9999-12-31").unwrap();
        assert_eq!(last.anno, 9999);
        assert!((1..=53).contains(&last.week));
    }

    #[test]
    fn test_chrono_limits_do_not_panic() {
        assert_eq!(week_start(NaiveDate::MIN), NaiveDate::MIN);
        let min = resolve_iso_week(NaiveDate::MIN);
        assert!((1..=53).contains(&min.week));
        let max = resolve_iso_week(NaiveDate::MAX);
        assert!((1..=53).contains(&max.week));
    }

    #[test]
    fn test_resolve_str() {
        assert_eq!(resolve_iso_week_str("2023-01-01"), Ok(assignment(52, 12, 2022)));
        assert!(resolve_iso_week_str("invalid").is_err());
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(assignment(53, 12, 2024)).unwrap();
        assert_eq!(json, serde_json::json!({ "week": 53, "mese": 12, "anno": 2024 }));
    }

    #[test]
    fn test_sort_key_and_label() {
        let a = assignment(53, 12, 2024);
        let b = assignment(1, 1, 2025);
        assert!(a.sort_key() < b.sort_key());
        assert_eq!(a.label(), "2024-12 W53");
    }
}
