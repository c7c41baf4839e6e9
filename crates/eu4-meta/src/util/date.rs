//! Game calendar conversion.
//!
//! Save dates count hours since a fixed epoch on a calendar with 24-hour
//! days, 365-day years and no leap years. Year 0 of the raw count is
//! displayed as year -5000.

use std::fmt;

use crate::limits::{DAYS_PER_YEAR, EPOCH_YEAR_OFFSET, HOURS_PER_DAY, MONTH_DAYS};

/// Error type for `YYYY_MM_DD` parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    pub message: String,
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DateParseError {}

/// A date on the game calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameDate {
    pub year: i32,
    /// 1-indexed month.
    pub month: i32,
    /// 1-indexed day of month.
    pub day: i32,
}

impl GameDate {
    /// Converts an hour count into a date.
    ///
    /// Total for every input. Negative counts follow truncating division and
    /// can produce a zero or negative day in January; they never fail.
    pub fn from_hours(hours: i32) -> Self {
        let days = hours / HOURS_PER_DAY;
        let year = days / DAYS_PER_YEAR - EPOCH_YEAR_OFFSET;
        let mut day = days % DAYS_PER_YEAR + 1;
        let mut month = 1;

        for len in MONTH_DAYS {
            if day <= len {
                break;
            }
            day -= len;
            month += 1;
        }

        GameDate { year, month, day }
    }

    /// Converts back to the first hour of this date.
    pub fn to_hours(&self) -> i64 {
        let day_of_year: i64 = MONTH_DAYS
            .iter()
            .take((self.month - 1).clamp(0, 12) as usize)
            .map(|&d| i64::from(d))
            .sum::<i64>()
            + i64::from(self.day)
            - 1;
        let days = (i64::from(self.year) + i64::from(EPOCH_YEAR_OFFSET)) * i64::from(DAYS_PER_YEAR)
            + day_of_year;
        days * i64::from(HOURS_PER_DAY)
    }

    /// Parses a `YYYY_MM_DD` string as produced by [`format_date`].
    pub fn parse(s: &str) -> Result<Self, DateParseError> {
        let err = || DateParseError {
            message: format!("Invalid game date: {}", s),
        };

        // The year may carry a leading minus sign, so split from the right.
        let mut parts = s.rsplitn(3, '_');
        let day: i32 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let month: i32 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let year: i32 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;

        if !(1..=12).contains(&month) {
            return Err(DateParseError {
                message: format!("Month out of range [1, 12]: {}", s),
            });
        }
        let month_len = MONTH_DAYS[(month - 1) as usize];
        if day < 1 || day > month_len {
            return Err(DateParseError {
                message: format!("Day out of range [1, {}]: {}", month_len, s),
            });
        }

        Ok(GameDate { year, month, day })
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}_{:02}_{:02}", self.year, self.month, self.day)
    }
}

/// Formats an hour count as a `YYYY_MM_DD` date string.
pub fn format_date(hours: i32) -> String {
    GameDate::from_hours(hours).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        assert_eq!(format_date(0), "-5000_01_01");
    }

    #[test]
    fn test_one_year() {
        assert_eq!(format_date(24 * 365), "-4999_01_01");
    }

    #[test]
    fn test_month_boundary() {
        assert_eq!(format_date(24 * 31), "-5000_02_01");
        assert_eq!(format_date(24 * 30), "-5000_01_31");
        assert_eq!(format_date(24 * 31 - 1), "-5000_01_31");
    }

    #[test]
    fn test_last_day_of_year() {
        assert_eq!(format_date(24 * 364), "-5000_12_31");
        assert_eq!(format_date(24 * 365 - 1), "-5000_12_31");
    }

    #[test]
    fn test_no_leap_years() {
        // Feb 28 is followed by Mar 1 every year
        let feb_28 = ((1600 + 5000) * 365 + 31 + 27) * 24;
        assert_eq!(format_date(feb_28), "1600_02_28");
        assert_eq!(format_date(feb_28 + 24), "1600_03_01");
    }

    #[test]
    fn test_game_start_date() {
        let hours = ((1444 + 5000) * 365 + 314) * 24;
        assert_eq!(format_date(hours), "1444_11_11");
    }

    #[test]
    fn test_small_years_are_zero_padded() {
        assert_eq!(format_date(5000 * 365 * 24), "0000_01_01");
        assert_eq!(format_date(5007 * 365 * 24), "0007_01_01");
    }

    #[test]
    fn test_negative_and_extreme_inputs_do_not_panic() {
        for hours in [-1, -24, -24 * 400, i32::MIN, i32::MAX] {
            let _ = format_date(hours);
        }
        assert_eq!(GameDate::from_hours(-24).day, 0);
    }

    #[test]
    fn test_to_hours_inverts_from_hours() {
        let date = GameDate::parse("1821_07_04").unwrap();
        assert_eq!(GameDate::from_hours(date.to_hours() as i32), date);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            GameDate::parse("1444_11_11").unwrap(),
            GameDate { year: 1444, month: 11, day: 11 }
        );
        assert_eq!(GameDate::parse("-5000_01_01").unwrap().year, -5000);
    }

    #[test]
    fn test_parse_rejects_invalid() {
        for s in ["", "1444", "1444_11", "1444_13_01", "1444_02_29", "1444_00_10", "a_b_c", "1444-11-11"] {
            assert!(GameDate::parse(s).is_err(), "accepted {s:?}");
        }
    }
}
