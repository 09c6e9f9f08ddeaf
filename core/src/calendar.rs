use chrono::Weekday;
use serde::Serialize;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in `month` of `year`. A month outside 1..=12 has no days.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Weekday of the first day of the month (Sakamoto's method).
pub fn weekday_of_first(year: i32, month: u32) -> Weekday {
    const T: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let month = month.clamp(1, 12);
    let y = if month < 3 { year as i64 - 1 } else { year as i64 };
    let raw = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + T[(month - 1) as usize] + 1;

    match raw.rem_euclid(7) {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// Column of day 1 in a week starting on `first_day`, in `0..7`.
pub fn first_weekday_offset(year: i32, month: u32, first_day: Weekday) -> u32 {
    let weekday = weekday_of_first(year, month).num_days_from_sunday();
    (weekday + 7 - first_day.num_days_from_sunday()) % 7
}

/// Layout facts for one month.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGeometry {
    pub days_in_month: u32,
    pub first_weekday_offset: u32,
}

impl MonthGeometry {
    pub fn new(year: i32, month: u32, first_day: Weekday) -> Self {
        Self {
            days_in_month: days_in_month(year, month),
            first_weekday_offset: first_weekday_offset(year, month, first_day),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn test_days_in_month_matches_chrono() {
        for year in [1600, 1900, 1999, 2000, 2023, 2024, 2100, 2400] {
            for month in 1..=12 {
                let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                let next = if month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
                } else {
                    NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
                };
                let expected = (next - first).num_days() as u32;
                assert_eq!(days_in_month(year, month), expected, "{}-{}", year, month);
            }
        }
    }

    #[test]
    fn test_weekday_of_first_matches_chrono() {
        for year in 1990..=2030 {
            for month in 1..=12 {
                let expected = NaiveDate::from_ymd_opt(year, month, 1).unwrap().weekday();
                assert_eq!(weekday_of_first(year, month), expected, "{}-{}", year, month);
            }
        }
    }

    #[test]
    fn test_first_weekday_offset() {
        // 2024-01-01 is a Monday.
        assert_eq!(first_weekday_offset(2024, 1, Weekday::Sun), 1);
        assert_eq!(first_weekday_offset(2024, 1, Weekday::Mon), 0);
        // 2023-10-01 is a Sunday.
        assert_eq!(first_weekday_offset(2023, 10, Weekday::Sun), 0);
        assert_eq!(first_weekday_offset(2023, 10, Weekday::Mon), 6);
    }

    #[test]
    fn test_first_weekday_offset_in_range() {
        let starts = [Weekday::Sun, Weekday::Mon, Weekday::Sat];
        for year in 2020..=2028 {
            for month in 1..=12 {
                for first_day in starts {
                    assert!(first_weekday_offset(year, month, first_day) < 7);
                }
            }
        }
    }

    #[test]
    fn test_geometry() {
        let geometry = MonthGeometry::new(2024, 2, Weekday::Sun);
        // 2024-02-01 is a Thursday.
        assert_eq!(geometry.days_in_month, 29);
        assert_eq!(geometry.first_weekday_offset, 4);
    }
}
