//! Month-start grid for the projection horizon

use chrono::{Datelike, NaiveDate};

/// Truncate a date to the first day of its month
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// First day of the month after the given month start
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Consecutive month-start dates beginning at the month containing `start`
pub fn month_starts(start: NaiveDate, count: u32) -> Vec<NaiveDate> {
    let mut months = Vec::with_capacity(count as usize);
    let mut current = month_start(start);
    for _ in 0..count {
        months.push(current);
        current = next_month(current);
    }
    months
}

/// Abbreviated month label for display ("Jan", "Feb", ...)
pub fn month_name(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_start_truncates() {
        assert_eq!(month_start(date(2025, 8, 26)), date(2025, 8, 1));
        assert_eq!(month_start(date(2025, 8, 1)), date(2025, 8, 1));
    }

    #[test]
    fn test_next_month_rolls_year() {
        assert_eq!(next_month(date(2025, 12, 1)), date(2026, 1, 1));
        assert_eq!(next_month(date(2025, 11, 1)), date(2025, 12, 1));
    }

    #[test]
    fn test_month_starts_grid() {
        let months = month_starts(date(2025, 11, 15), 4);
        assert_eq!(
            months,
            vec![
                date(2025, 11, 1),
                date(2025, 12, 1),
                date(2026, 1, 1),
                date(2026, 2, 1),
            ]
        );
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(date(2025, 1, 1)), "Jan");
        assert_eq!(month_name(date(2025, 12, 1)), "Dec");
    }
}
