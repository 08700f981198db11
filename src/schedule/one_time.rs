//! Alignment of arbitrary-dated one-time expenses onto the monthly grid

use super::timeline::month_start;
use crate::household::OneTimeExpense;
use chrono::NaiveDate;

/// One-time expenses aligned to the projection months
#[derive(Debug, Clone)]
pub struct AlignedExpenses {
    /// Summed amount landing in each projection month
    pub monthly_totals: Vec<f64>,

    /// Indices into the input list of expenses dated beyond the horizon
    ///
    /// These are dropped from the projection by design; callers wanting
    /// visibility can inspect this list.
    pub dropped: Vec<usize>,
}

impl AlignedExpenses {
    /// Total amount carried into the projection
    pub fn total(&self) -> f64 {
        self.monthly_totals.iter().sum()
    }
}

/// Index of the earliest projection month at or after `target`
///
/// `months` is the ordered month-start grid. Returns `None` when the target
/// falls past the end of the horizon.
pub fn snap_index(months: &[NaiveDate], target: NaiveDate) -> Option<usize> {
    months.iter().position(|&m| m >= target)
}

/// Align a caller-owned expense list onto the monthly grid
///
/// Each expense is truncated to its month start and snapped forward to the
/// earliest projection month at or after it, so an expense never lands in a
/// month earlier than its date. Same-month amounts sum. Expenses beyond the
/// horizon are dropped silently and reported in the result.
pub fn align(expenses: &[OneTimeExpense], months: &[NaiveDate]) -> AlignedExpenses {
    let mut monthly_totals = vec![0.0; months.len()];
    let mut dropped = Vec::new();

    for (idx, expense) in expenses.iter().enumerate() {
        match snap_index(months, month_start(expense.date)) {
            Some(i) => monthly_totals[i] += expense.amount,
            None => {
                log::debug!(
                    "one-time expense '{}' ({}) is beyond the projection horizon, dropping",
                    expense.name,
                    expense.date
                );
                dropped.push(idx);
            }
        }
    }

    AlignedExpenses {
        monthly_totals,
        dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::ExpenseCategory;
    use crate::schedule::month_starts;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(name: &str, amount: f64, on: NaiveDate) -> OneTimeExpense {
        OneTimeExpense::new(name, amount, on, ExpenseCategory::Other)
    }

    #[test]
    fn test_mid_month_lands_in_own_month() {
        let months = month_starts(date(2025, 9, 1), 12);
        let aligned = align(&[expense("scan", 350.0, date(2025, 10, 18))], &months);
        assert_eq!(aligned.monthly_totals[1], 350.0);
        assert!(aligned.dropped.is_empty());
    }

    #[test]
    fn test_day_before_month_start_snaps_forward() {
        // Expense dated the last day of the month before the grid begins
        // snaps to the first grid month, never backwards
        let months = month_starts(date(2025, 9, 1), 12);
        let aligned = align(&[expense("deposit", 900.0, date(2025, 8, 31))], &months);
        assert_eq!(aligned.monthly_totals[0], 900.0);
    }

    #[test]
    fn test_same_month_amounts_sum() {
        let months = month_starts(date(2025, 9, 1), 12);
        let aligned = align(
            &[
                expense("crib", 600.0, date(2025, 11, 2)),
                expense("stroller", 400.0, date(2025, 11, 28)),
            ],
            &months,
        );
        assert_eq!(aligned.monthly_totals[2], 1000.0);
        assert_eq!(aligned.total(), 1000.0);
    }

    #[test]
    fn test_beyond_horizon_dropped() {
        let months = month_starts(date(2025, 9, 1), 72);
        // Month 73 relative to the grid start
        let aligned = align(&[expense("far", 5000.0, date(2031, 9, 1))], &months);
        assert_eq!(aligned.dropped, vec![0]);
        assert_eq!(aligned.total(), 0.0);
        assert!(aligned.monthly_totals.iter().all(|&v| v == 0.0));
    }
}
