//! Age-gated child expense schedule
//!
//! Education fees activate by the child's age in whole months relative to the
//! reference date (birth, due or intended date). The tiers are half-open and
//! never overlap:
//! childcare [6, 48), preschool [48, 84), primary school [84, inf).

use chrono::{Datelike, NaiveDate};

/// Age in months at which childcare starts
pub const CHILDCARE_START_MONTHS: i32 = 6;
/// Age in months at which preschool replaces childcare
pub const PRESCHOOL_START_MONTHS: i32 = 48;
/// Age in months at which primary school replaces preschool
pub const PRIMARY_START_MONTHS: i32 = 84;

/// Education stage active at a given age
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationStage {
    /// Below 6 months, or before the reference date
    NotEnrolled,
    Childcare,
    Preschool,
    PrimarySchool,
}

impl EducationStage {
    /// Stage for a signed age in months (negative before the reference date)
    pub fn from_age_months(age_months: i32) -> Self {
        if age_months >= PRIMARY_START_MONTHS {
            EducationStage::PrimarySchool
        } else if age_months >= PRESCHOOL_START_MONTHS {
            EducationStage::Preschool
        } else if age_months >= CHILDCARE_START_MONTHS {
            EducationStage::Childcare
        } else {
            EducationStage::NotEnrolled
        }
    }
}

/// Child-related amounts for a single projection month
///
/// At most one of the three fees is nonzero.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyChildCosts {
    pub childcare_fee: f64,
    pub preschool_fee: f64,
    pub primary_school_fee: f64,

    /// Recurring child expense, active from the reference month onward
    pub recurring: f64,
}

/// Expense schedule keyed to one child's reference date
#[derive(Debug, Clone)]
pub struct ChildSchedule {
    reference_date: NaiveDate,
    childcare_monthly: f64,
    preschool_monthly: f64,
    primary_school_monthly: f64,
    monthly_child_expenses: f64,
}

impl ChildSchedule {
    pub fn new(
        reference_date: NaiveDate,
        childcare_monthly: f64,
        preschool_monthly: f64,
        primary_school_monthly: f64,
        monthly_child_expenses: f64,
    ) -> Self {
        Self {
            reference_date,
            childcare_monthly,
            preschool_monthly,
            primary_school_monthly,
            monthly_child_expenses,
        }
    }

    /// Child age in whole months at a given projection month
    ///
    /// Computed on calendar components only, so a mid-month birth date counts
    /// the birth month as age zero.
    pub fn age_months(&self, month: NaiveDate) -> i32 {
        (month.year() - self.reference_date.year()) * 12 + month.month() as i32
            - self.reference_date.month() as i32
    }

    /// Education stage active at a given projection month
    pub fn stage(&self, month: NaiveDate) -> EducationStage {
        EducationStage::from_age_months(self.age_months(month))
    }

    /// All child-related amounts for a projection month
    pub fn costs_at(&self, month: NaiveDate) -> MonthlyChildCosts {
        let age = self.age_months(month);
        let mut costs = MonthlyChildCosts::default();

        match EducationStage::from_age_months(age) {
            EducationStage::NotEnrolled => {}
            EducationStage::Childcare => costs.childcare_fee = self.childcare_monthly,
            EducationStage::Preschool => costs.preschool_fee = self.preschool_monthly,
            EducationStage::PrimarySchool => {
                costs.primary_school_fee = self.primary_school_monthly
            }
        }

        if age >= 0 {
            costs.recurring = self.monthly_child_expenses;
        }

        costs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> ChildSchedule {
        ChildSchedule::new(
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            1000.0,
            1200.0,
            300.0,
            500.0,
        )
    }

    fn month_at_age(age_months: i32) -> NaiveDate {
        // Reference is 2025-03; add the offset in calendar months
        let total = (2025 * 12 + 2) + age_months;
        NaiveDate::from_ymd_opt(total.div_euclid(12), (total.rem_euclid(12) + 1) as u32, 1).unwrap()
    }

    #[test]
    fn test_age_months_signed() {
        let s = schedule();
        assert_eq!(s.age_months(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()), 0);
        assert_eq!(s.age_months(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()), -2);
        assert_eq!(s.age_months(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()), 12);
    }

    #[test]
    fn test_stage_boundaries() {
        // Exact boundary months from the threshold table
        assert_eq!(EducationStage::from_age_months(5), EducationStage::NotEnrolled);
        assert_eq!(EducationStage::from_age_months(6), EducationStage::Childcare);
        assert_eq!(EducationStage::from_age_months(47), EducationStage::Childcare);
        assert_eq!(EducationStage::from_age_months(48), EducationStage::Preschool);
        assert_eq!(EducationStage::from_age_months(83), EducationStage::Preschool);
        assert_eq!(EducationStage::from_age_months(84), EducationStage::PrimarySchool);
        assert_eq!(EducationStage::from_age_months(-3), EducationStage::NotEnrolled);
    }

    #[test]
    fn test_fees_mutually_exclusive() {
        let s = schedule();
        for age in -12..120 {
            let costs = s.costs_at(month_at_age(age));
            let nonzero = [costs.childcare_fee, costs.preschool_fee, costs.primary_school_fee]
                .iter()
                .filter(|&&f| f > 0.0)
                .count();
            assert!(nonzero <= 1, "age {} has {} active fees", age, nonzero);
        }
    }

    #[test]
    fn test_recurring_from_reference_month() {
        let s = schedule();
        assert_eq!(s.costs_at(month_at_age(-1)).recurring, 0.0);
        assert_eq!(s.costs_at(month_at_age(0)).recurring, 500.0);
        assert_eq!(s.costs_at(month_at_age(4)).recurring, 500.0);
        // Recurring expense is already active before any education fee
        let costs = s.costs_at(month_at_age(4));
        assert_eq!(costs.childcare_fee, 0.0);
    }

    #[test]
    fn test_fee_amounts_by_stage() {
        let s = schedule();
        assert_eq!(s.costs_at(month_at_age(12)).childcare_fee, 1000.0);
        assert_eq!(s.costs_at(month_at_age(60)).preschool_fee, 1200.0);
        assert_eq!(s.costs_at(month_at_age(96)).primary_school_fee, 300.0);
    }
}
