//! Output structures for a projection run

use crate::housing::StampDuty;
use serde::{Deserialize, Serialize};

/// A single row of projection output for one calendar month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthRecord {
    // Timing
    pub year: i32,
    pub month: u32,
    pub month_name: String,

    /// Child age in whole months, negative before the reference date
    pub child_age_months: i32,

    // Income
    pub income: f64,
    /// Annual bonus, nonzero only in December
    pub bonus: f64,

    // Recurring expenses
    pub mortgage_payment: f64,
    pub base_expenses: f64,
    pub child_expenses: f64,
    pub childcare_fee: f64,
    pub preschool_fee: f64,
    pub primary_school_fee: f64,
    /// Monthly share of the annual insurance premium
    pub insurance_share: f64,
    /// Monthly share of the annual tax bill
    pub tax_share: f64,

    // Irregular expenses
    /// User-entered one-time expenses landing in this month
    pub one_time_expenses: f64,
    /// Purchase cash outlay injected at the purchase month (down payment,
    /// duties and fees), kept separate from user-entered expenses
    pub purchase_costs: f64,

    // Property position
    pub property_value: f64,
    pub outstanding_loan: f64,
    /// Property value minus outstanding loan, may be negative
    pub property_equity: f64,

    // Roll-ups
    pub total_expenses: f64,
    /// Income plus bonus minus total expenses, may be negative
    pub monthly_savings: f64,
    /// Running total seeded by initial funds
    pub cumulative_savings: f64,
    /// Cumulative savings plus property equity
    pub total_assets: f64,
}

impl MonthRecord {
    /// Create a record for a month with all amounts zeroed
    pub fn new(year: i32, month: u32, month_name: String) -> Self {
        Self {
            year,
            month,
            month_name,
            child_age_months: 0,
            income: 0.0,
            bonus: 0.0,
            mortgage_payment: 0.0,
            base_expenses: 0.0,
            child_expenses: 0.0,
            childcare_fee: 0.0,
            preschool_fee: 0.0,
            primary_school_fee: 0.0,
            insurance_share: 0.0,
            tax_share: 0.0,
            one_time_expenses: 0.0,
            purchase_costs: 0.0,
            property_value: 0.0,
            outstanding_loan: 0.0,
            property_equity: 0.0,
            total_expenses: 0.0,
            monthly_savings: 0.0,
            cumulative_savings: 0.0,
            total_assets: 0.0,
        }
    }

    /// Education fee active this month (at most one tier is nonzero)
    pub fn education_fees(&self) -> f64 {
        self.childcare_fee + self.preschool_fee + self.primary_school_fee
    }
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Monthly records, one per projection month in order
    pub records: Vec<MonthRecord>,

    /// Stamp duty assessed for a planned purchase inside the horizon
    pub stamp_duty: StampDuty,

    /// Total one-time purchase cash outlay (down payment + duties + fees)
    pub purchase_outlay: f64,

    /// Indices of input one-time expenses dated beyond the horizon
    pub dropped_expenses: Vec<usize>,
}

impl ProjectionResult {
    pub fn new(stamp_duty: StampDuty, purchase_outlay: f64, dropped_expenses: Vec<usize>) -> Self {
        Self {
            records: Vec::new(),
            stamp_duty,
            purchase_outlay,
            dropped_expenses,
        }
    }

    /// Add a monthly record
    pub fn add_row(&mut self, row: MonthRecord) {
        self.records.push(row);
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_income: f64 = self.records.iter().map(|r| r.income + r.bonus).sum();
        let total_expenses: f64 = self.records.iter().map(|r| r.total_expenses).sum();
        let total_education: f64 = self.records.iter().map(|r| r.education_fees()).sum();
        let total_one_time: f64 = self.records.iter().map(|r| r.one_time_expenses).sum();
        let months_in_deficit =
            self.records.iter().filter(|r| r.monthly_savings < 0.0).count() as u32;

        let final_cumulative_savings =
            self.records.last().map(|r| r.cumulative_savings).unwrap_or(0.0);
        let final_property_equity =
            self.records.last().map(|r| r.property_equity).unwrap_or(0.0);
        let final_total_assets = self.records.last().map(|r| r.total_assets).unwrap_or(0.0);

        ProjectionSummary {
            total_months: self.records.len() as u32,
            total_income,
            total_expenses,
            total_education,
            total_one_time,
            total_stamp_duty: self.stamp_duty.total(),
            purchase_outlay: self.purchase_outlay,
            months_in_deficit,
            final_cumulative_savings,
            final_property_equity,
            final_total_assets,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_education: f64,
    pub total_one_time: f64,
    pub total_stamp_duty: f64,
    pub purchase_outlay: f64,
    pub months_in_deficit: u32,
    pub final_cumulative_savings: f64,
    pub final_property_equity: f64,
    pub final_total_assets: f64,
}
