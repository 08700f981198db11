//! Core projection engine for monthly household cash flow

use super::records::{MonthRecord, ProjectionResult};
use super::state::{ProjectionState, ResolvedHousing};
use crate::household::{OneTimeExpense, ProjectionParameters};
use crate::schedule::{align, month_name, month_starts, AlignedExpenses, ChildSchedule};
use chrono::{Datelike, NaiveDate};

/// Default projection horizon: six years of months
pub const DEFAULT_PROJECTION_MONTHS: u32 = 72;

/// Balances below this are treated as a repaid loan
const BALANCE_EPSILON: f64 = 1e-8;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// First projection month; any date inside the month works, the engine
    /// truncates to the month start. Passed in rather than read from the
    /// clock so runs are deterministic.
    pub start: NaiveDate,

    /// Number of months to project
    pub projection_months: u32,
}

impl ProjectionConfig {
    /// Standard 72-month configuration starting at the month of `start`
    pub fn starting_at(start: NaiveDate) -> Self {
        Self {
            start,
            projection_months: DEFAULT_PROJECTION_MONTHS,
        }
    }
}

/// Main projection engine
///
/// One projection run is a pure function of its inputs: no I/O, no shared
/// state between runs, and no error paths. Degenerate inputs (zero rates,
/// out-of-horizon dates) fall back to documented policies instead of
/// failing.
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run a projection for one household
    ///
    /// The one-time expense list is a caller-owned snapshot; it is read,
    /// never mutated.
    pub fn project(
        &self,
        params: &ProjectionParameters,
        one_time: &[OneTimeExpense],
    ) -> ProjectionResult {
        let months = month_starts(self.config.start, self.config.projection_months);

        let child = ChildSchedule::new(
            params.child_reference_date,
            params.childcare_monthly,
            params.preschool_monthly,
            params.primary_school_monthly,
            params.monthly_child_expenses,
        );
        let housing = ResolvedHousing::resolve(&params.housing, &months);
        let aligned = align(one_time, &months);

        let mut result = ProjectionResult::new(
            housing.stamp_duty,
            housing.purchase_outlay,
            aligned.dropped.clone(),
        );
        let mut state = ProjectionState::new(params.initial_funds);

        for (index, &month) in months.iter().enumerate() {
            let row =
                self.calculate_month(index, month, params, &child, &housing, &aligned, &mut state);
            result.add_row(row);
        }

        result
    }

    /// Calculate one month's record and advance the fold state
    #[allow(clippy::too_many_arguments)]
    fn calculate_month(
        &self,
        index: usize,
        month: NaiveDate,
        params: &ProjectionParameters,
        child: &ChildSchedule,
        housing: &ResolvedHousing,
        aligned: &AlignedExpenses,
        state: &mut ProjectionState,
    ) -> MonthRecord {
        let mut row = MonthRecord::new(month.year(), month.month(), month_name(month));
        row.child_age_months = child.age_months(month);

        // Static income, bonus only in December
        row.income = params.monthly_income;
        if month.month() == 12 {
            row.bonus = params.annual_bonus;
        }

        // Recurring expenses; annual amounts spread evenly
        row.base_expenses = params.monthly_expenses;
        row.insurance_share = params.annual_insurance / 12.0;
        row.tax_share = params.annual_tax / 12.0;

        // Child schedule
        let costs = child.costs_at(month);
        row.child_expenses = costs.recurring;
        row.childcare_fee = costs.childcare_fee;
        row.preschool_fee = costs.preschool_fee;
        row.primary_school_fee = costs.primary_school_fee;

        // User-entered one-time expenses aligned to this month
        row.one_time_expenses = aligned.monthly_totals[index];

        // Housing position, gated on the resolved activation month
        if housing.start_index == Some(index) {
            state.activate_housing(housing);
            row.purchase_costs = housing.purchase_outlay;
        }
        if housing.active_at(index) {
            row.property_value = state.property_value;
            row.outstanding_loan = state.outstanding_loan;
            row.property_equity = state.property_value - state.outstanding_loan;
            if state.outstanding_loan > BALANCE_EPSILON {
                row.mortgage_payment = housing.monthly_payment;
            }
            state.advance_housing(housing);
        }

        // Roll-ups
        row.total_expenses = row.mortgage_payment
            + row.base_expenses
            + row.child_expenses
            + row.insurance_share
            + row.tax_share
            + row.education_fees()
            + row.one_time_expenses
            + row.purchase_costs;
        row.monthly_savings = row.income + row.bonus - row.total_expenses;

        state.cumulative_savings += row.monthly_savings;
        row.cumulative_savings = state.cumulative_savings;
        row.total_assets = row.cumulative_savings + row.property_equity;

        row
    }
}
