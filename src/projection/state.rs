//! Mutable accumulation state for a projection run
//!
//! The engine folds this state forward over the month index; records are
//! emitted as an immutable sequence so later columns can depend on earlier
//! ones without order-of-computation surprises.

use crate::household::{HousingPlan, PlannedPurchase};
use crate::housing::{
    self, amortize_step, level_payment, linear_principal_step, monthly_rate,
    property_growth_factor, StampDuty,
};
use crate::schedule::{month_start, snap_index};
use chrono::NaiveDate;

/// Loan repayment mode resolved from the housing plan
///
/// The two modes are intentionally different: a planned purchase gets the
/// interest/principal split, an already-owned home gets the linear-principal
/// approximation. They are not unified.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Repayment {
    Amortized { monthly_rate: f64 },
    LinearPrincipal,
}

/// Housing plan resolved against the projection timeline
#[derive(Debug, Clone)]
pub(crate) struct ResolvedHousing {
    /// Month index at which the property and mortgage become active, `None`
    /// when there is no property inside the horizon
    pub start_index: Option<usize>,

    /// Loan balance at the activation month
    pub initial_loan: f64,

    /// Property value basis at the activation month
    pub initial_value: f64,

    /// Fixed monthly mortgage payment
    pub monthly_payment: f64,

    /// Repayment mode
    pub repayment: Repayment,

    /// Stamp duty for a planned purchase inside the horizon
    pub stamp_duty: StampDuty,

    /// Down payment plus duties and fees, injected at the purchase month
    pub purchase_outlay: f64,
}

impl ResolvedHousing {
    fn inactive() -> Self {
        Self {
            start_index: None,
            initial_loan: 0.0,
            initial_value: 0.0,
            monthly_payment: 0.0,
            repayment: Repayment::LinearPrincipal,
            stamp_duty: StampDuty::default(),
            purchase_outlay: 0.0,
        }
    }

    /// Resolve a housing plan against the ordered month grid
    pub fn resolve(plan: &HousingPlan, months: &[NaiveDate]) -> Self {
        match plan {
            HousingPlan::NotPlanned => Self::inactive(),

            HousingPlan::AlreadyOwned {
                monthly_mortgage,
                property_value,
                outstanding_loan,
            } => Self {
                start_index: Some(0),
                initial_loan: *outstanding_loan,
                initial_value: *property_value,
                monthly_payment: *monthly_mortgage,
                repayment: Repayment::LinearPrincipal,
                stamp_duty: StampDuty::default(),
                purchase_outlay: 0.0,
            },

            HousingPlan::PlannedPurchase(purchase) => Self::resolve_purchase(purchase, months),
        }
    }

    fn resolve_purchase(purchase: &PlannedPurchase, months: &[NaiveDate]) -> Self {
        let Some(start_index) = snap_index(months, month_start(purchase.purchase_date)) else {
            log::debug!(
                "planned purchase on {} is beyond the projection horizon",
                purchase.purchase_date
            );
            return Self::inactive();
        };

        let stamp_duty = housing::assess(purchase.house_price, purchase.buyer);
        let loan = purchase.loan_amount();

        Self {
            start_index: Some(start_index),
            initial_loan: loan,
            initial_value: purchase.house_price,
            monthly_payment: level_payment(loan, purchase.annual_rate_pct, purchase.loan_term_years),
            repayment: Repayment::Amortized {
                monthly_rate: monthly_rate(purchase.annual_rate_pct),
            },
            stamp_duty,
            purchase_outlay: purchase.down_payment()
                + stamp_duty.total()
                + purchase.legal_fees
                + purchase.other_fees,
        }
    }

    /// Whether the property is held at the given month index
    pub fn active_at(&self, month_index: usize) -> bool {
        self.start_index.is_some_and(|start| month_index >= start)
    }
}

/// State of the household at a point during the projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Running savings total, seeded by initial funds
    pub cumulative_savings: f64,

    /// Outstanding loan balance at the start of the current month
    pub outstanding_loan: f64,

    /// Property value at the start of the current month
    pub property_value: f64,
}

impl ProjectionState {
    /// Initialize state at projection start
    pub fn new(initial_funds: f64) -> Self {
        Self {
            cumulative_savings: initial_funds,
            outstanding_loan: 0.0,
            property_value: 0.0,
        }
    }

    /// Take on the property position at the housing activation month
    pub(crate) fn activate_housing(&mut self, housing: &ResolvedHousing) {
        self.outstanding_loan = housing.initial_loan;
        self.property_value = housing.initial_value;
    }

    /// Advance the housing position to the next month
    ///
    /// The balance recurrence depends on the repayment mode; the property
    /// appreciates geometrically regardless.
    pub(crate) fn advance_housing(&mut self, housing: &ResolvedHousing) {
        self.outstanding_loan = match housing.repayment {
            Repayment::Amortized { monthly_rate } => {
                amortize_step(self.outstanding_loan, monthly_rate, housing.monthly_payment)
            }
            Repayment::LinearPrincipal => {
                linear_principal_step(self.outstanding_loan, housing.monthly_payment)
            }
        };
        self.property_value *= property_growth_factor();
    }
}
