//! Input data structures for a household projection run

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Buyer category for additional buyer's stamp duty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuyerCategory {
    /// Citizen buying a first home
    CitizenFirstHome,
    /// Citizen buying an additional home
    CitizenAdditionalHome,
    /// Permanent resident buying a first home
    PrFirstHome,
    /// Permanent resident buying an additional home
    PrAdditionalHome,
    /// Foreign buyer
    Foreigner,
}

impl BuyerCategory {
    /// Get the string representation used in CSV files and CLI arguments
    pub fn as_str(&self) -> &'static str {
        match self {
            BuyerCategory::CitizenFirstHome => "citizen-first-home",
            BuyerCategory::CitizenAdditionalHome => "citizen-additional-home",
            BuyerCategory::PrFirstHome => "PR-first-home",
            BuyerCategory::PrAdditionalHome => "PR-additional-home",
            BuyerCategory::Foreigner => "foreigner",
        }
    }
}

/// Status of the child the schedule is keyed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChildStatus {
    /// Child already born; reference date is the birth date
    Born,
    /// Pregnancy in progress; reference date is the due date
    Expected,
    /// Family planning stage; reference date is the intended date
    Planned,
}

/// Category of a one-time expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    PrenatalCare,
    Delivery,
    PostnatalCare,
    Education,
    HousingRelated,
    Other,
}

impl ExpenseCategory {
    /// Get the string representation used in CSV files
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::PrenatalCare => "prenatal-care",
            ExpenseCategory::Delivery => "delivery",
            ExpenseCategory::PostnatalCare => "postnatal-care",
            ExpenseCategory::Education => "education",
            ExpenseCategory::HousingRelated => "housing-related",
            ExpenseCategory::Other => "other",
        }
    }
}

/// A single irregular expense entered by the user
///
/// The list of these is owned by the caller; the engine reads a snapshot per
/// run and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneTimeExpense {
    /// Display name, non-empty
    pub name: String,

    /// Amount, strictly positive
    pub amount: f64,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Expense category
    pub category: ExpenseCategory,
}

impl OneTimeExpense {
    pub fn new(name: impl Into<String>, amount: f64, date: NaiveDate, category: ExpenseCategory) -> Self {
        Self {
            name: name.into(),
            amount,
            date,
            category,
        }
    }
}

/// Parameters of a planned home purchase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedPurchase {
    /// Intended purchase date
    pub purchase_date: NaiveDate,

    /// Full purchase price
    pub house_price: f64,

    /// Down payment as a percentage of price, valid range [5, 50]
    pub down_payment_pct: f64,

    /// Loan term in years, valid range [5, 30]
    pub loan_term_years: u32,

    /// Annual interest rate as a percentage, valid range [1.0, 5.0]
    pub annual_rate_pct: f64,

    /// Buyer category for additional stamp duty
    pub buyer: BuyerCategory,

    /// One-time legal fees at purchase
    pub legal_fees: f64,

    /// Other one-time purchase fees (agent, valuation, ...)
    pub other_fees: f64,
}

impl PlannedPurchase {
    /// Cash down payment at purchase
    pub fn down_payment(&self) -> f64 {
        self.house_price * self.down_payment_pct / 100.0
    }

    /// Principal borrowed at purchase
    pub fn loan_amount(&self) -> f64 {
        self.house_price - self.down_payment()
    }
}

/// Housing situation of the household
///
/// One engine handles all three variants; the variant only gates which
/// housing fields are populated per month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HousingPlan {
    /// Renting or otherwise no mortgage and no property
    NotPlanned,

    /// Home already owned with a mortgage in repayment
    AlreadyOwned {
        /// Fixed monthly mortgage payment
        monthly_mortgage: f64,
        /// Current market value of the property
        property_value: f64,
        /// Outstanding loan balance at projection start
        outstanding_loan: f64,
    },

    /// Purchase planned during or after the projection window
    PlannedPurchase(PlannedPurchase),
}

/// Immutable input parameters for one projection run
///
/// All monetary fields are non-negative; ranges are checked by [`validate`]
/// at the collaborator boundary, never inside the engine.
///
/// [`validate`]: ProjectionParameters::validate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionParameters {
    /// Monthly household income
    pub monthly_income: f64,

    /// Monthly base living expenses
    pub monthly_expenses: f64,

    /// Monthly recurring child expense, active from the reference month
    pub monthly_child_expenses: f64,

    /// Annual insurance premium, spread evenly across months
    pub annual_insurance: f64,

    /// Annual tax bill, spread evenly across months
    pub annual_tax: f64,

    /// Annual bonus, paid in December
    pub annual_bonus: f64,

    /// Monthly childcare fee, ages [6, 48) months
    pub childcare_monthly: f64,

    /// Monthly preschool fee, ages [48, 84) months
    pub preschool_monthly: f64,

    /// Monthly primary school fee, ages 84 months and up
    pub primary_school_monthly: f64,

    /// Status of the child the expense schedule is keyed to
    pub child_status: ChildStatus,

    /// Birth, due or intended date of the child
    pub child_reference_date: NaiveDate,

    /// Savings on hand at projection start
    pub initial_funds: f64,

    /// Housing situation
    pub housing: HousingPlan,
}

impl ProjectionParameters {
    /// Check range invariants on all fields
    ///
    /// The engine itself is total over pre-validated inputs; this is the
    /// check collaborators run before handing parameters to it.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let monetary = [
            ("monthly_income", self.monthly_income),
            ("monthly_expenses", self.monthly_expenses),
            ("monthly_child_expenses", self.monthly_child_expenses),
            ("annual_insurance", self.annual_insurance),
            ("annual_tax", self.annual_tax),
            ("annual_bonus", self.annual_bonus),
            ("childcare_monthly", self.childcare_monthly),
            ("preschool_monthly", self.preschool_monthly),
            ("primary_school_monthly", self.primary_school_monthly),
            ("initial_funds", self.initial_funds),
        ];
        for (field, value) in monetary {
            if value < 0.0 {
                return Err(ParameterError::Negative { field, value });
            }
        }

        match &self.housing {
            HousingPlan::NotPlanned => {}
            HousingPlan::AlreadyOwned {
                monthly_mortgage,
                property_value,
                outstanding_loan,
            } => {
                let monetary = [
                    ("monthly_mortgage", *monthly_mortgage),
                    ("property_value", *property_value),
                    ("outstanding_loan", *outstanding_loan),
                ];
                for (field, value) in monetary {
                    if value < 0.0 {
                        return Err(ParameterError::Negative { field, value });
                    }
                }
            }
            HousingPlan::PlannedPurchase(purchase) => {
                let monetary = [
                    ("house_price", purchase.house_price),
                    ("legal_fees", purchase.legal_fees),
                    ("other_fees", purchase.other_fees),
                ];
                for (field, value) in monetary {
                    if value < 0.0 {
                        return Err(ParameterError::Negative { field, value });
                    }
                }
                if !(5.0..=50.0).contains(&purchase.down_payment_pct) {
                    return Err(ParameterError::DownPaymentRange(purchase.down_payment_pct));
                }
                if !(5..=30).contains(&purchase.loan_term_years) {
                    return Err(ParameterError::LoanTermRange(purchase.loan_term_years));
                }
                if !(1.0..=5.0).contains(&purchase.annual_rate_pct) {
                    return Err(ParameterError::InterestRateRange(purchase.annual_rate_pct));
                }
            }
        }

        Ok(())
    }
}

/// Validate a caller-supplied one-time expense list
pub fn validate_expenses(expenses: &[OneTimeExpense]) -> Result<(), ParameterError> {
    for expense in expenses {
        if expense.name.trim().is_empty() {
            return Err(ParameterError::EmptyExpenseName);
        }
        if expense.amount <= 0.0 {
            return Err(ParameterError::NonPositiveExpense(expense.name.clone()));
        }
    }
    Ok(())
}

/// Range violations in projection parameters
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("down payment must be between 5% and 50% of price, got {0}%")]
    DownPaymentRange(f64),

    #[error("loan term must be between 5 and 30 years, got {0}")]
    LoanTermRange(u32),

    #[error("annual interest rate must be between 1.0% and 5.0%, got {0}%")]
    InterestRateRange(f64),

    #[error("one-time expense name must not be empty")]
    EmptyExpenseName,

    #[error("one-time expense '{0}' must have a positive amount")]
    NonPositiveExpense(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_params() -> ProjectionParameters {
        ProjectionParameters {
            monthly_income: 5000.0,
            monthly_expenses: 2000.0,
            monthly_child_expenses: 500.0,
            annual_insurance: 2000.0,
            annual_tax: 3000.0,
            annual_bonus: 10_000.0,
            childcare_monthly: 1000.0,
            preschool_monthly: 1200.0,
            primary_school_monthly: 300.0,
            child_status: ChildStatus::Born,
            child_reference_date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            initial_funds: 20_000.0,
            housing: HousingPlan::NotPlanned,
        }
    }

    #[test]
    fn test_valid_params_pass() {
        assert!(base_params().validate().is_ok());
    }

    #[test]
    fn test_negative_income_rejected() {
        let mut params = base_params();
        params.monthly_income = -1.0;
        assert!(matches!(
            params.validate(),
            Err(ParameterError::Negative { field: "monthly_income", .. })
        ));
    }

    #[test]
    fn test_negative_initial_funds_rejected() {
        let mut params = base_params();
        params.initial_funds = -5000.0;
        assert!(matches!(
            params.validate(),
            Err(ParameterError::Negative { field: "initial_funds", .. })
        ));
    }

    #[test]
    fn test_purchase_ranges_enforced() {
        let mut params = base_params();
        params.housing = HousingPlan::PlannedPurchase(PlannedPurchase {
            purchase_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            house_price: 1_000_000.0,
            down_payment_pct: 3.0,
            loan_term_years: 25,
            annual_rate_pct: 3.0,
            buyer: BuyerCategory::CitizenFirstHome,
            legal_fees: 3000.0,
            other_fees: 1000.0,
        });
        assert!(matches!(
            params.validate(),
            Err(ParameterError::DownPaymentRange(_))
        ));
    }

    #[test]
    fn test_purchase_cash_split() {
        let purchase = PlannedPurchase {
            purchase_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            house_price: 1_000_000.0,
            down_payment_pct: 25.0,
            loan_term_years: 25,
            annual_rate_pct: 3.0,
            buyer: BuyerCategory::CitizenFirstHome,
            legal_fees: 0.0,
            other_fees: 0.0,
        };
        assert_eq!(purchase.down_payment(), 250_000.0);
        assert_eq!(purchase.loan_amount(), 750_000.0);
    }

    #[test]
    fn test_expense_validation() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let good = vec![OneTimeExpense::new("scan", 350.0, date, ExpenseCategory::PrenatalCare)];
        assert!(validate_expenses(&good).is_ok());

        let bad = vec![OneTimeExpense::new("", 350.0, date, ExpenseCategory::Other)];
        assert!(matches!(
            validate_expenses(&bad),
            Err(ParameterError::EmptyExpenseName)
        ));

        let zero = vec![OneTimeExpense::new("crib", 0.0, date, ExpenseCategory::Other)];
        assert!(matches!(
            validate_expenses(&zero),
            Err(ParameterError::NonPositiveExpense(_))
        ));
    }
}
