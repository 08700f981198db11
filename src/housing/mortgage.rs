//! Mortgage amortization and property appreciation
//!
//! Two repayment modes coexist deliberately. A planned purchase uses the
//! standard level-payment amortization with an interest/principal split. An
//! already-owned home only has a fixed monthly payment and a known balance,
//! so its principal is paid down linearly as an approximation. The two are
//! mathematically inconsistent and are kept as distinct documented modes.

/// Annual property appreciation rate applied to owned property
pub const PROPERTY_GROWTH_ANNUAL: f64 = 0.02;

/// Monthly-equivalent property growth factor
pub fn property_growth_factor() -> f64 {
    1.0 + PROPERTY_GROWTH_ANNUAL / 12.0
}

/// Monthly interest rate from an annual percentage rate
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// Level monthly payment for an amortizing loan
///
/// With monthly rate c and n payments: `L * c * (1+c)^n / ((1+c)^n - 1)`.
/// A zero rate degrades to equal-principal division instead of dividing by
/// zero.
pub fn level_payment(loan_amount: f64, annual_rate_pct: f64, term_years: u32) -> f64 {
    let n = (term_years * 12) as f64;
    if n <= 0.0 {
        return 0.0;
    }
    let c = monthly_rate(annual_rate_pct);
    if c > 0.0 {
        let growth = (1.0 + c).powf(n);
        loan_amount * c * growth / (growth - 1.0)
    } else {
        loan_amount / n
    }
}

/// Advance an amortized balance by one month
///
/// Interest accrues on the outstanding balance; the remainder of the payment
/// retires principal. Clamped at zero once the loan is repaid.
pub fn amortize_step(balance: f64, monthly_rate: f64, payment: f64) -> f64 {
    let interest = balance * monthly_rate;
    let principal = payment - interest;
    (balance - principal).max(0.0)
}

/// Advance a known-balance loan by one month (linear-principal approximation)
///
/// Remaining term is approximated as `balance / monthly_mortgage` and the
/// balance shrinks by a constant principal amount each month. With a zero
/// payment the remaining term is undefined, so the balance is held as-is
/// rather than dividing by zero.
pub fn linear_principal_step(balance: f64, monthly_mortgage: f64) -> f64 {
    if monthly_mortgage <= 0.0 {
        return balance;
    }
    let remaining_term = balance / monthly_mortgage;
    if remaining_term <= 0.0 {
        return 0.0;
    }
    let principal = balance / remaining_term;
    (balance - principal).max(0.0)
}
