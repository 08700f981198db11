//! Household input parameters, housing plans and one-time expenses

mod data;
pub mod loader;

pub use data::{
    validate_expenses, BuyerCategory, ChildStatus, ExpenseCategory, HousingPlan, OneTimeExpense,
    ParameterError, PlannedPurchase, ProjectionParameters,
};
pub use loader::{load_expenses, load_expenses_from_reader, ExpenseFileError};
