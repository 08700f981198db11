//! Load one-time expense lists from user-maintained CSV files
//!
//! The interactive collaborator keeps the list across a session; a CLI run
//! reads it back from a `name,amount,date,category` file.

use super::{ExpenseCategory, OneTimeExpense};
use chrono::NaiveDate;
use csv::Reader;
use std::path::Path;
use thiserror::Error;

/// Errors reading an expense CSV file
#[derive(Debug, Error)]
pub enum ExpenseFileError {
    #[error("failed to read expense file: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: unknown category '{value}'")]
    UnknownCategory { row: usize, value: String },

    #[error("row {row}: expense name must not be empty")]
    EmptyName { row: usize },

    #[error("row {row}: amount must be positive, got {value}")]
    NonPositiveAmount { row: usize, value: f64 },
}

/// Raw CSV row as written by the user
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    amount: f64,
    date: String,
    category: String,
}

impl CsvRow {
    fn to_expense(self, row: usize) -> Result<OneTimeExpense, ExpenseFileError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseFileError::EmptyName { row });
        }
        if self.amount <= 0.0 {
            return Err(ExpenseFileError::NonPositiveAmount {
                row,
                value: self.amount,
            });
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            ExpenseFileError::InvalidDate {
                row,
                value: self.date.clone(),
            }
        })?;

        let category = match self.category.trim() {
            "prenatal-care" => ExpenseCategory::PrenatalCare,
            "delivery" => ExpenseCategory::Delivery,
            "postnatal-care" => ExpenseCategory::PostnatalCare,
            "education" => ExpenseCategory::Education,
            "housing-related" => ExpenseCategory::HousingRelated,
            "other" => ExpenseCategory::Other,
            other => {
                return Err(ExpenseFileError::UnknownCategory {
                    row,
                    value: other.to_string(),
                })
            }
        };

        Ok(OneTimeExpense {
            name: self.name,
            amount: self.amount,
            date,
            category,
        })
    }
}

/// Load all one-time expenses from a CSV file
pub fn load_expenses<P: AsRef<Path>>(path: P) -> Result<Vec<OneTimeExpense>, ExpenseFileError> {
    let reader = Reader::from_path(path)?;
    collect_expenses(reader)
}

/// Load one-time expenses from any reader (e.g. string buffer, pipe)
pub fn load_expenses_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<OneTimeExpense>, ExpenseFileError> {
    collect_expenses(Reader::from_reader(reader))
}

fn collect_expenses<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<Vec<OneTimeExpense>, ExpenseFileError> {
    let mut expenses = Vec::new();

    // Row numbers are 1-based and skip the header line
    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        expenses.push(row.to_expense(idx + 1)?);
    }

    log::info!("loaded {} one-time expenses", expenses.len());
    Ok(expenses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let data = "\
name,amount,date,category
prenatal scan,350.50,2025-04-12,prenatal-care
delivery package,8000,2025-11-03,delivery
crib,600,2025-10-20,other
";
        let expenses = load_expenses_from_reader(data.as_bytes()).expect("parse");
        assert_eq!(expenses.len(), 3);
        assert_eq!(expenses[0].name, "prenatal scan");
        assert_eq!(expenses[0].category, ExpenseCategory::PrenatalCare);
        assert_eq!(
            expenses[1].date,
            NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
        );
    }

    #[test]
    fn test_unknown_category_rejected() {
        let data = "name,amount,date,category\ntv,900,2025-04-12,appliances\n";
        let err = load_expenses_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ExpenseFileError::UnknownCategory { row: 1, .. }));
    }

    #[test]
    fn test_bad_date_rejected() {
        let data = "name,amount,date,category\ntv,900,12/04/2025,other\n";
        let err = load_expenses_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ExpenseFileError::InvalidDate { .. }));
    }

    #[test]
    fn test_zero_amount_rejected() {
        let data = "name,amount,date,category\ntv,0,2025-04-12,other\n";
        let err = load_expenses_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ExpenseFileError::NonPositiveAmount { .. }));
    }
}
