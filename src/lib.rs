//! Family Finance - household financial projection engine
//!
//! This library provides:
//! - A pure 72-month projection of household cash flow, savings and assets
//! - Tiered buyer's stamp duty and status-based additional duty
//! - Mortgage amortization (computed-payment and known-balance modes)
//! - Age-gated child expense schedules (childcare / preschool / primary)
//! - Alignment of irregular one-time expenses onto the monthly grid
//! - A scenario runner for repeated projections under varying inputs

pub mod household;
pub mod housing;
pub mod projection;
pub mod scenario;
pub mod schedule;

// Re-export commonly used types
pub use household::{BuyerCategory, HousingPlan, OneTimeExpense, ProjectionParameters};
pub use housing::StampDuty;
pub use projection::{MonthRecord, ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use scenario::ScenarioRunner;
