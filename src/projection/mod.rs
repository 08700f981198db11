//! Projection engine producing the monthly household time series

mod engine;
mod records;
mod state;

pub use engine::{ProjectionConfig, ProjectionEngine, DEFAULT_PROJECTION_MONTHS};
pub use records::{MonthRecord, ProjectionResult, ProjectionSummary};
pub use state::ProjectionState;
