//! Monthly timeline, child expense schedule and one-time expense alignment

mod child;
mod one_time;
mod timeline;

pub use child::{ChildSchedule, EducationStage, MonthlyChildCosts};
pub use one_time::{align, snap_index, AlignedExpenses};
pub use timeline::{month_name, month_start, month_starts, next_month};
