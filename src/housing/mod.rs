//! Home purchase financing: stamp duty and mortgage amortization

mod mortgage;
mod stamp_duty;

pub use mortgage::{
    amortize_step, level_payment, linear_principal_step, monthly_rate, property_growth_factor,
    PROPERTY_GROWTH_ANNUAL,
};
pub use stamp_duty::{absd_rate, additional_stamp_duty, assess, buyer_stamp_duty, StampDuty};
