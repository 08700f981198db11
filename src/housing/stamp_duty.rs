//! Tiered buyer's stamp duty and status-based additional duty

use crate::household::BuyerCategory;
use serde::{Deserialize, Serialize};

/// Stamp duty assessed on a purchase
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StampDuty {
    /// Buyer's stamp duty, tiered on price
    pub bsd: f64,

    /// Additional buyer's stamp duty, flat rate on price by buyer category
    pub absd: f64,
}

impl StampDuty {
    pub fn total(&self) -> f64 {
        self.bsd + self.absd
    }
}

/// Buyer's stamp duty on a purchase price
///
/// Tiers: 1% to 180k, 2% to 360k, 3% to 1M, 4% above. Each tier applies to
/// the excess over the previous boundary, so the schedule is continuous.
pub fn buyer_stamp_duty(price: f64) -> f64 {
    if price <= 180_000.0 {
        0.01 * price
    } else if price <= 360_000.0 {
        1_800.0 + 0.02 * (price - 180_000.0)
    } else if price <= 1_000_000.0 {
        5_400.0 + 0.03 * (price - 360_000.0)
    } else {
        24_600.0 + 0.04 * (price - 1_000_000.0)
    }
}

/// Additional buyer's stamp duty rate by buyer category
pub fn absd_rate(buyer: BuyerCategory) -> f64 {
    match buyer {
        BuyerCategory::CitizenFirstHome => 0.0,
        BuyerCategory::CitizenAdditionalHome => 0.17,
        BuyerCategory::PrFirstHome => 0.05,
        BuyerCategory::PrAdditionalHome => 0.25,
        BuyerCategory::Foreigner => 0.30,
    }
}

/// Additional buyer's stamp duty on a purchase price
pub fn additional_stamp_duty(price: f64, buyer: BuyerCategory) -> f64 {
    price * absd_rate(buyer)
}

/// Assess both duties for a purchase
///
/// Price and category are pre-validated by the caller; there are no error
/// conditions here.
pub fn assess(price: f64, buyer: BuyerCategory) -> StampDuty {
    StampDuty {
        bsd: buyer_stamp_duty(price),
        absd: additional_stamp_duty(price, buyer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bsd_tier_continuity() {
        // Adjacent tier formulas must agree at the boundaries
        assert_relative_eq!(buyer_stamp_duty(180_000.0), 1_800.0);
        assert_relative_eq!(
            buyer_stamp_duty(180_000.0),
            1_800.0 + 0.02 * (180_000.0 - 180_000.0)
        );
        assert_relative_eq!(buyer_stamp_duty(360_000.0), 5_400.0);
        assert_relative_eq!(
            buyer_stamp_duty(360_000.0),
            5_400.0 + 0.03 * (360_000.0 - 360_000.0)
        );
        assert_relative_eq!(buyer_stamp_duty(1_000_000.0), 24_600.0);
        assert_relative_eq!(
            buyer_stamp_duty(1_000_000.0),
            24_600.0 + 0.04 * (1_000_000.0 - 1_000_000.0)
        );
    }

    #[test]
    fn test_citizen_first_home_million() {
        let duty = assess(1_000_000.0, BuyerCategory::CitizenFirstHome);
        assert_relative_eq!(duty.bsd, 24_600.0);
        assert_relative_eq!(duty.absd, 0.0);
        assert_relative_eq!(duty.total(), 24_600.0);
    }

    #[test]
    fn test_foreigner_absd() {
        let duty = assess(1_700_000.0, BuyerCategory::Foreigner);
        assert_relative_eq!(duty.absd, 510_000.0);
    }

    #[test]
    fn test_absd_rates() {
        assert_relative_eq!(absd_rate(BuyerCategory::CitizenAdditionalHome), 0.17);
        assert_relative_eq!(absd_rate(BuyerCategory::PrFirstHome), 0.05);
        assert_relative_eq!(absd_rate(BuyerCategory::PrAdditionalHome), 0.25);
    }

    #[test]
    fn test_low_tier() {
        assert_relative_eq!(buyer_stamp_duty(100_000.0), 1_000.0);
        assert_relative_eq!(buyer_stamp_duty(0.0), 0.0);
    }
}
