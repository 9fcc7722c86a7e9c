//! Fiscal terms: the enumerated depreciation schedule and the regime's
//! allowed ranges for rate-type assumptions

use serde::{Deserialize, Serialize};

/// Royalty rate bounds in percent
pub const ROYALTY_RATE_RANGE: (f64, f64) = (5.0, 15.0);

/// Corporate income tax rate bounds in percent
pub const TAX_RATE_RANGE: (f64, f64) = (25.0, 35.0);

/// NPV discount rate bounds in percent
pub const DISCOUNT_RATE_RANGE: (f64, f64) = (5.0, 15.0);

/// Project life bounds in years
pub const PROJECT_LIFE_RANGE: (u32, u32) = (5, 20);

/// Straight-line depreciation rate, restricted to the schedules the fiscal
/// regime allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepreciationRate {
    /// 10% per year
    Ten,
    /// 20% per year
    Twenty,
    /// 25% per year
    TwentyFive,
    /// 30% per year
    Thirty,
}

impl DepreciationRate {
    /// Annual rate as a percentage
    pub fn as_pct(&self) -> f64 {
        match self {
            DepreciationRate::Ten => 10.0,
            DepreciationRate::Twenty => 20.0,
            DepreciationRate::TwentyFive => 25.0,
            DepreciationRate::Thirty => 30.0,
        }
    }

    /// Parse from a whole-percent value
    pub fn from_pct(pct: u32) -> Option<Self> {
        match pct {
            10 => Some(DepreciationRate::Ten),
            20 => Some(DepreciationRate::Twenty),
            25 => Some(DepreciationRate::TwentyFive),
            30 => Some(DepreciationRate::Thirty),
            _ => None,
        }
    }
}
