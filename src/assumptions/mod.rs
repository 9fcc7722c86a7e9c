//! Project assumptions: prices, production, fiscal terms, and horizon

mod fiscal;
pub mod loader;

pub use fiscal::{
    DepreciationRate, DISCOUNT_RATE_RANGE, PROJECT_LIFE_RANGE, ROYALTY_RATE_RANGE, TAX_RATE_RANGE,
};

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Producing days per calendar year
pub const DAYS_PER_YEAR: u32 = 365;

/// Oil price used when no live quote is available, $/bbl
pub const FALLBACK_OIL_PRICE: f64 = 75.0;

/// Validated scalar inputs for one projection
///
/// Immutable once constructed; the engine never mutates an assumption set,
/// and a changed input always means a new `Assumptions` value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    /// Oil price, $/bbl
    pub oil_price: f64,
    /// Daily production, bbl/day
    pub daily_production: u64,
    /// Capital expenditure, $M
    pub capex: f64,
    /// Operating cost per barrel, $/bbl
    pub opex_per_bbl: f64,
    /// Straight-line depreciation schedule
    pub depreciation_rate: DepreciationRate,
    /// Royalty on gross revenue, percent
    pub royalty_rate_pct: f64,
    /// Corporate income tax rate, percent
    pub tax_rate_pct: f64,
    /// NPV discount rate, percent
    pub discount_rate_pct: f64,
    /// Projection horizon, years
    pub project_life_years: u32,
}

impl Assumptions {
    /// Base-case assumptions matching the reference scenario
    /// (oil price at the fallback quote, 200k bbl/day, $4B capex)
    pub fn default_case() -> Self {
        Self {
            oil_price: FALLBACK_OIL_PRICE,
            daily_production: 200_000,
            capex: 4_000.0,
            opex_per_bbl: 12.0,
            depreciation_rate: DepreciationRate::Twenty,
            royalty_rate_pct: 10.0,
            tax_rate_pct: 30.0,
            discount_rate_pct: 10.0,
            project_life_years: 10,
        }
    }

    /// Range-check every field, naming the first violation found
    ///
    /// A zero oil price (or zero production) is admitted: the degenerate
    /// scenario still projects, and the IRR solver decides whether the
    /// resulting stream carries a root.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if !self.oil_price.is_finite() || self.oil_price < 0.0 {
            return Err(ProjectionError::invalid(
                "oil_price",
                format!("{} $/bbl is not a non-negative finite price", self.oil_price),
            ));
        }
        if !self.capex.is_finite() || self.capex <= 0.0 {
            return Err(ProjectionError::invalid(
                "capex",
                format!("{} $M must be a positive finite amount", self.capex),
            ));
        }
        if !self.opex_per_bbl.is_finite() || self.opex_per_bbl < 0.0 {
            return Err(ProjectionError::invalid(
                "opex_per_bbl",
                format!("{} $/bbl must be non-negative and finite", self.opex_per_bbl),
            ));
        }
        check_pct_range("royalty_rate_pct", self.royalty_rate_pct, ROYALTY_RATE_RANGE)?;
        check_pct_range("tax_rate_pct", self.tax_rate_pct, TAX_RATE_RANGE)?;
        check_pct_range("discount_rate_pct", self.discount_rate_pct, DISCOUNT_RATE_RANGE)?;

        let (life_min, life_max) = PROJECT_LIFE_RANGE;
        if self.project_life_years < life_min || self.project_life_years > life_max {
            return Err(ProjectionError::invalid(
                "project_life_years",
                format!(
                    "{} is out of bounds [{}, {}]",
                    self.project_life_years, life_min, life_max
                ),
            ));
        }

        Ok(())
    }

    /// Total barrels produced per year
    pub fn annual_production_bbl(&self) -> f64 {
        self.daily_production as f64 * DAYS_PER_YEAR as f64
    }
}

fn check_pct_range(field: &str, value: f64, (min, max): (f64, f64)) -> Result<(), ProjectionError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ProjectionError::invalid(
            field,
            format!("{value}% is out of bounds [{min}%, {max}%]"),
        ));
    }
    Ok(())
}
