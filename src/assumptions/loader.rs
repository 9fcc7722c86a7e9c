//! External assumption providers
//!
//! The engine only ever sees a validated `Assumptions` value; these
//! constructors are the supported ways of producing one from the outside
//! world. Fetching a live oil quote or an FX rate is upstream of this
//! layer — a feed that fails simply leaves the fallback price in place.
//!
//! Environment variables (all optional, defaults from `default_case`):
//!   OIL_PRICE, DAILY_PRODUCTION, CAPEX, OPEX_PER_BBL, DEPRECIATION_RATE,
//!   ROYALTY_RATE, TAX_RATE, DISCOUNT_RATE, PROJECT_LIFE_YEARS

use std::env;
use std::fs;
use std::path::Path;

use super::{Assumptions, DepreciationRate};
use crate::error::ProjectionError;

/// Default path to a saved scenario file
pub const DEFAULT_SCENARIO_PATH: &str = "data/scenario.json";

/// Build assumptions from environment variables over the base case
pub fn from_env() -> Result<Assumptions, ProjectionError> {
    let base = Assumptions::default_case();

    let depreciation_rate = match env::var("DEPRECIATION_RATE") {
        Ok(raw) => {
            let pct: u32 = raw.parse().map_err(|_| {
                ProjectionError::invalid("depreciation_rate", format!("'{raw}' is not a number"))
            })?;
            DepreciationRate::from_pct(pct).ok_or_else(|| {
                ProjectionError::invalid(
                    "depreciation_rate",
                    format!("{pct}% is not one of the allowed schedules (10/20/25/30)"),
                )
            })?
        }
        Err(_) => base.depreciation_rate,
    };

    let assumptions = Assumptions {
        oil_price: env_or("OIL_PRICE", base.oil_price),
        daily_production: env_or("DAILY_PRODUCTION", base.daily_production),
        capex: env_or("CAPEX", base.capex),
        opex_per_bbl: env_or("OPEX_PER_BBL", base.opex_per_bbl),
        depreciation_rate,
        royalty_rate_pct: env_or("ROYALTY_RATE", base.royalty_rate_pct),
        tax_rate_pct: env_or("TAX_RATE", base.tax_rate_pct),
        discount_rate_pct: env_or("DISCOUNT_RATE", base.discount_rate_pct),
        project_life_years: env_or("PROJECT_LIFE_YEARS", base.project_life_years),
    };

    assumptions.validate()?;
    Ok(assumptions)
}

/// Parse a scenario from a JSON string
pub fn from_json_str(json: &str) -> Result<Assumptions, ProjectionError> {
    let assumptions: Assumptions = serde_json::from_str(json)?;
    assumptions.validate()?;
    Ok(assumptions)
}

/// Load a scenario from a JSON file
pub fn from_json_path(path: &Path) -> Result<Assumptions, ProjectionError> {
    from_json_str(&fs::read_to_string(path)?)
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_scenario_parses_and_validates() {
        let json = r#"{
            "oil_price": 80.0,
            "daily_production": 150000,
            "capex": 3500.0,
            "opex_per_bbl": 11.5,
            "depreciation_rate": "TwentyFive",
            "royalty_rate_pct": 12.5,
            "tax_rate_pct": 30.0,
            "discount_rate_pct": 8.0,
            "project_life_years": 15
        }"#;

        let a = from_json_str(json).unwrap();
        assert_eq!(a.daily_production, 150_000);
        assert_eq!(a.depreciation_rate, DepreciationRate::TwentyFive);
        assert_eq!(a.project_life_years, 15);
    }

    #[test]
    fn test_json_scenario_out_of_range_rejected() {
        let json = r#"{
            "oil_price": 80.0,
            "daily_production": 150000,
            "capex": 3500.0,
            "opex_per_bbl": 11.5,
            "depreciation_rate": "Ten",
            "royalty_rate_pct": 20.0,
            "tax_rate_pct": 30.0,
            "discount_rate_pct": 8.0,
            "project_life_years": 15
        }"#;

        assert!(matches!(
            from_json_str(json),
            Err(ProjectionError::InvalidInput { field, .. }) if field == "royalty_rate_pct"
        ));
    }

    #[test]
    fn test_json_garbage_is_a_json_error() {
        assert!(matches!(
            from_json_str("not json"),
            Err(ProjectionError::Json(_))
        ));
    }
}
