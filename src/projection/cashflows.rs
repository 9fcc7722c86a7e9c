//! Cashflow output structures for projections

use serde::{Deserialize, Serialize};

/// One year of projected financials, all amounts in $M
///
/// The fiscal terms do not vary over the horizon, so every row of a
/// schedule carries the same six values; the row exists because the
/// presentation and export surfaces consume a per-year table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashflowRow {
    pub year: u32,
    pub revenue: f64,
    pub opex: f64,
    pub royalty: f64,
    pub depreciation: f64,
    pub tax: f64,
    pub net_cash_flow: f64,
}

/// Complete projection result
///
/// Built in one pass and never mutated afterwards; a new assumption set
/// always produces a brand-new result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Gross revenue per year, $M
    pub annual_revenue: f64,
    /// Operating cost per year, $M
    pub annual_opex: f64,
    /// Royalty per year, $M
    pub annual_royalty: f64,
    /// Depreciation allowance per year, $M
    pub annual_depreciation: f64,
    /// Income tax per year, $M (negative in loss years: a credit)
    pub annual_tax: f64,
    /// Net cash flow per year, $M
    pub annual_net_cash_flow: f64,

    /// Per-year schedule, years 1..=project_life
    pub schedule: Vec<CashflowRow>,

    /// Net present value at the scenario discount rate, $M
    pub npv: f64,
    /// Internal rate of return, percent
    pub irr_pct: f64,
}

impl ProjectionResult {
    /// Headline metrics for display and export
    pub fn summary(&self) -> ProjectionSummary {
        let total_net_cash_flow: f64 = self.schedule.iter().map(|r| r.net_cash_flow).sum();

        ProjectionSummary {
            project_life_years: self.schedule.len() as u32,
            annual_revenue: self.annual_revenue,
            total_net_cash_flow,
            npv: self.npv,
            irr_pct: self.irr_pct,
        }
    }
}

/// Headline metrics of a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub project_life_years: u32,
    pub annual_revenue: f64,
    pub total_net_cash_flow: f64,
    pub npv: f64,
    pub irr_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_totals() {
        let row = |year| CashflowRow {
            year,
            revenue: 100.0,
            opex: 20.0,
            royalty: 10.0,
            depreciation: 15.0,
            tax: 16.5,
            net_cash_flow: 53.5,
        };
        let result = ProjectionResult {
            annual_revenue: 100.0,
            annual_opex: 20.0,
            annual_royalty: 10.0,
            annual_depreciation: 15.0,
            annual_tax: 16.5,
            annual_net_cash_flow: 53.5,
            schedule: (1..=5).map(row).collect(),
            npv: 0.0,
            irr_pct: 0.0,
        };

        let summary = result.summary();
        assert_eq!(summary.project_life_years, 5);
        assert!((summary.total_net_cash_flow - 267.5).abs() < 1e-12);
    }
}
