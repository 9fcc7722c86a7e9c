//! Core projection engine: one assumption set in, one fiscal schedule and
//! valuation out

use log::debug;

use super::cashflows::{CashflowRow, ProjectionResult};
use super::irr;
use crate::assumptions::Assumptions;
use crate::error::ProjectionError;

/// Main projection engine
///
/// Pure and deterministic: the same assumptions always produce a
/// bit-identical result, and nothing is cached between invocations.
/// Callers reacting to input changes re-invoke `project` and debounce on
/// their side.
pub struct ProjectionEngine {
    assumptions: Assumptions,
}

impl ProjectionEngine {
    /// Create a new projection engine for one assumption set
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Run the projection
    ///
    /// Validates the assumptions, derives the uniform annual line items,
    /// builds the per-year schedule, and prices the cash-flow stream
    /// (year-0 capex outflow followed by the repeated net cash flow).
    pub fn project(&self) -> Result<ProjectionResult, ProjectionError> {
        self.assumptions.validate()?;
        let a = &self.assumptions;

        let annual_production_bbl = a.annual_production_bbl();
        let annual_revenue = a.oil_price * annual_production_bbl / 1e6;
        let annual_opex = a.opex_per_bbl * annual_production_bbl / 1e6;
        let annual_royalty = annual_revenue * a.royalty_rate_pct / 100.0;
        let annual_depreciation = a.capex * a.depreciation_rate.as_pct() / 100.0;

        let profit_before_tax = annual_revenue - annual_opex - annual_depreciation - annual_royalty;
        // A taxable loss yields a negative tax, i.e. a credit; the fiscal
        // model carries it through without flooring at zero
        let annual_tax = profit_before_tax * a.tax_rate_pct / 100.0;
        let after_tax_profit = profit_before_tax - annual_tax;
        // Depreciation is a non-cash charge, added back below the tax line
        let annual_net_cash_flow = after_tax_profit + annual_depreciation;

        debug!(
            "line items ($M/yr): revenue={annual_revenue:.2} opex={annual_opex:.2} \
             royalty={annual_royalty:.2} depreciation={annual_depreciation:.2} \
             tax={annual_tax:.2} net_cash_flow={annual_net_cash_flow:.2}"
        );

        let schedule: Vec<CashflowRow> = (1..=a.project_life_years)
            .map(|year| CashflowRow {
                year,
                revenue: annual_revenue,
                opex: annual_opex,
                royalty: annual_royalty,
                depreciation: annual_depreciation,
                tax: annual_tax,
                net_cash_flow: annual_net_cash_flow,
            })
            .collect();

        // Stream priced by both metrics: [-capex, cf, cf, ..., cf]
        let cashflows: Vec<f64> = std::iter::once(-a.capex)
            .chain(std::iter::repeat(annual_net_cash_flow).take(a.project_life_years as usize))
            .collect();

        let discount = a.discount_rate_pct / 100.0;
        let npv = irr::npv(discount, &cashflows)?;
        let irr_pct = irr::irr(&cashflows, discount)? * 100.0;

        debug!("valuation: npv={npv:.2} $M at {:.1}%, irr={irr_pct:.2}%", a.discount_rate_pct);

        Ok(ProjectionResult {
            annual_revenue,
            annual_opex,
            annual_royalty,
            annual_depreciation,
            annual_tax,
            annual_net_cash_flow,
            schedule,
            npv,
            irr_pct,
        })
    }
}
