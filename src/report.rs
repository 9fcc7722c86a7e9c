//! Rendering and export of projection results
//!
//! Stand-ins for the dashboard's presentation surfaces: an aligned console
//! table, a CSV file of the schedule, and a JSON document carrying the
//! inputs and the full result. Chart and PDF rendering are out of scope.

use std::fmt::Write as _;
use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::assumptions::Assumptions;
use crate::error::ProjectionError;
use crate::projection::{ProjectionResult, ProjectionSummary};

/// Result plus the inputs that produced it, for export
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport<'a> {
    pub assumptions: &'a Assumptions,
    pub summary: ProjectionSummary,
    pub result: &'a ProjectionResult,
}

impl<'a> ScenarioReport<'a> {
    pub fn new(assumptions: &'a Assumptions, result: &'a ProjectionResult) -> Self {
        Self {
            assumptions,
            summary: result.summary(),
            result,
        }
    }

    /// Headline metrics block
    pub fn metrics_text(&self) -> String {
        let s = &self.summary;
        let mut out = String::new();
        let _ = writeln!(out, "Project NPV ($M):     {:>12.2}", s.npv);
        let _ = writeln!(out, "IRR (%):              {:>12.2}", s.irr_pct);
        let _ = writeln!(out, "Annual Revenue ($M):  {:>12.2}", s.annual_revenue);
        let _ = writeln!(out, "Total Net CF ($M):    {:>12.2}", s.total_net_cash_flow);
        out
    }

    /// Per-year schedule as an aligned text table
    pub fn schedule_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>4} {:>12} {:>10} {:>10} {:>13} {:>10} {:>13}",
            "Year", "Revenue", "OPEX", "Royalty", "Depreciation", "Tax", "Net CF"
        );
        let _ = writeln!(out, "{}", "-".repeat(78));
        for row in &self.result.schedule {
            let _ = writeln!(
                out,
                "{:>4} {:>12.2} {:>10.2} {:>10.2} {:>13.2} {:>10.2} {:>13.2}",
                row.year,
                row.revenue,
                row.opex,
                row.royalty,
                row.depreciation,
                row.tax,
                row.net_cash_flow,
            );
        }
        out
    }

    /// Write the schedule to a CSV file
    pub fn write_csv(&self, path: &Path) -> Result<(), ProjectionError> {
        let mut writer = csv::Writer::from_writer(File::create(path)?);
        for row in &self.result.schedule {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Serialize the whole report as pretty JSON
    pub fn to_json(&self) -> Result<String, ProjectionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
