//! Error taxonomy for the projection engine and its I/O surfaces

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectionError {
    /// An assumption violates its stated range or shape
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    /// The cash-flow stream has no sign change, so no IRR exists
    #[error("No IRR root found: cash-flow stream has no sign change")]
    NoRootFound,

    /// The IRR solver exhausted its iteration budget
    #[error("IRR did not converge after {iterations} iterations")]
    DidNotConverge { iterations: u32 },

    /// Scenario file could not be read (loader surface only)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario file could not be parsed (loader/report surfaces only)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Schedule export failed (report surface only)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ProjectionError {
    /// Shorthand for range-check failures
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
