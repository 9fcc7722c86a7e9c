//! Net present value and internal rate of return
//!
//! The IRR is found with Newton-Raphson seeded from the caller's guess,
//! falling back to bisection on a fixed bracket when the derivative
//! degenerates or the iteration cap runs out. The cash-flow streams built
//! by the engine have exactly one sign change (capex outflow followed by
//! uniform positive flows), so the bracket holds a unique real root
//! whenever the annual net cash flow is positive.

use crate::error::ProjectionError;

/// Convergence tolerance on |NPV|
pub const NPV_TOLERANCE: f64 = 1e-7;

/// Iteration cap for each solver stage
pub const MAX_ITERATIONS: u32 = 100;

/// Search bracket: -99% to 1000%
const BRACKET: (f64, f64) = (-0.99, 10.0);

/// Net present value of a cash-flow stream at a given rate
///
/// `cashflows[0]` is the year-0 flow (undiscounted); rates at or below
/// -100% make the discount factor degenerate and are rejected.
pub fn npv(rate: f64, cashflows: &[f64]) -> Result<f64, ProjectionError> {
    if !rate.is_finite() || rate <= -1.0 {
        return Err(ProjectionError::invalid(
            "rate",
            "discount rate must be greater than -100%",
        ));
    }

    Ok(cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum())
}

/// Internal rate of return of a cash-flow stream, as an annual fraction
///
/// `guess` seeds the Newton iteration; any in-bracket rate works, and the
/// scenario's own discount rate is a natural choice.
pub fn irr(cashflows: &[f64], guess: f64) -> Result<f64, ProjectionError> {
    if cashflows.len() < 2 {
        return Err(ProjectionError::invalid(
            "cashflows",
            "IRR requires at least two cash flows",
        ));
    }

    // A root requires at least one sign change in the stream
    let has_positive = cashflows.iter().any(|&cf| cf > NPV_TOLERANCE);
    let has_negative = cashflows.iter().any(|&cf| cf < -NPV_TOLERANCE);
    if !has_positive || !has_negative {
        return Err(ProjectionError::NoRootFound);
    }

    let (lo, hi) = BRACKET;
    let mut rate = guess.clamp(lo, hi);

    for _ in 0..MAX_ITERATIONS {
        let (npv_val, dnpv) = npv_and_derivative(cashflows, rate);

        if npv_val.abs() < NPV_TOLERANCE {
            return Ok(rate);
        }

        // Derivative too flat for a useful step
        if dnpv.abs() < 1e-20 {
            break;
        }

        rate = (rate - npv_val / dnpv).clamp(lo, hi);
    }

    irr_bisection(cashflows)
}

/// NPV and its derivative with respect to the rate
fn npv_and_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in cashflows.iter().enumerate() {
        let discount = (1.0 + rate).powi(t as i32);
        npv += cf / discount;
        if t > 0 {
            dnpv -= (t as f64) * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (npv, dnpv)
}

/// Bisection fallback over the fixed bracket
fn irr_bisection(cashflows: &[f64]) -> Result<f64, ProjectionError> {
    let (mut low, mut high) = BRACKET;

    let mut npv_low = npv_at_rate(cashflows, low);
    let npv_high = npv_at_rate(cashflows, high);

    if npv_low * npv_high > 0.0 {
        return Err(ProjectionError::NoRootFound);
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let npv_mid = npv_at_rate(cashflows, mid);

        if npv_mid.abs() < NPV_TOLERANCE {
            return Ok(mid);
        }

        if npv_mid * npv_low < 0.0 {
            high = mid;
        } else {
            low = mid;
            npv_low = npv_mid;
        }
    }

    Err(ProjectionError::DidNotConverge {
        iterations: MAX_ITERATIONS,
    })
}

/// NPV without the rate guard, for in-bracket rates only
fn npv_at_rate(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_simple_irr() {
        // Invest 1000, get 1100 back after one year: IRR is exactly 10%
        let cashflows = [-1000.0, 1100.0];
        let rate = irr(&cashflows, 0.05).unwrap();
        assert_relative_eq!(rate, 0.10, epsilon = 1e-6);
    }

    #[test]
    fn test_irr_zeroes_npv() {
        let cashflows: Vec<f64> = std::iter::once(-4000.0)
            .chain(std::iter::repeat(3076.05).take(10))
            .collect();
        let rate = irr(&cashflows, 0.10).unwrap();
        let residual = npv(rate, &cashflows).unwrap();
        assert!(residual.abs() < 1e-4, "NPV at IRR was {residual}");
    }

    #[test]
    fn test_no_sign_change_all_negative_tail() {
        let cashflows = [-4000.0, 0.0, 0.0, 0.0];
        assert!(matches!(
            irr(&cashflows, 0.10),
            Err(ProjectionError::NoRootFound)
        ));
    }

    #[test]
    fn test_no_sign_change_all_positive() {
        let cashflows = [100.0, 100.0, 100.0];
        assert!(matches!(
            irr(&cashflows, 0.10),
            Err(ProjectionError::NoRootFound)
        ));
    }

    #[test]
    fn test_npv_known_annuity() {
        // 10-year annuity of 3076.05 at 10% against a 4000 outflow
        let cashflows: Vec<f64> = std::iter::once(-4000.0)
            .chain(std::iter::repeat(3076.05).take(10))
            .collect();
        let value = npv(0.10, &cashflows).unwrap();
        let annuity_factor = (1.0 - 1.1_f64.powi(-10)) / 0.10;
        assert_relative_eq!(value, 3076.05 * annuity_factor - 4000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_npv_rejects_degenerate_rate() {
        assert!(matches!(
            npv(-1.0, &[-100.0, 50.0]),
            Err(ProjectionError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_irr_far_seed_still_converges() {
        // Seed at the top of the bracket; clamped Newton or bisection must
        // still land on the unique root
        let cashflows = [-1000.0, 600.0, 600.0];
        let rate = irr(&cashflows, 10.0).unwrap();
        let residual = npv(rate, &cashflows).unwrap();
        assert!(residual.abs() < 1e-4);
    }
}
