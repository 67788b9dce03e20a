//! Payoff mechanics: net benefit under an incentive multiplier.

use super::production::{cost, production};

/// Payoff k * f(e) - c(e); zero for non-positive effort.
#[inline]
pub fn payoff(k: f64, prod_coeff: f64, cost_coeff: f64, effort: f64) -> f64 {
    if effort <= 0.0 {
        return 0.0;
    }
    k * production(prod_coeff, effort) - cost(cost_coeff, effort)
}

/// Marginal benefit k * F / (2√e).
///
/// Unbounded at `e == 0` when `k * F > 0`, and zero for negative effort where
/// production is flat.
#[inline]
pub fn marginal_benefit(k: f64, prod_coeff: f64, effort: f64) -> f64 {
    let scale = k * prod_coeff;
    if effort < 0.0 || scale == 0.0 {
        return 0.0;
    }
    if effort == 0.0 {
        return f64::INFINITY.copysign(scale);
    }
    scale / (2.0 * effort.sqrt())
}

/// Displayed total payoff: endowment + share * f(e) - c(e).
#[inline]
pub fn total_payoff(
    endowment: f64,
    share: f64,
    prod_coeff: f64,
    cost_coeff: f64,
    effort: f64,
) -> f64 {
    endowment + share * production(prod_coeff, effort) - cost(cost_coeff, effort)
}
