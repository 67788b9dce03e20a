//! Production and cost mechanics.

/// Production f(e) = coeff * √e; negative effort produces nothing.
#[inline]
pub fn production(coeff: f64, effort: f64) -> f64 {
    if effort < 0.0 {
        return 0.0;
    }
    coeff * effort.sqrt()
}

/// Quadratic cost c(e) = coeff * e², defined for any real effort.
#[inline]
pub fn cost(coeff: f64, effort: f64) -> f64 {
    coeff * effort * effort
}

/// Vertical gap between the production and cost curves: f(e) - c(e).
#[inline]
pub fn gap(prod_coeff: f64, cost_coeff: f64, effort: f64) -> f64 {
    production(prod_coeff, effort) - cost(cost_coeff, effort)
}

/// Marginal cost c'(e) = 2 * coeff * e.
#[inline]
pub fn marginal_cost(coeff: f64, effort: f64) -> f64 {
    2.0 * coeff * effort
}
