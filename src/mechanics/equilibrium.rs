//! Closed-form optimum of the payoff.

/// Base of the closed form, k * F / (4C), or `None` when no positive
/// maximizer is defined (zero cost coefficient, negative or non-finite ratio).
#[inline]
pub fn optimum_base(k: f64, prod_coeff: f64, cost_coeff: f64) -> Option<f64> {
    let denom = 4.0 * cost_coeff;
    if denom == 0.0 {
        return None;
    }
    let ratio = prod_coeff * k / denom;
    if ratio < 0.0 || !ratio.is_finite() {
        return None;
    }
    Some(ratio)
}

/// Optimal effort e* = (k * F / 4C)^(2/3), from k * F / (2√e) = 2 * C * e.
///
/// The guard runs before `powf`: an undefined optimum means zero effort.
#[inline]
pub fn optimal_effort(k: f64, prod_coeff: f64, cost_coeff: f64) -> f64 {
    match optimum_base(k, prod_coeff, cost_coeff) {
        Some(ratio) => ratio.powf(2.0 / 3.0),
        None => 0.0,
    }
}
