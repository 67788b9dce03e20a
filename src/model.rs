//! Model parameters and the `EffortModel` facade over the mechanics.

use serde::{Deserialize, Serialize};

use crate::mechanics;

/// Fixed coefficients of the effort model.
///
/// `share` and `endowment` only feed the displayed total payoff; the core
/// formulas never read them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParameters {
    pub production_coefficient: f64, // F in f(e) = F·√e
    pub cost_coefficient: f64,       // C in c(e) = C·e²
    pub share: f64,                  // in [0, 1]
    pub altruism_factor: f64,        // α, typically in (0, 1)
    pub loss_aversion_factor: f64,   // λ, typically > 1
    pub endowment: f64,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            production_coefficient: 5.0,
            cost_coefficient: 5.0,
            share: 0.5,
            altruism_factor: 0.25,
            loss_aversion_factor: 1.4,
            endowment: 5.0,
        }
    }
}

impl ModelParameters {
    /// λ·α, the multiplier of the combined treatment.
    #[inline]
    pub fn combined_factor(&self) -> f64 {
        self.loss_aversion_factor * self.altruism_factor
    }

    /// share·F, the benefit coefficient shown in the displayed payoff formula.
    #[inline]
    pub fn benefit_coefficient(&self) -> f64 {
        self.share * self.production_coefficient
    }
}

/// Stateless evaluator for a fixed set of parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EffortModel {
    params: ModelParameters,
}

impl EffortModel {
    pub fn new(params: ModelParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    #[inline]
    pub fn combined_factor(&self) -> f64 {
        self.params.combined_factor()
    }

    /// F·√e, or 0 for negative effort.
    #[inline]
    pub fn production(&self, effort: f64) -> f64 {
        mechanics::production(self.params.production_coefficient, effort)
    }

    /// C·e² for any real effort.
    #[inline]
    pub fn cost(&self, effort: f64) -> f64 {
        mechanics::cost(self.params.cost_coefficient, effort)
    }

    /// f(e) - c(e).
    #[inline]
    pub fn gap(&self, effort: f64) -> f64 {
        mechanics::gap(
            self.params.production_coefficient,
            self.params.cost_coefficient,
            effort,
        )
    }

    /// k·F·√e - C·e², or 0 for non-positive effort.
    #[inline]
    pub fn payoff(&self, effort: f64, k: f64) -> f64 {
        mechanics::payoff(
            k,
            self.params.production_coefficient,
            self.params.cost_coefficient,
            effort,
        )
    }

    /// Payoff with the control multiplier (k = 1).
    #[inline]
    pub fn control_payoff(&self, effort: f64) -> f64 {
        self.payoff(effort, 1.0)
    }

    /// endowment + share·f(e) - c(e).
    #[inline]
    pub fn total_payoff(&self, effort: f64) -> f64 {
        let p = &self.params;
        mechanics::total_payoff(
            p.endowment,
            p.share,
            p.production_coefficient,
            p.cost_coefficient,
            effort,
        )
    }

    #[inline]
    pub fn marginal_benefit(&self, effort: f64, k: f64) -> f64 {
        mechanics::marginal_benefit(k, self.params.production_coefficient, effort)
    }

    #[inline]
    pub fn marginal_cost(&self, effort: f64) -> f64 {
        mechanics::marginal_cost(self.params.cost_coefficient, effort)
    }

    /// Effort maximizing `payoff(·, k)`; 0 when no positive maximizer exists.
    pub fn optimal_effort(&self, k: f64) -> f64 {
        let p = &self.params;
        if mechanics::optimum_base(k, p.production_coefficient, p.cost_coefficient).is_none() {
            tracing::trace!(
                k,
                cost_coefficient = p.cost_coefficient,
                "no positive optimum, clamping effort to zero"
            );
        }
        mechanics::optimal_effort(k, p.production_coefficient, p.cost_coefficient)
    }
}

impl From<ModelParameters> for EffortModel {
    fn from(params: ModelParameters) -> Self {
        Self::new(params)
    }
}
