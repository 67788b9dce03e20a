//! Treatment conditions and their equilibrium points.
//!
//! A treatment only changes the incentive multiplier `k` applied to production:
//! - **Control**: `k = 1`
//! - **Altruism**: `k = α` (reduced weight on own benefit when working for a teammate)
//! - **LossAversion**: `k = λ` (benefit framed as a loss to avoid)
//! - **Combined**: `k = λ·α`

use serde::{Deserialize, Serialize};

use crate::model::{EffortModel, ModelParameters};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Treatment {
    Control,
    Altruism,
    LossAversion,
    Combined,
}

impl Treatment {
    /// Presentation order.
    pub const ALL: [Treatment; 4] = [
        Treatment::Control,
        Treatment::Altruism,
        Treatment::LossAversion,
        Treatment::Combined,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Treatment::Control => "Control",
            Treatment::Altruism => "Altruism",
            Treatment::LossAversion => "Loss Aversion",
            Treatment::Combined => "Combined",
        }
    }

    pub fn multiplier(self, params: &ModelParameters) -> f64 {
        match self {
            Treatment::Control => 1.0,
            Treatment::Altruism => params.altruism_factor,
            Treatment::LossAversion => params.loss_aversion_factor,
            Treatment::Combined => params.combined_factor(),
        }
    }
}

/// Optimal effort and the payoff it earns under one treatment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Equilibrium {
    pub treatment: Treatment,
    pub multiplier: f64,
    pub effort: f64,
    pub payoff: f64,
}

impl EffortModel {
    pub fn equilibrium(&self, treatment: Treatment) -> Equilibrium {
        let multiplier = treatment.multiplier(self.params());
        let effort = self.optimal_effort(multiplier);
        Equilibrium {
            treatment,
            multiplier,
            effort,
            payoff: self.payoff(effort, multiplier),
        }
    }

    /// One equilibrium per treatment, in `Treatment::ALL` order.
    pub fn equilibria(&self) -> [Equilibrium; 4] {
        Treatment::ALL.map(|t| self.equilibrium(t))
    }

    /// Equilibria sorted by ascending effort.
    pub fn ranked_equilibria(&self) -> [Equilibrium; 4] {
        let mut eqs = self.equilibria();
        eqs.sort_by(|a, b| a.effort.total_cmp(&b.effort));
        eqs
    }
}
