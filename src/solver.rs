//! Iterative best response.
//!
//! Damped fixed-point iteration on the first-order condition
//! `k·F/(2√e) = 2·C·e`, rearranged as `e = k·F / (4·C·√e)`. The map has slope
//! `-1/2` at the optimum, so a proportional step with rate in `(0, 1]` settles
//! on the same `e*` as the closed form. Used to cross-check `optimal_effort`.

use tracing::debug;

use crate::mechanics::{approach, optimum_base};
use crate::model::EffortModel;
use crate::refine_det;

/// Floor for the starting effort; the FOC map is singular at zero.
const MIN_EFFORT: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    pub initial_effort: f64,
    pub damping: f64,   // proportional rate toward the FOC target
    pub tolerance: f64, // FOC residual |target - e|, relative to max(e, 1)
    pub max_iters: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { initial_effort: 1.0, damping: 0.5, tolerance: 1e-12, max_iters: 10_000 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Refinement {
    pub effort: f64,
    pub iters: usize,
    pub converged: bool,
}

impl EffortModel {
    /// Refine effort toward the payoff maximizer for multiplier `k`.
    ///
    /// Inputs without a positive optimum return zero effort without iterating.
    pub fn best_response(&self, k: f64, cfg: SolverConfig) -> Refinement {
        let p = self.params();
        let scale = match optimum_base(k, p.production_coefficient, p.cost_coefficient) {
            Some(s) if s > 0.0 => s,
            _ => {
                tracing::trace!(k, "degenerate best response, effort is zero");
                return Refinement { effort: 0.0, iters: 0, converged: true };
            }
        };

        let rate = if cfg.damping.is_nan() { 0.5 } else { cfg.damping.clamp(f64::EPSILON, 1.0) };
        let e0 = if cfg.initial_effort.is_finite() {
            cfg.initial_effort.max(MIN_EFFORT)
        } else {
            1.0
        };

        // e stays positive: e' >= (1 - rate)·e + rate·target with target > 0.
        let out = refine_det(
            e0,
            |&e| approach(e, scale / e.sqrt(), rate, 0.0, f64::INFINITY),
            // The step is rate·(target - e), so dividing by rate recovers the residual.
            |a, b| (a - b).abs() / rate <= cfg.tolerance * a.abs().max(1.0),
            cfg.max_iters,
        );

        debug!(
            k,
            effort = out.state,
            iters = out.iters,
            converged = out.converged,
            "best response refined"
        );
        Refinement { effort: out.state, iters: out.iters, converged: out.converged }
    }
}
