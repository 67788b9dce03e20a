/*!
`effort_model` — a pure effort/payoff model with behavioral incentive multipliers.

What it does
- Production `f(e) = F·√e`, cost `c(e) = C·e²`, payoff `k·F·√e − C·e²`.
- Optimal effort from the first-order condition `k·F/(2√e) = 2·C·e`:
  `e* = (F·k / 4C)^(2/3)`.
- Treatments enter only through the multiplier `k`:
  control `1`, altruism `α`, loss aversion `λ`, combined `λ·α`.
- Samples curves over an effort grid and marks equilibria so a
  presentation layer can plot them.

How to use (call surface only)
- Build `ModelParameters` (or take `ModelParameters::default()`).
- Wrap it: `EffortModel::new(params)`.
- Query `production`, `cost`, `payoff`, `optimal_effort`, `equilibria`,
  or `panel(EffortGrid::default())` for everything a renderer needs.

What it does NOT do
- No rendering, no timing, no styling. Every operation is total: degenerate
  inputs produce `0`, never an error.
*/

pub mod config;
pub mod curves;
pub mod mechanics;
pub mod model;
pub mod solver;
pub mod treatments;

pub use config::ConfigError;
pub use curves::{Curve, CurvePoint, EffortGrid, TreatmentPanel};
pub use model::{EffortModel, ModelParameters};
pub use solver::{Refinement, SolverConfig};
pub use treatments::{Equilibrium, Treatment};

/// Result of [`refine_det`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Refined<S> {
    pub state: S,
    pub iters: usize,
    pub converged: bool,
}

/// Deterministic refinement: s_{t+1} = step(s_t), until converged(s_t, s_{t+1})
/// holds or `max_iters` steps have run.
pub fn refine_det<S, Step, Conv>(
    mut state: S,
    mut step: Step,
    converged: Conv,
    max_iters: usize,
) -> Refined<S>
where
    Step: FnMut(&S) -> S,
    Conv: Fn(&S, &S) -> bool,
{
    for i in 0..max_iters {
        let next = step(&state);
        if converged(&state, &next) {
            return Refined { state: next, iters: i + 1, converged: true };
        }
        state = next;
    }
    Refined { state, iters: max_iters, converged: false }
}
