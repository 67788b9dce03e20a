//! Sampled curves over an effort grid, and the per-treatment panel a
//! presentation layer plots.

use serde::{Deserialize, Serialize};

use crate::model::{EffortModel, ModelParameters};
use crate::treatments::{Equilibrium, Treatment};

/// Evenly spaced efforts on `[start, end]`, both endpoints included.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffortGrid {
    pub start: f64,
    pub end: f64,
    pub samples: usize,
}

impl Default for EffortGrid {
    fn default() -> Self {
        Self { start: 0.0, end: 1.0, samples: 101 }
    }
}

impl EffortGrid {
    pub fn new(start: f64, end: f64, samples: usize) -> Self {
        Self { start, end, samples }
    }

    /// Distance between neighbouring samples (0 with fewer than two samples).
    pub fn step(&self) -> f64 {
        if self.samples < 2 {
            0.0
        } else {
            (self.end - self.start) / (self.samples - 1) as f64
        }
    }

    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        let step = self.step();
        let last = self.samples.saturating_sub(1);
        (0..self.samples).map(move |i| {
            // Pin the last sample to `end` so rounding never drops the endpoint.
            if i == last && i > 0 { self.end } else { self.start + step * i as f64 }
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub effort: f64,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub label: String,
    /// Incentive multiplier for payoff curves; `None` for production/cost/gap.
    pub multiplier: Option<f64>,
    pub points: Vec<CurvePoint>,
}

impl Curve {
    fn sample(label: &str, multiplier: Option<f64>, grid: &EffortGrid, f: impl Fn(f64) -> f64) -> Self {
        Self {
            label: label.to_owned(),
            multiplier,
            points: grid
                .points()
                .map(|effort| CurvePoint { effort, value: f(effort) })
                .collect(),
        }
    }

    /// Sampled point with the highest value (first one on ties, NaN skipped).
    pub fn peak(&self) -> Option<CurvePoint> {
        self.points
            .iter()
            .copied()
            .filter(|p| !p.value.is_nan())
            .fold(None, |best, p| match best {
                Some(b) if b.value >= p.value => Some(b),
                _ => Some(p),
            })
    }
}

/// Everything the renderer needs for the treatment comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreatmentPanel {
    pub parameters: ModelParameters,
    pub grid: EffortGrid,
    pub curves: Vec<Curve>,
    pub equilibria: Vec<Equilibrium>,
}

impl TreatmentPanel {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl EffortModel {
    pub fn production_curve(&self, grid: &EffortGrid) -> Curve {
        Curve::sample("f(e)", None, grid, |e| self.production(e))
    }

    pub fn cost_curve(&self, grid: &EffortGrid) -> Curve {
        Curve::sample("c(e)", None, grid, |e| self.cost(e))
    }

    pub fn gap_curve(&self, grid: &EffortGrid) -> Curve {
        Curve::sample("Gap", None, grid, |e| self.gap(e))
    }

    pub fn payoff_curve(&self, grid: &EffortGrid, k: f64) -> Curve {
        Curve::sample("Payoff", Some(k), grid, |e| self.payoff(e, k))
    }

    pub fn treatment_curve(&self, grid: &EffortGrid, treatment: Treatment) -> Curve {
        let k = treatment.multiplier(self.params());
        Curve::sample(treatment.label(), Some(k), grid, |e| self.payoff(e, k))
    }

    /// Payoff curve and equilibrium for every treatment, in `Treatment::ALL` order.
    pub fn panel(&self, grid: EffortGrid) -> TreatmentPanel {
        TreatmentPanel {
            parameters: *self.params(),
            grid,
            curves: Treatment::ALL
                .iter()
                .map(|&t| self.treatment_curve(&grid, t))
                .collect(),
            equilibria: self.equilibria().to_vec(),
        }
    }
}
