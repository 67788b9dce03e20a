// tests/treatments.rs
use approx::assert_relative_eq;
use effort_model::{EffortModel, ModelParameters, Treatment};

fn presentation_model() -> EffortModel {
    EffortModel::new(ModelParameters {
        production_coefficient: 5.0,
        cost_coefficient: 5.0,
        altruism_factor: 0.25,
        loss_aversion_factor: 1.4,
        ..ModelParameters::default()
    })
}

#[test]
fn multipliers_follow_treatment() {
    let m = presentation_model();
    let p = m.params();
    assert_eq!(Treatment::Control.multiplier(p), 1.0);
    assert_eq!(Treatment::Altruism.multiplier(p), 0.25);
    assert_eq!(Treatment::LossAversion.multiplier(p), 1.4);
    assert_relative_eq!(Treatment::Combined.multiplier(p), 0.35, max_relative = 1e-15);
    assert_eq!(m.combined_factor(), p.loss_aversion_factor * p.altruism_factor);
}

#[test]
fn equilibria_come_in_presentation_order() {
    let m = presentation_model();
    let eqs = m.equilibria();
    let order: Vec<_> = eqs.iter().map(|e| e.treatment).collect();
    assert_eq!(order, Treatment::ALL.to_vec());
    for eq in eqs {
        assert_eq!(eq.effort, m.optimal_effort(eq.multiplier));
        assert_eq!(eq.payoff, m.payoff(eq.effort, eq.multiplier));
        assert!(eq.payoff > 0.0, "{:?}", eq);
    }
}

#[test]
fn equilibrium_ranking_for_presentation_parameters() {
    // λ·α = 0.35 sits between α and 1, so combined lands between altruism and control.
    let m = presentation_model();
    let e = |t: Treatment| m.equilibrium(t).effort;
    assert!(e(Treatment::Altruism) < e(Treatment::Combined));
    assert!(e(Treatment::Combined) < e(Treatment::Control));
    assert!(e(Treatment::Control) < e(Treatment::LossAversion));

    let ranked: Vec<_> = m.ranked_equilibria().iter().map(|eq| eq.treatment).collect();
    assert_eq!(
        ranked,
        vec![
            Treatment::Altruism,
            Treatment::Combined,
            Treatment::Control,
            Treatment::LossAversion,
        ]
    );
}

#[test]
fn equilibrium_values_for_presentation_parameters() {
    let m = presentation_model();
    let expected = [
        (Treatment::Control, 0.396_850),
        (Treatment::Altruism, 0.157_490),
        (Treatment::LossAversion, 0.496_644),
        (Treatment::Combined, 0.197_093),
    ];
    for (t, e) in expected {
        let eq = m.equilibrium(t);
        assert!((eq.effort - e).abs() < 1e-5, "{:?}: {} vs {}", t, eq.effort, e);
    }
}

#[test]
fn labels_are_stable() {
    let labels: Vec<_> = Treatment::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Control", "Altruism", "Loss Aversion", "Combined"]);
}
