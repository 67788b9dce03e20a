// demos/treatments.rs
// Run with:
//   cargo run --example treatments
//   cargo run --example treatments -- params.json

use effort_model::{ConfigError, EffortGrid, EffortModel, ModelParameters};

fn main() -> Result<(), ConfigError> {
    let params = match std::env::args().nth(1) {
        Some(path) => ModelParameters::from_json_file(path)?,
        None => ModelParameters::default(),
    };
    let model = EffortModel::new(params);

    println!("== Equilibria ==");
    println!("{:<14} {:>8} {:>8} {:>8}", "treatment", "k", "e*", "payoff");
    for eq in model.equilibria() {
        println!(
            "{:<14} {:>8.3} {:>8.4} {:>8.4}",
            eq.treatment.label(),
            eq.multiplier,
            eq.effort,
            eq.payoff
        );
    }

    println!("== Ranking (low → high effort) ==");
    let ranked: Vec<_> = model.ranked_equilibria().iter().map(|eq| eq.treatment.label()).collect();
    println!("{}", ranked.join(" < "));

    let panel = model.panel(EffortGrid::new(0.0, 1.0, 21));
    println!("== Panel ==");
    println!("{}", panel.to_json()?);
    Ok(())
}
