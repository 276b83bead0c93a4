//! Renders a single diagonal plot from a synthetic accuracy table.
//!
//! Run with `cargo run --example diagonal_demo`; output lands under
//! `target/plots`.
use anyhow::Result;
use rand::Rng;

use accplot::config::PlotConfig;
use accplot::data::{AccuracyRecord, AccuracyTable};
use accplot::paths::PlotIdentity;
use accplot::plots::plot_diagonal;

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = rand::thread_rng();
    let mut table = AccuracyTable::default();
    for (method, bias) in [("ATC", 0.02), ("DoC", -0.03), ("GDE", 0.0)] {
        for _ in 0..60 {
            let true_acc: f64 = rng.gen_range(0.3..0.95);
            let noise: f64 = rng.gen_range(-0.06..0.06);
            table.push(AccuracyRecord {
                true_accs: true_acc,
                estim_accs: (true_acc + bias + noise).clamp(0.0, 1.0),
                method: method.to_string(),
                dataset: None,
            });
        }
    }

    let config = PlotConfig::nested("target/plots");
    let identity = PlotIdentity::diagonal("lr", Some("vanilla_accuracy"), "imdb");
    for file in plot_diagonal(&table, &identity, &config)? {
        println!("Saved {}", file.display());
    }
    Ok(())
}
