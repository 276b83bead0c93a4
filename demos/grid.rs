//! Renders a faceted diagonal grid over several synthetic datasets.
//!
//! Run with `cargo run --example grid_demo`; output lands under
//! `target/plots`.
use anyhow::Result;
use rand::Rng;

use accplot::config::PlotConfig;
use accplot::data::{AccuracyRecord, AccuracyTable};
use accplot::paths::PlotIdentity;
use accplot::plots::plot_diagonal_grid;

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = rand::thread_rng();
    let mut table = AccuracyTable::default();
    for dataset in ["imdb", "yelp", "amazon", "rotten_tomatoes"] {
        for (method, bias) in [("ATC", 0.02), ("DoC", -0.03), ("GDE", 0.0)] {
            for _ in 0..40 {
                let true_acc: f64 = rng.gen_range(0.3..0.95);
                let noise: f64 = rng.gen_range(-0.06..0.06);
                table.push(AccuracyRecord {
                    true_accs: true_acc,
                    estim_accs: (true_acc + bias + noise).clamp(0.0, 1.0),
                    method: method.to_string(),
                    dataset: Some(dataset.to_string()),
                });
            }
        }
    }

    let config = PlotConfig::nested("target/plots");
    let identity = PlotIdentity::grid("lr", Some("vanilla_accuracy"));
    for file in plot_diagonal_grid(&table, &identity, 2, &config)? {
        println!("Saved {}", file.display());
    }
    Ok(())
}
