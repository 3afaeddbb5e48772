//! Prints geometry and performance estimates for a piston engine.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod args;
mod report;

use anyhow::Context;
use clap::Parser;
use engine_models::models::engine::{EngineCalculator, GivenPowerConfig, rpm_for_power};
use tracing_subscriber::EnvFilter;
use twine_core::Model;
use uom::si::{
    f64::{Power, Pressure},
    power::horsepower,
    pressure::pound_force_per_square_inch,
};

use args::{Cli, Format};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.engine_config();
    tracing::info!(?config, "engine configuration");

    let metrics = EngineCalculator
        .call(&config)
        .context("engine evaluation failed")?;

    let mut out = match cli.format {
        Format::Summary => report::summary(&config, &metrics),
        Format::Tables => report::tables(&config, &metrics),
    };

    if let Some(target) = cli.target_hp {
        let point = rpm_for_power(
            &config,
            Pressure::new::<pound_force_per_square_inch>(f64::from(cli.mep)),
            Power::new::<horsepower>(target),
            GivenPowerConfig::default(),
        )
        .with_context(|| format!("no engine speed in the sweep reaches {target} hp"))?;
        out.push_str(&report::target_power(&point));
    }

    print!("{out}");
    Ok(())
}
