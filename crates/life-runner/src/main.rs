//! Headless runner: advance a universe for a number of generations and print the result.
//!
//! Usage: `life-runner [config.json]`

mod run;
mod telemetry;

use anyhow::{Context, Result};
use life_core::RunConfig;
use tracing::info;

fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::from_json_file(&path)
            .with_context(|| format!("loading configuration from {path}"))?,
        None => {
            let config = RunConfig::default();
            config.validate()?;
            config
        }
    };

    info!("Starting Life runner");

    let universe = run::build_universe(&config)?;
    let mut runner = run::Runner::new(universe, &config);
    let summary = runner.run();

    info!(summary = %serde_json::to_string(&summary)?, "Summary");

    if config.print_final {
        print!("{}", runner.universe().render(&config.glyphs));
    }

    Ok(())
}
