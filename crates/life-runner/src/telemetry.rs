//! Log output for the runner.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` overrides the default filter;
/// `LIFE_LOG_FORMAT=json` switches to JSON lines.
pub fn init_telemetry() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,life_world=debug".into());

    let json = std::env::var("LIFE_LOG_FORMAT").is_ok_and(|v| v == "json");

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    info!("Telemetry initialized");
    Ok(())
}
