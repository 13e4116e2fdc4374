//! demos/run_probes.rs
//! Run: cargo run --example run_probes -- <config.yaml>
//!
//! Loads check definitions, runs each one once and exits non-zero if any
//! failed. Shows how a host wires the checks; scheduling and exposure stay
//! with the host.

use anyhow::Result;
use healthprobe::config;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("healthprobe=debug".parse()?)
                .add_directive("reqwest=info".parse()?),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "probes.yaml".to_string());

    info!("Loading checks from: {}", config_path);
    let config = config::load_config(&config_path).await?;
    let checks = config.build()?;

    let mut failed = 0;
    for (name, check) in &checks {
        match check.run().await {
            Ok(()) => info!("{}: ok", name),
            Err(e) => {
                failed += 1;
                error!(probe = e.probe(), "{}: {}", name, e);
            }
        }
    }

    info!("{} checks run, {} failed", checks.len(), failed);
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
