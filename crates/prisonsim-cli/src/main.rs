//! PrisonSim interactive menu.
//!
//! Generates a prison, then answers population, intake and riot questions
//! from a numbered text menu on stdin. Logs go to stderr.
//!
//! Usage:
//!   cargo run -p prisonsim-cli
//!   cargo run -p prisonsim-cli -- --seed 42 --verbose
//!   cargo run -p prisonsim-cli -- --snapshot

mod config;
mod menu;

use std::io;

use anyhow::Context;
use prisonsim_logic::prison::Prison;
use prisonsim_logic::random::RngSource;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::SimConfig;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let config = SimConfig::from_env()?;
    if config.help {
        config::print_usage();
        return Ok(());
    }
    init_tracing(config.verbose);

    let mut rng = match config.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    info!(seed = ?config.seed, "prisonsim starting");

    let mut prison = Prison::generate(&mut rng);

    if config.snapshot {
        let json = serde_json::to_string_pretty(&prison.snapshot())
            .context("failed to serialize prison snapshot")?;
        println!("{json}");
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut prison, &mut rng, stdin.lock(), stdout.lock())
}
