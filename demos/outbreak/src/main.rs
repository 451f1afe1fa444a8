//! outbreak — headless run of the rust_zt outbreak simulator.
//!
//! ```text
//! outbreak [CONFIG.json]
//! ```
//!
//! Loads an `OutbreakConfig` (defaults for any missing field, or entirely
//! when no path is given), runs until the last Human is converted or the
//! turn cap is hit, and streams one census row per turn to stdout as CSV.
//! Logs go to stderr; set `RUST_LOG=debug` for per-turn events.

use std::fs::File;
use std::io::{self, BufReader};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;

use zt_core::OutbreakConfig;
use zt_output::{CensusObserver, CsvWriter};
use zt_sim::{RunOutcome, SimBuilder};

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening config {path}"))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing config {path}"))?
        }
        None => OutbreakConfig::default(),
    };
    info!(
        bounds = %config.bounds(),
        humans = config.human_count,
        zombies = config.zombie_count,
        seed = config.seed,
        "starting outbreak"
    );

    let mut sim = SimBuilder::new(config).build()?;

    let writer = CsvWriter::new(io::stdout().lock())?;
    let mut obs = CensusObserver::new(writer);

    let t0 = Instant::now();
    let summary = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        bail!("census output incomplete: {e}");
    }

    let verdict = match summary.outcome {
        RunOutcome::Extinction => "humanity lost",
        RunOutcome::TurnLimit => "humans held out",
    };
    info!(
        turns = %summary.turns,
        humans = summary.humans,
        zombies = summary.zombies,
        conversions = summary.conversions,
        secs = elapsed.as_secs_f64(),
        "{verdict}"
    );
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}
