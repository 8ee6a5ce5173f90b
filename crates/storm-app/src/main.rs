use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use storm_app::config::AppConfig;
use storm_app::sim_loop::{first_snapshots, spawn_sim_loop};
use storm_core::enums::ProjectionMode;
use storm_core::state::TrackerSnapshot;
use storm_sim::engine::Simulation;

/// Headless storm tracker: simulates tracked storms and prints one JSON
/// snapshot per tick.
#[derive(Debug, Parser)]
#[command(name = "storm-tracker", version)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(long, default_value_t = 10)]
    ticks: u64,

    /// Tick on the wall clock instead of as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Storm id to select before the first tick
    #[arg(long)]
    select: Option<u32>,

    /// Override the configured projection
    #[arg(long, value_enum)]
    projection: Option<ProjectionArg>,

    /// Override the configured RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProjectionArg {
    Normalized,
    Geographic,
}

impl From<ProjectionArg> for ProjectionMode {
    fn from(arg: ProjectionArg) -> Self {
        match arg {
            ProjectionArg::Normalized => ProjectionMode::NormalizedPlane,
            ProjectionArg::Geographic => ProjectionMode::GeographicPassthrough,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.simulation.seed = seed;
    }
    if let Some(projection) = cli.projection {
        config.simulation.projection = projection.into();
    }

    let mut simulation = Simulation::new(config.sim_config(), config.seed_storms())
        .context("failed to initialize storm store")?;
    if let Some(id) = cli.select {
        simulation
            .select(id)
            .with_context(|| format!("cannot select storm {id}"))?;
    }

    if cli.realtime {
        run_realtime(simulation, &config, cli.ticks)
    } else {
        run_batch(simulation, cli.ticks)
    }
}

/// Step ticks back to back.
fn run_batch(mut simulation: Simulation, ticks: u64) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    simulation.start();
    for _ in 0..ticks {
        let snapshot = simulation.tick();
        serde_json::to_writer(&mut out, &snapshot)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Tick on the configured interval until `ticks` snapshots are printed.
fn run_realtime(simulation: Simulation, config: &AppConfig, ticks: u64) -> anyhow::Result<()> {
    if ticks == 0 {
        return Ok(());
    }

    let (done_tx, done_rx) = mpsc::channel::<()>();
    let print = |snapshot: &TrackerSnapshot| match serde_json::to_string(snapshot) {
        Ok(line) => println!("{line}"),
        Err(err) => tracing::error!(%err, "failed to serialize snapshot"),
    };
    let handle = spawn_sim_loop(
        simulation,
        config.tick_interval(),
        first_snapshots(ticks, done_tx, print),
    )?;

    done_rx
        .recv()
        .context("simulation loop exited before finishing")?;
    handle.stop()
}
