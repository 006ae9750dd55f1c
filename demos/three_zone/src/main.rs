//! three_zone — command-line runner for the lift_dispatch simulator.
//!
//! With no arguments, simulates three elevators over sixty floors
//! (floors 1–20, 21–40, 41–60) with nine staggered passenger requests and
//! writes `events.csv` and `passenger_summary.csv` to `./out`.
//!
//! ```text
//! three_zone --config scenario.json --out results/
//! three_zone --requests rush_hour.csv
//! three_zone --synthetic 500 --seed 7
//! RUST_LOG=trace three_zone        # also print fleet state every tick
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use ld_config::{RawConfig, SimulationConfig, synthetic};
use ld_output::summary::{self, PassengerSummary, SUMMARY_FILE};
use ld_output::{CsvTraceWriter, TraceObserver, TraceWriter, aggregate};
use ld_sim::{LogObserver, RunOutcome, SimBuilder};

/// Built-in scenario used when `--config` is not given.
const DEFAULT_SCENARIO: &str = include_str!("scenario.json");

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "three_zone", version, about = "Zone-based multi-elevator dispatch simulation")]
struct Args {
    /// JSON scenario file (zone_map, passenger_requests, max_time, max_capacity).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV of requests (tick,passenger_id,source,destination) replacing the
    /// scenario's own.
    #[arg(short, long, conflicts_with = "synthetic")]
    requests: Option<PathBuf>,

    /// Replace the scenario's requests with N random ones.
    #[arg(long, value_name = "N")]
    synthetic: Option<usize>,

    /// Seed for --synthetic.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Arrival ticks for --synthetic are drawn from 0..HORIZON.
    #[arg(long, default_value_t = 100)]
    horizon: u64,

    /// Output directory (created if missing).
    #[arg(short, long, default_value = "out")]
    out: PathBuf,

    /// Write the trace to SQLite (trace.db) instead of CSV.
    #[arg(long)]
    sqlite: bool,
}

// ── Scenario assembly ─────────────────────────────────────────────────────────

fn load_scenario(args: &Args) -> Result<SimulationConfig> {
    let mut raw: RawConfig = match &args.config {
        Some(path) => ld_config::load_json(path)
            .with_context(|| format!("reading scenario {}", path.display()))?,
        None => ld_config::load_json_str(DEFAULT_SCENARIO).context("parsing built-in scenario")?,
    };
    if let Some(path) = &args.requests {
        raw.passenger_requests = ld_config::load_requests_csv(path)
            .with_context(|| format!("reading requests {}", path.display()))?;
    }

    let mut cfg = ld_config::validate(&raw).context("invalid scenario")?;
    if let Some(count) = args.synthetic {
        cfg.requests = synthetic::generate(cfg.universe.clone(), count, args.horizon, args.seed);
    }
    Ok(cfg)
}

// ── Run ───────────────────────────────────────────────────────────────────────

fn run<W: TraceWriter>(cfg: &SimulationConfig, writer: W, out: &Path) -> Result<RunOutcome> {
    let mut sim = SimBuilder::new(cfg.sim.clone(), cfg.fleet.clone(), cfg.requests.clone())
        .build()
        .context("building simulation")?;

    let mut obs = LogObserver::new(TraceObserver::new(writer));
    let started = Instant::now();
    let outcome = sim.run(&mut obs);
    log::debug!("simulation took {:.2?}", started.elapsed());

    let mut trace = obs.into_inner();
    if let Some(e) = trace.take_error() {
        return Err(e).context("writing event trace");
    }

    let rows = PassengerSummary::from_events(&cfg.requests, &trace.events().events);
    summary::write_csv(&out.join(SUMMARY_FILE), &rows).context("writing summary")?;

    let stats = aggregate(&rows);
    println!();
    println!("Passengers served : {}/{}", stats.total.samples, rows.len());
    println!("Wait  (ticks)     : min {:>4}  max {:>4}  mean {:>4}", stats.wait.min, stats.wait.max, stats.wait.mean);
    println!("Total (ticks)     : min {:>4}  max {:>4}  mean {:>4}", stats.total.min, stats.total.max, stats.total.mean);
    Ok(outcome)
}

#[cfg(feature = "sqlite")]
fn run_sqlite(cfg: &SimulationConfig, out: &Path) -> Result<RunOutcome> {
    run(cfg, ld_output::SqliteTraceWriter::new(out)?, out)
}

#[cfg(not(feature = "sqlite"))]
fn run_sqlite(_cfg: &SimulationConfig, _out: &Path) -> Result<RunOutcome> {
    anyhow::bail!("--sqlite requires building with `--features sqlite`")
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cfg = load_scenario(&args)?;
    println!("=== three_zone — lift_dispatch ===");
    println!(
        "Elevators: {}  |  Floors: {}..={}  |  Passengers: {}  |  Capacity: {}  |  Max ticks: {}",
        cfg.fleet.len(),
        cfg.universe.start(),
        cfg.universe.end(),
        cfg.requests.len(),
        cfg.sim.capacity,
        cfg.sim.max_ticks,
    );

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;

    let outcome = if args.sqlite {
        run_sqlite(&cfg, &args.out)?
    } else {
        run(&cfg, CsvTraceWriter::new(&args.out)?, &args.out)?
    };

    match outcome.last_tick {
        Some(last) if outcome.all_exited => println!("All passengers delivered by tick {last}"),
        Some(last) => println!("Tick budget exhausted at tick {last}; some passengers still travelling"),
        None => println!("Tick budget is zero; nothing simulated"),
    }
    println!("Output written to {}", args.out.display());
    Ok(())
}
