//! synthetic: end-to-end hhsched run on generated data.
//!
//! Builds a synthetic distribution table and population on a 40-zone grid,
//! schedules every household and writes trips, episodes and the run summary
//! as CSV.
//!
//! ```text
//! synthetic [config.json] [output_dir]
//! ```
//!
//! `RUST_LOG` controls log output (default `info`).

mod population;
mod tables;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

use hs_core::{Activity, HouseholdRng, SchedulerConfig, Time, ZoneId};
use hs_household::Person;
use hs_output::{CsvWriter, OutputWriter, ScheduleOutputObserver};
use hs_schedule::{Episode, LocationChoice, TravelMatrix};
use hs_scheduler::SchedulerBuilder;

use population::build_population;
use tables::build_table;

// ── Constants ─────────────────────────────────────────────────────────────────

const HOUSEHOLDS:      u32 = 2_000;
const ZONES:           u32 = 40;
const POPULATION_SEED: u64 = 7;
const DEMO_ITERATIONS: u32 = 3;

// ── Collaborators ─────────────────────────────────────────────────────────────

/// Shopping stays within five zones of home; everything else can go anywhere
/// on the grid.
struct NearbyMarkets {
    zones: Vec<ZoneId>,
}

impl LocationChoice for NearbyMarkets {
    fn choose_zone(&self, episode: &Episode, _person: &Person, home_zone: ZoneId, rng: &mut HouseholdRng) -> Option<ZoneId> {
        if matches!(episode.activity(), Activity::Market | Activity::JointMarket) {
            let nearby: Vec<ZoneId> =
                self.zones.iter().copied().filter(|z| z.0.abs_diff(home_zone.0) <= 5).collect();
            return rng.choose(&nearby).copied();
        }
        rng.choose(&self.zones).copied()
    }
}

/// Five minutes inside a zone, three more per zone of grid distance.
fn travel_matrix(zones: u32) -> TravelMatrix {
    let mut m = TravelMatrix::new(Time::hm(1, 0));
    for a in 1..=zones {
        for b in a..=zones {
            let minutes = 5 + 3 * (b - a) as i32;
            m.insert_symmetric(ZoneId(a), ZoneId(b), Time::minutes(minutes));
        }
    }
    m
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    Registry::default()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&str>) -> Result<SchedulerConfig> {
    let Some(path) = path else {
        return Ok(SchedulerConfig { household_iterations: DEMO_ITERATIONS, ..SchedulerConfig::default() });
    };
    let file = File::open(path).with_context(|| format!("opening config {path}"))?;
    let config = serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing config {path}"))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let config = load_config(args.get(1).map(String::as_str))?;
    let out_dir = args.get(2).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("output/synthetic"));
    info!(households = HOUSEHOLDS, zones = ZONES, iterations = config.household_iterations, "synthetic run");

    // 1. Inputs.
    let table = build_table(&config).context("building distribution table")?;
    let population = build_population(HOUSEHOLDS, ZONES, POPULATION_SEED).context("building population")?;
    info!(persons = population.person_count(), "population ready");

    let zones: Vec<ZoneId> = (1..=ZONES).map(ZoneId).collect();
    let scheduler = SchedulerBuilder::new(config, table, travel_matrix(ZONES), NearbyMarkets { zones }).build()?;

    // 2. Output.
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let mut obs = ScheduleOutputObserver::new(CsvWriter::new(&out_dir)?);

    // 3. Run.
    let t0 = Instant::now();
    let result = scheduler.run(&population, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        warn!("output error: {e}");
    }
    let written = obs.households_written();
    let stats = match result {
        Ok(stats) => stats,
        Err(e) => {
            // The run stopped early, so the observer never finished the files.
            obs.into_writer().finish()?;
            return Err(e.into());
        }
    };

    // 4. Summary.
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  household iterations written : {written}");
    println!("  households failed            : {}", stats.households_failed);
    println!("  episodes generated           : {}", stats.episodes_generated);
    println!("  episodes skipped in merge    : {} (weight {:.1})", stats.episodes_skipped, stats.skipped_weight);
    println!("  output                       : {}", out_dir.display());
    Ok(())
}
