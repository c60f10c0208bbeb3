//! kandy_stop — boarding simulation for a single city bus stop.
//!
//! Buses arrive on a timetable, each carrying a number of boarding
//! passengers.  The stop has a fixed number of service units (bays); a bus
//! waits in line until a bay is free and then occupies it for
//! `passengers × service_rate_per_unit` minutes.  Prints average waiting,
//! boarding, and total time at the stop.

use std::io::{self, BufRead, Cursor, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use qs_arrivals::{Schedule, load_arrivals_csv, load_arrivals_reader};
use qs_core::SimConfig;
use qs_output::{CsvWriter, MetricsObserver, OutputWriter, RunSummary};
use qs_sim::{NoopObserver, RunOutcome, SimBuilder, sweep_capacities};

// ── Sample timetable ──────────────────────────────────────────────────────────

// One morning peak at a central stop.  Out-of-order rows are fine: the loader
// sorts by arrival time.
const SAMPLE_TIMETABLE: &str = "\
Bus_ID,Route,Actual_Arrival,Passenger_Count\n\
B101,1,07:00,18\n\
B102,2,07:04,25\n\
B103,1,07:05,9\n\
B104,3,07:05,31\n\
B105,2,07:11,14\n\
B106,4,07:12,40\n\
B107,1,07:15,22\n\
B108,3,07:20,7\n\
B109,2,07:21,28\n\
B110,4,07:24,35\n\
B111,1,07:30,12\n\
B112,3,07:31,19\n\
B113,2,07:38,26\n\
B114,4,07:40,11\n\
B115,1,07:45,33\n\
B116,3,07:46,16\n\
B117,2,07:52,21\n\
B118,4,07:55,8\n\
B119,1,08:00,29\n\
B120,3,08:02,15\n\
";

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "kandy_stop", about = "Simulate bus boarding at a capacity-limited stop")]
struct Args {
    /// Timetable CSV with `Actual_Arrival` (HH:MM) and `Passenger_Count`
    /// columns.  Uses a built-in sample when omitted.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Number of service units at the stop.  Prompted for when omitted and
    /// no config file is given.
    #[arg(long)]
    capacity: Option<u32>,

    /// TOML file with simulation settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for `metrics.csv` and `summary.csv`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also run every capacity from 1 to MAX and print a comparison.
    #[arg(long, value_name = "MAX")]
    sweep: Option<u32>,

    /// Log scheduler activity at debug level.
    #[arg(short, long)]
    verbose: bool,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO })
        .with_writer(io::stderr)
        .init();

    let file_config = args.config.as_deref().map(load_config).transpose()?;
    let from_file = file_config.as_ref().map(|c| c.capacity);
    let mut config = file_config.unwrap_or_default();
    config.capacity = resolve_capacity(args.capacity, from_file, prompt_capacity)?;
    config.validate()?;

    let schedule = match &args.data {
        Some(path) => load_arrivals_csv(path)
            .with_context(|| format!("loading timetable {}", path.display()))?,
        None => load_arrivals_reader(Cursor::new(SAMPLE_TIMETABLE))?,
    };
    if let (Some(first), Some(last)) = (schedule.arrivals.first(), schedule.arrivals.last()) {
        tracing::info!(
            arrivals = schedule.len(),
            first = %schedule.clock_label(first.timestamp),
            last = %schedule.clock_label(last.timestamp),
            passengers = schedule.total_demand(),
            "arrival window"
        );
    }

    let outcome = match &args.out {
        Some(dir) => run_with_output(&schedule, &config, dir)?,
        None => SimBuilder::new(config.clone(), schedule.arrivals.clone())
            .build()?
            .run(&mut NoopObserver)?,
    };
    print_results(&RunSummary::from_outcome(config.capacity, &outcome));

    if let Some(max) = args.sweep {
        if max == 0 {
            bail!("--sweep needs a maximum of at least 1");
        }
        print_sweep(&schedule, &config, max)?;
    }

    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(path: &Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig =
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    tracing::info!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}

/// `--capacity` wins, then the config file; the operator is asked only when
/// neither names a capacity.
fn resolve_capacity(
    flag:      Option<u32>,
    from_file: Option<u32>,
    prompt:    impl FnOnce() -> Result<u32>,
) -> Result<u32> {
    match flag.or(from_file) {
        Some(n) => Ok(n),
        None => prompt(),
    }
}

fn prompt_capacity() -> Result<u32> {
    print!("Enter number of service units at bus stop: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    line.trim()
        .parse()
        .with_context(|| format!("expected a whole number of service units, got {:?}", line.trim()))
}

fn run_with_output(schedule: &Schedule, config: &SimConfig, dir: &Path) -> Result<RunOutcome> {
    let mut observer = MetricsObserver::new(CsvWriter::new(dir)?);
    let outcome = SimBuilder::new(config.clone(), schedule.arrivals.clone())
        .build()?
        .run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        return Err(anyhow::Error::new(e).context("writing metrics.csv"));
    }

    let mut writer = observer.into_writer();
    writer.write_summary(&RunSummary::from_outcome(config.capacity, &outcome))?;
    writer.finish()?;
    println!("Output written to {}", dir.display());
    Ok(outcome)
}

fn print_results(s: &RunSummary) {
    println!();
    println!("--- Kandy Public Bus Network Performance Results ---");
    println!("Service Units at Stop: {}", s.capacity);
    println!("Total Bus Arrivals: {}", s.completed);
    println!("Average Waiting Time at Stop: {:.2} mins", s.mean_wait);
    println!("Average Boarding Time: {:.2} mins", s.mean_service);
    println!("Average Total Time at Stop: {:.2} mins", s.mean_total);
    if s.incomplete > 0 {
        println!("Still at stop when the run ended: {}", s.incomplete);
    }
}

fn print_sweep(schedule: &Schedule, config: &SimConfig, max: u32) -> Result<()> {
    let capacities: Vec<u32> = (1..=max).collect();
    let points = sweep_capacities(&schedule.arrivals, config, None, &capacities)?;

    println!();
    println!("units  completed  avg wait  max wait  avg total  utilisation");
    for p in &points {
        let s = RunSummary::from_outcome(p.capacity, &p.outcome);
        println!(
            "{:>5}  {:>9}  {:>8.2}  {:>8.2}  {:>9.2}  {:>10.1}%",
            s.capacity,
            s.completed,
            s.mean_wait,
            s.max_wait,
            s.mean_total,
            s.utilisation * 100.0,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_prompt() -> Result<u32> {
        bail!("prompted unexpectedly")
    }

    #[test]
    fn flag_overrides_config_file() {
        assert_eq!(resolve_capacity(Some(4), Some(2), no_prompt).unwrap(), 4);
    }

    #[test]
    fn config_file_capacity_skips_prompt() {
        assert_eq!(resolve_capacity(None, Some(2), no_prompt).unwrap(), 2);
    }

    #[test]
    fn prompts_when_nothing_names_capacity() {
        assert_eq!(resolve_capacity(None, None, || Ok(3)).unwrap(), 3);
    }

    #[test]
    fn sample_timetable_loads_sorted() {
        let schedule = load_arrivals_reader(Cursor::new(SAMPLE_TIMETABLE)).unwrap();
        assert_eq!(schedule.len(), 20);
        assert_eq!(schedule.clock_label(schedule.arrivals[0].timestamp), "07:00");
        assert!(schedule.arrivals.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }
}
