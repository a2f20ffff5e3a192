//! vsc — command-line runner for the contact-center simulator.
//!
//! ```text
//! vsc run                                  one day at the configured parameters
//! vsc spectrum --starts-min 20 --starts-max 30
//!                                          handle time × volume × agent starts grid
//! vsc forecast --volumes 949,934.05,986.17 forecast daily volumes × agent starts
//! ```
//!
//! Every day summary is appended to `<out>/day_log.csv`; with `--hourly` one
//! record per simulated hour is appended to `<out>/hour_log.csv` as well.
//! Set `RUST_LOG=debug` for per-hour staffing and queue detail.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use cc_core::CenterConfig;
use cc_output::{CsvWriter, OutputWriter, SummaryObserver};
use cc_sim::{DayObserver, DaySummary, ForecastSpectrum, HourSummary, Spectrum, Steps};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "vsc")]
#[command(about = "Simulate a 24-hour contact center", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Common {
    /// JSON configuration file (defaults to the reference center)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// CSV table of hourly volume shares and staffing targets
    #[arg(long, global = true)]
    curves: Option<PathBuf>,

    /// Directory the logs are appended to
    #[arg(short, long, global = true, default_value = "./logs")]
    out: PathBuf,

    /// Also log one record per simulated hour
    #[arg(long, global = true)]
    hourly: bool,

    /// Log to SQLite instead of CSV
    #[cfg(feature = "sqlite")]
    #[arg(long, global = true)]
    sqlite: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a single day
    Run {
        #[arg(long)]
        agent_starts: Option<u32>,

        #[arg(long)]
        interactions: Option<f64>,

        /// Mean handle time in minutes
        #[arg(long)]
        handle_minutes: Option<f64>,

        /// Draw volume and handle times from their distributions
        #[arg(long)]
        randomize: bool,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Sweep handle time × daily volume × agent starts
    Spectrum {
        #[arg(long, default_value_t = 8.5)]
        handle_min: f64,
        #[arg(long, default_value_t = 12.0)]
        handle_max: f64,
        #[arg(long, default_value_t = 0.5)]
        handle_step: f64,

        #[arg(long, default_value_t = 800.0)]
        interactions_min: f64,
        #[arg(long, default_value_t = 1_400.0)]
        interactions_max: f64,
        #[arg(long, default_value_t = 50.0)]
        interactions_step: f64,

        #[arg(long, default_value_t = 20)]
        starts_min: u32,
        #[arg(long, default_value_t = 30)]
        starts_max: u32,

        /// Days per grid point
        #[arg(long, default_value_t = 1)]
        repeats: u32,
    },

    /// Sweep forecast daily volumes × agent starts
    Forecast {
        /// Comma-separated forecast interactions per day
        #[arg(long, value_delimiter = ',', required = true)]
        volumes: Vec<f64>,

        #[arg(long, default_value_t = 10)]
        starts_min: u32,
        #[arg(long, default_value_t = 24)]
        starts_max: u32,
    },
}

// ── Console observer wrapper ──────────────────────────────────────────────────

/// Forwards to the log sink and prints one line per simulated day.
struct ConsoleObserver<W: OutputWriter> {
    inner: SummaryObserver<W>,
    days:  usize,
}

impl<W: OutputWriter> ConsoleObserver<W> {
    fn new(inner: SummaryObserver<W>) -> Self {
        Self { inner, days: 0 }
    }
}

impl<W: OutputWriter> DayObserver for ConsoleObserver<W> {
    fn on_hour_end(&mut self, hour: &HourSummary) {
        self.inner.on_hour_end(hour);
    }

    fn on_day_end(&mut self, day: &DaySummary) {
        self.days += 1;
        println!(
            "{:>6} {:>8.2} {:>9} {:>9} {:>8.2} {:>7.3} {:>10}",
            day.agent_starts,
            day.handle_time_minutes,
            day.interactions_estimated,
            day.handled,
            day.asr_minutes,
            day.utilization,
            day.unfinished,
        );
        self.inner.on_day_end(day);
    }

    fn on_run_end(&mut self) {
        self.inner.on_run_end();
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let base = load_config(&cli.common)?;
    std::fs::create_dir_all(&cli.common.out)
        .with_context(|| format!("creating {}", cli.common.out.display()))?;
    log::info!("appending logs to {}", cli.common.out.display());

    #[cfg(feature = "sqlite")]
    if cli.common.sqlite {
        let writer = cc_output::SqliteWriter::new(&cli.common.out)?;
        return simulate(&cli, base, writer);
    }

    let writer = CsvWriter::new(&cli.common.out)
        .with_context(|| format!("opening logs in {}", cli.common.out.display()))?;
    simulate(&cli, base, writer)
}

fn load_config(common: &Common) -> Result<CenterConfig> {
    let mut config = match &common.config {
        Some(path) => CenterConfig::from_json_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CenterConfig::default(),
    };
    if let Some(path) = &common.curves {
        let curves = cc_schedule::load_curves_csv(path)
            .with_context(|| format!("loading {}", path.display()))?;
        curves.apply(&mut config);
    }
    Ok(config)
}

fn simulate<W: OutputWriter>(cli: &Cli, base: CenterConfig, writer: W) -> Result<()> {
    let sink = SummaryObserver::new(writer).with_hourly(cli.common.hourly);
    let mut obs = ConsoleObserver::new(sink);

    println!(
        "{:>6} {:>8} {:>9} {:>9} {:>8} {:>7} {:>10}",
        "starts", "aht_min", "estimate", "handled", "asr_min", "util", "unfinished"
    );
    println!("{}", "-".repeat(63));

    let started = Instant::now();
    match &cli.command {
        Command::Run { agent_starts, interactions, handle_minutes, randomize, seed } => {
            let config = CenterConfig {
                agent_starts:         agent_starts.unwrap_or(base.agent_starts),
                interactions_mean:    interactions.unwrap_or(base.interactions_mean),
                handle_time_mean:     handle_minutes.unwrap_or(base.handle_time_mean),
                enable_randomization: *randomize || base.enable_randomization,
                seed:                 seed.unwrap_or(base.seed),
                ..base
            };
            cc_sim::run_day(config, &mut obs)?;
        }
        Command::Spectrum {
            handle_min, handle_max, handle_step,
            interactions_min, interactions_max, interactions_step,
            starts_min, starts_max, repeats,
        } => {
            let spectrum = Spectrum {
                base,
                handle_minutes: Steps::new(*handle_min, *handle_max, *handle_step),
                interactions:   Steps::new(*interactions_min, *interactions_max, *interactions_step),
                agent_starts:   *starts_min..=*starts_max,
                repeats:        *repeats,
            };
            spectrum.run(&mut obs)?;
        }
        Command::Forecast { volumes, starts_min, starts_max } => {
            let spectrum = ForecastSpectrum {
                base,
                daily_volumes: volumes.clone(),
                agent_starts:  *starts_min..=*starts_max,
            };
            spectrum.run(&mut obs)?;
        }
    }

    if let Some(e) = obs.inner.take_error() {
        return Err(e).context(format!("writing logs to {}", cli.common.out.display()));
    }
    println!();
    println!(
        "{} day(s) simulated in {:.3} s",
        obs.days,
        started.elapsed().as_secs_f64()
    );
    Ok(())
}
