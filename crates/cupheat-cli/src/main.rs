use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cupheat::engine::tick_from_fraction;
use cupheat::prelude::*;
use cupheat::replay::{trial_hash, verify_trial};

/// Headless cup heat-diffusion trials
#[derive(Parser, Debug)]
#[command(name = "cupheat")]
#[command(about = "Run cup heat-diffusion trials and print JSON", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Visitation-order seed (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one trial and print a summary
    Run(TrialArgs),
    /// Run one trial and print the tick state at the given ticks
    Export {
        #[command(flatten)]
        trial: TrialArgs,
        /// Snapshot index to export (repeatable)
        #[arg(short, long, default_value = "870")]
        tick: Vec<u64>,
        /// Timeline position in [0, 1] to export instead of --tick
        #[arg(long, conflicts_with = "tick")]
        fraction: Option<f64>,
    },
    /// Run one trial, rerun it from its seed and compare every tick
    Verify(TrialArgs),
    /// Run every material and label combination
    Sweep,
}

#[derive(clap::Args, Debug, Clone)]
struct TrialArgs {
    /// Trial id such as Clay-HotBev-ColdAir; overrides the other options
    #[arg(long)]
    id: Option<String>,

    /// Cup material; "none" for an air-only world
    #[arg(short, long, default_value = "Aluminum")]
    material: String,

    /// Beverage temperature: Hot, Warm, Cold, a number, or "none"
    #[arg(short, long, default_value = "Hot", allow_negative_numbers = true)]
    bev: String,

    /// Air temperature: Hot, Warm, Cold, or a number
    #[arg(short, long, default_value = "Cold", allow_negative_numbers = true)]
    air: String,
}

impl TrialArgs {
    fn params(&self) -> Result<TrialParams, Box<dyn Error>> {
        if let Some(id) = &self.id {
            return Ok(id.parse::<TrialId>()?.to_params()?);
        }
        let material = match self.material.as_str() {
            "" | "none" | "None" => None,
            m => Some(m.to_string()),
        };
        let (liquid_temperature, liquid_label) = match self.bev.as_str() {
            "none" | "None" => (None, None),
            s => {
                let (t, label) = parse_temperature(s)?;
                (Some(t), label)
            }
        };
        let (air_temperature, air_label) = parse_temperature(&self.air)?;
        Ok(TrialParams {
            material,
            liquid_temperature,
            air_temperature,
            liquid_label,
            air_label,
        })
    }
}

/// A label or a number in °C.
fn parse_temperature(s: &str) -> Result<(f64, Option<TemperatureLabel>), Box<dyn Error>> {
    if let Ok(label) = s.parse::<TemperatureLabel>() {
        return Ok((label.celsius(), Some(label)));
    }
    let t: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is neither a temperature label nor a number"))?;
    Ok((t, None))
}

// ── Output ─────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunSummary {
    id: String,
    seed: u64,
    ticks: usize,
    hash: String,
    final_readings: Vec<Reading>,
    /// Beverage change from the first to the last sampled minute.
    change_in_temperature: Option<f64>,
    series: Vec<Series>,
    memory_bytes: usize,
}

impl RunSummary {
    fn new(trial: &Trial) -> Result<Self, EngineError> {
        let last = trial.len().saturating_sub(1) as u64;
        let change_in_temperature = trial.series_for("beverage").and_then(|s| {
            let end = s.points.last()?.time;
            s.change_between(0.0, end)
        });
        Ok(Self {
            id: trial.id().to_string(),
            seed: trial.seed(),
            ticks: trial.len(),
            hash: format!("{:016x}", trial_hash(trial)),
            final_readings: trial.readings_at(last)?,
            change_in_temperature,
            series: trial.series().to_vec(),
            memory_bytes: trial.last_metrics().memory_bytes,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SweepRow {
    id: String,
    seed: u64,
    beverage_end: Option<f64>,
    change_in_temperature: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyResult {
    id: String,
    seed: u64,
    deterministic: bool,
    first_divergent_tick: Option<u64>,
    divergent_cells: usize,
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), Box<dyn Error>> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

// ── Commands ───────────────────────────────────────────────────────

fn build_runner(seed: Option<u64>) -> Result<TrialRunner, ConfigError> {
    let mut config = TrialConfig::reference();
    config.seed = seed;
    TrialRunner::new(config)
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let runner = build_runner(args.seed)?;
    match args.command {
        Command::Run(trial_args) => {
            let trial = runner.run(trial_args.params()?)?;
            print_json(&RunSummary::new(&trial)?, args.pretty)
        }
        Command::Export {
            trial,
            tick,
            fraction,
        } => {
            let trial = runner.run(trial.params()?)?;
            let ticks = match fraction {
                Some(f) => vec![tick_from_fraction(f, trial.len())],
                None => tick,
            };
            let states = ticks
                .into_iter()
                .map(|t| export_tick_state(&trial, t))
                .collect::<Result<Vec<_>, _>>()?;
            print_json(&states, args.pretty)
        }
        Command::Verify(trial_args) => {
            let trial = runner.run(trial_args.params()?)?;
            let report = verify_trial(&runner, &trial)?;
            if let Some(r) = &report {
                warn!(tick = r.tick, cells = r.divergences.len(), "rerun diverged");
            }
            print_json(
                &VerifyResult {
                    id: trial.id().to_string(),
                    seed: trial.seed(),
                    deterministic: report.is_none(),
                    first_divergent_tick: report.as_ref().map(|r| r.tick),
                    divergent_cells: report.map_or(0, |r| r.divergences.len()),
                },
                args.pretty,
            )
        }
        Command::Sweep => {
            let catalog = runner.config().catalog.clone();
            let mut rows = Vec::new();
            for material in catalog.materials.names() {
                for bev in TemperatureLabel::ALL {
                    for air in TemperatureLabel::ALL {
                        let trial = runner.run(TrialParams::labelled(material, bev, air))?;
                        let series = trial.series_for("beverage");
                        rows.push(SweepRow {
                            id: trial.id().to_string(),
                            seed: trial.seed(),
                            beverage_end: series.and_then(|s| s.points.last()).map(|p| p.temperature),
                            change_in_temperature: series.and_then(|s| {
                                s.change_between(0.0, s.points.last()?.time)
                            }),
                        });
                    }
                }
            }
            info!(trials = rows.len(), "sweep complete");
            print_json(&rows, args.pretty)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
