//! CropWise - crop and fertilizer recommendations from field readings
//!
//! # Usage
//!
//! ```bash
//! # Rank crops and pick fertilizers for one field
//! cropwise recommend --n 90 --p 42 --k 43 --temperature 20.9 \
//!     --humidity 82 --ph 6.5 --rainfall 202.9
//!
//! # Fertilizer only, for a known crop
//! cropwise fertilizer --n 20 --p 60 --k 60 --crop wheat
//!
//! # Dump the synthesized training table / effective config
//! cropwise dataset --seed 7 > training.json
//! cropwise --config field.toml config
//! ```
//!
//! # Environment Variables
//!
//! - `CROPWISE_CONFIG`: Path to a TOML config file
//! - `CROPWISE_LOG_JSON`: Set to "true" for JSON log lines
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use cropwise::config::{self, EngineConfig};
use cropwise::{recommend_fertilizer, train_with, FieldAdvisor, FieldReadings, FieldReport};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "cropwise")]
#[command(about = "Crop and fertilizer recommendations from soil and climate readings")]
#[command(version)]
struct CliArgs {
    /// Path to a TOML config file (overrides CROPWISE_CONFIG and ./cropwise.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit log lines as JSON
    #[arg(long, global = true, env = "CROPWISE_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: SubCommand,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Rank crops for a field and recommend fertilizers for the best one
    Recommend {
        #[command(flatten)]
        readings: ReadingArgs,

        /// Number of ranked crops to return (default from config)
        #[arg(long)]
        top_k: Option<usize>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recommend fertilizers from N/P/K readings alone
    Fertilizer {
        /// Soil nitrogen (kg/ha)
        #[arg(long)]
        n: f64,
        /// Soil phosphorus (kg/ha)
        #[arg(long)]
        p: f64,
        /// Soil potassium (kg/ha)
        #[arg(long)]
        k: f64,
        /// Crop label; selects crop-group targets and a crop-suited secondary
        #[arg(long)]
        crop: Option<String>,
        /// Print recommendations as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the synthesized training set as JSON
    Dataset {
        /// Seed for the noise generator (default from config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(clap::Args, Debug)]
struct ReadingArgs {
    /// Soil nitrogen (kg/ha)
    #[arg(long)]
    n: f64,
    /// Soil phosphorus (kg/ha)
    #[arg(long)]
    p: f64,
    /// Soil potassium (kg/ha)
    #[arg(long)]
    k: f64,
    /// Mean temperature (°C)
    #[arg(long, allow_negative_numbers = true)]
    temperature: f64,
    /// Relative humidity (%)
    #[arg(long)]
    humidity: f64,
    /// Soil pH
    #[arg(long)]
    ph: f64,
    /// Rainfall (mm)
    #[arg(long)]
    rainfall: f64,
}

impl From<ReadingArgs> for FieldReadings {
    fn from(a: ReadingArgs) -> Self {
        Self {
            n: a.n,
            p: a.p,
            k: a.k,
            temperature: a.temperature,
            humidity: a.humidity,
            ph: a.ph,
            rainfall: a.rainfall,
        }
    }
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_json);

    let engine_config = EngineConfig::load_or_search(args.config.as_deref())
        .context("Failed to load engine config")?;
    config::init(engine_config);
    let cfg = config::get();

    match args.command {
        SubCommand::Recommend {
            readings,
            top_k,
            json,
        } => run_recommend(cfg, readings.into(), top_k, json),
        SubCommand::Fertilizer {
            n,
            p,
            k,
            crop,
            json,
        } => run_fertilizer(n, p, k, crop.as_deref(), json),
        SubCommand::Dataset { seed } => run_dataset(cfg, seed),
        SubCommand::Config => {
            print!("{}", cfg.to_toml().context("Failed to serialize config")?);
            Ok(())
        }
    }
}

/// Logs go to stderr so JSON on stdout stays machine-readable.
fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

// ============================================================================
// Subcommands
// ============================================================================

fn run_recommend(
    cfg: &EngineConfig,
    readings: FieldReadings,
    top_k: Option<usize>,
    json: bool,
) -> Result<()> {
    let training_set = cfg.synthesizer().generate();
    info!(
        samples = training_set.len(),
        fingerprint = %training_set.fingerprint(),
        "Training set synthesized"
    );
    let model = train_with(&training_set, &cfg.forest_params())
        .context("Failed to train crop classifier")?;

    let mut advisor = FieldAdvisor::from_config(Arc::new(model), cfg);
    if let Some(k) = top_k {
        advisor = advisor.with_top_k(k);
    }

    let report = advisor.advise(&readings).context("Invalid field readings")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        print_report(&report);
    }
    Ok(())
}

fn run_fertilizer(n: f64, p: f64, k: f64, crop: Option<&str>, json: bool) -> Result<()> {
    for (name, v) in [("n", n), ("p", p), ("k", k)] {
        if !v.is_finite() || v < 0.0 {
            anyhow::bail!("{name} must be a non-negative number (got {v})");
        }
    }

    let recs = recommend_fertilizer(n, p, k, crop);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&recs).context("Failed to serialize recommendations")?
        );
        return Ok(());
    }

    for (i, rec) in recs.iter().enumerate() {
        let role = if i == 0 { "Primary" } else { "Secondary" };
        println!("{role}: {}", rec.fertilizer);
        println!("  {}", rec.rationale);
        if let Some(info) = rec.details {
            println!("  Grade {} | {} | {}", info.grade(), info.application_rate, info.best_time);
        }
    }
    Ok(())
}

fn run_dataset(cfg: &EngineConfig, seed: Option<u64>) -> Result<()> {
    let mut synthesizer = cfg.synthesizer();
    if let Some(seed) = seed {
        synthesizer = synthesizer.with_seed(seed);
    }
    let set = synthesizer.generate();
    println!(
        "{}",
        serde_json::to_string_pretty(&set.samples).context("Failed to serialize training set")?
    );
    Ok(())
}

fn print_report(report: &FieldReport) {
    println!("Recommended crops:");
    for (rank, crop) in report.top_crops.iter().enumerate() {
        println!(
            "  {}. {:<12} {:5.1}%",
            rank + 1,
            crop.label,
            crop.confidence_percent()
        );
        if let Some(info) = crop.info {
            println!("     {}", info.description);
            println!("     {}", info.growing_season);
        }
    }

    let nr = &report.nutrient_report;
    println!();
    println!("Soil nutrients (target for {}):", nr.crop.as_deref().unwrap_or("general"));
    for status in [&nr.nitrogen, &nr.phosphorus, &nr.potassium] {
        let state = if status.deficit > 0.0 { "Deficient" } else { "Adequate" };
        println!(
            "  {:<10} {:6.1} / {:6.1} kg/ha  {:5.1}%  {}",
            status.nutrient.name(),
            status.actual,
            status.optimal,
            status.deficiency_percent,
            state
        );
    }

    println!();
    for (i, rec) in report.fertilizers.iter().enumerate() {
        let role = if i == 0 { "Primary" } else { "Secondary" };
        println!("{role} fertilizer: {}", rec.fertilizer);
        println!("  {}", rec.rationale);
    }

    for w in &report.warnings {
        println!("Warning: {w}");
    }

    println!();
    println!("{}", report.summary);
}
