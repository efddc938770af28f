//! Headless dish runner
//!
//! Loads a config and a pattern (or scatters a seeded one), runs a number
//! of generations, and reports the final census.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use petri_dish::core::error::Result;
use petri_dish::{Census, DishConfig, Pattern, ScatterDensity, SimulationEngine};

/// Petri dish runner - step a dish headlessly and report the outcome
#[derive(Parser, Debug)]
#[command(name = "petri")]
#[command(about = "Run a petri-dish cellular automaton for a number of generations")]
struct Args {
    /// Dish configuration (TOML); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting pattern (JSON with bacteria/food/antibiotics lists)
    #[arg(long)]
    pattern: Option<PathBuf>,

    /// Seed for a random starting pattern when no pattern file is given
    #[arg(long)]
    seed: Option<u64>,

    /// Generations to run
    #[arg(long, default_value_t = 10)]
    steps: usize,

    /// Write the final pattern here (JSON)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Log every generation
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunSummary {
    generations: u64,
    width: usize,
    height: usize,
    dish_cells: usize,
    census: Census,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        "petri_dish=debug,petri=debug"
    } else {
        "petri_dish=info,petri=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => DishConfig::load(path)?,
        None => DishConfig::default(),
    };
    let mut engine = SimulationEngine::from_config(&config)?;

    let pattern = match (&args.pattern, args.seed) {
        (Some(path), _) => Pattern::load(path)?,
        (None, seed) => {
            let seed = seed.unwrap_or_else(rand::random);
            tracing::info!("Scattering random pattern with seed {}", seed);
            Pattern::scatter(config.width, config.height, &ScatterDensity::default(), seed)?
        }
    };
    let load = engine.load_pattern(&pattern)?;
    if load.rejected > 0 {
        tracing::warn!("{} pattern cells fell outside the dish", load.rejected);
    }

    let census = engine.run(args.steps);

    if let Some(path) = &args.out {
        engine.save_pattern().save(path)?;
        tracing::info!("Wrote final pattern to {:?}", path);
    }

    let summary = RunSummary {
        generations: engine.generation(),
        width: engine.grid().width(),
        height: engine.grid().height(),
        dish_cells: engine.grid().mask().count(),
        census,
    };

    if args.format == "text" {
        println!("=== PETRI DISH ===");
        println!(
            "Grid {}x{}, {} dish cells, {} generations",
            summary.width, summary.height, summary.dish_cells, summary.generations
        );
        println!("  bacteria:      {}", census.bacteria);
        println!("  food:          {}", census.food);
        println!("  antibiotic:    {}", census.antibiotic);
        println!("  dead bacteria: {}", census.dead_bacteria);
        println!("  empty:         {}", census.empty);
    } else {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
