//! QGENE - Quantum-Enhanced Genetic Breeding Engine
//! Command-line driver for multi-generation breeding simulations
//!
//! ## Environment Variables
//! - `QGENE_SEED`: Seed for the random generator (overrides the config file)
//! - `QGENE_CONFIG`: Path to a TOML configuration file
//! - `RUST_LOG`: Log filter (default: qgene=info)

mod simulation;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use qgene_core::BreedingConfig;
use simulation::{SimulationOutcome, SimulationPlan};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qgene")]
#[command(author = "QGENE Contributors")]
#[command(version = "2026.1.16")]
#[command(about = "QGENE - Quantum-Enhanced Genetic Breeding Engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Breed a population for several generations and print diagnostics
    Simulate {
        /// Random seed (omit for system entropy)
        #[arg(short, long, env = "QGENE_SEED")]
        seed: Option<u64>,

        /// Number of founder genomes
        #[arg(short, long, default_value_t = 8)]
        founders: usize,

        /// Number of generations to breed
        #[arg(short, long, default_value_t = 5)]
        generations: usize,

        /// Ticks between generations
        #[arg(short, long, default_value_t = 10)]
        ticks: usize,

        /// Seconds per tick
        #[arg(long, default_value_t = 1.0)]
        dt: f32,

        /// TOML configuration file
        #[arg(short, long, value_name = "FILE", env = "QGENE_CONFIG")]
        config: Option<PathBuf>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the default configuration as TOML
    Config,
}

fn main() {
    let _ = dotenv::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qgene=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            seed,
            founders,
            generations,
            ticks,
            dt,
            config,
            json,
        } => {
            let plan = SimulationPlan {
                founders,
                generations,
                ticks,
                dt,
            };
            simulate_command(seed, config.as_deref(), &plan, json)
        }

        Commands::Config => config_command(),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<BreedingConfig> {
    let mut config = match path {
        Some(path) => BreedingConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => BreedingConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}

fn simulate_command(
    seed: Option<u64>,
    config_path: Option<&Path>,
    plan: &SimulationPlan,
    json: bool,
) -> Result<()> {
    let config = load_config(config_path, seed)?;

    if !json {
        println!(
            "{} {} founders over {} generations",
            "Simulating".green().bold(),
            plan.founders.to_string().cyan(),
            plan.generations.to_string().cyan()
        );
    }

    let outcome = simulation::run(config, plan)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }
    Ok(())
}

fn print_outcome(outcome: &SimulationOutcome) {
    match outcome.seed {
        Some(seed) => println!("{} {}", "      Seed".green().bold(), seed),
        None => println!("{} {}", "      Seed".green().bold(), "entropy".yellow()),
    }
    println!("{} {}", " Offspring".green().bold(), outcome.offspring);
    println!("{} {}", "    Events".green().bold(), outcome.events);

    println!("\n{}", "Last generation:".bold());
    for phenotype in &outcome.last_generation {
        let traits: Vec<String> = phenotype
            .traits
            .iter()
            .map(|(name, value)| format!("{name}={value:.3}"))
            .collect();
        println!(
            "  #{} (gen {}) {}",
            phenotype.genome_id.to_string().cyan(),
            phenotype.generation,
            traits.join(" ")
        );
    }

    println!("\n{}", "Diagnostics:".bold());
    println!("{}", outcome.report);
}

fn config_command() -> Result<()> {
    let toml = BreedingConfig::default().to_toml_string()?;
    print!("{toml}");
    Ok(())
}
