use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use xorga::config::AppConfig;
use xorga::engines::evaluation::XorObjective;
use xorga::engines::generation::{
    ConsoleProgressCallback, EvolutionEngine, GenerationalTrainer, ProgressCallback, RunOutcome,
    SilentProgressCallback,
};
use xorga::report::RunReport;
use xorga::FitnessMode;

/// Evolve the weights of a 2-2-1 network to fit XOR with a genetic algorithm
#[derive(Parser, Debug)]
#[command(name = "xorga", version)]
struct Cli {
    /// TOML config file; XORGA_* environment variables override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    population: Option<usize>,

    /// Generation cap; 0 runs until convergence
    #[arg(long)]
    max_generations: Option<usize>,

    /// Score only the last XOR case, as the legacy objective did
    #[arg(long)]
    legacy_fitness: bool,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,

    /// Suppress the per-generation progress lines
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_layered(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(seed) = cli.seed {
        config.evolution.seed = Some(seed);
    }
    if let Some(population) = cli.population {
        config.evolution.population_size = population;
    }
    if let Some(cap) = cli.max_generations {
        config.convergence.max_generations = cap;
    }
    if cli.legacy_fitness {
        config.network.fitness_mode = FitnessMode::LegacyLastCase;
    }

    let mut engine = EvolutionEngine::from_config(&config).context("Invalid configuration")?;

    let started_at = Utc::now();
    let outcome = if cli.quiet || cli.json {
        run(&mut engine, &mut SilentProgressCallback)?
    } else {
        run(&mut engine, &mut ConsoleProgressCallback::new())?
    };
    let finished_at = Utc::now();

    let objective = XorObjective::new(config.network.fitness_mode);
    let report = RunReport::new(&outcome, &objective, started_at, finished_at)?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }

    Ok(())
}

fn run<C: ProgressCallback>(
    engine: &mut EvolutionEngine<GenerationalTrainer<XorObjective>>,
    callback: &mut C,
) -> Result<RunOutcome> {
    engine.run(callback).context("Evolution run failed")
}
