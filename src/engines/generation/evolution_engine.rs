use super::{
    convergence::{ConvergenceMonitor, ConvergenceState},
    population::{best_scored, Population, ScoredGenome},
    progress::{GenerationReport, ProgressCallback},
    trainer::{BreedingParams, GenerationalTrainer, Trainer},
};
use crate::config::traits::ConfigSection;
use crate::config::{AppConfig, ConvergenceConfig};
use crate::engines::evaluation::XorObjective;
use crate::error::XorGaError;
use crate::types::Termination;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a finished run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Best member of the final population
    pub best: ScoredGenome,
    pub generations: usize,
    pub stable_count: usize,
    pub termination: Termination,
}

pub struct EvolutionEngine<T: Trainer> {
    trainer: T,
    monitor: ConvergenceMonitor,
    max_generations: Option<usize>,
    time_limit: Option<Duration>,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl EvolutionEngine<GenerationalTrainer<XorObjective>> {
    /// Validate `config` and build the XOR engine with a seeded or entropy RNG.
    pub fn from_config(config: &AppConfig) -> Result<Self, XorGaError> {
        config.validate()?;

        let rng = match config.evolution.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let trainer = GenerationalTrainer::new(
            XorObjective::new(config.network.fitness_mode),
            BreedingParams::from_config(&config.evolution, config.network.gene_range()),
            rng,
        );

        Self::new(trainer, &config.convergence)
    }

    /// Draw the initial population from the engine's RNG and evolve it.
    pub fn run<C: ProgressCallback>(
        &mut self,
        callback: &mut C,
    ) -> Result<RunOutcome, XorGaError> {
        let population = self.trainer.initialize_population();
        self.run_with_population(population, callback)
    }
}

impl<T: Trainer> EvolutionEngine<T> {
    pub fn new(trainer: T, convergence: &ConvergenceConfig) -> Result<Self, XorGaError> {
        convergence.validate()?;

        Ok(Self {
            trainer,
            monitor: ConvergenceMonitor::new(convergence.tolerance, convergence.max_same_count),
            max_generations: convergence.generation_cap(),
            time_limit: convergence.time_limit_secs.map(Duration::from_secs),
            cancel_flag: None,
        })
    }

    /// Stop at the next generation boundary once `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    pub fn trainer(&self) -> &T {
        &self.trainer
    }

    pub fn monitor(&self) -> &ConvergenceMonitor {
        &self.monitor
    }

    /// Run the evolution process
    pub fn run_with_population<C: ProgressCallback>(
        &mut self,
        mut population: Population,
        callback: &mut C,
    ) -> Result<RunOutcome, XorGaError> {
        if population.is_empty() {
            return Err(XorGaError::EmptyPopulation);
        }
        self.trainer.check_population(&population)?;

        self.monitor.reset();
        let started = Instant::now();
        let mut generation = 0;

        info!(
            "Starting evolution: population {}, cap {:?}",
            population.len(),
            self.max_generations
        );

        let termination = loop {
            if self.is_cancelled() {
                break Termination::Cancelled;
            }

            callback.on_generation_start(generation);

            let (scored, next) = self.trainer.next_generation(&population)?;
            let best = best_scored(&scored)?;
            let state = self.monitor.observe(best.fitness);

            let report = GenerationReport {
                generation,
                best_fitness: best.fitness,
                stable_count: self.monitor.stable_count(),
                best_genome: best.genome.clone(),
            };
            debug!(
                "Generation {}: best {:.6}, stable {}",
                generation, report.best_fitness, report.stable_count
            );
            callback.on_generation_complete(&report);

            population = next;
            generation += 1;

            if state == ConvergenceState::Converged {
                info!("Converged after {} generations", generation);
                break Termination::Converged;
            }
            if self.max_generations.is_some_and(|cap| generation >= cap) {
                break Termination::GenerationCap;
            }
            if self.time_limit.is_some_and(|limit| started.elapsed() >= limit) {
                break Termination::TimeLimit;
            }
        };

        if !termination.is_converged() {
            warn!(
                "Stopped without converging after {} generations: {}",
                generation, termination
            );
        }

        let best = self.trainer.best_of(&population)?;
        info!("Best fitness {:.6}: {}", best.fitness, best.genome);

        Ok(RunOutcome {
            best,
            generations: generation,
            stable_count: self.monitor.stable_count(),
            termination,
        })
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
