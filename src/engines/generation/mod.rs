pub mod convergence;
pub mod evolution_engine;
pub mod genome;
pub mod operators;
pub mod population;
pub mod progress;
pub mod trainer;

pub use convergence::{ConvergenceMonitor, ConvergenceState};
pub use evolution_engine::{EvolutionEngine, RunOutcome};
pub use genome::{random_genome, GeneRange, Genome};
pub use population::{initialize_population, Population, ScoredGenome};
pub use progress::{
    ChannelProgressCallback, ConsoleProgressCallback, GenerationReport, ProgressCallback,
    ProgressMessage, SilentProgressCallback,
};
pub use trainer::{BreedingParams, GenerationalTrainer, Trainer};
