use super::genome::{random_genome, GeneRange, Genome};
use crate::engines::evaluation::FitnessFunction;
use crate::error::XorGaError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A genome paired with the fitness it scored in the current generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredGenome {
    pub genome: Genome,
    pub fitness: f64,
}

/// Fixed-size set of genomes that is replaced wholesale each generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    members: Vec<Genome>,
}

impl Population {
    pub fn new(members: Vec<Genome>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Genome] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Score every member once. Any evaluation failure aborts the whole pass.
    pub fn evaluate<F: FitnessFunction>(
        &self,
        objective: &F,
    ) -> Result<Vec<ScoredGenome>, XorGaError> {
        self.members
            .iter()
            .map(|genome| {
                let fitness = objective.evaluate(genome.genes())?;
                Ok::<_, XorGaError>(ScoredGenome {
                    genome: genome.clone(),
                    fitness,
                })
            })
            .collect()
    }
}

/// Build the initial population from independently drawn genomes.
pub fn initialize_population<R: Rng>(
    population_size: usize,
    genome_size: usize,
    range: GeneRange,
    rng: &mut R,
) -> Population {
    Population::new(
        (0..population_size)
            .map(|_| random_genome(genome_size, range, rng))
            .collect(),
    )
}

/// Lowest-fitness member of an already scored generation.
pub fn best_scored(scored: &[ScoredGenome]) -> Result<&ScoredGenome, XorGaError> {
    scored
        .iter()
        .min_by(|a, b| a.fitness.total_cmp(&b.fitness))
        .ok_or(XorGaError::EmptyPopulation)
}
