use super::traits::{check_unit_interval, ConfigSection};
use crate::error::XorGaError;
use crate::types::NUM_WEIGHTS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub genome_size: usize,
    /// Probability that the mutation operator fires for an offspring
    pub mutation_probability: f64,
    /// Per-gene chance of a perturbation once mutation fires
    pub gene_mutation_rate: f64,
    pub mutation_scale: f64,
    pub crossover_probability: f64,
    /// Splice cut point; `None` cuts at the middle of the genome
    pub split_point: Option<usize>,
    pub elitism_rate: f64,
    pub tournament_size: usize,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 10_000,
            genome_size: NUM_WEIGHTS,
            mutation_probability: 0.01,
            gene_mutation_rate: 1.0,
            mutation_scale: 0.001,
            crossover_probability: 0.9,
            split_point: None,
            elitism_rate: 0.3,
            tournament_size: 4,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    pub fn effective_split_point(&self) -> usize {
        self.split_point.unwrap_or(self.genome_size / 2)
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), XorGaError> {
        if self.population_size == 0 {
            return Err(XorGaError::Configuration(
                "Population size must be positive".to_string(),
            ));
        }
        if self.genome_size == 0 {
            return Err(XorGaError::Configuration(
                "Genome size must be positive".to_string(),
            ));
        }
        if self.genome_size != NUM_WEIGHTS {
            return Err(XorGaError::Configuration(format!(
                "Genome size must be {} for the 2-2-1 XOR network, got {}",
                NUM_WEIGHTS, self.genome_size
            )));
        }
        let split = self.effective_split_point();
        if split == 0 || split >= self.genome_size {
            return Err(XorGaError::Configuration(format!(
                "Split point must lie in (0, {}), got {}",
                self.genome_size, split
            )));
        }
        check_unit_interval("Mutation probability", self.mutation_probability)?;
        check_unit_interval("Gene mutation rate", self.gene_mutation_rate)?;
        check_unit_interval("Crossover probability", self.crossover_probability)?;
        check_unit_interval("Elitism rate", self.elitism_rate)?;
        if !self.mutation_scale.is_finite() || self.mutation_scale < 0.0 {
            return Err(XorGaError::Configuration(
                "Mutation scale must be a non-negative number".to_string(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(XorGaError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
