use super::genome::GeneRange;
use super::operators::{mutate, splice, tournament_selection};
use super::population::{best_scored, initialize_population, Population, ScoredGenome};
use crate::config::EvolutionConfig;
use crate::engines::evaluation::FitnessFunction;
use crate::error::XorGaError;
use rand::rngs::StdRng;
use rand::Rng;

/// One step of a generational EA.
pub trait Trainer {
    /// Score `population`, breed its successor and return both.
    ///
    /// The scores belong to the population that was passed in, so callers can
    /// report on it without evaluating twice.
    fn next_generation(
        &mut self,
        population: &Population,
    ) -> Result<(Vec<ScoredGenome>, Population), XorGaError>;

    /// Best member of `population` under the trainer's objective.
    fn best_of(&self, population: &Population) -> Result<ScoredGenome, XorGaError>;

    /// Size every generation must have.
    fn population_size(&self) -> usize;

    fn check_population(&self, population: &Population) -> Result<(), XorGaError> {
        if population.len() != self.population_size() {
            return Err(XorGaError::Configuration(format!(
                "Population has {} members, trainer expects {}",
                population.len(),
                self.population_size()
            )));
        }
        Ok(())
    }
}

/// Parameters of the breeding step, taken from `EvolutionConfig`
#[derive(Debug, Clone)]
pub struct BreedingParams {
    pub population_size: usize,
    pub genome_size: usize,
    pub mutation_probability: f64,
    pub gene_mutation_rate: f64,
    pub mutation_scale: f64,
    pub crossover_probability: f64,
    pub split_point: usize,
    pub elitism_rate: f64,
    pub tournament_size: usize,
    pub gene_range: GeneRange,
}

impl BreedingParams {
    pub fn from_config(config: &EvolutionConfig, gene_range: GeneRange) -> Self {
        Self {
            population_size: config.population_size,
            genome_size: config.genome_size,
            mutation_probability: config.mutation_probability,
            gene_mutation_rate: config.gene_mutation_rate,
            mutation_scale: config.mutation_scale,
            crossover_probability: config.crossover_probability,
            split_point: config.effective_split_point(),
            elitism_rate: config.elitism_rate,
            tournament_size: config.tournament_size,
            gene_range,
        }
    }
}

/// Elitist generational trainer: keep the top slice, fill the rest with
/// spliced or copied tournament winners, then mutate the offspring.
pub struct GenerationalTrainer<F: FitnessFunction> {
    objective: F,
    params: BreedingParams,
    rng: StdRng,
}

impl<F: FitnessFunction> GenerationalTrainer<F> {
    pub fn new(objective: F, params: BreedingParams, rng: StdRng) -> Self {
        Self {
            objective,
            params,
            rng,
        }
    }

    pub fn objective(&self) -> &F {
        &self.objective
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Draw a fresh population sized by the breeding params.
    pub fn initialize_population(&mut self) -> Population {
        initialize_population(
            self.params.population_size,
            self.params.genome_size,
            self.params.gene_range,
            &mut self.rng,
        )
    }

    fn breed(&mut self, evaluated: &[ScoredGenome]) -> Result<Population, XorGaError> {
        let size = self.params.population_size;
        let mut next_generation = Vec::with_capacity(size);

        // Elitism: copy top performers unchanged
        let elite_count = ((size as f64 * self.params.elitism_rate) as usize).min(size);
        if elite_count > 0 {
            let mut sorted: Vec<&ScoredGenome> = evaluated.iter().collect();
            sorted.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));
            next_generation.extend(sorted.iter().take(elite_count).map(|s| s.genome.clone()));
        }

        while next_generation.len() < size {
            let mut offspring = if self.rng.gen::<f64>() < self.params.crossover_probability {
                let parent_a =
                    tournament_selection(evaluated, self.params.tournament_size, &mut self.rng)?;
                let parent_b =
                    tournament_selection(evaluated, self.params.tournament_size, &mut self.rng)?;
                let (child_a, child_b) = splice(parent_a, parent_b, self.params.split_point)?;
                vec![child_a, child_b]
            } else {
                // Reproduction (copy)
                let parent =
                    tournament_selection(evaluated, self.params.tournament_size, &mut self.rng)?;
                vec![parent.clone()]
            };

            for child in offspring.iter_mut() {
                if self.rng.gen::<f64>() < self.params.mutation_probability {
                    mutate(
                        child,
                        self.params.gene_mutation_rate,
                        self.params.mutation_scale,
                        self.params.gene_range,
                        &mut self.rng,
                    );
                }
            }

            next_generation.extend(offspring);
        }

        next_generation.truncate(size);
        Ok(Population::new(next_generation))
    }
}

impl<F: FitnessFunction> Trainer for GenerationalTrainer<F> {
    fn next_generation(
        &mut self,
        population: &Population,
    ) -> Result<(Vec<ScoredGenome>, Population), XorGaError> {
        self.check_population(population)?;
        let evaluated = population.evaluate(&self.objective)?;
        if evaluated.is_empty() {
            return Err(XorGaError::EmptyPopulation);
        }
        let next = self.breed(&evaluated)?;
        Ok((evaluated, next))
    }

    fn best_of(&self, population: &Population) -> Result<ScoredGenome, XorGaError> {
        let evaluated = population.evaluate(&self.objective)?;
        best_scored(&evaluated).cloned()
    }

    fn population_size(&self) -> usize {
        self.params.population_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::evaluation::XorObjective;
    use rand::SeedableRng;

    fn trainer(size: usize) -> GenerationalTrainer<XorObjective> {
        let config = EvolutionConfig {
            population_size: size,
            ..Default::default()
        };
        GenerationalTrainer::new(
            XorObjective::default(),
            BreedingParams::from_config(&config, GeneRange::default()),
            StdRng::seed_from_u64(5),
        )
    }

    #[test]
    fn test_population_size_is_constant() {
        let mut trainer = trainer(31);
        let mut population = trainer.initialize_population();
        for _ in 0..5 {
            let (scored, next) = trainer.next_generation(&population).unwrap();
            assert_eq!(scored.len(), 31);
            assert_eq!(next.len(), 31);
            population = next;
        }
    }

    #[test]
    fn test_elitism_keeps_best() {
        let mut trainer = trainer(20);
        let population = trainer.initialize_population();
        let best_before = trainer.best_of(&population).unwrap();
        let (_, next) = trainer.next_generation(&population).unwrap();
        let best_after = trainer.best_of(&next).unwrap();
        assert!(best_after.fitness <= best_before.fitness);
    }

    #[test]
    fn test_population_size_mismatch_rejected() {
        let mut trainer = trainer(50);
        let population = Population::new(
            (0..10)
                .map(|_| crate::engines::generation::Genome::from_genes(vec![0.0; 8]))
                .collect(),
        );
        assert!(matches!(
            trainer.next_generation(&population),
            Err(XorGaError::Configuration(_))
        ));
    }

    #[test]
    fn test_malformed_genome_aborts() {
        let mut trainer = trainer(2);
        let population = Population::new(vec![
            crate::engines::generation::Genome::from_genes(vec![0.0; 8]),
            crate::engines::generation::Genome::from_genes(vec![0.0; 5]),
        ]);
        assert!(matches!(
            trainer.next_generation(&population),
            Err(XorGaError::GenomeLength { .. })
        ));
    }
}
