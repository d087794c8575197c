use super::genome::{GeneRange, Genome};
use super::population::ScoredGenome;
use crate::error::XorGaError;
use rand::Rng;

/// Tournament selection: pick the lowest-fitness of K random candidates
pub fn tournament_selection<'a, R: Rng>(
    population: &'a [ScoredGenome],
    tournament_size: usize,
    rng: &mut R,
) -> Result<&'a Genome, XorGaError> {
    if population.is_empty() {
        return Err(XorGaError::EmptyPopulation);
    }

    let mut best_idx = rng.gen_range(0..population.len());
    let mut best_fitness = population[best_idx].fitness;

    for _ in 1..tournament_size {
        let idx = rng.gen_range(0..population.len());
        if population[idx].fitness < best_fitness {
            best_idx = idx;
            best_fitness = population[idx].fitness;
        }
    }

    Ok(&population[best_idx].genome)
}

/// Splice crossover at a fixed cut point.
///
/// Child A takes `[0, split)` from `parent_a` and `[split, len)` from
/// `parent_b`; child B is the complement. A cut at either end yields plain
/// copies of the parents.
pub fn splice(
    parent_a: &Genome,
    parent_b: &Genome,
    split_point: usize,
) -> Result<(Genome, Genome), XorGaError> {
    if parent_a.len() != parent_b.len() {
        return Err(XorGaError::GenomeLength {
            expected: parent_a.len(),
            actual: parent_b.len(),
        });
    }

    let point = split_point.min(parent_a.len());

    let mut child_a = parent_a.clone();
    let mut child_b = parent_b.clone();

    child_a.genes_mut()[point..].copy_from_slice(&parent_b.genes()[point..]);
    child_b.genes_mut()[point..].copy_from_slice(&parent_a.genes()[point..]);

    Ok((child_a, child_b))
}

/// Mutation: nudge each gene with probability `rate` by a uniform jitter in
/// `[-scale, scale]`, keeping the result inside `range`.
pub fn mutate<R: Rng>(
    genome: &mut Genome,
    rate: f64,
    scale: f64,
    range: GeneRange,
    rng: &mut R,
) {
    for gene in genome.genes_mut() {
        if rng.gen::<f64>() < rate {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * scale;
            *gene = range.clamp(*gene + jitter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scored(fitness: &[f64]) -> Vec<ScoredGenome> {
        fitness
            .iter()
            .map(|f| ScoredGenome {
                genome: Genome::from_genes(vec![*f; 8]),
                fitness: *f,
            })
            .collect()
    }

    #[test]
    fn test_tournament_prefers_lower_fitness() {
        let population = scored(&[0.9, 0.1, 0.5]);
        let mut rng = StdRng::seed_from_u64(3);
        // A tournament far larger than the population almost surely sees every member
        let winner = tournament_selection(&population, 64, &mut rng).unwrap();
        assert_eq!(winner.genes()[0], 0.1);
    }

    #[test]
    fn test_tournament_empty_population() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            tournament_selection(&[], 4, &mut rng),
            Err(XorGaError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_splice_length_mismatch() {
        let a = Genome::from_genes(vec![0.0; 8]);
        let b = Genome::from_genes(vec![0.0; 7]);
        assert!(splice(&a, &b, 4).is_err());
    }

    #[test]
    fn test_mutation_clamps_to_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let range = GeneRange::default();
        let mut genome = Genome::from_genes(vec![10.0; 8]);
        for _ in 0..50 {
            mutate(&mut genome, 1.0, 0.5, range, &mut rng);
        }
        assert!(genome.genes().iter().all(|g| range.contains(*g)));
    }
}
