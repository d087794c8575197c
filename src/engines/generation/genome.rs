use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Genome representation for the XOR network
///
/// A genome is a fixed-length vector of real-valued genes, one per free
/// parameter of the network (`[w1..w6, b1, b2]`). The length is set when the
/// genome is built and cannot change afterwards: genes can be rewritten in
/// place through `genes_mut`, but nothing can push or truncate.
///
/// Parents are cloned before crossover or mutation so offspring never share
/// storage with the genome they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genome(Vec<f64>);

impl Genome {
    pub fn from_genes(genes: Vec<f64>) -> Self {
        Self(genes)
    }

    pub fn genes(&self) -> &[f64] {
        &self.0
    }

    pub fn genes_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_genes(self) -> Vec<f64> {
        self.0
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, gene) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.4}", gene)?;
        }
        write!(f, "]")
    }
}

/// Closed interval every gene must stay within
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneRange {
    pub min: f64,
    pub max: f64,
}

impl Default for GeneRange {
    fn default() -> Self {
        Self::new(-10.0, 10.0)
    }
}

impl GeneRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen::<f64>() * (self.max - self.min) + self.min
    }
}

/// Generate random genome
pub fn random_genome<R: Rng>(length: usize, range: GeneRange, rng: &mut R) -> Genome {
    Genome((0..length).map(|_| range.sample(rng)).collect())
}
