use crate::engines::evaluation::{FitnessFunction, XorObjective};
use crate::engines::generation::{Genome, RunOutcome};
use crate::error::XorGaError;
use crate::types::{Termination, XOR_IDEALS, XOR_INPUTS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XorTableRow {
    pub x1: f64,
    pub x2: f64,
    pub ideal: f64,
    pub predicted: f64,
}

/// Final summary of a run: the best genome and how it scores on XOR
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub best_genome: Genome,
    pub fitness: f64,
    pub generations: usize,
    pub termination: Termination,
    pub table: Vec<XorTableRow>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn new(
        outcome: &RunOutcome,
        objective: &XorObjective,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Result<Self, XorGaError> {
        let genes = outcome.best.genome.genes();
        let predictions = objective.predictions(genes)?;

        let table = XOR_INPUTS
            .iter()
            .zip(XOR_IDEALS)
            .zip(predictions)
            .map(|((&[x1, x2], ideal), predicted)| XorTableRow {
                x1,
                x2,
                ideal,
                predicted,
            })
            .collect();

        Ok(Self {
            best_genome: outcome.best.genome.clone(),
            fitness: objective.evaluate(genes)?,
            generations: outcome.generations,
            termination: outcome.termination,
            table,
            started_at,
            finished_at,
        })
    }

    pub fn to_json(&self) -> Result<String, XorGaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>6} {:>6} {:>6} {:>6}", "x1", "x2", "t1", "y1")?;
        for row in &self.table {
            writeln!(
                f,
                "{:>6.4} {:>6.4} {:>6.4} {:>6.4}",
                row.x1, row.x2, row.ideal, row.predicted
            )?;
        }
        writeln!(f, "best = {}", self.best_genome)?;
        writeln!(f, "fitness = {}", self.fitness)?;
        write!(
            f,
            "status = {} after {} generations ({} ms)",
            self.termination,
            self.generations,
            (self.finished_at - self.started_at).num_milliseconds()
        )
    }
}
