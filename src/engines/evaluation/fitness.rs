use super::network::Weights;
use crate::error::XorGaError;
use crate::types::{FitnessMode, XOR_IDEALS, XOR_INPUTS};

/// Scores a genome. Lower is better when `should_minimize` is true.
pub trait FitnessFunction {
    fn evaluate(&self, genes: &[f64]) -> Result<f64, XorGaError>;

    fn should_minimize(&self) -> bool {
        true
    }
}

/// RMSE of the network against the XOR truth table
#[derive(Debug, Clone, Copy, Default)]
pub struct XorObjective {
    mode: FitnessMode,
}

impl XorObjective {
    pub fn new(mode: FitnessMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> FitnessMode {
        self.mode
    }

    /// Network outputs for each row of the truth table.
    pub fn predictions(&self, genes: &[f64]) -> Result<[f64; 4], XorGaError> {
        let weights = Weights::decode(genes)?;
        let mut outputs = [0.0; 4];
        for (output, [x1, x2]) in outputs.iter_mut().zip(XOR_INPUTS) {
            *output = weights.forward(x1, x2);
        }
        Ok(outputs)
    }
}

impl FitnessFunction for XorObjective {
    fn evaluate(&self, genes: &[f64]) -> Result<f64, XorGaError> {
        let outputs = self.predictions(genes)?;
        let n = XOR_IDEALS.len() as f64;

        let sum_squared = match self.mode {
            FitnessMode::Rmse => outputs
                .iter()
                .zip(XOR_IDEALS)
                .map(|(y, t)| (y - t).powi(2))
                .sum::<f64>(),
            FitnessMode::LegacyLastCase => {
                let last = outputs.len() - 1;
                (outputs[last] - XOR_IDEALS[last]).powi(2)
            }
        };

        Ok((sum_squared / n).sqrt())
    }
}
