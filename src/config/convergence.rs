use super::traits::ConfigSection;
use crate::error::XorGaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvergenceConfig {
    /// Largest change in best fitness still counted as "no improvement"
    pub tolerance: f64,
    /// Consecutive stable generations required to converge
    pub max_same_count: usize,
    /// Generation cap; 0 runs until convergence
    pub max_generations: usize,
    pub time_limit_secs: Option<u64>,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            max_same_count: 100,
            max_generations: 10_000,
            time_limit_secs: None,
        }
    }
}

impl ConvergenceConfig {
    pub fn generation_cap(&self) -> Option<usize> {
        (self.max_generations > 0).then_some(self.max_generations)
    }
}

impl ConfigSection for ConvergenceConfig {
    fn section_name() -> &'static str {
        "convergence"
    }

    fn validate(&self) -> Result<(), XorGaError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(XorGaError::Configuration(
                "Tolerance must be a non-negative number".to_string(),
            ));
        }
        if self.max_same_count == 0 {
            return Err(XorGaError::Configuration(
                "Max same count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
