use super::traits::ConfigSection;
use crate::engines::generation::genome::GeneRange;
use crate::error::XorGaError;
use crate::types::FitnessMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub range_min: f64,
    pub range_max: f64,
    pub fitness_mode: FitnessMode,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            range_min: -10.0,
            range_max: 10.0,
            fitness_mode: FitnessMode::Rmse,
        }
    }
}

impl NetworkConfig {
    pub fn gene_range(&self) -> GeneRange {
        GeneRange::new(self.range_min, self.range_max)
    }
}

impl ConfigSection for NetworkConfig {
    fn section_name() -> &'static str {
        "network"
    }

    fn validate(&self) -> Result<(), XorGaError> {
        if !self.range_min.is_finite() || !self.range_max.is_finite() {
            return Err(XorGaError::Configuration(
                "Weight range bounds must be finite".to_string(),
            ));
        }
        if self.range_min >= self.range_max {
            return Err(XorGaError::Configuration(format!(
                "Weight range is empty: [{}, {}]",
                self.range_min, self.range_max
            )));
        }
        Ok(())
    }
}
