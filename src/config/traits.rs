use crate::error::XorGaError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), XorGaError>;
}

/// Check that a probability-like value lies in `[0, 1]`.
pub(crate) fn check_unit_interval(name: &str, value: f64) -> Result<(), XorGaError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(XorGaError::Configuration(format!(
            "{} must be between 0 and 1, got {}",
            name, value
        )));
    }
    Ok(())
}
