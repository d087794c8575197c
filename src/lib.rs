pub mod config;
pub mod engines;
pub mod error;
pub mod report;
pub mod types;

pub use error::{Result, XorGaError};
pub use types::{FitnessMode, Termination};
