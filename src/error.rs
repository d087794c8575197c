use thiserror::Error;

#[derive(Error, Debug)]
pub enum XorGaError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Genome length mismatch: expected {expected}, got {actual}")]
    GenomeLength { expected: usize, actual: usize },

    #[error("Population is empty")]
    EmptyPopulation,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config source error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("TOML error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, XorGaError>;
