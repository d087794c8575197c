use super::{
    convergence::ConvergenceConfig, evolution::EvolutionConfig, network::NetworkConfig,
    traits::ConfigSection,
};
use crate::error::XorGaError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `XORGA_EVOLUTION__POPULATION_SIZE=50`.
pub const ENV_PREFIX: &str = "XORGA";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub convergence: ConvergenceConfig,
    pub network: NetworkConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), XorGaError> {
        self.evolution.validate()?;
        self.convergence.validate()?;
        self.network.validate()?;
        Ok(())
    }

    /// Build a config from an optional TOML file layered under `XORGA_*` environment variables.
    pub fn load_layered(path: Option<&Path>) -> Result<Self, XorGaError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(true),
            );
        }
        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), XorGaError> {
        let config = AppConfig::load_layered(Some(path.as_ref()))?;
        *self.write_lock()? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), XorGaError> {
        let config = self.get()?;
        let toml_str = toml::to_string_pretty(&config)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> Result<AppConfig, XorGaError> {
        self.config
            .read()
            .map(|config| config.clone())
            .map_err(|_| XorGaError::Configuration("Config lock poisoned".to_string()))
    }

    /// Apply `f` and validate; the previous config is restored if validation fails.
    pub fn update<F>(&self, f: F) -> Result<(), XorGaError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.write_lock()?;
        let previous = config.clone();
        f(&mut config);
        if let Err(e) = config.validate() {
            *config = previous;
            return Err(e);
        }
        Ok(())
    }

    fn write_lock(&self) -> Result<std::sync::RwLockWriteGuard<'_, AppConfig>, XorGaError> {
        self.config
            .write()
            .map_err(|_| XorGaError::Configuration("Config lock poisoned".to_string()))
    }
}
