pub mod convergence;
pub mod evolution;
pub mod manager;
pub mod network;
pub mod traits;

pub use convergence::ConvergenceConfig;
pub use evolution::EvolutionConfig;
pub use manager::{AppConfig, ConfigManager};
pub use network::NetworkConfig;
