pub mod fitness;
pub mod network;

pub use fitness::{FitnessFunction, XorObjective};
pub use network::{feedforward, sigmoid, Weights};
