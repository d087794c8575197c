use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of free parameters in the 2-2-1 network: six weights and two biases.
pub const NUM_WEIGHTS: usize = 8;

/// XOR truth table inputs `(x1, x2)`.
pub const XOR_INPUTS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];

/// Ideal outputs matching `XOR_INPUTS` row for row.
pub const XOR_IDEALS: [f64; 4] = [0.0, 1.0, 1.0, 0.0];

/// How the fitness of a genome is folded over the XOR cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessMode {
    /// True RMSE over all four cases
    #[default]
    Rmse,
    /// Reproduces the legacy objective where only the last case survives the
    /// running sum: `sqrt(err(last) / 4)`
    LegacyLastCase,
}

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Best fitness stayed within tolerance for `max_same_count` generations
    Converged,
    GenerationCap,
    TimeLimit,
    Cancelled,
}

impl Termination {
    /// Anything other than true convergence is a best-effort result.
    pub fn is_converged(&self) -> bool {
        matches!(self, Termination::Converged)
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Termination::Converged => "converged",
            Termination::GenerationCap => "best effort (generation cap reached)",
            Termination::TimeLimit => "best effort (time limit reached)",
            Termination::Cancelled => "best effort (cancelled)",
        };
        f.write_str(label)
    }
}
