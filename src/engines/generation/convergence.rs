use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvergenceState {
    Running,
    Converged,
}

/// Tracks how long the best fitness has stayed put.
///
/// Each call to `observe` compares the new best fitness with the previous
/// one. A change smaller than `tolerance` extends the stable streak, anything
/// larger resets it. The monitor converges once the streak reaches
/// `max_same_count`; after that it stays converged.
#[derive(Debug, Clone)]
pub struct ConvergenceMonitor {
    tolerance: f64,
    max_same_count: usize,
    last_best_fitness: f64,
    stable_count: usize,
    state: ConvergenceState,
}

impl ConvergenceMonitor {
    pub fn new(tolerance: f64, max_same_count: usize) -> Self {
        Self {
            tolerance,
            max_same_count,
            last_best_fitness: f64::INFINITY,
            stable_count: 0,
            state: ConvergenceState::Running,
        }
    }

    pub fn observe(&mut self, best_fitness: f64) -> ConvergenceState {
        if self.state == ConvergenceState::Converged {
            return self.state;
        }

        // INFINITY - INFINITY is NaN, which compares false and resets the streak
        if (self.last_best_fitness - best_fitness).abs() < self.tolerance {
            self.stable_count += 1;
        } else {
            self.stable_count = 0;
        }
        self.last_best_fitness = best_fitness;

        if self.stable_count >= self.max_same_count {
            self.state = ConvergenceState::Converged;
        }

        self.state
    }

    pub fn stable_count(&self) -> usize {
        self.stable_count
    }

    pub fn last_best_fitness(&self) -> f64 {
        self.last_best_fitness
    }

    pub fn state(&self) -> ConvergenceState {
        self.state
    }

    pub fn reset(&mut self) {
        self.last_best_fitness = f64::INFINITY;
        self.stable_count = 0;
        self.state = ConvergenceState::Running;
    }
}
