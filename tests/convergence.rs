use xorga::engines::generation::{ConvergenceMonitor, ConvergenceState};

const MAX_SAME_COUNT: usize = 100;
const TOLERANCE: f64 = 0.01;

#[test]
fn test_identical_fitness_converges_at_max_same_count() {
    let mut monitor = ConvergenceMonitor::new(TOLERANCE, MAX_SAME_COUNT);

    // Generation 0 has nothing to compare against
    for generation in 0..MAX_SAME_COUNT {
        assert_eq!(monitor.observe(0.25), ConvergenceState::Running);
        assert_eq!(monitor.stable_count(), generation);
    }

    assert_eq!(monitor.observe(0.25), ConvergenceState::Converged);
    assert_eq!(monitor.stable_count(), MAX_SAME_COUNT);
}

#[test]
fn test_large_change_resets_stable_count() {
    let mut monitor = ConvergenceMonitor::new(TOLERANCE, MAX_SAME_COUNT);

    for _ in 0..10 {
        monitor.observe(0.4);
    }
    assert_eq!(monitor.stable_count(), 9);

    monitor.observe(0.3);
    assert_eq!(monitor.stable_count(), 0);
    assert_eq!(monitor.last_best_fitness(), 0.3);
}

#[test]
fn test_small_drift_counts_as_stable() {
    let mut monitor = ConvergenceMonitor::new(TOLERANCE, 3);

    monitor.observe(0.500);
    monitor.observe(0.495);
    monitor.observe(0.491);
    assert_eq!(monitor.stable_count(), 2);
    assert_eq!(monitor.observe(0.490), ConvergenceState::Converged);
}

#[test]
fn test_converged_state_is_terminal() {
    let mut monitor = ConvergenceMonitor::new(TOLERANCE, 1);

    monitor.observe(0.1);
    assert_eq!(monitor.observe(0.1), ConvergenceState::Converged);
    assert_eq!(monitor.observe(5.0), ConvergenceState::Converged);
}
