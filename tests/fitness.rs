use rand::rngs::StdRng;
use rand::SeedableRng;
use xorga::engines::evaluation::{feedforward, FitnessFunction, XorObjective};
use xorga::engines::generation::{random_genome, GeneRange};
use xorga::{FitnessMode, XorGaError};

/// Hand-built weights: h1 acts as NOR, h2 as NAND, output fires on NAND and not NOR
const XOR_SOLUTION: [f64; 8] = [-10.0, -3.75, -10.0, -3.75, -10.0, 10.0, 5.0, -4.0];

#[test]
fn test_known_solution_scores_low() {
    let objective = XorObjective::new(FitnessMode::Rmse);
    let fitness = objective.evaluate(&XOR_SOLUTION).unwrap();

    // RMSE works out to about 0.027
    assert!(fitness < 0.05, "fitness {} too high", fitness);
}

#[test]
fn test_known_solution_predictions() {
    let expected = [0.0, 1.0, 1.0, 0.0];
    let inputs = [(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)];

    for ((x1, x2), t) in inputs.iter().zip(expected) {
        let y = feedforward(*x1, *x2, &XOR_SOLUTION).unwrap();
        assert!((y - t).abs() < 0.05, "({}, {}) -> {}", x1, x2, y);
    }
}

#[test]
fn test_fitness_is_non_negative() {
    let mut rng = StdRng::seed_from_u64(2024);
    let range = GeneRange::default();

    for mode in [FitnessMode::Rmse, FitnessMode::LegacyLastCase] {
        let objective = XorObjective::new(mode);
        for _ in 0..500 {
            let genome = random_genome(8, range, &mut rng);
            let fitness = objective.evaluate(genome.genes()).unwrap();
            assert!(fitness >= 0.0 && fitness.is_finite());
        }
    }
}

#[test]
fn test_all_zero_weights() {
    // Output is 0.5 on every case, so every squared error is 0.25
    let objective = XorObjective::new(FitnessMode::Rmse);
    let fitness = objective.evaluate(&[0.0; 8]).unwrap();
    assert!((fitness - 0.5).abs() < 1e-12);
}

#[test]
fn test_legacy_mode_uses_last_case_only() {
    let objective = XorObjective::new(FitnessMode::LegacyLastCase);

    // Only (1, 1) -> 0 counts: sqrt(0.25 / 4)
    let fitness = objective.evaluate(&[0.0; 8]).unwrap();
    assert!((fitness - 0.25).abs() < 1e-12);

    // Legacy never exceeds true RMSE since it drops three non-negative terms
    let rmse = XorObjective::new(FitnessMode::Rmse);
    let legacy = objective.evaluate(&XOR_SOLUTION).unwrap();
    assert!(legacy <= rmse.evaluate(&XOR_SOLUTION).unwrap());
}

#[test]
fn test_wrong_length_is_an_error() {
    let objective = XorObjective::default();

    for len in [0, 7, 9] {
        let genes = vec![0.5; len];
        match objective.evaluate(&genes) {
            Err(XorGaError::GenomeLength { expected, actual }) => {
                assert_eq!(expected, 8);
                assert_eq!(actual, len);
            }
            other => panic!("expected length error, got {:?}", other),
        }
    }
}

#[test]
fn test_objective_minimizes() {
    assert!(XorObjective::default().should_minimize());
}
