// Kept in its own test binary: the variables set here would leak into
// other config tests running on parallel threads.
use xorga::config::AppConfig;
use xorga::FitnessMode;

const POPULATION_VAR: &str = "XORGA_EVOLUTION__POPULATION_SIZE";
const FITNESS_VAR: &str = "XORGA_NETWORK__FITNESS_MODE";

#[test]
fn test_environment_overrides_file() {
    let path = std::env::temp_dir().join(format!("xorga-env-{}.toml", std::process::id()));
    std::fs::write(&path, "[evolution]\npopulation_size = 20\nseed = 3\n").unwrap();

    let previous: Vec<_> = [POPULATION_VAR, FITNESS_VAR]
        .iter()
        .map(|name| (*name, std::env::var(name).ok()))
        .collect();
    std::env::set_var(POPULATION_VAR, "50");
    std::env::set_var(FITNESS_VAR, "legacy_last_case");

    let config = AppConfig::load_layered(Some(&path));

    for (name, value) in previous {
        match value {
            Some(value) => std::env::set_var(name, value),
            None => std::env::remove_var(name),
        }
    }
    std::fs::remove_file(&path).ok();

    let config = config.unwrap();
    assert_eq!(config.evolution.population_size, 50);
    assert_eq!(config.network.fitness_mode, FitnessMode::LegacyLastCase);
    // Keys the environment leaves alone still come from the file
    assert_eq!(config.evolution.seed, Some(3));
}
