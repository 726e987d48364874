use plate_rs::util::PlateConfig;
use serde::{Deserialize, Serialize};

/// Configuration of the plate optimizers
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PlateOptConfig {
    /// Geometry of the plates and required clearances
    pub plate: PlateConfig,
    /// Seed for the PRNG. If undefined, the algorithms will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    pub ga: GAConfig,
    pub sa: SAConfig,
}

/// Configuration of the genetic optimizer and its retry driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GAConfig {
    pub population_size: usize,
    pub generations: usize,
    /// Probability per plate of the child that a part swap is attempted
    pub mutation_rate: f64,
    /// Number of complete runs before the driver gives up
    pub max_attempts: usize,
    /// Relative utilization improvement over the baseline (in %) a run has to exceed
    pub min_improvement_pct: f64,
}

/// Configuration of the simulated annealing optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SAConfig {
    pub max_temp: f64,
    pub min_temp: f64,
    pub cooling_rate: f64,
    /// Applied on top of `cooling_rate`: the temperature is multiplied by `cooling_rate * cooling_adjustment` every iteration
    pub cooling_adjustment: f64,
    /// Hard cap on the number of iterations, regardless of the temperature
    pub max_iterations: Option<usize>,
}

impl Default for PlateOptConfig {
    fn default() -> Self {
        Self {
            plate: PlateConfig::default(),
            prng_seed: None,
            ga: GAConfig::default(),
            sa: SAConfig::default(),
        }
    }
}

impl Default for GAConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            max_attempts: 25,
            min_improvement_pct: 1.0,
        }
    }
}

impl Default for SAConfig {
    fn default() -> Self {
        Self {
            max_temp: 1000.0,
            min_temp: 1.0,
            cooling_rate: 0.99,
            cooling_adjustment: 1.01,
            max_iterations: Some(1_000_000),
        }
    }
}

impl SAConfig {
    /// Factor the temperature is multiplied with after every iteration
    pub fn cooling_factor(&self) -> f64 {
        self.cooling_rate * self.cooling_adjustment
    }
}
