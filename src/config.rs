//! Solver configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;

/// Configuration for the steady-state GA.
///
/// # Defaults
///
/// ```
/// use u_knapsack::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Constant across the run. Must be at least 2 for worst-two
    /// replacement to be meaningful.
    pub population_size: usize,

    /// Probability that a generation's offspring pair is mutated (0.0–1.0).
    ///
    /// A single Bernoulli trial gates both children of a generation
    /// together; on success each child gets exactly one randomly
    /// positioned gene flip.
    pub mutation_rate: f64,

    /// Number of generations to run.
    ///
    /// The loop is a fixed budget with no convergence-based early exit.
    /// Zero is allowed: the run returns the best of the initial random
    /// population.
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            mutation_rate: 0.1,
            max_generations: 1000,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// The builder clamps rates, but the fields are public; direct writes
    /// are checked here.
    ///
    /// # Errors
    /// Returns a descriptive [`ConfigError`] for the first invalid
    /// parameter found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall {
                size: self.population_size,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate {
                rate: self.mutation_rate,
            });
        }
        Ok(())
    }
}
