//! Error types for solver configuration.
//!
//! The solver never reads untrusted external text; the only things that can
//! go wrong are malformed instance data and malformed algorithm parameters.
//! Both fail fast with a [`ConfigError`] instead of producing a nonsensical
//! result.

use thiserror::Error;

/// Errors from item-set and configuration validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Weight and value sequences must be index-aligned.
    #[error("item arrays differ in length: {weights} weights vs {values} values")]
    ItemLengthMismatch {
        /// Length of the weight sequence.
        weights: usize,
        /// Length of the value sequence.
        values: usize,
    },

    /// Worst-two replacement needs at least two population slots.
    #[error("population_size must be at least 2, got {size}")]
    PopulationTooSmall {
        /// The rejected population size.
        size: usize,
    },

    /// Mutation is gated by a Bernoulli trial; its rate must be a probability.
    #[error("mutation_rate must be within [0.0, 1.0], got {rate}")]
    InvalidMutationRate {
        /// The rejected rate.
        rate: f64,
    },
}
