//! Steady-state genetic algorithm for the 0/1 knapsack problem.
//!
//! Given item weights, values, and a knapsack capacity, the solver searches
//! for a subset of items maximizing total value. The search is a
//! fixed-recipe steady-state GA:
//!
//! - **Representation**: one gene (inclusion flag) per item
//! - **Selection**: binary tournament on total value
//! - **Crossover**: single-point, producing a mirrored offspring pair
//! - **Mutation**: single gene flip per child, one Bernoulli trial gating
//!   the whole pair
//! - **Replacement**: steady-state eviction of the two weakest members
//! - **Termination**: fixed generation budget, no early exit
//!
//! The capacity constraint is deliberately *not* enforced during evolution:
//! `total_weight` is tracked and reported, but fitness is raw total value.
//! Callers judge feasibility of the returned solution themselves.
//!
//! # Key Types
//!
//! - [`ItemSet`]: validated problem instance (weights, values, capacity)
//! - [`GaConfig`]: algorithm parameters (population size, mutation rate,
//!   generation budget, seed)
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best individual found, with per-generation statistics
//!
//! # Usage
//!
//! ```
//! use u_knapsack::{GaConfig, GaRunner, ItemSet};
//!
//! let items = ItemSet::new(vec![2, 3, 4, 5], vec![3, 4, 5, 6], 5)?;
//! let config = GaConfig::default().with_seed(42);
//!
//! let result = GaRunner::run(&items, &config)?;
//! println!(
//!     "genes: {}; total value: {}; total weight: {}",
//!     result.best,
//!     result.best.total_value(),
//!     result.best.total_weight(),
//! );
//! # Ok::<(), u_knapsack::ConfigError>(())
//! ```
//!
//! # Determinism
//!
//! All randomness flows through one seedable RNG per run. Fixing
//! [`GaConfig::seed`] makes runs fully reproducible.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*
//! - Whitley (1989), *The GENITOR Algorithm* (steady-state replacement)

mod config;
mod error;
mod individual;
mod items;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use error::ConfigError;
pub use individual::Individual;
pub use items::ItemSet;
pub use runner::{GaResult, GaRunner};
