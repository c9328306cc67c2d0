//! The steady-state evolutionary loop.
//!
//! [`GaRunner`] orchestrates the complete run: initialization → selection →
//! crossover → mutation → replacement, repeated for a fixed generation
//! budget.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GaConfig;
use crate::error::ConfigError;
use crate::individual::Individual;
use crate::items::ItemSet;
use crate::operators::{flip_mutation, single_point_crossover};
use crate::selection::binary_tournament;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best individual in the final population.
    pub best: Individual,

    /// Best total value (same as `best.total_value()`).
    pub best_value: u64,

    /// Number of generations executed (always `config.max_generations`).
    pub generations: usize,

    /// Best population value after initialization and after each
    /// generation: `max_generations + 1` entries.
    pub value_history: Vec<u64>,
}

/// Executes the steady-state evolutionary loop.
///
/// Each generation produces one offspring pair via two binary tournaments,
/// single-point crossover, and a gated mutation, then offers both children
/// to the worst two population slots. The loop always runs exactly
/// `max_generations` iterations; there is no early exit.
///
/// Over-capacity individuals are never filtered or penalized anywhere in
/// the loop — `total_weight` is reported for the caller to judge
/// feasibility against [`ItemSet::capacity`].
///
/// # Usage
///
/// ```
/// use u_knapsack::{GaConfig, GaRunner, ItemSet};
///
/// let items = ItemSet::new(vec![2, 3, 4, 5], vec![3, 4, 5, 6], 5)?;
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&items, &config)?;
/// println!("{}: value {}", result.best, result.best_value);
/// # Ok::<(), u_knapsack::ConfigError>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion and returns the best individual found.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the configuration is invalid. A
    /// configuration error is always signalled as `Err`; a successful run
    /// always produces a (possibly poor) solution.
    pub fn run(items: &ItemSet, config: &GaConfig) -> Result<GaResult, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Initial population: unbiased coin flips, no capacity filtering.
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::random(items, &mut rng))
            .collect();

        let mut value_history = Vec::with_capacity(config.max_generations + 1);
        value_history.push(best_of(&population).total_value());

        for _ in 0..config.max_generations {
            let parent_a = binary_tournament(&population, &mut rng);
            let parent_b = binary_tournament(&population, &mut rng);

            let (mut genes1, mut genes2) = single_point_crossover(
                population[parent_a].genes(),
                population[parent_b].genes(),
                &mut rng,
            );

            // One trial gates the whole offspring pair; the flip positions
            // are drawn independently.
            if rng.random_range(0.0..1.0) < config.mutation_rate {
                flip_mutation(&mut genes1, &mut rng);
                flip_mutation(&mut genes2, &mut rng);
            }

            let child1 = Individual::new(genes1, items);
            let child2 = Individual::new(genes2, items);

            replace_worst(&mut population, child1, child2);

            value_history.push(best_of(&population).total_value());
        }

        let best = best_of(&population).clone();
        Ok(GaResult {
            best_value: best.total_value(),
            best,
            generations: config.max_generations,
            value_history,
        })
    }
}

/// Steady-state replacement: each child may evict one of the two weakest
/// members, at the slot where that member actually lives.
///
/// One scan finds the indices of the two lowest-value members. Children
/// are offered in order; a child evicts the weakest remaining candidate
/// whose value it strictly exceeds, and is otherwise discarded.
fn replace_worst(population: &mut [Individual], child1: Individual, child2: Individual) {
    let (worst, second) = worst_two(population);
    // Weakest first; a slot is consumed once a child takes it.
    let mut candidates = vec![worst, second];

    for child in [child1, child2] {
        let beaten = candidates
            .iter()
            .position(|&idx| child.total_value() > population[idx].total_value());
        if let Some(pos) = beaten {
            let idx = candidates.remove(pos);
            population[idx] = child;
        }
    }
}

/// Indices of the two lowest-value members, weakest first.
///
/// Ties are broken by scan order: the first-encountered member takes the
/// lower rank.
fn worst_two(population: &[Individual]) -> (usize, usize) {
    debug_assert!(population.len() >= 2, "worst-two needs two members");

    let (mut worst, mut second) = if population[1].total_value() < population[0].total_value() {
        (1, 0)
    } else {
        (0, 1)
    };

    for (idx, member) in population.iter().enumerate().skip(2) {
        if member.total_value() < population[worst].total_value() {
            second = worst;
            worst = idx;
        } else if member.total_value() < population[second].total_value() {
            second = idx;
        }
    }

    (worst, second)
}

/// First-encountered member with the maximum total value.
fn best_of(population: &[Individual]) -> &Individual {
    debug_assert!(!population.is_empty());

    let mut best = &population[0];
    for member in &population[1..] {
        if member.total_value() > best.total_value() {
            best = member;
        }
    }
    best
}
