//! Candidate solutions with cached fitness.

use std::fmt;

use rand::Rng;

use crate::items::ItemSet;

/// One candidate solution: a gene per item plus its derived totals.
///
/// `genes[i] == true` means item `i` is packed. The totals are computed
/// once at construction in a single pass and never recomputed — an
/// `Individual` is immutable after it is built, so `total_value` and
/// `total_weight` are always consistent with `genes` for the item set used
/// to build it.
///
/// Fitness comparisons throughout the solver use [`total_value`]
/// directly; [`total_weight`] is tracked for the caller to judge
/// feasibility but never enters the comparison.
///
/// [`total_value`]: Self::total_value
/// [`total_weight`]: Self::total_weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    genes: Vec<bool>,
    total_value: u64,
    total_weight: u64,
}

impl Individual {
    /// Builds an individual from a gene vector, computing both totals in
    /// one linear pass over the items.
    ///
    /// The gene vector length must equal `items.len()`.
    pub fn new(genes: Vec<bool>, items: &ItemSet) -> Self {
        debug_assert_eq!(genes.len(), items.len(), "one gene per item");

        let mut total_value = 0u64;
        let mut total_weight = 0u64;
        for (i, &included) in genes.iter().enumerate() {
            if included {
                total_value += items.values()[i];
                total_weight += items.weights()[i];
            }
        }

        Self {
            genes,
            total_value,
            total_weight,
        }
    }

    /// Creates an individual with uniformly random genes.
    ///
    /// Each gene is an unbiased coin flip; no capacity filtering happens
    /// here, so the result may be infeasible.
    pub fn random<R: Rng>(items: &ItemSet, rng: &mut R) -> Self {
        let genes = (0..items.len()).map(|_| rng.random_bool(0.5)).collect();
        Self::new(genes, items)
    }

    /// The inclusion flags, one per item.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Total value of the packed items.
    pub fn total_value(&self) -> u64 {
        self.total_value
    }

    /// Total weight of the packed items.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }
}

impl fmt::Display for Individual {
    /// Renders the gene vector as `[0, 1, ...]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, &gene) in self.genes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", u8::from(gene))?;
        }
        write!(f, "]")
    }
}
