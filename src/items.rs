//! Knapsack instance data.

use crate::error::ConfigError;

/// A 0/1 knapsack instance: parallel weight/value sequences and a capacity.
///
/// Item `i` has weight `weights[i]` and value `values[i]`. The instance is
/// read-only for the duration of a run; every [`Individual`] fitness
/// computation borrows it immutably.
///
/// The capacity is carried with the instance and reported alongside
/// solutions, but the evolutionary loop itself never rejects over-capacity
/// candidates (see [`GaRunner::run`]).
///
/// [`Individual`]: crate::Individual
/// [`GaRunner::run`]: crate::GaRunner::run
///
/// # Examples
///
/// ```
/// use u_knapsack::ItemSet;
///
/// let items = ItemSet::new(vec![2, 3, 4, 5], vec![3, 4, 5, 6], 5)?;
/// assert_eq!(items.len(), 4);
/// assert_eq!(items.capacity(), 5);
/// # Ok::<(), u_knapsack::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSet {
    weights: Vec<u64>,
    values: Vec<u64>,
    capacity: u64,
}

impl ItemSet {
    /// Creates an item set from parallel weight/value sequences.
    ///
    /// # Errors
    /// Returns [`ConfigError::ItemLengthMismatch`] if the sequences differ
    /// in length.
    pub fn new(weights: Vec<u64>, values: Vec<u64>, capacity: u64) -> Result<Self, ConfigError> {
        if weights.len() != values.len() {
            return Err(ConfigError::ItemLengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            weights,
            values,
            capacity,
        })
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if the instance has no items.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Item weights, index-aligned with [`values`](Self::values).
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    /// Item values, index-aligned with [`weights`](Self::weights).
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// The weight budget.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Sum of all item values: an upper bound on any individual's total value.
    pub fn max_value(&self) -> u64 {
        self.values.iter().sum()
    }

    /// Sum of all item weights: an upper bound on any individual's total weight.
    pub fn max_weight(&self) -> u64 {
        self.weights.iter().sum()
    }
}
