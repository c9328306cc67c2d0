//! Genetic operators for bit-string chromosomes.
//!
//! Single-point crossover and single-bit flip mutation. Both operate on raw
//! gene vectors; the runner rebuilds [`Individual`]s from the offspring
//! genes so cached totals stay consistent.
//!
//! The Bernoulli trial that decides *whether* to mutate lives in the
//! runner, because one trial gates an entire offspring pair.
//!
//! [`Individual`]: crate::Individual

use rand::Rng;

/// Single-point crossover.
///
/// Draws one cut index `c` uniformly from `[0, n)` and splices: child1
/// takes `[0, c)` from `parent1` and `[c, n)` from `parent2`; child2 is the
/// mirror image. With `c = 0`, child1 is a full copy of `parent2` and
/// child2 of `parent1`.
///
/// Empty parents produce empty children without consuming randomness.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    rng: &mut R,
) -> (Vec<bool>, Vec<bool>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n == 0 {
        return (Vec::new(), Vec::new());
    }

    let cut = rng.random_range(0..n);
    (splice(parent1, parent2, cut), splice(parent2, parent1, cut))
}

/// Build one child: `[0, cut)` from `head`, `[cut, n)` from `tail`.
fn splice(head: &[bool], tail: &[bool], cut: usize) -> Vec<bool> {
    let mut child = Vec::with_capacity(head.len());
    child.extend_from_slice(&head[..cut]);
    child.extend_from_slice(&tail[cut..]);
    child
}

/// Flips one uniformly chosen gene in place.
///
/// Empty gene vectors are left untouched.
pub fn flip_mutation<R: Rng>(genes: &mut [bool], rng: &mut R) {
    if genes.is_empty() {
        return;
    }
    let idx = rng.random_range(0..genes.len());
    genes[idx] = !genes[idx];
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_splice_at_zero_copies_tail_parent() {
        let a = vec![true, true, true, true];
        let b = vec![false, false, false, false];
        assert_eq!(splice(&a, &b, 0), b);
    }

    #[test]
    fn test_splice_at_n_copies_head_parent() {
        let a = vec![true, true, true, true];
        let b = vec![false, false, false, false];
        assert_eq!(splice(&a, &b, a.len()), a);
    }

    #[test]
    fn test_splice_mid_cut() {
        let a = vec![true, true, true, true];
        let b = vec![false, false, false, false];
        assert_eq!(splice(&a, &b, 2), vec![true, true, false, false]);
        assert_eq!(splice(&b, &a, 2), vec![false, false, true, true]);
    }

    #[test]
    fn test_crossover_children_mirror_each_other() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = vec![true, false, true, false, true, false];
        let p2 = vec![false, true, false, true, false, true];

        for _ in 0..100 {
            let (c1, c2) = single_point_crossover(&p1, &p2, &mut rng);
            assert_eq!(c1.len(), p1.len());
            assert_eq!(c2.len(), p2.len());
            // At every position the children hold opposite parents' genes.
            for i in 0..p1.len() {
                assert!(
                    (c1[i] == p1[i] && c2[i] == p2[i]) || (c1[i] == p2[i] && c2[i] == p1[i]),
                    "position {i} not inherited from a parent"
                );
            }
        }
    }

    #[test]
    fn test_crossover_identical_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = vec![true, false, true];
        let (c1, c2) = single_point_crossover(&p, &p, &mut rng);
        assert_eq!(c1, p);
        assert_eq!(c2, p);
    }

    #[test]
    fn test_crossover_empty_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let (c1, c2) = single_point_crossover(&[], &[], &mut rng);
        assert!(c1.is_empty());
        assert!(c2.is_empty());
    }

    #[test]
    fn test_crossover_single_gene() {
        // n = 1 forces cut = 0: children are full copies of the
        // opposite parent.
        let mut rng = StdRng::seed_from_u64(42);
        let (c1, c2) = single_point_crossover(&[true], &[false], &mut rng);
        assert_eq!(c1, vec![false]);
        assert_eq!(c2, vec![true]);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        single_point_crossover(&[true], &[true, false], &mut rng);
    }

    #[test]
    fn test_mutation_flips_exactly_one_gene() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let original = vec![true, false, true, false, true];
            let mut mutated = original.clone();
            flip_mutation(&mut mutated, &mut rng);

            let flipped = original
                .iter()
                .zip(&mutated)
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(flipped, 1);
        }
    }

    #[test]
    fn test_mutation_empty_is_noop() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut genes: Vec<bool> = vec![];
        flip_mutation(&mut genes, &mut rng);
        assert!(genes.is_empty());
    }

    #[test]
    fn test_mutation_single_gene() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut genes = vec![false];
        flip_mutation(&mut genes, &mut rng);
        assert_eq!(genes, vec![true]);
    }
}
