//! Randomization providers.
//!
//! Crossover operators draw their segment boundaries from a
//! [`Randomization`] provider instead of a concrete RNG, so deterministic
//! stubs can stand in during testing without mutating process-wide state.
//! The contract is deliberately narrow: "give me `count` distinct integers
//! from a half-open range" is all the operators in this crate consume.
//!
//! # Providers
//!
//! - [`BasicRandomization`]: thread-local OS-seeded generator, the default
//! - [`SeededRandomization`]: reproducible sequences for tests and replays

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Source of distinct random integers.
///
/// Implementations must be `Send + Sync`; concurrent crossover is only as
/// thread-safe as the installed provider.
pub trait Randomization: Send + Sync {
    /// Returns `count` pairwise-distinct integers uniformly drawn from
    /// `[min, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `count > max - min` (the range cannot supply that many
    /// distinct values) or if `min > max`.
    fn unique_ints(&self, count: usize, min: usize, max: usize) -> Vec<usize>;
}

/// Default provider backed by the thread-local generator from [`rand::rng`].
///
/// Stateless and trivially thread-safe; each call draws from the calling
/// thread's own generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicRandomization;

impl Randomization for BasicRandomization {
    fn unique_ints(&self, count: usize, min: usize, max: usize) -> Vec<usize> {
        sample_unique(&mut rand::rng(), count, min, max)
    }
}

/// Deterministic provider for reproducible runs.
///
/// Wraps a seeded [`StdRng`] behind a mutex so the provider stays `Sync`;
/// concurrent callers serialize on the lock. [`reset`](Self::reset) restarts
/// the sequence, which is the only mutation affordance — useful for
/// replaying a crossover in tests.
///
/// # Examples
///
/// ```
/// use evo_crossover::random::{Randomization, SeededRandomization};
///
/// let provider = SeededRandomization::new(42);
/// let first = provider.unique_ints(2, 0, 10);
/// provider.reset(42);
/// assert_eq!(provider.unique_ints(2, 0, 10), first);
/// ```
#[derive(Debug)]
pub struct SeededRandomization {
    rng: Mutex<StdRng>,
}

impl SeededRandomization {
    /// Creates a provider whose sequence is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Re-seeds the generator, restarting the deterministic sequence.
    pub fn reset(&self, seed: u64) {
        *self.lock() = StdRng::seed_from_u64(seed);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StdRng> {
        self.rng.lock().expect("randomization lock poisoned")
    }
}

impl Randomization for SeededRandomization {
    fn unique_ints(&self, count: usize, min: usize, max: usize) -> Vec<usize> {
        sample_unique(&mut *self.lock(), count, min, max)
    }
}

/// Draws `count` distinct indices from `[min, max)` via Floyd-style
/// index sampling.
fn sample_unique<R: Rng>(rng: &mut R, count: usize, min: usize, max: usize) -> Vec<usize> {
    assert!(min <= max, "invalid range [{min}, {max})");
    let span = max - min;
    assert!(
        count <= span,
        "cannot draw {count} distinct integers from [{min}, {max})"
    );
    index::sample(rng, span, count)
        .into_iter()
        .map(|i| i + min)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unique_ints_are_distinct_and_in_range() {
        let provider = BasicRandomization;
        for _ in 0..100 {
            let picks = provider.unique_ints(5, 2, 12);
            assert_eq!(picks.len(), 5);
            let set: HashSet<usize> = picks.iter().copied().collect();
            assert_eq!(set.len(), 5, "repeated pick in {picks:?}");
            assert!(picks.iter().all(|&p| (2..12).contains(&p)));
        }
    }

    #[test]
    fn test_full_span_draw_is_a_permutation_of_the_range() {
        let provider = SeededRandomization::new(7);
        let mut picks = provider.unique_ints(6, 0, 6);
        picks.sort_unstable();
        assert_eq!(picks, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "cannot draw")]
    fn test_overdrawing_the_range_panics() {
        BasicRandomization.unique_ints(3, 0, 2);
    }

    #[test]
    fn test_seeded_sequences_are_reproducible() {
        let a = SeededRandomization::new(123);
        let b = SeededRandomization::new(123);
        for _ in 0..20 {
            assert_eq!(a.unique_ints(2, 0, 50), b.unique_ints(2, 0, 50));
        }
    }

    #[test]
    fn test_reset_restarts_the_sequence() {
        let provider = SeededRandomization::new(9);
        let first = provider.unique_ints(3, 0, 100);
        let second = provider.unique_ints(3, 0, 100);
        provider.reset(9);
        assert_eq!(provider.unique_ints(3, 0, 100), first);
        assert_eq!(provider.unique_ints(3, 0, 100), second);
    }
}
