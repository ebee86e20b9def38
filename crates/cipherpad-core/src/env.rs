//! Environment abstraction for deterministic testing.
//!
//! The `Environment` trait decouples the mapping engine from the system's
//! source of randomness. Production front ends draw from OS entropy; tests
//! and simulations plug in a seeded generator so every shuffled mapping can
//! be reproduced.
//!
//! # Invariants
//!
//! - Determinism: Given the same seed, `random_bytes()` produces the same
//!   sequence
//! - Uniformity: `random_index(n)` is uniform over `0..n`
//! - Isolation: Implementations must not share global state

/// Abstract source of randomness.
///
/// The engine only ever needs randomness for the initial (and any later)
/// shuffle of the mapping.
pub trait Environment: Clone + Send + Sync + 'static {
    /// Fills the provided buffer with random bytes.
    ///
    /// # Invariants
    ///
    /// - Determinism during simulations: Given the same RNG seed, this produces
    ///   the same sequence of bytes
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Generates a random `u64`.
    fn random_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }

    /// Generates an index uniformly distributed over `0..bound`.
    ///
    /// Uses rejection sampling so that no index is favoured when `bound` does
    /// not divide 2^64. Returns 0 when `bound` is 0 or 1.
    #[allow(clippy::cast_possible_truncation)]
    fn random_index(&self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }

        let bound = bound as u64;
        // 2^64 mod bound: draws below this would bias the low indices
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let draw = self.random_u64();
            if draw >= threshold {
                return (draw % bound) as usize;
            }
        }
    }
}

/// Shuffle `items` in place into a uniformly random permutation.
///
/// Fisher-Yates: walks from the last index down, swapping each position with
/// a uniformly chosen index at or below it.
pub fn shuffle<T, E: Environment>(items: &mut [T], env: &E) {
    for i in (1..items.len()).rev() {
        let j = env.random_index(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
pub(crate) mod test_env {
    use std::sync::{Arc, Mutex, PoisonError};

    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::Environment;

    /// Seeded environment for unit tests.
    #[derive(Clone)]
    pub(crate) struct TestEnv {
        rng: Arc<Mutex<ChaCha8Rng>>,
    }

    impl TestEnv {
        pub(crate) fn with_seed(seed: u64) -> Self {
            Self { rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))) }
        }
    }

    impl Environment for TestEnv {
        fn random_bytes(&self, buffer: &mut [u8]) {
            self.rng.lock().unwrap_or_else(PoisonError::into_inner).fill_bytes(buffer);
        }
    }

    /// Environment that replays a fixed sequence of `u64` draws.
    #[derive(Clone)]
    pub(crate) struct ScriptedEnv {
        draws: Arc<Mutex<Vec<u64>>>,
    }

    impl ScriptedEnv {
        pub(crate) fn new(mut draws: Vec<u64>) -> Self {
            draws.reverse();
            Self { draws: Arc::new(Mutex::new(draws)) }
        }
    }

    impl Environment for ScriptedEnv {
        fn random_bytes(&self, buffer: &mut [u8]) {
            let next = self.draws.lock().unwrap_or_else(PoisonError::into_inner).pop().unwrap_or(0);
            for (dst, src) in buffer.iter_mut().zip(next.to_be_bytes()) {
                *dst = src;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        test_env::{ScriptedEnv, TestEnv},
        *,
    };

    #[test]
    fn random_index_stays_in_bounds() {
        let env = TestEnv::with_seed(7);
        for bound in 1..40 {
            for _ in 0..50 {
                assert!(env.random_index(bound) < bound);
            }
        }
        assert_eq!(env.random_index(0), 0);
    }

    #[test]
    fn random_index_rejects_biased_draws() {
        // bound 3: 2^64 mod 3 == 1, so a draw of 0 must be rejected
        let env = ScriptedEnv::new(vec![0, 5]);
        assert_eq!(env.random_index(3), 2);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let env = TestEnv::with_seed(42);
        let mut items: Vec<u32> = (0..26).collect();
        shuffle(&mut items, &env);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..26).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_same_seed_same_order() {
        let mut first: Vec<u32> = (0..26).collect();
        let mut second = first.clone();
        shuffle(&mut first, &TestEnv::with_seed(99));
        shuffle(&mut second, &TestEnv::with_seed(99));
        assert_eq!(first, second);
    }

    #[test]
    fn shuffle_follows_fisher_yates_draws() {
        // i=2 draws 3 % 3 = 0, then i=1 draws 0 % 2 = 0
        let env = ScriptedEnv::new(vec![3, 0]);
        let mut items = ['a', 'b', 'c'];
        shuffle(&mut items, &env);
        assert_eq!(items, ['b', 'c', 'a']);
    }

    #[test]
    fn shuffle_is_roughly_uniform() {
        let env = TestEnv::with_seed(2024);
        let mut counts = [[0u32; 3]; 3];
        for _ in 0..6000 {
            let mut items = [0usize, 1, 2];
            shuffle(&mut items, &env);
            for (position, &item) in items.iter().enumerate() {
                counts[item][position] += 1;
            }
        }

        // Each item lands in each position about a third of the time
        for row in counts {
            for count in row {
                assert!((1700..2300).contains(&count), "skewed count {count}");
            }
        }
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let env = TestEnv::with_seed(1);
        let mut empty: [char; 0] = [];
        shuffle(&mut empty, &env);
        let mut one = ['x'];
        shuffle(&mut one, &env);
        assert_eq!(one, ['x']);
    }
}
