//! Seeded environment for simulations and tests.

use std::sync::{Arc, Mutex, PoisonError};

use cipherpad_core::Environment;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic environment backed by a seeded ChaCha8 generator.
///
/// Clones share the generator, so a workbench and its engine draw from one
/// stream.
#[derive(Clone)]
pub struct SimEnv {
    seed: u64,
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl SimEnv {
    /// Create an environment from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        tracing::debug!(seed, "creating simulation environment");
        Self { seed, rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))) }
    }

    /// The seed this environment was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Environment for SimEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner).fill_bytes(buffer);
    }
}
