//! Environment selection for the front end.

use std::sync::{Arc, Mutex, PoisonError};

use cipherpad_core::Environment;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::system_env::SystemEnv;

/// Randomness source chosen at startup.
///
/// `--seed` selects a seeded generator so a mapping can be reproduced;
/// otherwise OS entropy is used.
#[derive(Clone)]
pub enum CliEnv {
    /// OS entropy.
    System(SystemEnv),

    /// ChaCha8 seeded from the command line.
    Seeded(Arc<Mutex<ChaCha8Rng>>),
}

impl CliEnv {
    /// Seeded environment.
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))))
    }

    /// System environment.
    pub fn system() -> Self {
        Self::System(SystemEnv::new())
    }
}

impl Environment for CliEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        match self {
            Self::System(env) => env.random_bytes(buffer),
            Self::Seeded(rng) => {
                rng.lock().unwrap_or_else(PoisonError::into_inner).fill_bytes(buffer);
            },
        }
    }
}
