//! Production Environment implementation using OS randomness.
//!
//! This module provides `SystemEnv`, the production implementation of the
//! `Environment` trait backed by `getrandom`.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use cipherpad_core::Environment;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Distinguishes fallback streams created within the same nanosecond.
static FALLBACK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Production environment using OS entropy.
#[derive(Clone, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        if let Err(e) = getrandom::fill(buffer) {
            // NOTE: Should never fail on supported platforms. A constant fill
            // would stall rejection sampling, so fall back to a clock-seeded
            // stream instead.
            tracing::error!("getrandom failed: {}", e);
            fallback_bytes(buffer);
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn fallback_bytes(buffer: &mut [u8]) {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.as_nanos() as u64);
    let counter = FALLBACK_COUNTER.fetch_add(1, Ordering::Relaxed);
    ChaCha8Rng::seed_from_u64(nanos ^ counter.rotate_left(32)).fill_bytes(buffer);
}
