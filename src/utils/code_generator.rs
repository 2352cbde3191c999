//! Short code generation.
//!
//! Codes are six characters drawn uniformly from `[a-zA-Z0-9]`. Generation
//! never consults the store, so a fresh code may collide with one already in
//! use; the later write then replaces the earlier mapping.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Characters a generated code may contain.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of every generated code.
pub const CODE_LENGTH: usize = 6;

/// Produces short codes for new links.
///
/// Implementations are pure generators that don't interact with storage.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Pseudo-random generator shared by all requests.
///
/// Holds one PRNG seeded once when the generator is built. Draws are
/// serialized through a mutex.
#[derive(Debug)]
pub struct RandomCodeGenerator {
    rng: Mutex<StdRng>,
}

impl RandomCodeGenerator {
    /// Seeds from the current wall-clock time.
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(nanos)
    }

    /// Builds a generator with a fixed seed, yielding a repeatable sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = self.rng.lock();
        (0..CODE_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
