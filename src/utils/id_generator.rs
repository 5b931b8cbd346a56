use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Symbols a short code is drawn from: lowercase, uppercase, then digits
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Process-wide source of short codes.
///
/// Holds one RNG for the whole process instead of reseeding per call. Codes are
/// not guaranteed unique; the store's primary key is the only uniqueness check.
pub struct CodeGenerator {
    rng: Mutex<StdRng>,
}

impl CodeGenerator {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic generator, same seed yields the same code sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Returns `length` characters, each sampled uniformly from [`ALPHABET`]
    pub fn generate(&self, length: usize) -> String {
        // A panic while holding the lock cannot leave the RNG in a bad state
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        (0..length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
