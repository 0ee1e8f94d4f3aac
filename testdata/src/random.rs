//! Seeded random streams and random strings.
//!
//! Every random decision of a run draws from a [`SeedStream`], so the same
//! seed always yields the same output. Independent consumers (each test
//! plan, each candidate of a planner, external steps) get their own derived
//! stream and cannot disturb each other's sequence.

use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha512};

/// Source of reproducible random number generators for a seed.
///
/// Generators are ChaCha8 so a seed yields the same sequence on every
/// platform and `rand` release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedStream {
    seed: String,
}

impl SeedStream {
    pub fn new(seed: impl Into<String>) -> Self {
        Self { seed: seed.into() }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Generator for the seed itself.
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(derive(&self.seed))
    }

    /// Generator for the `index`-th consumer.
    pub fn for_index(&self, index: usize) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(derive(&format!("{}:{}", self.seed, index)))
    }

    /// Generator for a named consumer.
    pub fn for_label(&self, label: &str) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(derive(&format!("{}:{}", self.seed, label)))
    }

    /// Stream derived for a named consumer, for consumers that fan out again.
    pub fn child(&self, label: &str) -> SeedStream {
        SeedStream::new(format!("{}:{}", self.seed, label))
    }
}

/// First eight bytes of the SHA-512 digest, little endian.
fn derive(text: &str) -> u64 {
    let digest = Sha512::digest(text.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Random alphanumeric strings.
pub struct RandomString;

impl RandomString {
    pub fn exactly<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
        (0..length).map(|_| rng.sample(Alphanumeric) as char).collect()
    }

    /// String with a length in `[min, max]`; `max` below `min` means `min`.
    pub fn between<R: Rng + ?Sized>(rng: &mut R, min: usize, max: usize) -> String {
        let length = Self::length(rng, min, max);
        Self::exactly(rng, length)
    }

    /// Length in `[min, max]`, drawn over `u64` so 32 and 64 bit targets
    /// consume the generator identically. `max` below `min` means `min`.
    pub fn length<R: Rng + ?Sized>(rng: &mut R, min: usize, max: usize) -> usize {
        if max > min {
            rng.gen_range(min as u64..=max as u64) as usize
        } else {
            min
        }
    }
}
