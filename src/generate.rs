use std::ops::RangeInclusive;

use tracing::{debug, warn};

use crate::config::{CodeConfig, HashVariant};
use crate::encode::encode_fixed;
use crate::error::{MurmurCodeError, Result};
use crate::murmur32::hash32;
use crate::murmur128::hash128_with_seed;
use crate::store::CodeStore;

/// Probability that `item_count` uniform draws from `space` values collide
/// at least once: `1 - e^(-n^2 / 2d)`.
#[must_use]
pub fn collision_probability(item_count: usize, space: f64) -> f64 {
    let n = item_count as f64;
    1.0 - (-(n * n) / (2.0 * space)).exp()
}

/// Expected number of colliding pairs among `item_count` draws from `space`
/// values: `n(n-1) / 2d`.
#[must_use]
pub fn expected_collisions(item_count: usize, space: f64) -> f64 {
    let n = item_count as f64;
    n * (n - 1.0) / (2.0 * space)
}

/// Short code generator with collision retry.
///
/// Hashing and encoding are deterministic and make no uniqueness promise.
/// Retries perturb the seed with a nonce until the caller's key space
/// accepts the code.
pub struct CodeGenerator {
    config: CodeConfig,
}

impl CodeGenerator {
    /// Create a new generator with the given config.
    pub fn new(config: CodeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodeConfig {
        &self.config
    }

    /// Hash `input` with the configured variant, projected to 64 bits.
    pub fn hash_value(&self, input: impl AsRef<[u8]>, seed: u32) -> u64 {
        match self.config.variant {
            HashVariant::X86_32 => u64::from(hash32(input, seed)),
            HashVariant::X64_128 => hash128_with_seed(input, seed).low64(),
        }
    }

    /// Compute the shortest code length whose collision probability for
    /// `item_count` codes stays under `max_collision_prob`.
    ///
    /// The space at length `l` is `radix^l`. Starting from `min_length`
    /// (never below 1), returns the first length that satisfies the
    /// threshold, or `max_length` if none does.
    pub fn optimal_length(&self, item_count: usize) -> usize {
        let radix = self.config.alphabet.radix() as f64;
        let min_length = self.config.min_length.max(1);

        for length in min_length..=self.config.max_length {
            let space = radix.powi(i32::try_from(length).unwrap_or(i32::MAX));
            if collision_probability(item_count, space) < self.config.max_collision_prob {
                return length;
            }
        }

        self.config.max_length.max(min_length)
    }

    /// Code lengths to try, in order, for a key space of `item_count` codes.
    ///
    /// A fixed `length` is the only candidate length. Otherwise the range
    /// runs from [`optimal_length`](Self::optimal_length) up to `max_length`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLength` if the fixed length is 0.
    pub fn lengths(&self, item_count: usize) -> Result<RangeInclusive<usize>> {
        match self.config.length {
            Some(0) => Err(MurmurCodeError::InvalidLength { length: 0 }),
            Some(length) => Ok(length..=length),
            None => {
                let start = self.optimal_length(item_count);
                Ok(start..=self.config.max_length.max(start))
            }
        }
    }

    /// Generate the candidate code of `length` symbols for `input` at retry
    /// `nonce`.
    ///
    /// Nonce 0 hashes with the configured seed; later nonces add to it.
    pub fn candidate(&self, input: impl AsRef<[u8]>, nonce: u32, length: usize) -> String {
        let seed = self.config.seed.wrapping_add(nonce);
        let value = self.hash_value(input, seed);
        encode_fixed(value, &self.config.alphabet, length)
    }

    /// Generate a code for `input` that `exists` reports as free, sized for
    /// a key space of `item_count` codes.
    ///
    /// At each length from [`lengths`](Self::lengths), tries nonces
    /// `0..max_attempts` in order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLength` for a fixed length of 0, or `Exhausted` if
    /// every candidate is taken.
    pub fn generate<F>(
        &self,
        input: impl AsRef<[u8]>,
        item_count: usize,
        exists: F,
    ) -> Result<String>
    where
        F: Fn(&str) -> bool,
    {
        let input = input.as_ref();
        let mut attempts = 0u32;
        for length in self.lengths(item_count)? {
            for nonce in 0..self.config.max_attempts {
                attempts = attempts.saturating_add(1);
                let code = self.candidate(input, nonce, length);
                if !exists(&code) {
                    return Ok(code);
                }
                debug!(code = %code, nonce, length, "short code taken, retrying");
            }
        }

        warn!(attempts, "short code attempts exhausted");
        Err(MurmurCodeError::Exhausted { attempts })
    }

    /// Store `value` under a fresh code and return the code.
    ///
    /// The code length is planned from the number of codes already in
    /// `store`. If a candidate already maps to the same value, that code is
    /// returned instead of storing a duplicate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLength` for a fixed length of 0, `Exhausted` if every
    /// candidate holds a different value, or any non-conflict error from
    /// the store.
    pub fn shorten<S>(&self, store: &S, value: &str) -> Result<String>
    where
        S: CodeStore + ?Sized,
    {
        let mut attempts = 0u32;
        for length in self.lengths(store.len())? {
            for nonce in 0..self.config.max_attempts {
                attempts = attempts.saturating_add(1);
                let code = self.candidate(value, nonce, length);
                match store.put(&code, value) {
                    Ok(()) => return Ok(code),
                    Err(MurmurCodeError::AlreadyExists { .. }) => {
                        if store.get(&code).is_ok_and(|existing| existing == value) {
                            return Ok(code);
                        }
                        debug!(code = %code, nonce, length, "short code collision, retrying");
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        warn!(attempts, "short code attempts exhausted");
        Err(MurmurCodeError::Exhausted { attempts })
    }

    /// Look up the value behind `code`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the store has nothing under `code`.
    pub fn resolve<S>(&self, store: &S, code: &str) -> Result<String>
    where
        S: CodeStore + ?Sized,
    {
        store.get(code)
    }
}
