use rand::{rngs::OsRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Random `f64` key generator.
///
/// Uses the xoshiro256** PRNG so a run can be replayed from its seed.
///
/// # Examples
///
/// ```
/// use doublekey_util::KeyFuzzer;
///
/// let fuzzer = KeyFuzzer::from_u64(7);
///
/// let key = fuzzer.random_key(1000.0);
/// assert!((0.0..1000.0).contains(&key));
///
/// let keys = fuzzer.distinct_keys(50, 1000.0);
/// assert_eq!(keys.len(), 50);
/// ```
#[derive(Clone)]
pub struct KeyFuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Arc<Mutex<Xoshiro256StarStar>>,
}

impl KeyFuzzer {
    /// Create a fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random one is drawn from `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: Arc::new(Mutex::new(Xoshiro256StarStar::from_seed(seed))),
        }
    }

    /// Create a fuzzer from a short seed, spread over the full 32 bytes.
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for chunk in bytes.chunks_mut(8) {
            chunk.copy_from_slice(&seed.to_le_bytes());
        }
        // xoshiro must not start from an all-zero state.
        bytes[0] ^= 0x5a;
        Self::new(Some(bytes))
    }

    fn rng(&self) -> MutexGuard<'_, Xoshiro256StarStar> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Generate a random f64 in the range [0, 1).
    pub fn random(&self) -> f64 {
        self.rng().gen::<f64>()
    }

    /// Generate a random key in the range [0, range).
    pub fn random_key(&self, range: f64) -> f64 {
        self.random() * range
    }

    /// Generate `n` pairwise distinct keys in [0, range), in random order.
    ///
    /// `range` must leave room for `n` distinct values.
    pub fn distinct_keys(&self, n: usize, range: f64) -> Vec<f64> {
        let mut seen = HashSet::with_capacity(n);
        let mut keys = Vec::with_capacity(n);
        while keys.len() < n {
            let key = self.random_key(range);
            if seen.insert(key.to_bits()) {
                keys.push(key);
            }
        }
        keys
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        self.rng().gen_range(min..=max)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&self, items: &mut [T]) {
        items.shuffle(&mut *self.rng());
    }

    /// Pick a random element from a slice.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> &'a T {
        let idx = self.rng().gen_range(0..elements.len());
        &elements[idx]
    }
}
