//! Deterministic random number generation for synthetic datasets.
//!
//! RULE: the generator never calls a platform RNG.
//! Every stream is derived from one master seed and a stable slot
//! (master_seed XOR slot * golden-ratio constant), so:
//!   - adding a new stream never changes existing streams
//!   - each stream is reproducible in isolation

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for one part of a dataset.
pub struct StreamRng {
    pub name: &'static str,
    inner:    Pcg64Mcg,
}

impl StreamRng {
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            name:  "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll an index into a slice of length `len`.
    pub fn pick(&mut self, len: usize) -> usize {
        self.next_u64_below(len as u64) as usize
    }

    /// Roll a u64 in [low, high].
    pub fn range_inclusive(&mut self, low: u64, high: u64) -> u64 {
        low + self.next_u64_below(high - low + 1)
    }

    /// Roll a float in [low, high).
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Hands out one stream per slot for a single master seed.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_slot(&self, slot: StreamSlot) -> StreamRng {
        StreamRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stream assignments.
/// NEVER reorder or remove entries — only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Sellers   = 0,
    Products  = 1,
    Purchases = 2,
    Anomalies = 3,
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sellers   => "sellers",
            Self::Products  => "products",
            Self::Purchases => "purchases",
            Self::Anomalies => "anomalies",
        }
    }
}
