//! Bounded history of recently generated names.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};

/// Default number of names kept per set.
pub const DEFAULT_RECENCY_CAPACITY: usize = 100;

/// What to do when the recency filter removes every candidate of a
/// non-empty pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecencyPolicy {
    /// Filter unconditionally; the generation call returns nothing.
    #[default]
    Strict,
    /// Fall back to the unfiltered pool.
    FallbackToUnfiltered,
}

impl RecencyPolicy {
    /// Applies the policy to `pool`, dropping names for which `is_recent`
    /// holds.
    pub fn filter(self, pool: Vec<String>, is_recent: impl Fn(&str) -> bool) -> Vec<String> {
        let filtered: Vec<String> = pool.iter().filter(|n| !is_recent(n)).cloned().collect();
        match self {
            RecencyPolicy::FallbackToUnfiltered if filtered.is_empty() => pool,
            _ => filtered,
        }
    }
}

/// Recently returned first and last names.
///
/// Sizes are bounded by `capacity`; when an insert pushes a set over the
/// bound a random element is evicted. This is an anti-repetition heuristic,
/// not an LRU. Sets are ordered so eviction is reproducible under a seeded
/// RNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecencyState {
    first_names: BTreeSet<String>,
    last_names: BTreeSet<String>,
    capacity: usize,
}

impl Default for RecencyState {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_RECENCY_CAPACITY)
    }
}

impl RecencyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            first_names: BTreeSet::new(),
            last_names: BTreeSet::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records a returned name pair, then trims each set back to capacity.
    pub fn remember<R: Rng + ?Sized>(&mut self, first_name: &str, last_name: &str, rng: &mut R) {
        self.first_names.insert(first_name.to_string());
        self.last_names.insert(last_name.to_string());
        Self::trim(&mut self.first_names, self.capacity, rng);
        Self::trim(&mut self.last_names, self.capacity, rng);
    }

    fn trim<R: Rng + ?Sized>(set: &mut BTreeSet<String>, capacity: usize, rng: &mut R) {
        while set.len() > capacity {
            let Some(victim) = set.iter().choose(rng).cloned() else {
                break;
            };
            set.remove(&victim);
        }
    }

    pub fn contains_first(&self, name: &str) -> bool {
        self.first_names.contains(name)
    }

    pub fn contains_last(&self, name: &str) -> bool {
        self.last_names.contains(name)
    }

    pub fn first_len(&self) -> usize {
        self.first_names.len()
    }

    pub fn last_len(&self) -> usize {
        self.last_names.len()
    }

    pub fn clear(&mut self) {
        self.first_names.clear();
        self.last_names.clear();
    }
}
