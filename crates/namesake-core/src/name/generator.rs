//! Single-person name generation.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::model::{
    DecadeLabel, GeneratedName, Gender, GenerationRequest, Nationality, starts_with_letter,
};
use super::recency::{RecencyPolicy, RecencyState};
use super::table::NameTable;
use crate::config::GeneratorSettings;

/// Draws random names from a [`NameTable`], avoiding recent repeats.
///
/// The generator owns its recency history and random source. Calls take
/// `&mut self`, so at most one generation runs at a time per generator.
pub struct NameGenerator<R = StdRng> {
    table: Arc<NameTable>,
    recency: RecencyState,
    policy: RecencyPolicy,
    rng: R,
}

impl NameGenerator<StdRng> {
    /// Creates a generator seeded from OS entropy.
    pub fn new(table: Arc<NameTable>) -> Self {
        Self::with_rng(table, StdRng::from_entropy())
    }

    /// Creates a generator from configuration. A configured seed makes the
    /// output reproducible.
    pub fn from_settings(table: Arc<NameTable>, settings: &GeneratorSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(table, rng)
            .with_recency_capacity(settings.recency_capacity)
            .with_policy(settings.recency_policy)
    }
}

impl<R: Rng> NameGenerator<R> {
    pub fn with_rng(table: Arc<NameTable>, rng: R) -> Self {
        Self {
            table,
            recency: RecencyState::default(),
            policy: RecencyPolicy::default(),
            rng,
        }
    }

    /// Replaces the recency history with an empty one of the given size.
    pub fn with_recency_capacity(mut self, capacity: usize) -> Self {
        self.recency = RecencyState::with_capacity(capacity);
        self
    }

    pub fn with_policy(mut self, policy: RecencyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn table(&self) -> &NameTable {
        &self.table
    }

    pub fn recency(&self) -> &RecencyState {
        &self.recency
    }

    pub fn clear_history(&mut self) {
        self.recency.clear();
    }

    /// Generates one name pair, or `None` when a pool runs dry.
    ///
    /// Recency state is only touched on success.
    pub fn generate(&mut self, request: &GenerationRequest) -> Option<GeneratedName> {
        let Some(first_name) = self.pick_first_name(
            request.gender,
            request.nationality,
            &request.decade,
            request.use_double_name,
        ) else {
            debug!(?request, "no first name available");
            return None;
        };

        let starting_letter = if request.use_alliteration {
            first_name.chars().next()
        } else {
            None
        };

        let Some(last_name) = self.pick_last_name(request.nationality, starting_letter) else {
            debug!(%first_name, ?starting_letter, "no last name available");
            return None;
        };

        self.remember(&first_name, &last_name);
        debug!(%first_name, %last_name, "generated name");
        Some(GeneratedName::new(first_name, last_name, request.clone()))
    }

    /// Picks a first name not in the recency history.
    ///
    /// With `use_double_name` two distinct candidates are hyphen-joined;
    /// if fewer than two remain a single name is picked instead. Does not
    /// record the result.
    pub fn pick_first_name(
        &mut self,
        gender: Gender,
        nationality: Nationality,
        decade: &DecadeLabel,
        use_double_name: bool,
    ) -> Option<String> {
        let pool = self.table.first_names_for(gender, nationality, decade);
        let recency = &self.recency;
        let mut available = self.policy.filter(pool, |name| recency.contains_first(name));
        debug!(
            %gender,
            %nationality,
            %decade,
            available = available.len(),
            "first-name pool"
        );

        if use_double_name {
            available.shuffle(&mut self.rng);
            if let Some(first) = available.first() {
                if let Some(second) = available.iter().skip(1).find(|name| *name != first) {
                    return Some(format!("{first}-{second}"));
                }
            }
        }

        available.choose(&mut self.rng).cloned()
    }

    /// Picks a last name not in the recency history, optionally restricted
    /// to names starting with `starting_with` (case-insensitive). Does not
    /// record the result.
    pub fn pick_last_name(
        &mut self,
        nationality: Nationality,
        starting_with: Option<char>,
    ) -> Option<String> {
        let pool: Vec<String> = self
            .table
            .last_names_for(nationality)
            .iter()
            .filter(|name| starting_with.is_none_or(|letter| starts_with_letter(name, letter)))
            .cloned()
            .collect();
        let recency = &self.recency;
        let candidates = self.policy.filter(pool, |name| recency.contains_last(name));
        debug!(%nationality, ?starting_with, available = candidates.len(), "last-name pool");

        candidates.choose(&mut self.rng).cloned()
    }

    pub(crate) fn remember(&mut self, first_name: &str, last_name: &str) {
        self.recency.remember(first_name, last_name, &mut self.rng);
    }
}
