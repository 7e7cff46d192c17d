//! Alphabetical batch generation: one name per last-name initial.

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info, warn};

use super::generator::NameGenerator;
use super::model::{GeneratedName, GenerationRequest, starts_with_letter};

/// Letters a batch walks through, in order.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Largest batch ever returned.
pub const MAX_BATCH_SIZE: usize = ALPHABET.len();

/// Below this many entries the repair pass runs.
pub const MIN_BATCH_SIZE: usize = 24;

/// Attempts per letter.
pub const LETTER_ATTEMPTS: usize = 30;

/// Attempts for letters that rarely start a name.
pub const RARE_LETTER_ATTEMPTS: usize = 10;

const RARE_LETTERS: [char; 2] = ['y', 'z'];

fn is_rare(letter: char) -> bool {
    RARE_LETTERS.contains(&letter)
}

fn attempt_budget(letter: char) -> usize {
    if is_rare(letter) {
        RARE_LETTER_ATTEMPTS
    } else {
        LETTER_ATTEMPTS
    }
}

fn sort_by_last_name(names: &mut [GeneratedName]) {
    names.sort_by_cached_key(|name| name.last_name.to_lowercase());
}

impl<R: Rng> NameGenerator<R> {
    /// Generates up to 26 names, aiming for one per last-name initial,
    /// sorted case-insensitively by last name.
    ///
    /// Best effort: letters that cannot be filled within their attempt
    /// budget are skipped, and an empty table yields an empty batch. A
    /// first name is never reused within one batch. With alliteration the
    /// first and last name both start with the letter being filled.
    pub fn generate_batch(&mut self, request: &GenerationRequest) -> Vec<GeneratedName> {
        let mut names = Vec::with_capacity(MAX_BATCH_SIZE);
        let mut used_first_names = HashSet::new();

        for letter in ALPHABET {
            let mut found = None;
            let budget = attempt_budget(letter);
            for _ in 0..budget {
                found = self.attempt_letter(request, letter, &mut used_first_names);
                if found.is_some() {
                    break;
                }
            }

            if found.is_none() && !is_rare(letter) {
                debug!(%letter, budget, "letter unfilled, one more attempt");
                found = self.attempt_letter(request, letter, &mut used_first_names);
            }

            match found {
                Some(name) => names.push(name),
                None => debug!(%letter, "no name for letter"),
            }
        }

        sort_by_last_name(&mut names);

        if names.len() < MIN_BATCH_SIZE {
            let missing: Vec<char> = ALPHABET
                .into_iter()
                .filter(|letter| !is_rare(*letter))
                .filter(|letter| {
                    !names
                        .iter()
                        .any(|name| starts_with_letter(&name.last_name, *letter))
                })
                .collect();
            warn!(
                count = names.len(),
                missing = missing.len(),
                "batch below target size, repairing missing letters"
            );

            for letter in missing {
                if names.len() >= MAX_BATCH_SIZE {
                    break;
                }
                if let Some(name) = self.attempt_letter(request, letter, &mut used_first_names) {
                    names.push(name);
                }
            }
            sort_by_last_name(&mut names);
        }

        info!(count = names.len(), "alphabetical batch generated");
        names
    }

    /// One sampling attempt for `letter`. Records the names on success.
    fn attempt_letter(
        &mut self,
        request: &GenerationRequest,
        letter: char,
        used_first_names: &mut HashSet<String>,
    ) -> Option<GeneratedName> {
        let first_name = self.pick_first_name(
            request.gender,
            request.nationality,
            &request.decade,
            request.use_double_name,
        )?;

        if used_first_names.contains(&first_name) {
            return None;
        }
        if request.use_alliteration && !starts_with_letter(&first_name, letter) {
            return None;
        }

        let starting_with = request.use_alliteration.then_some(letter);
        let last_name = self.pick_last_name(request.nationality, starting_with)?;

        self.remember(&first_name, &last_name);
        used_first_names.insert(first_name.clone());
        Some(GeneratedName::new(first_name, last_name, request.clone()))
    }
}
