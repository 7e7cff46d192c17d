//! Static name lookup tables.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use super::model::{DecadeLabel, Gender, Nationality};

/// Decade key -> ordered first names. Sorted so `DecadeLabel::Any` unions
/// decades in a stable order.
pub type DecadeNames = BTreeMap<String, Vec<String>>;

/// Immutable lookup of candidate names.
///
/// `first_names`: nationality -> gender -> decade -> names.
/// `last_names`: nationality -> names.
///
/// Missing keys are not errors here: lookups simply return an empty pool and
/// the generator treats that as "no candidate available".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    first_names: HashMap<Nationality, HashMap<Gender, DecadeNames>>,
    last_names: HashMap<Nationality, Vec<String>>,
}

/// Candidate counts for one nationality/gender/decade bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketSummary {
    pub nationality: Nationality,
    pub gender: Gender,
    pub decade: String,
    pub count: usize,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or extends) the first-name list of one bucket.
    pub fn with_first_names<I, S>(
        mut self,
        nationality: Nationality,
        gender: Gender,
        decade: impl Into<String>,
        names: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.first_names
            .entry(nationality)
            .or_default()
            .entry(gender)
            .or_default()
            .entry(decade.into())
            .or_default()
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds (or extends) the last-name list of a nationality.
    pub fn with_last_names<I, S>(mut self, nationality: Nationality, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.last_names
            .entry(nationality)
            .or_default()
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// First-name pool for a bucket.
    ///
    /// For `DecadeLabel::Any` every decade of the gender/nationality is
    /// unioned in ascending decade order. Duplicates across decades are
    /// removed, keeping the first occurrence.
    pub fn first_names_for(
        &self,
        gender: Gender,
        nationality: Nationality,
        decade: &DecadeLabel,
    ) -> Vec<String> {
        let Some(decades) = self
            .first_names
            .get(&nationality)
            .and_then(|genders| genders.get(&gender))
        else {
            return Vec::new();
        };

        match decade {
            DecadeLabel::Decade(key) => decades.get(key).cloned().unwrap_or_default(),
            DecadeLabel::Any => {
                let mut seen = HashSet::new();
                decades
                    .values()
                    .flatten()
                    .filter(|name| seen.insert(name.as_str()))
                    .cloned()
                    .collect()
            }
        }
    }

    /// Last-name pool for a nationality.
    pub fn last_names_for(&self, nationality: Nationality) -> &[String] {
        self.last_names
            .get(&nationality)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Nationalities that have at least one first- or last-name entry.
    pub fn nationalities(&self) -> Vec<Nationality> {
        let mut found: Vec<Nationality> = self
            .first_names
            .keys()
            .chain(self.last_names.keys())
            .copied()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        found.sort();
        found
    }

    /// Decade keys available for a gender/nationality, ascending.
    pub fn decades(&self, gender: Gender, nationality: Nationality) -> Vec<String> {
        self.first_names
            .get(&nationality)
            .and_then(|genders| genders.get(&gender))
            .map(|decades| decades.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.first_names.is_empty() && self.last_names.is_empty()
    }

    /// Per-bucket first-name counts, sorted by nationality, gender, decade.
    pub fn summary(&self) -> Vec<BucketSummary> {
        let mut buckets: Vec<BucketSummary> = self
            .first_names
            .iter()
            .flat_map(|(nationality, genders)| {
                genders.iter().flat_map(move |(gender, decades)| {
                    decades.iter().map(move |(decade, names)| BucketSummary {
                        nationality: *nationality,
                        gender: *gender,
                        decade: decade.clone(),
                        count: names.len(),
                    })
                })
            })
            .collect();
        buckets.sort_by(|a, b| {
            (a.nationality, a.gender, &a.decade).cmp(&(b.nationality, b.gender, &b.decade))
        });
        buckets
    }
}
