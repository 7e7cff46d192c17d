//! Name table loading from JSON files.
//!
//! One file per nationality, named after it (`german.json`,
//! `british.json`). Unknown gender keys and unknown file names are skipped
//! with a warning; a missing or malformed file for a known nationality fails
//! the whole load.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use strum::IntoEnumIterator;

use namesake_core::error::{NamesakeError, Result};
use namesake_core::name::{Gender, NameTable, Nationality};

use crate::dto::NationalityNamesFile;

const BUNDLED_GERMAN: &str = include_str!("../data/names/german.json");
const BUNDLED_BRITISH: &str = include_str!("../data/names/british.json");

/// Builds a [`NameTable`] from JSON sources.
pub struct NameTableLoader;

impl NameTableLoader {
    /// Parses the tables compiled into the binary.
    pub fn bundled() -> Result<NameTable> {
        let mut table = NameTable::new();
        for nationality in Nationality::iter() {
            let content = match nationality {
                Nationality::German => BUNDLED_GERMAN,
                Nationality::British => BUNDLED_BRITISH,
            };
            table = Self::from_json_str(table, nationality, content)?;
        }
        Self::finish(table, "bundled")
    }

    /// Reads `<nationality>.json` for every known nationality from `dir`.
    pub fn from_dir(dir: &Path) -> Result<NameTable> {
        if !dir.is_dir() {
            return Err(NamesakeError::not_loaded(format!(
                "Name directory not found: {}",
                dir.display()
            )));
        }

        Self::warn_unknown_files(dir);

        let mut table = NameTable::new();
        for nationality in Nationality::iter() {
            let path = dir.join(format!("{}.json", nationality));
            if !path.is_file() {
                return Err(NamesakeError::not_loaded(format!(
                    "Name table file missing: {}",
                    path.display()
                )));
            }

            let content = fs::read_to_string(&path).map_err(|e| {
                NamesakeError::io(format!("Failed to read {}: {}", path.display(), e))
            })?;
            table = Self::from_json_str(table, nationality, &content).map_err(|e| match e {
                NamesakeError::Serialization { format, message } => {
                    NamesakeError::Serialization {
                        format,
                        message: format!("{}: {}", path.display(), message),
                    }
                }
                other => other,
            })?;
        }

        Self::finish(table, &dir.display().to_string())
    }

    /// Merges one nationality's JSON document into `table`.
    pub fn from_json_str(
        mut table: NameTable,
        nationality: Nationality,
        content: &str,
    ) -> Result<NameTable> {
        let file: NationalityNamesFile = serde_json::from_str(content)?;

        for (gender_key, decades) in file.first_names {
            let Ok(gender) = Gender::from_str(&gender_key) else {
                tracing::warn!(
                    %nationality,
                    gender = %gender_key,
                    "Skipping unknown gender in name table"
                );
                continue;
            };
            for (decade, names) in decades {
                table = table.with_first_names(nationality, gender, decade, names);
            }
        }

        if file.last_names.is_empty() {
            tracing::warn!(%nationality, "Name table has no last names");
            return Ok(table);
        }
        Ok(table.with_last_names(nationality, file.last_names))
    }

    fn warn_unknown_files(dir: &Path) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if Nationality::from_str(stem).is_err() {
                tracing::warn!(
                    path = %path.display(),
                    "Ignoring name table for unknown nationality"
                );
            }
        }
    }

    fn finish(table: NameTable, source: &str) -> Result<NameTable> {
        if table.is_empty() {
            return Err(NamesakeError::not_loaded(format!(
                "Name table from {} is empty",
                source
            )));
        }

        let summary = table.summary();
        let first_names: usize = summary.iter().map(|b| b.count).sum();
        tracing::info!(
            %source,
            buckets = summary.len(),
            first_names,
            "Loaded name table"
        );
        for bucket in &summary {
            tracing::debug!(
                nationality = %bucket.nationality,
                gender = %bucket.gender,
                decade = %bucket.decade,
                count = bucket.count,
                "Name bucket"
            );
        }
        Ok(table)
    }
}
