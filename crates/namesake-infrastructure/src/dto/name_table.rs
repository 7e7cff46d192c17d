//! On-disk shape of a per-nationality name table file.
//!
//! Not versioned: these files ship with the app (or are dropped in by the
//! user) and are read-only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One `<nationality>.json` file.
///
/// ```json
/// { "firstNames": { "female": { "1990": ["Anna", "Lena"] } },
///   "lastNames": ["Bauer", "Klein"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalityNamesFile {
    /// gender -> decade -> names
    #[serde(default)]
    pub first_names: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    pub last_names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file() {
        let file: NationalityNamesFile = serde_json::from_str(
            r#"{ "firstNames": { "female": { "1990": ["Anna", "Lena"] } },
                 "lastNames": ["Bauer", "Klein"] }"#,
        )
        .unwrap();
        assert_eq!(file.first_names["female"]["1990"], vec!["Anna", "Lena"]);
        assert_eq!(file.last_names, vec!["Bauer", "Klein"]);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let file: NationalityNamesFile = serde_json::from_str("{}").unwrap();
        assert_eq!(file, NationalityNamesFile::default());
    }
}
