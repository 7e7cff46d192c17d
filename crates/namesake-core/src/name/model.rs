//! Name generation value types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Gender bucket of the first-name table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
    Diverse,
}

impl Gender {
    /// Label shown in the picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Männlich",
            Gender::Female => "Weiblich",
            Gender::Diverse => "Divers",
        }
    }
}

/// Nationality whose name conventions a table represents.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Nationality {
    German,
    British,
}

impl Nationality {
    /// Label shown in the picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            Nationality::German => "Deutsch",
            Nationality::British => "Britisch",
        }
    }
}

/// A decade bucket key, or the sentinel that unions every decade.
///
/// Parsing accepts `any`, `all` and `alle` (any case) as the sentinel.
/// Anything else is kept verbatim (trimmed) as a decade key such as `"1990"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DecadeLabel {
    Any,
    Decade(String),
}

impl DecadeLabel {
    /// Canonical spelling of the sentinel.
    pub const ANY: &'static str = "any";

    const ANY_ALIASES: [&'static str; 3] = ["any", "all", "alle"];

    pub fn decade(key: impl Into<String>) -> Self {
        Self::from(key.into())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, DecadeLabel::Any)
    }

    pub fn as_str(&self) -> &str {
        match self {
            DecadeLabel::Any => Self::ANY,
            DecadeLabel::Decade(key) => key,
        }
    }
}

impl Default for DecadeLabel {
    fn default() -> Self {
        DecadeLabel::Any
    }
}

impl From<String> for DecadeLabel {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if Self::ANY_ALIASES
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(trimmed))
        {
            DecadeLabel::Any
        } else {
            DecadeLabel::Decade(trimmed.to_string())
        }
    }
}

impl From<&str> for DecadeLabel {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<DecadeLabel> for String {
    fn from(label: DecadeLabel) -> Self {
        match label {
            DecadeLabel::Any => DecadeLabel::ANY.to_string(),
            DecadeLabel::Decade(key) => key,
        }
    }
}

impl FromStr for DecadeLabel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for DecadeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub gender: Gender,
    pub nationality: Nationality,
    pub decade: DecadeLabel,
    #[serde(default)]
    pub use_alliteration: bool,
    #[serde(default)]
    pub use_double_name: bool,
}

impl GenerationRequest {
    pub fn new(gender: Gender, nationality: Nationality, decade: impl Into<DecadeLabel>) -> Self {
        Self {
            gender,
            nationality,
            decade: decade.into(),
            use_alliteration: false,
            use_double_name: false,
        }
    }

    pub fn with_alliteration(mut self, enabled: bool) -> Self {
        self.use_alliteration = enabled;
        self
    }

    pub fn with_double_name(mut self, enabled: bool) -> Self {
        self.use_double_name = enabled;
        self
    }
}

/// A generated first/last name pair plus the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedName {
    pub first_name: String,
    pub last_name: String,
    pub request: GenerationRequest,
}

impl GeneratedName {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        request: GenerationRequest,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            request,
        }
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Lowercased first letter of the last name.
    pub fn last_initial(&self) -> Option<char> {
        self.last_name
            .chars()
            .next()
            .and_then(|c| c.to_lowercase().next())
    }
}

/// Case-insensitive check that `name` begins with `letter`.
pub fn starts_with_letter(name: &str, letter: char) -> bool {
    name.chars()
        .next()
        .is_some_and(|first| first.to_lowercase().eq(letter.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_gender_round_trips_through_strum_and_serde() {
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("Diverse".parse::<Gender>().unwrap(), Gender::Diverse);
        assert_eq!(Gender::Male.to_string(), "male");
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        assert_eq!(Gender::iter().count(), 3);
    }

    #[test]
    fn test_nationality_display_names() {
        assert_eq!(Nationality::German.display_name(), "Deutsch");
        assert_eq!(Nationality::British.as_ref(), "british");
    }

    #[test]
    fn test_decade_label_sentinel_aliases() {
        for alias in ["any", "ALL", "Alle", " all "] {
            assert!(DecadeLabel::from(alias).is_any(), "alias {alias}");
        }
        assert_eq!(
            DecadeLabel::from("1990"),
            DecadeLabel::Decade("1990".to_string())
        );
        assert_eq!(DecadeLabel::Any.to_string(), "any");
    }

    #[test]
    fn test_decade_label_serializes_as_string() {
        let json = serde_json::to_string(&DecadeLabel::decade("1980")).unwrap();
        assert_eq!(json, "\"1980\"");
        let parsed: DecadeLabel = serde_json::from_str("\"Alle\"").unwrap();
        assert!(parsed.is_any());
    }

    #[test]
    fn test_starts_with_letter_ignores_case() {
        assert!(starts_with_letter("anna", 'A'));
        assert!(starts_with_letter("Ömer", 'ö'));
        assert!(!starts_with_letter("Bauer", 'a'));
        assert!(!starts_with_letter("", 'a'));
    }

    #[test]
    fn test_generated_name_helpers() {
        let request = GenerationRequest::new(Gender::Female, Nationality::German, "1990");
        let name = GeneratedName::new("Lena", "Klein", request);
        assert_eq!(name.full_name(), "Lena Klein");
        assert_eq!(name.last_initial(), Some('k'));
    }
}
