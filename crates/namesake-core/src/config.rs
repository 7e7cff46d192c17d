//! Application configuration model (`config.toml`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::name::{DEFAULT_RECENCY_CAPACITY, RecencyPolicy};

/// Root of `config.toml`. Every section and field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorSettings,
    pub data: DataSettings,
}

/// `[generator]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Names remembered per recency set.
    pub recency_capacity: usize,
    /// Behaviour when the recency filter empties a pool.
    pub recency_policy: RecencyPolicy,
    /// Fixed RNG seed for reproducible output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            recency_capacity: DEFAULT_RECENCY_CAPACITY,
            recency_policy: RecencyPolicy::default(),
            seed: None,
        }
    }
}

/// `[data]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Directory holding `<nationality>.json` name tables. Bundled tables
    /// are used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.generator.recency_capacity, 100);
        assert_eq!(config.generator.recency_policy, RecencyPolicy::Strict);
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [generator]
            recency_policy = "fallback_to_unfiltered"
            seed = 42

            [data]
            names_dir = "/opt/names"
            "#,
        )
        .unwrap();
        assert_eq!(config.generator.recency_capacity, 100);
        assert_eq!(
            config.generator.recency_policy,
            RecencyPolicy::FallbackToUnfiltered
        );
        assert_eq!(config.generator.seed, Some(42));
        assert_eq!(config.data.names_dir, Some(PathBuf::from("/opt/names")));
    }
}
