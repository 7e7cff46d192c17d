//! Name Generator Service
//!
//! Owns the single [`NameGenerator`] of the application and the source its
//! name table comes from. The table is loaded lazily: until a load succeeds
//! the service is "not loaded", every generation call yields nothing and
//! triggers one reload attempt.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Mutex;

use namesake_core::config::{AppConfig, DataSettings, GeneratorSettings};
use namesake_core::name::{
    BucketSummary, GeneratedName, GenerationRequest, NameGenerator, NameTable,
};
use namesake_infrastructure::NameTableLoader;

/// Where the name table is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// Tables compiled into the binary.
    Bundled,
    /// A directory holding `<nationality>.json` files.
    Directory(PathBuf),
}

impl TableSource {
    pub fn from_settings(settings: &DataSettings) -> Self {
        match &settings.names_dir {
            Some(dir) => TableSource::Directory(dir.clone()),
            None => TableSource::Bundled,
        }
    }

    fn load(&self) -> namesake_core::Result<NameTable> {
        match self {
            TableSource::Bundled => NameTableLoader::bundled(),
            TableSource::Directory(dir) => NameTableLoader::from_dir(dir),
        }
    }
}

enum GeneratorState {
    NotLoaded,
    Loaded(NameGenerator),
}

/// Service for generating names from a lazily loaded table.
pub struct NameGeneratorService {
    source: TableSource,
    settings: GeneratorSettings,
    state: Mutex<GeneratorState>,
}

impl NameGeneratorService {
    /// Creates a service in the "not loaded" state. Call [`reload`] to load
    /// eagerly; otherwise the first generation call starts the load.
    ///
    /// [`reload`]: Self::reload
    pub fn new(source: TableSource, settings: GeneratorSettings) -> Self {
        Self {
            source,
            settings,
            state: Mutex::new(GeneratorState::NotLoaded),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            TableSource::from_settings(&config.data),
            config.generator.clone(),
        )
    }

    pub fn source(&self) -> &TableSource {
        &self.source
    }

    /// (Re)loads the name table and replaces the generator.
    ///
    /// On failure the service drops back to "not loaded".
    pub async fn reload(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        Self::load_into(&self.source, &self.settings, &mut *state).await
    }

    pub async fn is_loaded(&self) -> bool {
        matches!(*self.state.lock().await, GeneratorState::Loaded(_))
    }

    /// Generates one name. `None` when a pool runs dry, or when the table is
    /// not loaded (a reload is attempted for the next call).
    pub async fn generate(&self, request: &GenerationRequest) -> Option<GeneratedName> {
        let mut state = self.state.lock().await;
        match &mut *state {
            GeneratorState::Loaded(generator) => generator.generate(request),
            GeneratorState::NotLoaded => {
                Self::retry_load(&self.source, &self.settings, &mut *state).await;
                None
            }
        }
    }

    /// Generates an alphabetical batch. Empty when the table is not loaded
    /// (a reload is attempted for the next call).
    pub async fn generate_batch(&self, request: &GenerationRequest) -> Vec<GeneratedName> {
        let mut state = self.state.lock().await;
        match &mut *state {
            GeneratorState::Loaded(generator) => generator.generate_batch(request),
            GeneratorState::NotLoaded => {
                Self::retry_load(&self.source, &self.settings, &mut *state).await;
                Vec::new()
            }
        }
    }

    /// Forgets recently generated names.
    pub async fn clear_history(&self) {
        if let GeneratorState::Loaded(generator) = &mut *self.state.lock().await {
            generator.clear_history();
        }
    }

    /// Per-bucket counts of the loaded table.
    pub async fn table_summary(&self) -> Option<Vec<BucketSummary>> {
        match &*self.state.lock().await {
            GeneratorState::Loaded(generator) => Some(generator.table().summary()),
            GeneratorState::NotLoaded => None,
        }
    }

    async fn retry_load(
        source: &TableSource,
        settings: &GeneratorSettings,
        state: &mut GeneratorState,
    ) {
        tracing::warn!(?source, "Name table not loaded, reloading");
        if let Err(e) = Self::load_into(source, settings, state).await {
            tracing::warn!(error = %e, "Name table reload failed");
        }
    }

    async fn load_into(
        source: &TableSource,
        settings: &GeneratorSettings,
        state: &mut GeneratorState,
    ) -> Result<()> {
        let loader_source = source.clone();
        let loaded = tokio::task::spawn_blocking(move || loader_source.load())
            .await
            .context("Name table load task failed")?;

        match loaded {
            Ok(table) => {
                *state = GeneratorState::Loaded(NameGenerator::from_settings(
                    Arc::new(table),
                    settings,
                ));
                tracing::info!(?source, "Name generator ready");
                Ok(())
            }
            Err(e) => {
                *state = GeneratorState::NotLoaded;
                Err(e).with_context(|| format!("Failed to load name table from {:?}", source))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namesake_core::name::{DecadeLabel, Gender, Nationality};

    fn seeded() -> GeneratorSettings {
        GeneratorSettings {
            seed: Some(42),
            ..GeneratorSettings::default()
        }
    }

    #[tokio::test]
    async fn test_bundled_source_loads_lazily() {
        let service = NameGeneratorService::new(TableSource::Bundled, seeded());
        assert!(!service.is_loaded().await);

        let request = GenerationRequest::new(Gender::Female, Nationality::German, DecadeLabel::Any);
        // First call only triggers the load.
        assert!(service.generate(&request).await.is_none());
        assert!(service.is_loaded().await);
        assert!(service.generate(&request).await.is_some());
    }

    #[tokio::test]
    async fn test_from_config_picks_source() {
        let mut config = AppConfig::default();
        assert_eq!(
            NameGeneratorService::from_config(&config).source(),
            &TableSource::Bundled
        );

        config.data.names_dir = Some(PathBuf::from("/opt/names"));
        assert_eq!(
            NameGeneratorService::from_config(&config).source(),
            &TableSource::Directory(PathBuf::from("/opt/names"))
        );
    }
}
