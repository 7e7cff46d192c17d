//! File-based favorites repository.
//!
//! Stores favorites and details as versioned JSON files in the data
//! directory. Uses version-migrate for automatic schema migration.
//!
//! File locations:
//! - `{data_dir}/favorites.json`
//! - `{data_dir}/person_details.json`

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;
use version_migrate::Migrator;

use namesake_core::error::{NamesakeError, Result};
use namesake_core::person::{
    DetailsBook, FavoriteCollection, FavoriteRepository, Person, PersonDetails,
};

use crate::dto::{create_details_migrator, create_favorites_migrator};
use crate::paths::NamesakePaths;
use crate::storage::AtomicFile;

/// File-based favorites repository with version migration support.
pub struct FileFavoriteRepository {
    base_path: PathBuf,
    favorites_migrator: Migrator,
    details_migrator: Migrator,
}

impl FileFavoriteRepository {
    const FAVORITES_FILENAME: &'static str = "favorites.json";
    const DETAILS_FILENAME: &'static str = "person_details.json";
    const FAVORITES_ENTITY: &'static str = "favorites";
    const DETAILS_ENTITY: &'static str = "person_details";

    /// Creates a repository in the platform data directory.
    pub fn new() -> Result<Self> {
        let base_path = NamesakePaths::data_dir()?;
        Ok(Self::with_base_path(base_path))
    }

    /// Creates a repository with a custom base path (for testing).
    pub fn with_base_path(base_path: PathBuf) -> Self {
        Self {
            base_path,
            favorites_migrator: create_favorites_migrator(),
            details_migrator: create_details_migrator(),
        }
    }

    pub fn favorites_path(&self) -> PathBuf {
        self.base_path.join(Self::FAVORITES_FILENAME)
    }

    pub fn details_path(&self) -> PathBuf {
        self.base_path.join(Self::DETAILS_FILENAME)
    }

    async fn read(path: PathBuf) -> Result<Option<serde_json::Value>> {
        let file = AtomicFile::new(path);
        let content = tokio::task::spawn_blocking(move || file.read())
            .await
            .map_err(|e| NamesakeError::internal(format!("Read task failed: {}", e)))??;

        match content {
            Some(content) => Ok(Some(serde_json::from_str(&content)?)),
            None => Ok(None),
        }
    }

    async fn write(path: PathBuf, content: String) -> Result<()> {
        let file = AtomicFile::new(path);
        tokio::task::spawn_blocking(move || file.write(&content))
            .await
            .map_err(|e| NamesakeError::internal(format!("Write task failed: {}", e)))?
    }
}

#[async_trait]
impl FavoriteRepository for FileFavoriteRepository {
    async fn load_favorites(&self) -> Result<Vec<Person>> {
        let Some(json_value) = Self::read(self.favorites_path()).await? else {
            return Ok(Vec::new());
        };

        let collection: FavoriteCollection = self
            .favorites_migrator
            .load_flat_from(Self::FAVORITES_ENTITY, json_value)
            .map_err(|e| {
                NamesakeError::migration(format!("Failed to migrate favorites: {}", e))
            })?;

        tracing::debug!(count = collection.favorites.len(), "Loaded favorites");
        Ok(collection.favorites)
    }

    async fn save_favorites(&self, favorites: &[Person]) -> Result<()> {
        let collection = FavoriteCollection {
            favorites: favorites.to_vec(),
        };
        let serialized = self
            .favorites_migrator
            .save_domain_flat(Self::FAVORITES_ENTITY, collection)
            .map_err(|e| {
                NamesakeError::data_access(format!("Failed to serialize favorites: {}", e))
            })?;

        Self::write(self.favorites_path(), serialized).await?;
        tracing::debug!(count = favorites.len(), "Saved favorites");
        Ok(())
    }

    async fn load_details(&self) -> Result<HashMap<Uuid, PersonDetails>> {
        let Some(json_value) = Self::read(self.details_path()).await? else {
            return Ok(HashMap::new());
        };

        let book: DetailsBook = self
            .details_migrator
            .load_flat_from(Self::DETAILS_ENTITY, json_value)
            .map_err(|e| {
                NamesakeError::migration(format!("Failed to migrate details: {}", e))
            })?;

        Ok(book.entries)
    }

    async fn save_details(&self, details: &HashMap<Uuid, PersonDetails>) -> Result<()> {
        let book = DetailsBook {
            entries: details.clone(),
        };
        let serialized = self
            .details_migrator
            .save_domain_flat(Self::DETAILS_ENTITY, book)
            .map_err(|e| {
                NamesakeError::data_access(format!("Failed to serialize details: {}", e))
            })?;

        Self::write(self.details_path(), serialized).await?;
        tracing::debug!(count = details.len(), "Saved person details");
        Ok(())
    }
}
