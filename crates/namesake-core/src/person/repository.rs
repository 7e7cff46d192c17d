//! Favorites repository trait.
//!
//! Defines the interface for persisting favorites and their details.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Person, PersonDetails};
use crate::error::{NamesakeError, Result};

/// An abstract repository for the favorites list and per-person details.
///
/// Both collections are read and written whole; the last write wins. A
/// missing store reads as an empty collection.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Loads all favorites in insertion order.
    async fn load_favorites(&self) -> Result<Vec<Person>>;

    /// Replaces all stored favorites.
    async fn save_favorites(&self, favorites: &[Person]) -> Result<()>;

    /// Loads all details records.
    async fn load_details(&self) -> Result<HashMap<Uuid, PersonDetails>>;

    /// Replaces all stored details records.
    async fn save_details(&self, details: &HashMap<Uuid, PersonDetails>) -> Result<()>;
}

/// Volatile repository for previews and tests.
#[derive(Debug, Default)]
pub struct InMemoryFavoriteRepository {
    favorites: Mutex<Vec<Person>>,
    details: Mutex<HashMap<Uuid, PersonDetails>>,
}

impl InMemoryFavoriteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned(what: &str) -> NamesakeError {
        NamesakeError::internal(format!("{what} lock poisoned"))
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryFavoriteRepository {
    async fn load_favorites(&self) -> Result<Vec<Person>> {
        let favorites = self
            .favorites
            .lock()
            .map_err(|_| Self::poisoned("favorites"))?;
        Ok(favorites.clone())
    }

    async fn save_favorites(&self, favorites: &[Person]) -> Result<()> {
        let mut stored = self
            .favorites
            .lock()
            .map_err(|_| Self::poisoned("favorites"))?;
        *stored = favorites.to_vec();
        Ok(())
    }

    async fn load_details(&self) -> Result<HashMap<Uuid, PersonDetails>> {
        let details = self.details.lock().map_err(|_| Self::poisoned("details"))?;
        Ok(details.clone())
    }

    async fn save_details(&self, details: &HashMap<Uuid, PersonDetails>) -> Result<()> {
        let mut stored = self.details.lock().map_err(|_| Self::poisoned("details"))?;
        *stored = details.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::{Gender, Nationality};

    #[tokio::test]
    async fn test_in_memory_round_trip() {
        let repo = InMemoryFavoriteRepository::new();
        assert!(repo.load_favorites().await.unwrap().is_empty());

        let person = Person::new("Anna", "Bauer", Gender::Female, Nationality::German);
        repo.save_favorites(std::slice::from_ref(&person))
            .await
            .unwrap();

        let mut details = HashMap::new();
        details.insert(
            person.id,
            PersonDetails {
                age: "34".to_string(),
                ..Default::default()
            },
        );
        repo.save_details(&details).await.unwrap();

        let loaded = repo.load_favorites().await.unwrap();
        assert_eq!(loaded, vec![person.clone()]);
        assert_eq!(repo.load_details().await.unwrap()[&person.id].age, "34");
    }
}
