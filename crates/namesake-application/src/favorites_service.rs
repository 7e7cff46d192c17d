//! Favorites Service
//!
//! Keeps favorites and their details records in memory and writes every
//! change through to a [`FavoriteRepository`]. A change is committed to the
//! cache only after every collection it touches was persisted. If a later
//! write fails after an earlier one succeeded, the cache keeps the previous
//! state and the next successful write replaces the store (last write wins).

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use namesake_core::NamesakeError;
use namesake_core::person::{
    DetailsExport, FavoriteQuery, FavoriteRepository, IconTint, Person, PersonDetails,
};
use namesake_infrastructure::picture::{self, JPEG_QUALITY};

#[derive(Debug, Default, Clone)]
struct FavoritesState {
    favorites: Vec<Person>,
    details: HashMap<Uuid, PersonDetails>,
}

impl FavoritesState {
    fn find(&self, id: Uuid) -> Option<&Person> {
        self.favorites.iter().find(|p| p.id == id)
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.favorites.iter().position(|p| p.id == id)
    }
}

/// Service for managing favorites and their details.
pub struct FavoritesService {
    repository: Arc<dyn FavoriteRepository>,
    state: RwLock<FavoritesState>,
}

impl FavoritesService {
    /// Creates the service and loads the stored favorites and details.
    pub async fn new(repository: Arc<dyn FavoriteRepository>) -> Result<Self> {
        let favorites = repository
            .load_favorites()
            .await
            .context("Failed to load favorites")?;
        let details = repository
            .load_details()
            .await
            .context("Failed to load person details")?;

        tracing::info!(
            favorites = favorites.len(),
            details = details.len(),
            "Favorites loaded"
        );

        Ok(Self {
            repository,
            state: RwLock::new(FavoritesState { favorites, details }),
        })
    }

    /// All favorites in insertion order.
    pub async fn list_favorites(&self) -> Vec<Person> {
        self.state.read().await.favorites.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<Person> {
        self.state.read().await.find(id).cloned()
    }

    pub async fn is_favorite(&self, id: Uuid) -> bool {
        self.state.read().await.find(id).is_some()
    }

    /// Adds a person (or a freshly generated name) to the favorites.
    ///
    /// The stored copy is marked favorite and stamped with the current time.
    /// Adding an id that is already present replaces the stored copy. An
    /// empty details record is created if none exists.
    pub async fn add_favorite(&self, person: impl Into<Person>) -> Result<Person> {
        let mut person = person.into();
        person.mark_favorite(Utc::now());

        let mut state = self.state.write().await;
        let mut next = state.clone();
        match next.favorites.iter_mut().find(|p| p.id == person.id) {
            Some(existing) => *existing = person.clone(),
            None => next.favorites.push(person.clone()),
        }
        let details_changed = !next.details.contains_key(&person.id);
        if details_changed {
            next.details.insert(person.id, PersonDetails::default());
        }
        self.persist(&next, details_changed).await?;
        *state = next;

        tracing::info!(id = %person.id, name = %person.full_name(), "Added favorite");
        Ok(person)
    }

    /// Removes exactly the favorite with `id` and its details record.
    ///
    /// Returns `false` (and changes nothing) when no favorite has that id.
    pub async fn remove_favorite(&self, id: Uuid) -> Result<bool> {
        let mut state = self.state.write().await;
        let Some(index) = state.position(id) else {
            tracing::debug!(%id, "Favorite to remove not found");
            return Ok(false);
        };

        let mut next = state.clone();
        next.favorites.remove(index);
        let details_changed = next.details.remove(&id).is_some();
        self.persist(&next, details_changed).await?;
        *state = next;

        tracing::info!(%id, "Removed favorite");
        Ok(true)
    }

    /// Removes the person when it is a favorite, adds it otherwise.
    ///
    /// Returns the stored person after an add, `None` after a removal.
    pub async fn toggle_favorite(&self, person: Person) -> Result<Option<Person>> {
        if self.is_favorite(person.id).await {
            self.remove_favorite(person.id).await?;
            Ok(None)
        } else {
            self.add_favorite(person).await.map(Some)
        }
    }

    /// Removes every favorite and every details record.
    pub async fn remove_all_favorites(&self) -> Result<()> {
        let mut state = self.state.write().await;
        let next = FavoritesState::default();
        self.persist(&next, true).await?;
        *state = next;
        tracing::info!("Removed all favorites");
        Ok(())
    }

    /// Replaces the stored favorite with the same id.
    ///
    /// Returns `false` (and changes nothing) when the id is unknown.
    pub async fn update_person(&self, person: Person) -> Result<bool> {
        let mut state = self.state.write().await;
        let Some(index) = state.position(person.id) else {
            tracing::debug!(id = %person.id, "Ignoring update of unknown person");
            return Ok(false);
        };

        let mut favorites = state.favorites.clone();
        favorites[index] = person;
        self.persist_favorites(&favorites).await?;
        state.favorites = favorites;
        Ok(true)
    }

    /// Details of a person. The first access creates and persists an empty
    /// record.
    pub async fn load_details(&self, id: Uuid) -> Result<PersonDetails> {
        if let Some(details) = self.state.read().await.details.get(&id) {
            return Ok(details.clone());
        }

        let mut state = self.state.write().await;
        if let Some(details) = state.details.get(&id) {
            return Ok(details.clone());
        }
        let mut details = state.details.clone();
        details.insert(id, PersonDetails::default());
        self.persist_details(&details).await?;
        state.details = details;
        Ok(PersonDetails::default())
    }

    pub async fn save_details(&self, id: Uuid, person_details: PersonDetails) -> Result<()> {
        let mut state = self.state.write().await;
        let mut details = state.details.clone();
        details.insert(id, person_details);
        self.persist_details(&details).await?;
        state.details = details;
        Ok(())
    }

    /// Every tag used by any favorite, sorted and unique.
    pub async fn all_tags(&self) -> Vec<String> {
        let state = self.state.read().await;
        state
            .favorites
            .iter()
            .flat_map(|p| p.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Favorites carrying `tag`, in insertion order.
    pub async fn persons_with_tag(&self, tag: &str) -> Vec<Person> {
        let state = self.state.read().await;
        state
            .favorites
            .iter()
            .filter(|p| p.has_tag(tag))
            .cloned()
            .collect()
    }

    /// Favorites matching `query`, sorted by first name.
    pub async fn query(&self, query: &FavoriteQuery) -> Vec<Person> {
        query.apply(&self.state.read().await.favorites)
    }

    /// Re-encodes `bytes` as JPEG and attaches it to the favorite.
    pub async fn save_image(&self, id: Uuid, bytes: Vec<u8>) -> Result<Person> {
        let jpeg = tokio::task::spawn_blocking(move || picture::reencode_jpeg(&bytes, JPEG_QUALITY))
            .await
            .context("Image encoding task failed")??;

        self.modify_person(id, |person| person.image_data = Some(jpeg))
            .await
    }

    pub async fn delete_image(&self, id: Uuid) -> Result<Person> {
        self.modify_person(id, |person| person.image_data = None)
            .await
    }

    /// Icon tint that contrasts with the favorite's picture, `None` when it
    /// has none.
    pub async fn image_tint(&self, id: Uuid) -> Result<Option<IconTint>> {
        let person = self
            .get(id)
            .await
            .ok_or_else(|| NamesakeError::not_found("person", id.to_string()))?;
        let Some(bytes) = person.image_data else {
            return Ok(None);
        };

        let brightness = tokio::task::spawn_blocking(move || picture::average_brightness(&bytes))
            .await
            .context("Brightness task failed")??;
        Ok(Some(IconTint::for_brightness(brightness)))
    }

    /// Renders the share document for a favorite and its details.
    pub async fn export_details(&self, id: Uuid) -> Result<DetailsExport> {
        let person = self
            .get(id)
            .await
            .ok_or_else(|| NamesakeError::not_found("person", id.to_string()))?;
        let details = self.load_details(id).await?;
        Ok(DetailsExport::render(&person, &details))
    }

    async fn modify_person<F>(&self, id: Uuid, f: F) -> Result<Person>
    where
        F: FnOnce(&mut Person),
    {
        let mut state = self.state.write().await;
        let index = state
            .position(id)
            .ok_or_else(|| NamesakeError::not_found("person", id.to_string()))?;

        let mut favorites = state.favorites.clone();
        f(&mut favorites[index]);
        let updated = favorites[index].clone();
        self.persist_favorites(&favorites).await?;
        state.favorites = favorites;
        Ok(updated)
    }

    /// Writes `next` to the repository. The caller commits it to the cache
    /// only when both writes succeeded.
    async fn persist(&self, next: &FavoritesState, details_changed: bool) -> Result<()> {
        self.persist_favorites(&next.favorites).await?;
        if details_changed {
            self.persist_details(&next.details).await?;
        }
        Ok(())
    }

    async fn persist_favorites(&self, favorites: &[Person]) -> Result<()> {
        self.repository
            .save_favorites(favorites)
            .await
            .context("Failed to save favorites")
    }

    async fn persist_details(&self, details: &HashMap<Uuid, PersonDetails>) -> Result<()> {
        self.repository
            .save_details(details)
            .await
            .context("Failed to save person details")
    }
}
