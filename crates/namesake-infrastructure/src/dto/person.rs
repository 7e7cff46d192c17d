//! Favorites DTOs and migrations
//!
//! ## Version History
//! - **1.0.0**: Initial schema (names, gender, nationality, image, notes, tags)
//! - **1.1.0**: Added `decade` and `favoritedAt`

use std::collections::BTreeSet;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use version_migrate::{FromDomain, IntoDomain, MigratesTo, Versioned};

use namesake_core::name::{DecadeLabel, Gender, Nationality};
use namesake_core::person::{FavoriteCollection, Person};

// ============================================================================
// Person DTOs
// ============================================================================

/// Person DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonV1_0_0 {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub nationality: Nationality,
    /// Base64 encoded JPEG
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Person DTO V1.1.0
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonV1_1_0 {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub nationality: Nationality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decade: Option<DecadeLabel>,
    /// Base64 encoded JPEG
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorited_at: Option<DateTime<Utc>>,
}

impl From<PersonV1_0_0> for PersonV1_1_0 {
    fn from(dto: PersonV1_0_0) -> Self {
        PersonV1_1_0 {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            gender: dto.gender,
            nationality: dto.nationality,
            decade: None,
            image_data: dto.image_data,
            notes: dto.notes,
            tags: dto.tags,
            is_favorite: dto.is_favorite,
            favorited_at: None,
        }
    }
}

impl From<&Person> for PersonV1_1_0 {
    fn from(person: &Person) -> Self {
        PersonV1_1_0 {
            id: person.id,
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            gender: person.gender,
            nationality: person.nationality,
            decade: person.decade.clone(),
            image_data: person.image_data.as_deref().map(|bytes| BASE64.encode(bytes)),
            notes: person.notes.clone(),
            tags: person.tags.clone(),
            is_favorite: person.is_favorite,
            favorited_at: person.favorited_at,
        }
    }
}

impl From<PersonV1_1_0> for Person {
    fn from(dto: PersonV1_1_0) -> Self {
        // Undecodable images are dropped, the rest of the record survives.
        let image_data = dto
            .image_data
            .and_then(|encoded| match BASE64.decode(encoded.as_bytes()) {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    tracing::warn!(id = %dto.id, error = %e, "Dropping undecodable image data");
                    None
                }
            });

        Person {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            gender: dto.gender,
            nationality: dto.nationality,
            decade: dto.decade,
            image_data,
            notes: dto.notes,
            tags: dto.tags,
            is_favorite: dto.is_favorite,
            favorited_at: dto.favorited_at,
        }
    }
}

// ============================================================================
// FavoriteCollection DTOs
// ============================================================================

/// Favorites DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct FavoritesV1_0_0 {
    #[serde(default)]
    pub favorites: Vec<PersonV1_0_0>,
}

/// Favorites DTO V1.1.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.1.0")]
pub struct FavoritesV1_1_0 {
    #[serde(default)]
    pub favorites: Vec<PersonV1_1_0>,
}

/// Type alias for the latest favorites version.
pub type FavoritesDTO = FavoritesV1_1_0;

/// Migration from FavoritesV1_0_0 to FavoritesV1_1_0.
impl MigratesTo<FavoritesV1_1_0> for FavoritesV1_0_0 {
    fn migrate(self) -> FavoritesV1_1_0 {
        FavoritesV1_1_0 {
            favorites: self.favorites.into_iter().map(Into::into).collect(),
        }
    }
}

/// Convert FavoritesV1_1_0 DTO to domain model
impl IntoDomain<FavoriteCollection> for FavoritesV1_1_0 {
    fn into_domain(self) -> FavoriteCollection {
        FavoriteCollection {
            favorites: self.favorites.into_iter().map(Into::into).collect(),
        }
    }
}

/// Convert domain model to FavoritesV1_1_0 DTO (for version-migrate save support)
impl FromDomain<FavoriteCollection> for FavoritesV1_1_0 {
    fn from_domain(collection: FavoriteCollection) -> Self {
        FavoritesV1_1_0 {
            favorites: collection.favorites.iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for the favorites collection.
///
/// # Migration Path
///
/// - V1.0.0 → V1.1.0: `decade` and `favoritedAt` start out empty
/// - V1.1.0 → FavoriteCollection
pub fn create_favorites_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("favorites" => [
        FavoritesV1_0_0,
        FavoritesV1_1_0,
        FavoriteCollection
    ], save = true)
    .expect("Failed to create favorites migrator")
}
