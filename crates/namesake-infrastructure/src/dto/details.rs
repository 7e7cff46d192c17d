//! Person details DTOs and migrations
//!
//! ## Version History
//! - **1.0.0**: Initial schema, records keyed by person id

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use version_migrate::{FromDomain, IntoDomain, Versioned};

use namesake_core::person::{DetailsBook, PersonDetails};

/// Person details record DTO V1.0.0
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetailsV1_0_0 {
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub characteristics: String,
    #[serde(default)]
    pub clothing_style: String,
    #[serde(default)]
    pub wants: String,
    #[serde(default)]
    pub needs: String,
    #[serde(default)]
    pub notes: String,
}

impl From<&PersonDetails> for PersonDetailsV1_0_0 {
    fn from(details: &PersonDetails) -> Self {
        PersonDetailsV1_0_0 {
            age: details.age.clone(),
            characteristics: details.characteristics.clone(),
            clothing_style: details.clothing_style.clone(),
            wants: details.wants.clone(),
            needs: details.needs.clone(),
            notes: details.notes.clone(),
        }
    }
}

impl From<PersonDetailsV1_0_0> for PersonDetails {
    fn from(dto: PersonDetailsV1_0_0) -> Self {
        PersonDetails {
            age: dto.age,
            characteristics: dto.characteristics,
            clothing_style: dto.clothing_style,
            wants: dto.wants,
            needs: dto.needs,
            notes: dto.notes,
        }
    }
}

/// Details book DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct DetailsBookV1_0_0 {
    #[serde(default)]
    pub entries: HashMap<Uuid, PersonDetailsV1_0_0>,
}

/// Type alias for the latest details version.
pub type DetailsBookDTO = DetailsBookV1_0_0;

impl IntoDomain<DetailsBook> for DetailsBookV1_0_0 {
    fn into_domain(self) -> DetailsBook {
        DetailsBook {
            entries: self
                .entries
                .into_iter()
                .map(|(id, dto)| (id, dto.into()))
                .collect(),
        }
    }
}

impl FromDomain<DetailsBook> for DetailsBookV1_0_0 {
    fn from_domain(book: DetailsBook) -> Self {
        DetailsBookV1_0_0 {
            entries: book
                .entries
                .iter()
                .map(|(id, details)| (*id, details.into()))
                .collect(),
        }
    }
}

/// Creates a Migrator for the details book.
pub fn create_details_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("person_details" => [DetailsBookV1_0_0, DetailsBook], save = true)
        .expect("Failed to create person_details migrator")
}
