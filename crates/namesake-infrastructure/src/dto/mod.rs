//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the versioned schema for persisted favorites and
//! details. They are private to the infrastructure layer and handle the
//! evolution of the storage format over time.
//!
//! ## Schema Versioning (Semantic Versioning)
//!
//! - **MAJOR (X.0.0)**: Breaking changes (field removal, type changes)
//! - **MINOR (1.X.0)**: Backward-compatible additions (new optional fields)
//!
//! ### Favorites Version History
//! - **1.0.0**: Initial schema
//! - **1.1.0**: Added `decade` and `favoritedAt` per person
//!
//! ### Person Details Version History
//! - **1.0.0**: Initial schema

mod details;
mod name_table;
mod person;

pub use details::{DetailsBookDTO, DetailsBookV1_0_0, PersonDetailsV1_0_0, create_details_migrator};
pub use name_table::NationalityNamesFile;
pub use person::{
    FavoritesDTO, FavoritesV1_0_0, FavoritesV1_1_0, PersonV1_0_0, PersonV1_1_0,
    create_favorites_migrator,
};
