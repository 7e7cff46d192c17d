//! Application layer for namesake.
//!
//! Coordinates the generation engine and the favorites store with their
//! infrastructure: table loading, configuration and persistence.

pub mod favorites_service;
pub mod name_generator_service;

pub use favorites_service::FavoritesService;
pub use name_generator_service::{NameGeneratorService, TableSource};
