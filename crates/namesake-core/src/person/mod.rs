//! Person and favorites domain.
//!
//! - `model`: `Person`, `PersonDetails`, persistence snapshots, `IconTint`
//! - `query`: tag/search filtering of favorites
//! - `export`: plain-text share document
//! - `repository`: persistence trait and an in-memory implementation

mod export;
mod model;
mod query;
mod repository;

pub use export::DetailsExport;
pub use model::{DetailsBook, FavoriteCollection, IconTint, Person, PersonDetails};
pub use query::FavoriteQuery;
pub use repository::{FavoriteRepository, InMemoryFavoriteRepository};
