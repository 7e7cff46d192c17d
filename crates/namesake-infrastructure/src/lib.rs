//! Persistence and I/O for namesake: application paths, config file, name
//! table loading, versioned favorites storage and picture helpers.

pub mod config_service;
pub mod dto;
pub mod file_favorite_repository;
pub mod name_table_loader;
pub mod paths;
pub mod picture;
pub mod storage;

pub use config_service::ConfigService;
pub use file_favorite_repository::FileFavoriteRepository;
pub use name_table_loader::NameTableLoader;
pub use paths::{NamesakePaths, PathError};
