//! Core domain of Namesake: random, culturally-appropriate name generation
//! and the favorites model it feeds.

pub mod config;
pub mod error;
pub mod name;
pub mod person;

// Re-export common error type
pub use error::{NamesakeError, Result};
