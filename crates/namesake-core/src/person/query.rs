//! Filtering of the favorites list.

use serde::{Deserialize, Serialize};

use super::model::Person;

/// Tag filter plus free-text search over favorites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteQuery {
    /// Only people carrying this tag.
    pub tag: Option<String>,
    /// Case-insensitive substring of the first or last name.
    pub search: Option<String>,
}

impl FavoriteQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn matches(&self, person: &Person) -> bool {
        if let Some(tag) = &self.tag {
            if !person.has_tag(tag) {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => {
                let needle = needle.to_lowercase();
                person.first_name.to_lowercase().contains(&needle)
                    || person.last_name.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }

    /// Matching people, sorted by first name.
    pub fn apply(&self, favorites: &[Person]) -> Vec<Person> {
        let mut matched: Vec<Person> = favorites
            .iter()
            .filter(|person| self.matches(person))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.first_name.cmp(&b.first_name));
        matched
    }
}
