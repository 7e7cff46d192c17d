//! Person domain models.

use std::collections::{BTreeSet, HashMap};
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::name::{DecadeLabel, GeneratedName, Gender, Nationality};

/// A named person, either freshly generated or kept as a favorite.
///
/// Identity is the `id`: two `Person` values with the same id compare equal
/// even if one of them carries newer edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub nationality: Nationality,
    /// Decade bucket the first name was drawn from.
    pub decade: Option<DecadeLabel>,
    /// JPEG bytes of the attached picture.
    pub image_data: Option<Vec<u8>>,
    pub notes: String,
    pub tags: BTreeSet<String>,
    pub is_favorite: bool,
    /// Set when the person is added to favorites.
    pub favorited_at: Option<DateTime<Utc>>,
}

impl Person {
    /// Creates a non-favorite person with a fresh id.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
        nationality: Nationality,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender,
            nationality,
            decade: None,
            image_data: None,
            notes: String::new(),
            tags: BTreeSet::new(),
            is_favorite: false,
            favorited_at: None,
        }
    }

    pub fn with_decade(mut self, decade: DecadeLabel) -> Self {
        self.decade = Some(decade);
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Adds a trimmed, non-empty tag. Returns whether it was new.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        !tag.is_empty() && self.tags.insert(tag.to_string())
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    pub fn has_image(&self) -> bool {
        self.image_data.is_some()
    }

    /// Marks the person as favorite, stamped with `at`.
    pub fn mark_favorite(&mut self, at: DateTime<Utc>) {
        self.is_favorite = true;
        self.favorited_at = Some(at);
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<GeneratedName> for Person {
    fn from(name: GeneratedName) -> Self {
        let request = name.request;
        Person::new(
            name.first_name,
            name.last_name,
            request.gender,
            request.nationality,
        )
        .with_decade(request.decade)
    }
}

/// Free-form character notes kept per favorite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDetails {
    pub age: String,
    pub characteristics: String,
    pub clothing_style: String,
    pub wants: String,
    pub needs: String,
    pub notes: String,
}

impl PersonDetails {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Every favorite, in insertion order. Unit of persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoriteCollection {
    pub favorites: Vec<Person>,
}

/// Details records keyed by person id. Unit of persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailsBook {
    pub entries: HashMap<Uuid, PersonDetails>,
}

/// Icon color that contrasts with a picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTint {
    /// Dark icon over a bright picture.
    Dark,
    /// Light icon over a dark picture.
    Light,
}

impl IconTint {
    /// Brightness above which a picture counts as bright.
    pub const BRIGHTNESS_THRESHOLD: f32 = 0.5;

    /// Maps an average brightness in `0.0..=1.0` to a contrasting tint.
    pub fn for_brightness(brightness: f32) -> Self {
        if brightness > Self::BRIGHTNESS_THRESHOLD {
            IconTint::Dark
        } else {
            IconTint::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::GenerationRequest;

    #[test]
    fn test_equality_is_by_id() {
        let a = Person::new("Anna", "Bauer", Gender::Female, Nationality::German);
        let mut b = a.clone();
        b.first_name = "Lena".to_string();
        assert_eq!(a, b);

        let c = Person::new("Anna", "Bauer", Gender::Female, Nationality::German);
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_generated_name_keeps_request() {
        let request = GenerationRequest::new(Gender::Male, Nationality::British, "1980");
        let person: Person = GeneratedName::new("Oliver", "Smith", request).into();
        assert_eq!(person.full_name(), "Oliver Smith");
        assert_eq!(person.gender, Gender::Male);
        assert_eq!(person.decade, Some(DecadeLabel::decade("1980")));
        assert!(!person.is_favorite);
        assert!(person.favorited_at.is_none());
    }

    #[test]
    fn test_tags() {
        let mut person = Person::new("Anna", "Bauer", Gender::Female, Nationality::German);
        assert!(person.add_tag(" villain "));
        assert!(!person.add_tag("villain"));
        assert!(!person.add_tag("   "));
        assert!(person.has_tag("villain"));
        assert!(person.remove_tag("villain"));
        assert!(person.tags.is_empty());
    }

    #[test]
    fn test_details_is_empty() {
        let mut details = PersonDetails::default();
        assert!(details.is_empty());
        details.age = "34".to_string();
        assert!(!details.is_empty());
    }

    #[test]
    fn test_icon_tint_threshold() {
        assert_eq!(IconTint::for_brightness(0.9), IconTint::Dark);
        assert_eq!(IconTint::for_brightness(0.5), IconTint::Light);
        assert_eq!(IconTint::for_brightness(0.1), IconTint::Light);
    }
}
