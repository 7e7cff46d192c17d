//! Plain-text export of a person's details for sharing.

use super::model::{Person, PersonDetails};

/// A text document ready to be written to a file and shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsExport {
    pub file_name: String,
    pub content: String,
}

impl DetailsExport {
    pub fn render(person: &Person, details: &PersonDetails) -> Self {
        let sections = [
            ("Alter", &details.age),
            ("Merkmale", &details.characteristics),
            ("Style", &details.clothing_style),
            ("Want", &details.wants),
            ("Need", &details.needs),
        ];

        let mut content = format!("{}\n\n\n", person.full_name());
        for (label, value) in sections {
            content.push_str(&format!("{label}:\n{value}\n\n"));
        }
        content.push_str(&format!("Notizen:\n{}\n", details.notes));

        Self {
            file_name: format!("Person_{}_{}.txt", person.first_name, person.last_name),
            content,
        }
    }
}
