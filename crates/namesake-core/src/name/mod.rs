//! Name generation domain.
//!
//! # Module Structure
//!
//! - `model`: keys and value types (`Gender`, `Nationality`, `DecadeLabel`,
//!   `GenerationRequest`, `GeneratedName`)
//! - `table`: the static nationality/gender/decade lookup (`NameTable`)
//! - `recency`: bounded anti-repetition history (`RecencyState`)
//! - `generator`: single-person generation (`NameGenerator`)
//! - `batch`: alphabetical batch generation on top of `NameGenerator`
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use namesake_core::name::{Gender, GenerationRequest, NameGenerator, NameTable, Nationality};
//!
//! let table = NameTable::new()
//!     .with_first_names(Nationality::German, Gender::Female, "1990", ["Anna", "Lena"])
//!     .with_last_names(Nationality::German, ["Bauer", "Klein"]);
//! let mut generator = NameGenerator::new(Arc::new(table));
//!
//! let request = GenerationRequest::new(Gender::Female, Nationality::German, "1990");
//! let name = generator.generate(&request).unwrap();
//! assert!(["Anna", "Lena"].contains(&name.first_name.as_str()));
//! ```

mod batch;
mod generator;
mod model;
mod recency;
mod table;

pub use batch::{ALPHABET, LETTER_ATTEMPTS, MAX_BATCH_SIZE, MIN_BATCH_SIZE, RARE_LETTER_ATTEMPTS};
pub use generator::NameGenerator;
pub use model::{
    DecadeLabel, GeneratedName, Gender, GenerationRequest, Nationality, starts_with_letter,
};
pub use recency::{DEFAULT_RECENCY_CAPACITY, RecencyPolicy, RecencyState};
pub use table::{BucketSummary, DecadeNames, NameTable};
