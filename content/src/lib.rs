//! The content store: every record the application displays.
//!
//! Records are `'static` arrays in chronological authoring order. Nothing here
//! allocates or loads; [`validate`] checks the authoring invariants once.

mod gallery;
mod journey;
mod legacy;
mod library;
mod life;
mod quiz;
mod traveler;

pub use gallery::PHOTOS;
pub use journey::LOCATIONS;
pub use legacy::{CLOSING_QUOTE, FOOTER_MOTTO, FOOTER_TAGLINE, FOOTER_TITLE, HERO_QUOTE, PILLARS};
pub use library::{BOOKS, POEM};
pub use life::EVENTS;
pub use quiz::QUESTIONS;
pub use traveler::TRAVELER_LOCATIONS;

use std::collections::HashSet;

use rizal_types::{ContentError, LocationRecord, MAX_YEAR, MIN_YEAR, QuizQuestion};

/// Check the authored data against the invariants the views rely on.
pub fn validate() -> Result<(), ContentError> {
    validate_locations(LOCATIONS)?;
    validate_questions(QUESTIONS)?;
    if PHOTOS.is_empty() {
        return Err(ContentError::Empty {
            collection: "photos",
        });
    }
    if TRAVELER_LOCATIONS.is_empty() {
        return Err(ContentError::Empty {
            collection: "traveler locations",
        });
    }
    Ok(())
}

/// Every period must declare a start year inside the timeline, ids must be
/// unique, and start years must be non-decreasing.
pub fn validate_locations(locations: &[LocationRecord]) -> Result<(), ContentError> {
    if locations.is_empty() {
        return Err(ContentError::Empty {
            collection: "locations",
        });
    }

    let mut seen = HashSet::new();
    let mut previous = MIN_YEAR;
    for location in locations {
        if !seen.insert(location.id) {
            return Err(ContentError::DuplicateId { id: location.id });
        }
        let year = location
            .declared_start_year()
            .ok_or(ContentError::UnparseablePeriod {
                name: location.name,
                period: location.period,
            })?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ContentError::OutOfRange {
                name: location.name,
                year,
            });
        }
        if year < previous {
            return Err(ContentError::OutOfOrder {
                name: location.name,
                year,
                previous,
            });
        }
        previous = year;
    }
    Ok(())
}

pub fn validate_questions(questions: &[QuizQuestion]) -> Result<(), ContentError> {
    if questions.is_empty() {
        return Err(ContentError::Empty {
            collection: "questions",
        });
    }
    for (index, question) in questions.iter().enumerate() {
        if question.correct >= question.options.len() {
            return Err(ContentError::CorrectAnswerOutOfRange {
                index,
                correct: question.correct,
                options: question.options.len(),
            });
        }
    }
    Ok(())
}
