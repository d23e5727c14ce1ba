//! Core domain types for Rizal.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod period;
mod records;
mod section;
pub mod ui;
mod year;

pub use period::parse_start_year;
pub use records::{
    Book, Coordinates, LegacyPillar, LocationRecord, Photo, Poem, QuizQuestion, Quote,
    TimelineEvent, TravelerLocation,
};
pub use section::{SectionId, UnknownSectionError};
pub use year::{MAX_YEAR, MIN_YEAR, TimelineYear};

use thiserror::Error;

/// A violation of the authored-content invariants.
///
/// Content is compiled in, so these only ever surface from validation passes
/// (tests and a startup self-check). Rendering never fails on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("location {name:?} has no 4-digit year in period {period:?}")]
    UnparseablePeriod {
        name: &'static str,
        period: &'static str,
    },
    #[error("location {name:?} starts in {year}, before the previous location ({previous})")]
    OutOfOrder {
        name: &'static str,
        year: u16,
        previous: u16,
    },
    #[error("location {name:?} starts in {year}, outside the timeline range")]
    OutOfRange { name: &'static str, year: u16 },
    #[error("location id {id} is not unique")]
    DuplicateId { id: u32 },
    #[error("question {index} has correct answer {correct} but only {options} options")]
    CorrectAnswerOutOfRange {
        index: usize,
        correct: usize,
        options: usize,
    },
    #[error("{collection} must not be empty")]
    Empty { collection: &'static str },
}
