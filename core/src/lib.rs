//! Domain logic for the Rizal explorer.
//!
//! Everything here is synchronous and side-effect free apart from the
//! [`map::MapSurface`] implementations. Timers, input and drawing live in
//! `rizal-engine` and `rizal-tui`.

pub mod map;
pub mod quiz;
pub mod sections;
pub mod timeline;

pub use map::{Camera, INITIAL_CENTER, INITIAL_ZOOM, MapSurface, Marker, RetainedMap, Viewport};
pub use quiz::{QuizEngine, QuizOutcome, QuizPhase, QuizTier};
pub use sections::{Cursor, GalleryState, LibraryState, LifeState, Navigation, TravelerState};
pub use timeline::{
    ActiveLocation, ActiveOrigin, FLY_TO_DURATION, FLY_TO_ZOOM, MapEffect, PlaybackState,
    TimelineInput, TimelineModel, TimelineState, Transition,
};
