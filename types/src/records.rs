//! Static content records.
//!
//! Every record borrows `'static` text: content is compiled in and never
//! created or destroyed at runtime.

use crate::period::{parse_start_year, try_parse_start_year};

/// A point on the globe in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Linear interpolation towards `to`; `t` is clamped to `[0.0, 1.0]`.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            lat: self.lat + (to.lat - self.lat) * t,
            lng: self.lng + (to.lng - self.lng) * t,
        }
    }
}

/// A stop on the world-map journey.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationRecord {
    pub id: u32,
    pub name: &'static str,
    pub country: &'static str,
    pub coordinates: Coordinates,
    /// Free text with one or more years, e.g. `"1861-1882, 1887-1888"`.
    pub period: &'static str,
    pub description: &'static str,
    pub significance: &'static str,
}

impl LocationRecord {
    /// First year mentioned in `period`, or the timeline minimum if none parses.
    #[must_use]
    pub fn start_year(&self) -> u16 {
        parse_start_year(self.period)
    }

    /// First year mentioned in `period`, without the fallback.
    #[must_use]
    pub fn declared_start_year(&self) -> Option<u16> {
        try_parse_start_year(self.period)
    }
}

/// A milestone in the "Life's Journey" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEvent {
    /// Display label; may be a range such as `"1872-1877"`.
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    pub title: &'static str,
    pub year: &'static str,
    pub summary: &'static str,
    pub significance: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photo {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Asset file name, shown as a caption since the terminal cannot draw it.
    pub asset: &'static str,
}

/// A tab in "The Traveler" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelerLocation {
    pub name: &'static str,
    pub country: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub significance: &'static str,
    /// Banner colour as `(r, g, b)`.
    pub accent: (u8, u8, u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub explanation: &'static str,
}

impl QuizQuestion {
    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyPillar {
    pub title: &'static str,
    pub body: &'static str,
    pub footnote: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub attribution: &'static str,
}

/// The Mi Último Adiós spotlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poem {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Stanzas in the original Spanish, one line per element.
    pub original: &'static [&'static [&'static str]],
    pub translation: &'static [&'static [&'static str]],
    pub original_note: &'static str,
    pub translation_note: &'static str,
    /// Relative path of the recorded reading.
    pub audio_asset: &'static str,
}
