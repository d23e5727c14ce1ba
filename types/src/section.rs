//! Page sections in their fixed display order.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Hero,
    Timeline,
    Library,
    Map,
    Gallery,
    Traveler,
    Quiz,
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section {0:?}")]
pub struct UnknownSectionError(pub String);

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Hero,
        SectionId::Timeline,
        SectionId::Library,
        SectionId::Map,
        SectionId::Gallery,
        SectionId::Traveler,
        SectionId::Quiz,
        SectionId::Legacy,
    ];

    /// Anchor name, also accepted in config and environment overrides.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Timeline => "timeline",
            SectionId::Library => "library",
            SectionId::Map => "map",
            SectionId::Gallery => "gallery",
            SectionId::Traveler => "traveler",
            SectionId::Quiz => "quiz",
            SectionId::Legacy => "legacy",
        }
    }

    /// Short label for the navigation bar.
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Timeline => "Timeline",
            SectionId::Library => "Library",
            SectionId::Map => "Journey",
            SectionId::Gallery => "Gallery",
            SectionId::Traveler => "Traveler",
            SectionId::Quiz => "Quiz",
            SectionId::Legacy => "Legacy",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    /// Section at `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next section; stays on the last one.
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(self)
    }

    /// Previous section; stays on the first one.
    #[must_use]
    pub fn prev(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(self)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == needle)
            .ok_or(UnknownSectionError(s.to_string()))
    }
}
