//! One renderer per page section.

pub(crate) mod gallery;
pub(crate) mod hero;
pub(crate) mod journey;
pub(crate) mod legacy;
pub(crate) mod library;
pub(crate) mod life;
pub(crate) mod quiz;
pub(crate) mod traveler;
