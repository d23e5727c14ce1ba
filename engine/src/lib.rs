//! Engine for the Rizal explorer: configuration, the playback ticker, the
//! journey synchronizer and the [`App`] state the TUI renders.
//!
//! This crate has no terminal dependencies.

mod app;
mod audio;
mod config;
mod synchronizer;
mod ticker;

pub use app::{App, StatusKind, StatusMessage};
pub use audio::{AudioError, AudioPlayer};
pub use config::{
    AppConfig, ConfigError, DEFAULT_AUDIO_PATH, DEFAULT_TICK_INTERVAL, LibraryConfig,
    RizalConfig, START_SECTION_ENV, Settings, TimelineConfig, config_path, expand_env_vars,
};
pub use synchronizer::Synchronizer;
pub use ticker::{PlaybackTick, PlaybackTicker};

pub use rizal_core::{
    ActiveLocation, ActiveOrigin, Camera, MapSurface, Marker, QuizEngine, QuizOutcome, QuizPhase,
    QuizTier, RetainedMap, TimelineState, Viewport,
};
pub use rizal_types::ui::{AnimPhase, ModalEffect, ModalEffectKind, UiOptions};
pub use rizal_types::{SectionId, TimelineYear};
