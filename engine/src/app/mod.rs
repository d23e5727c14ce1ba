//! Application state: one value per page section, the journey synchronizer
//! and the view state shared with the renderer.

mod sections;
#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

use rizal_content::{BOOKS, EVENTS, LOCATIONS, PHOTOS, POEM, QUESTIONS, TRAVELER_LOCATIONS};
use rizal_core::{
    Cursor, GalleryState, LibraryState, LifeState, Navigation, QuizEngine, RetainedMap,
    TimelineModel, TravelerState,
};
use rizal_types::SectionId;
use rizal_types::ui::{ModalEffect, UiOptions};

use crate::audio::AudioPlayer;
use crate::config::Settings;
use crate::synchronizer::Synchronizer;

/// How long a status message stays in the footer.
const STATUS_TTL: Duration = Duration::from_secs(4);
/// Cadence of the decorative animation counter (marching path, pulse).
const ANIM_TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    shown_at: Instant,
}

/// State used only for rendering.
#[derive(Debug)]
struct ViewState {
    ui_options: UiOptions,
    modal_effect: Option<ModalEffect>,
    /// Timestamp of last frame (for modal animation timing).
    last_frame: Instant,
    /// Timestamp of last `tick` (for camera flights).
    last_tick: Instant,
    last_anim_tick: Instant,
    anim_frame: usize,
    status: Option<StatusMessage>,
    show_help: bool,
}

impl ViewState {
    fn new(ui_options: UiOptions) -> Self {
        let now = Instant::now();
        Self {
            ui_options,
            modal_effect: None,
            last_frame: now,
            last_tick: now,
            last_anim_tick: now,
            anim_frame: 0,
            status: None,
            show_help: false,
        }
    }
}

pub struct App {
    settings: Settings,
    nav: Navigation,
    life: LifeState,
    library: LibraryState,
    journey: Synchronizer<RetainedMap>,
    /// Highlighted location card in the journey view.
    journey_cursor: Cursor,
    gallery: GalleryState,
    traveler: TravelerState,
    quiz: QuizEngine,
    audio: AudioPlayer,
    poem_playing: bool,
    view: ViewState,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let fly_duration = if settings.ui.reduced_motion {
            Duration::ZERO
        } else {
            settings.fly_duration
        };
        let model = TimelineModel::new(LOCATIONS).with_flight(settings.fly_zoom, fly_duration);
        let journey = Synchronizer::new(model, RetainedMap::new(), settings.tick_interval);

        tracing::info!(
            start = %settings.start_section,
            locations = LOCATIONS.len(),
            questions = QUESTIONS.len(),
            "App initialized"
        );

        Self {
            nav: Navigation::new(settings.start_section),
            life: LifeState::new(EVENTS.len()),
            library: LibraryState::new(BOOKS.len()),
            journey,
            journey_cursor: Cursor::new(LOCATIONS.len()),
            gallery: GalleryState::new(PHOTOS.len()),
            traveler: TravelerState::new(TRAVELER_LOCATIONS.len()),
            quiz: QuizEngine::new(QUESTIONS),
            audio: AudioPlayer::new(settings.audio_player.clone()),
            poem_playing: false,
            view: ViewState::new(settings.ui),
            should_quit: false,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.journey.pause();
        self.stop_poem();
        self.should_quit = true;
    }

    #[must_use]
    pub fn current_section(&self) -> SectionId {
        self.nav.current()
    }

    #[must_use]
    pub fn life(&self) -> &LifeState {
        &self.life
    }

    #[must_use]
    pub fn library(&self) -> &LibraryState {
        &self.library
    }

    #[must_use]
    pub fn journey(&self) -> &Synchronizer<RetainedMap> {
        &self.journey
    }

    #[must_use]
    pub fn journey_cursor(&self) -> usize {
        self.journey_cursor.index()
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    #[must_use]
    pub fn traveler(&self) -> &TravelerState {
        &self.traveler
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    #[must_use]
    pub fn show_help(&self) -> bool {
        self.view.show_help
    }

    pub fn toggle_help(&mut self) {
        self.view.show_help = !self.view.show_help;
    }

    /// Decorative frame counter, frozen under reduced motion.
    #[must_use]
    pub fn anim_frame(&self) -> usize {
        self.view.anim_frame
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.view.status.as_ref()
    }

    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.view.status = Some(StatusMessage {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        });
    }

    pub fn clear_status(&mut self) {
        self.view.status = None;
    }

    /// Per-frame housekeeping: camera flights, playback ticks, status expiry.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.view.last_tick);
        self.view.last_tick = now;

        self.journey.surface_mut().advance(delta);
        self.journey.pump_ticks();
        self.poem_playing = self.audio.is_playing();

        if !self.view.ui_options.reduced_motion
            && now.duration_since(self.view.last_anim_tick) >= ANIM_TICK
        {
            self.view.last_anim_tick = now;
            self.view.anim_frame = self.view.anim_frame.wrapping_add(1);
        }

        if self
            .view
            .status
            .as_ref()
            .is_some_and(|status| now.duration_since(status.shown_at) >= STATUS_TTL)
        {
            self.view.status = None;
        }
    }

    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        elapsed
    }

    #[must_use]
    pub fn modal_effect(&self) -> Option<&ModalEffect> {
        self.view.modal_effect.as_ref()
    }

    pub fn modal_effect_mut(&mut self) -> Option<&mut ModalEffect> {
        self.view.modal_effect.as_mut()
    }

    pub fn clear_modal_effect(&mut self) {
        self.view.modal_effect = None;
    }

    fn start_modal_effect(&mut self, effect: ModalEffect) {
        if self.view.ui_options.reduced_motion {
            self.view.modal_effect = None;
        } else {
            self.view.modal_effect = Some(effect);
            self.view.last_frame = Instant::now();
        }
    }

    /// Line count of the taller poem column, stanza gaps included.
    #[must_use]
    pub fn poem_line_count() -> usize {
        [POEM.original, POEM.translation]
            .into_iter()
            .map(|stanzas| {
                let lines: usize = stanzas.iter().map(|stanza| stanza.len()).sum();
                lines + stanzas.len().saturating_sub(1)
            })
            .max()
            .unwrap_or(0)
    }
}
