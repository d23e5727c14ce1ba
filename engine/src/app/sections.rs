//! Section actions. Each maps one user intent onto the owning state value.

use std::time::Duration;

use rizal_content::POEM;
use rizal_core::QuizPhase;
use rizal_types::ui::ModalEffect;
use rizal_types::{MAX_YEAR, MIN_YEAR, SectionId};

use super::{App, StatusKind};

const LIGHTBOX_POP: Duration = Duration::from_millis(250);
const CARD_FLIP: Duration = Duration::from_millis(400);
const EXPLANATION_SLIDE: Duration = Duration::from_millis(300);

impl App {
    pub fn go_to(&mut self, section: SectionId) {
        if self.nav.go(section) {
            self.close_overlays();
        }
    }

    fn close_overlays(&mut self) {
        self.gallery.close();
        self.view.show_help = false;
        self.view.modal_effect = None;
    }

    pub fn next_section(&mut self) {
        self.go_to(self.nav.current().next());
    }

    pub fn prev_section(&mut self) {
        self.go_to(self.nav.current().prev());
    }

    /// Jump by the 1-based number shown in the nav bar.
    pub fn jump_section(&mut self, number: usize) {
        if self.nav.jump(number) {
            self.close_overlays();
        }
    }

    /// The hero call to action.
    pub fn explore_legacy(&mut self) {
        self.go_to(SectionId::Timeline);
    }

    /// Close the topmost overlay. Returns false if nothing was open.
    pub fn dismiss(&mut self) -> bool {
        if self.view.show_help {
            self.view.show_help = false;
            return true;
        }
        if self.gallery.lightbox().is_some() {
            self.gallery.close();
            self.view.modal_effect = None;
            return true;
        }
        false
    }

    // Life timeline

    pub fn life_move(&mut self, delta: isize) {
        self.life.move_cursor(delta);
    }

    pub fn life_toggle(&mut self) {
        self.life.toggle_expanded();
    }

    // Library

    pub fn library_move(&mut self, delta: isize) {
        self.library.move_cursor(delta);
    }

    pub fn library_flip(&mut self) {
        if self.library.toggle_flip() {
            self.start_modal_effect(ModalEffect::flip(CARD_FLIP));
        }
    }

    pub fn poem_scroll(&mut self, delta: i32) {
        let max = Self::poem_line_count().saturating_sub(1);
        let max = u16::try_from(max).unwrap_or(u16::MAX);
        self.library.scroll_poem(delta, max);
    }

    /// Start the configured external player on the poem recording.
    pub fn play_poem(&mut self) {
        let path = self.settings.audio_path.clone();
        match self.audio.play(&path) {
            Ok(()) => {
                self.poem_playing = true;
                self.set_status(StatusKind::Info, format!("Playing {}", POEM.title));
            }
            Err(err) => {
                tracing::warn!("Poem playback failed: {err}");
                self.set_status(StatusKind::Warning, err.to_string());
            }
        }
    }

    pub fn stop_poem(&mut self) {
        self.audio.stop();
        self.poem_playing = false;
    }

    /// Whether the external player was still running at the last `tick`.
    #[must_use]
    pub fn poem_playing(&self) -> bool {
        self.poem_playing
    }

    #[must_use]
    pub fn audio_configured(&self) -> bool {
        self.audio.is_configured()
    }

    // Journey

    pub fn journey_step_year(&mut self, delta: i64) {
        self.journey.step_year(delta);
    }

    pub fn journey_set_year(&mut self, year: i64) {
        self.journey.set_year(year);
    }

    pub fn journey_first_year(&mut self) {
        self.journey.set_year(i64::from(MIN_YEAR));
    }

    pub fn journey_last_year(&mut self) {
        self.journey.set_year(i64::from(MAX_YEAR));
    }

    pub fn journey_toggle_play(&mut self) {
        self.journey.toggle_play();
    }

    pub fn journey_move_cursor(&mut self, delta: isize) {
        self.journey_cursor.move_by(delta);
    }

    /// Make the card under the cursor the active location.
    pub fn journey_select(&mut self) {
        self.journey.select_location(self.journey_cursor.index());
    }

    // Gallery

    pub fn gallery_move(&mut self, delta: isize) {
        self.gallery.move_cursor(delta);
    }

    pub fn gallery_open(&mut self) {
        if self.gallery.open() {
            self.start_modal_effect(ModalEffect::pop_scale(LIGHTBOX_POP));
        }
    }

    pub fn gallery_close(&mut self) {
        self.gallery.close();
        self.view.modal_effect = None;
    }

    // Traveler

    pub fn traveler_next(&mut self) {
        self.traveler.next();
    }

    pub fn traveler_prev(&mut self) {
        self.traveler.prev();
    }

    // Quiz

    pub fn quiz_move(&mut self, delta: isize) {
        self.quiz.move_selection(delta);
    }

    pub fn quiz_select(&mut self, option: usize) {
        self.quiz.select_option(option);
    }

    pub fn quiz_submit(&mut self) {
        let was_answering = matches!(self.quiz.phase(), QuizPhase::Answering { .. });
        self.quiz.submit();
        if was_answering && matches!(self.quiz.phase(), QuizPhase::Revealed { .. }) {
            self.start_modal_effect(ModalEffect::slide_up(EXPLANATION_SLIDE));
        }
    }

    pub fn quiz_next(&mut self) {
        self.quiz.next();
        self.view.modal_effect = None;
    }

    pub fn quiz_restart(&mut self) {
        self.quiz.restart();
        self.view.modal_effect = None;
    }

    /// Enter on the quiz: submit while answering, continue once revealed,
    /// start over when finished.
    pub fn quiz_confirm(&mut self) {
        match self.quiz.phase() {
            QuizPhase::Answering { .. } => self.quiz_submit(),
            QuizPhase::Revealed { .. } => self.quiz_next(),
            QuizPhase::Complete => self.quiz_restart(),
        }
    }
}
