//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use ratatui::Terminal;

use rizal_engine::{App, SectionId, Settings, UiOptions};

use crate::screen::ScreenBackend;

pub const WIDTH: u16 = 140;
pub const HEIGHT: u16 = 44;

/// Settings that open on `section`.
pub fn settings_at(section: SectionId) -> Settings {
    Settings {
        start_section: section,
        ..Settings::default()
    }
}

/// Like [`settings_at`], with animations disabled so frames are deterministic.
pub fn still_settings_at(section: SectionId) -> Settings {
    Settings {
        ui: UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        },
        ..settings_at(section)
    }
}

/// Draw one frame of `app` and return the screen text.
pub fn render(app: &mut App) -> String {
    render_sized(app, WIDTH, HEIGHT)
}

pub fn render_sized(app: &mut App, width: u16, height: u16) -> String {
    render_screen_sized(app, width, height).contents()
}

/// Draw one frame and keep the screen for emphasis checks.
pub fn render_screen(app: &mut App) -> ScreenBackend {
    render_screen_sized(app, WIDTH, HEIGHT)
}

fn render_screen_sized(app: &mut App, width: u16, height: u16) -> ScreenBackend {
    let mut terminal =
        Terminal::new(ScreenBackend::new(width, height)).expect("failed to create terminal");
    terminal
        .draw(|frame| rizal_tui::draw(frame, app))
        .expect("failed to draw");
    terminal.backend_mut().take()
}

/// Assert every needle appears somewhere on `screen`.
#[track_caller]
pub fn assert_screen_contains(screen: &str, needles: &[&str]) {
    for needle in needles {
        assert!(
            screen.contains(needle),
            "expected {needle:?} on screen:\n{screen}"
        );
    }
}
