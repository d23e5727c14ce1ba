use std::fs;
use std::time::Duration;

use rizal_content::{LOCATIONS, QUESTIONS};
use rizal_core::{ActiveOrigin, QuizPhase, QuizTier};
use rizal_types::ui::{ModalEffectKind, UiOptions};
use rizal_types::{MAX_YEAR, MIN_YEAR, SectionId};

use super::{App, StatusKind};
use crate::config::Settings;

fn app() -> App {
    App::new(Settings::default())
}

fn calm_app() -> App {
    App::new(Settings {
        ui: UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        },
        ..Settings::default()
    })
}

#[test]
fn starts_on_configured_section() {
    let app = App::new(Settings {
        start_section: SectionId::Quiz,
        ..Settings::default()
    });
    assert_eq!(app.current_section(), SectionId::Quiz);
    assert_eq!(self::app().current_section(), SectionId::Hero);
}

#[test]
fn explore_legacy_goes_to_timeline() {
    let mut app = app();
    app.explore_legacy();
    assert_eq!(app.current_section(), SectionId::Timeline);
}

#[test]
fn section_navigation_follows_page_order() {
    let mut app = app();
    app.prev_section();
    assert_eq!(app.current_section(), SectionId::Hero);
    app.next_section();
    app.next_section();
    assert_eq!(app.current_section(), SectionId::Library);
    app.jump_section(8);
    assert_eq!(app.current_section(), SectionId::Legacy);
    app.jump_section(9);
    assert_eq!(app.current_section(), SectionId::Legacy);
}

#[test]
fn leaving_gallery_closes_lightbox() {
    let mut app = app();
    app.go_to(SectionId::Gallery);
    app.gallery_move(2);
    app.gallery_open();
    assert_eq!(app.gallery().lightbox(), Some(2));
    assert_eq!(
        app.modal_effect().map(|effect| effect.kind()),
        Some(ModalEffectKind::PopScale)
    );

    app.next_section();
    assert_eq!(app.gallery().lightbox(), None);
    assert!(app.modal_effect().is_none());
}

#[test]
fn number_jump_closes_overlays_only_when_section_changes() {
    let mut app = app();
    app.jump_section(5);
    assert_eq!(app.current_section(), SectionId::Gallery);
    app.gallery_open();
    app.toggle_help();

    for number in [0, 5, 9] {
        app.jump_section(number);
        assert_eq!(app.current_section(), SectionId::Gallery);
        assert!(app.gallery().lightbox().is_some());
        assert!(app.show_help());
    }

    app.jump_section(6);
    assert_eq!(app.current_section(), SectionId::Traveler);
    assert!(app.gallery().lightbox().is_none());
    assert!(!app.show_help());
    assert!(app.modal_effect().is_none());
}

#[test]
fn dismiss_closes_help_before_lightbox() {
    let mut app = app();
    app.go_to(SectionId::Gallery);
    app.gallery_open();
    app.toggle_help();
    assert!(app.dismiss());
    assert!(!app.show_help());
    assert!(app.gallery().lightbox().is_some());
    assert!(app.dismiss());
    assert!(app.gallery().lightbox().is_none());
    assert!(!app.dismiss());
}

#[test]
fn reduced_motion_suppresses_effects_and_flights() {
    let mut app = calm_app();
    app.go_to(SectionId::Gallery);
    app.gallery_open();
    assert!(app.modal_effect().is_none());

    app.go_to(SectionId::Map);
    app.journey_last_year();
    app.journey_move_cursor(1);
    app.journey_select();
    assert!(!app.journey().surface().is_flying());
    assert_eq!(
        app.journey().surface().camera().center,
        LOCATIONS[1].coordinates
    );
}

#[test]
fn library_flip_starts_flip_effect() {
    let mut app = app();
    app.library_move(1);
    app.library_flip();
    assert_eq!(app.library().flipped(), Some(1));
    assert_eq!(
        app.modal_effect().map(|effect| effect.kind()),
        Some(ModalEffectKind::Flip)
    );
    app.library_flip();
    assert_eq!(app.library().flipped(), None);
}

#[test]
fn poem_scroll_stops_at_last_line() {
    let mut app = app();
    app.poem_scroll(-5);
    assert_eq!(app.library().poem_scroll(), 0);
    app.poem_scroll(10_000);
    let last = App::poem_line_count() - 1;
    assert_eq!(usize::from(app.library().poem_scroll()), last);
}

#[test]
fn poem_without_player_reports_status() {
    let mut app = app();
    assert!(!app.audio_configured());
    app.play_poem();
    let status = app.status().expect("status set");
    assert_eq!(status.kind, StatusKind::Warning);
    assert!(status.text.contains("audio_player"));
}

#[cfg(unix)]
#[test]
fn poem_playing_tracks_external_player() {
    let dir = tempfile::tempdir().unwrap();
    let recording = dir.path().join("poem.mp3");
    fs::write(&recording, b"ID3").unwrap();
    let mut app = App::new(Settings {
        audio_path: recording,
        audio_player: Some("tail -f".to_string()),
        ..Settings::default()
    });

    app.play_poem();
    assert!(app.poem_playing());
    assert_eq!(app.status().map(|status| status.kind), Some(StatusKind::Info));
    app.tick();
    assert!(app.poem_playing());

    app.stop_poem();
    assert!(!app.poem_playing());
    app.tick();
    assert!(!app.poem_playing());
}

#[test]
fn journey_cards_select_with_cursor() {
    let mut app = app();
    app.journey_last_year();
    app.journey_move_cursor(3);
    app.journey_select();
    let (active, record) = app.journey().active_location().unwrap();
    assert_eq!(active.origin, ActiveOrigin::Selected);
    assert_eq!(record.name, LOCATIONS[3].name);
    assert!(app.journey().surface().is_flying());

    app.journey_move_cursor(100);
    assert_eq!(app.journey_cursor(), LOCATIONS.len() - 1);
}

#[test]
fn journey_year_keys_clamp() {
    let mut app = app();
    app.journey_step_year(-1);
    assert_eq!(app.journey().year().get(), MIN_YEAR);
    app.journey_step_year(25);
    assert_eq!(app.journey().year().get(), 1886);
    assert_eq!(app.journey().state().visible().len(), 3);
    app.journey_last_year();
    assert_eq!(app.journey().year().get(), MAX_YEAR);
    app.journey_first_year();
    assert_eq!(app.journey().year().get(), MIN_YEAR);
}

#[test]
fn quiz_confirm_walks_through_all_phases() {
    let mut app = app();
    app.quiz_confirm();
    assert_eq!(app.quiz().phase(), QuizPhase::Answering { selected: None });

    for question in QUESTIONS {
        app.quiz_select(question.correct);
        app.quiz_confirm();
        assert!(matches!(
            app.quiz().phase(),
            QuizPhase::Revealed { correct: true, .. }
        ));
        assert_eq!(
            app.modal_effect().map(|effect| effect.kind()),
            Some(ModalEffectKind::SlideUp)
        );
        app.quiz_confirm();
    }

    let outcome = app.quiz().outcome().unwrap();
    assert_eq!(outcome.tier, QuizTier::Perfect);

    app.quiz_confirm();
    assert_eq!(app.quiz().score(), 0);
    assert_eq!(app.quiz().index(), 0);
}

#[test]
fn status_can_be_cleared() {
    let mut app = app();
    app.set_status(StatusKind::Info, "hello");
    assert_eq!(app.status().map(|s| s.text.as_str()), Some("hello"));
    app.clear_status();
    assert!(app.status().is_none());
}

#[tokio::test(start_paused = true)]
async fn tick_drives_playback() {
    let mut app = app();
    app.journey_toggle_play();
    assert!(app.journey().is_playing());

    tokio::time::sleep(Duration::from_millis(505)).await;
    app.tick();
    assert_eq!(app.journey().year().get(), MIN_YEAR + 1);

    app.request_quit();
    assert!(app.should_quit());
    assert!(!app.journey().is_playing());
}
