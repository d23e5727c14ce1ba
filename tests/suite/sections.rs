//! Each section renders its heading and content.

#[cfg(unix)]
use std::fs;

use rizal_content::{BOOKS, EVENTS, PHOTOS, POEM, TRAVELER_LOCATIONS};
use rizal_engine::{App, SectionId, Settings, StatusKind};

use crate::common::{
    assert_screen_contains, render, render_screen, settings_at, still_settings_at,
};

#[test]
fn hero_shows_title_and_call_to_action() {
    let mut app = App::new(Settings::default());
    let screen = render(&mut app);
    assert_screen_contains(&screen, &["The First Filipino", "Explore His Legacy"]);
}

#[test]
fn nav_lists_every_section() {
    let mut app = App::new(Settings::default());
    let screen = render(&mut app);
    assert_screen_contains(
        &screen,
        &["Dr. José Rizal", "1 Home", "4 Journey", "8 Legacy"],
    );
}

#[test]
fn nav_emphasizes_current_section() {
    let mut app = App::new(settings_at(SectionId::Map));
    let screen = render_screen(&mut app);
    assert!(screen.is_bold(" 4 Journey "));
    assert!(!screen.is_bold(" 1 Home "));

    app.jump_section(1);
    let screen = render_screen(&mut app);
    assert!(screen.is_bold(" 1 Home "));
    assert!(!screen.is_bold(" 4 Journey "));
}

#[test]
fn timeline_reveals_first_events_only() {
    let mut app = App::new(settings_at(SectionId::Timeline));
    let screen = render(&mut app);
    assert_screen_contains(&screen, &["Life's Journey", EVENTS[0].title, EVENTS[1].title]);
    assert!(!screen.contains(EVENTS[7].title));
}

#[test]
fn timeline_expansion_shows_details() {
    let mut app = App::new(settings_at(SectionId::Timeline));
    app.life_toggle();
    let screen = render(&mut app);
    let first_words: String = EVENTS[0].details.chars().take(24).collect();
    assert_screen_contains(&screen, &[&first_words]);
}

#[test]
fn library_shows_books_and_poem() {
    let mut app = App::new(settings_at(SectionId::Library));
    let screen = render(&mut app);
    assert_screen_contains(
        &screen,
        &["The Library", BOOKS[0].title, "Mi Último Adiós", "audio_player"],
    );
}

#[cfg(unix)]
#[test]
fn library_marks_running_player() {
    let dir = tempfile::tempdir().unwrap();
    let recording = dir.path().join("poem.mp3");
    fs::write(&recording, b"ID3").unwrap();
    let mut app = App::new(Settings {
        audio_path: recording,
        audio_player: Some("tail -f".to_string()),
        ..still_settings_at(SectionId::Library)
    });
    let playing = format!("{}  playing", POEM.audio_asset);

    let screen = render(&mut app);
    assert!(!screen.contains(&playing));

    app.play_poem();
    let screen = render(&mut app);
    assert_screen_contains(&screen, &[&playing, &format!("Playing {}", POEM.title)]);

    app.stop_poem();
    let screen = render(&mut app);
    assert!(!screen.contains(&playing));
}

#[test]
fn flipped_book_shows_significance() {
    let mut app = App::new(still_settings_at(SectionId::Library));
    app.library_flip();
    let screen = render(&mut app);
    assert_screen_contains(&screen, &["Significance"]);
}

#[test]
fn journey_starts_with_birthplace_only() {
    let mut app = App::new(settings_at(SectionId::Map));
    let screen = render(&mut app);
    assert_screen_contains(
        &screen,
        &[
            "The World Traveler",
            "Journey Timeline",
            "Play",
            "1 of 6 locations visited",
            "Historical Significance",
        ],
    );
}

#[test]
fn journey_last_year_shows_every_location() {
    let mut app = App::new(settings_at(SectionId::Map));
    app.journey_last_year();
    let screen = render(&mut app);
    assert_screen_contains(&screen, &["6 of 6 locations visited", "1896"]);
}

#[test]
fn gallery_lightbox_shows_description() {
    let mut app = App::new(still_settings_at(SectionId::Gallery));
    let screen = render(&mut app);
    assert_screen_contains(&screen, &["Photo Gallery", PHOTOS[0].title]);

    app.gallery_open();
    let screen = render(&mut app);
    assert_screen_contains(&screen, &[PHOTOS[0].asset, "Esc"]);
}

#[test]
fn traveler_tabs_switch_destination() {
    let mut app = App::new(settings_at(SectionId::Traveler));
    let screen = render(&mut app);
    assert_screen_contains(&screen, &["The Traveler", TRAVELER_LOCATIONS[0].period]);

    app.traveler_next();
    let screen = render(&mut app);
    assert_screen_contains(&screen, &[TRAVELER_LOCATIONS[1].period]);
}

#[test]
fn legacy_shows_pillars() {
    let mut app = App::new(settings_at(SectionId::Legacy));
    let screen = render(&mut app);
    assert_screen_contains(
        &screen,
        &["Rizal's Enduring Legacy", "The Rizal Law", "Global Monuments"],
    );
}

#[test]
fn help_overlay_lists_section_keys() {
    let mut app = App::new(settings_at(SectionId::Map));
    app.toggle_help();
    let screen = render(&mut app);
    assert_screen_contains(&screen, &["Keys", "play / pause", "toggle help"]);
}

#[test]
fn footer_shows_status_warning() {
    let mut app = App::new(settings_at(SectionId::Library));
    app.play_poem();
    assert!(matches!(
        app.status().map(|status| status.kind),
        Some(StatusKind::Warning)
    ));
    let screen = render(&mut app);
    assert_screen_contains(&screen, &["Warning: "]);
}
