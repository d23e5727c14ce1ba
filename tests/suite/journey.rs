//! Timeline playback driven through the app's frame loop.

use std::time::Duration;

use rizal_engine::{App, SectionId};

use crate::common::{assert_screen_contains, render, settings_at};

const TICK: Duration = Duration::from_millis(505);

#[tokio::test(start_paused = true)]
async fn playback_advances_rendered_year() {
    let mut app = App::new(settings_at(SectionId::Map));
    app.journey_toggle_play();
    let screen = render(&mut app);
    assert_screen_contains(&screen, &["Pause"]);

    for _ in 0..3 {
        tokio::time::sleep(TICK).await;
        app.tick();
    }
    assert_eq!(app.journey().year().get(), 1864);
    let screen = render(&mut app);
    assert_screen_contains(&screen, &["1864"]);
}

#[tokio::test(start_paused = true)]
async fn playback_stops_at_final_year() {
    let mut app = App::new(settings_at(SectionId::Map));
    app.journey_toggle_play();

    for _ in 0..40 {
        tokio::time::sleep(TICK).await;
        app.tick();
    }
    assert_eq!(app.journey().year().get(), 1896);
    assert!(!app.journey().is_playing());
    assert!(!app.journey().ticker_running());

    let screen = render(&mut app);
    assert_screen_contains(&screen, &["Play", "6 of 6 locations visited"]);
}

#[tokio::test(start_paused = true)]
async fn manual_year_change_keeps_playing() {
    let mut app = App::new(settings_at(SectionId::Map));
    app.journey_toggle_play();
    app.journey_set_year(1890);

    tokio::time::sleep(TICK).await;
    app.tick();
    assert_eq!(app.journey().year().get(), 1891);
    assert!(app.journey().is_playing());
}

#[test]
fn selecting_a_card_makes_it_active() {
    let mut app = App::new(settings_at(SectionId::Map));
    app.journey_last_year();
    app.journey_move_cursor(2);
    app.journey_select();

    let (_, record) = app.journey().active_location().expect("active location");
    assert_eq!(record.name, "Heidelberg");
    assert!(app.journey().surface().is_flying());
}
