//! Input handling for the Rizal TUI.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use rizal_engine::{App, SectionId};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and hands them to the frame
/// loop through a bounded channel.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a blocked send in the input thread returns.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input into `app`. Returns `Ok(true)` when the app should exit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => {
                tracing::error!(%msg, "Terminal input failed");
                return Err(anyhow!("input error: {msg}"));
            }
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

pub(crate) fn apply_event(app: &mut App, event: Event) -> bool {
    if let Event::Key(key) = event {
        // Handle press + repeat events (ignore releases)
        if matches!(key.kind, KeyEventKind::Release) {
            return app.should_quit();
        }
        handle_key(app, key);
    }
    app.should_quit()
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
            return;
        }
        KeyCode::Esc => {
            app.dismiss();
            return;
        }
        KeyCode::Char('?') => {
            app.toggle_help();
            return;
        }
        KeyCode::Tab => {
            app.next_section();
            return;
        }
        KeyCode::BackTab => {
            app.prev_section();
            return;
        }
        KeyCode::Char(c @ '1'..='9') => {
            app.jump_section(c as usize - '0' as usize);
            return;
        }
        _ => {}
    }

    if app.show_help() {
        return;
    }

    match app.current_section() {
        SectionId::Hero => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                app.explore_legacy();
            }
        }
        SectionId::Timeline => match key.code {
            KeyCode::Char('k') | KeyCode::Up => app.life_move(-1),
            KeyCode::Char('j') | KeyCode::Down => app.life_move(1),
            KeyCode::Enter | KeyCode::Char(' ') => app.life_toggle(),
            _ => {}
        },
        SectionId::Library => match key.code {
            KeyCode::Char('h') | KeyCode::Left => app.library_move(-1),
            KeyCode::Char('l') | KeyCode::Right => app.library_move(1),
            KeyCode::Enter | KeyCode::Char(' ' | 'f') => app.library_flip(),
            KeyCode::Char('k') | KeyCode::Up => app.poem_scroll(-1),
            KeyCode::Char('j') | KeyCode::Down => app.poem_scroll(1),
            KeyCode::Char('p') => app.play_poem(),
            KeyCode::Char('s') => app.stop_poem(),
            _ => {}
        },
        SectionId::Map => match key.code {
            KeyCode::Char('h') | KeyCode::Left => app.journey_step_year(-1),
            KeyCode::Char('l') | KeyCode::Right => app.journey_step_year(1),
            KeyCode::Char('H') | KeyCode::Home => app.journey_first_year(),
            KeyCode::Char('L') | KeyCode::End => app.journey_last_year(),
            KeyCode::Char(' ' | 'p') => app.journey_toggle_play(),
            KeyCode::Char('k') | KeyCode::Up => app.journey_move_cursor(-1),
            KeyCode::Char('j') | KeyCode::Down => app.journey_move_cursor(1),
            KeyCode::Enter => app.journey_select(),
            _ => {}
        },
        SectionId::Gallery => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if app.gallery().lightbox().is_some() {
                    app.gallery_close();
                } else {
                    app.gallery_open();
                }
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('k') | KeyCode::Up => {
                app.gallery_move(-1);
            }
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('j') | KeyCode::Down => {
                app.gallery_move(1);
            }
            _ => {}
        },
        SectionId::Traveler => match key.code {
            KeyCode::Char('h') | KeyCode::Left => app.traveler_prev(),
            KeyCode::Char('l') | KeyCode::Right => app.traveler_next(),
            _ => {}
        },
        SectionId::Quiz => match key.code {
            KeyCode::Char('k') | KeyCode::Up => app.quiz_move(-1),
            KeyCode::Char('j') | KeyCode::Down => app.quiz_move(1),
            KeyCode::Char(c @ 'a'..='d') => app.quiz_select(c as usize - 'a' as usize),
            KeyCode::Enter | KeyCode::Char(' ') => app.quiz_confirm(),
            KeyCode::Char('r') => app.quiz_restart(),
            _ => {}
        },
        SectionId::Legacy => {}
    }
}
