//! Timeline/map synchronization state machine.
//!
//! [`TimelineModel::reduce`] is a pure function from the current
//! [`TimelineState`] and one [`TimelineInput`] to the next state plus the
//! ordered [`MapEffect`]s a driver must apply. Nothing here touches a map or a
//! timer directly.
//!
//! ```text
//!            play()                       tick (year < 1896)
//!   Paused ─────────▶ Playing { gen } ◀──────────────┐
//!     ▲                   │   │                      │
//!     │     pause()       │   └──────────────────────┘
//!     └───────────────────┤
//!     │                   │ tick reaches 1896
//!     └───────────────────┘
//! ```

use std::time::Duration;

use rizal_types::{Coordinates, LocationRecord, TimelineYear};

/// Zoom used when the camera flies to a selected location.
pub const FLY_TO_ZOOM: f64 = 6.0;
/// Camera flight length for an explicit selection.
pub const FLY_TO_DURATION: Duration = Duration::from_secs(2);

/// Why a location is the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveOrigin {
    /// Derived: the last visible location for the current year.
    Timeline,
    /// Chosen explicitly; lasts until the next year change.
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveLocation {
    pub index: usize,
    pub origin: ActiveOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    /// `generation` identifies the one ticker whose ticks are honoured.
    Playing { generation: u64 },
}

impl PlaybackState {
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, PlaybackState::Playing { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineInput {
    /// Direct year input (slider drag, key press); clamped.
    SetYear(i64),
    /// Explicit location choice by index into the location list.
    Select(usize),
    Play,
    Pause,
    /// The single play/pause button.
    TogglePlay,
    Tick { generation: u64 },
}

/// Side effects for the map surface and the playback ticker, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEffect {
    ClearMarkers,
    AddMarker {
        id: u32,
        at: Coordinates,
        label: String,
    },
    SetPath(Vec<Coordinates>),
    FlyTo {
        at: Coordinates,
        zoom: f64,
        duration: Duration,
    },
    StartTicker {
        generation: u64,
    },
    StopTicker,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineState {
    year: TimelineYear,
    /// Indices of visible locations, in authoring order.
    visible: Vec<usize>,
    active: Option<ActiveLocation>,
    playback: PlaybackState,
    next_generation: u64,
}

impl TimelineState {
    #[must_use]
    pub fn year(&self) -> TimelineYear {
        self.year
    }

    #[must_use]
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    #[must_use]
    pub fn active(&self) -> Option<ActiveLocation> {
        self.active
    }

    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }
}

/// Result of one reduction step.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: TimelineState,
    pub effects: Vec<MapEffect>,
}

/// The static inputs of the state machine: the location list and how
/// selections move the camera.
#[derive(Debug, Clone, Copy)]
pub struct TimelineModel<'a> {
    locations: &'a [LocationRecord],
    fly_zoom: f64,
    fly_duration: Duration,
}

impl<'a> TimelineModel<'a> {
    #[must_use]
    pub fn new(locations: &'a [LocationRecord]) -> Self {
        Self {
            locations,
            fly_zoom: FLY_TO_ZOOM,
            fly_duration: FLY_TO_DURATION,
        }
    }

    #[must_use]
    pub fn with_flight(mut self, zoom: f64, duration: Duration) -> Self {
        self.fly_zoom = zoom;
        self.fly_duration = duration;
        self
    }

    #[must_use]
    pub fn locations(&self) -> &'a [LocationRecord] {
        self.locations
    }

    /// Indices of locations whose start year has been reached by `year`.
    #[must_use]
    pub fn visible_at(&self, year: TimelineYear) -> Vec<usize> {
        self.locations
            .iter()
            .enumerate()
            .filter(|(_, location)| location.start_year() <= year.get())
            .map(|(index, _)| index)
            .collect()
    }

    /// Paused at the first year, with the first location active.
    #[must_use]
    pub fn initial_state(&self) -> TimelineState {
        let year = TimelineYear::MIN;
        TimelineState {
            year,
            visible: self.visible_at(year),
            active: (!self.locations.is_empty()).then_some(ActiveLocation {
                index: 0,
                origin: ActiveOrigin::Timeline,
            }),
            playback: PlaybackState::Paused,
            next_generation: 1,
        }
    }

    /// Effects that bring a fresh surface in line with `state`.
    #[must_use]
    pub fn mount(&self, state: &TimelineState) -> Vec<MapEffect> {
        let mut effects = Vec::new();
        self.redraw(&state.visible, &mut effects);
        effects
    }

    #[must_use]
    pub fn reduce(&self, state: &TimelineState, input: TimelineInput) -> Transition {
        let mut next = state.clone();
        let mut effects = Vec::new();

        match input {
            TimelineInput::SetYear(year) => {
                self.set_year(&mut next, TimelineYear::clamped(year), &mut effects);
            }
            TimelineInput::Select(index) => {
                if let Some(location) = self.locations.get(index) {
                    next.active = Some(ActiveLocation {
                        index,
                        origin: ActiveOrigin::Selected,
                    });
                    effects.push(MapEffect::FlyTo {
                        at: location.coordinates,
                        zoom: self.fly_zoom,
                        duration: self.fly_duration,
                    });
                }
            }
            TimelineInput::Play => self.play(&mut next, &mut effects),
            TimelineInput::Pause => Self::pause(&mut next, &mut effects),
            TimelineInput::TogglePlay => {
                if next.is_playing() {
                    Self::pause(&mut next, &mut effects);
                } else {
                    self.play(&mut next, &mut effects);
                }
            }
            TimelineInput::Tick { generation } => {
                if next.playback == (PlaybackState::Playing { generation }) {
                    if next.year.is_max() {
                        Self::pause(&mut next, &mut effects);
                    } else {
                        let year = next.year.succ();
                        self.set_year(&mut next, year, &mut effects);
                        if year.is_max() {
                            Self::pause(&mut next, &mut effects);
                        }
                    }
                }
            }
        }

        Transition {
            state: next,
            effects,
        }
    }

    fn set_year(
        &self,
        state: &mut TimelineState,
        year: TimelineYear,
        effects: &mut Vec<MapEffect>,
    ) {
        state.year = year;
        state.visible = self.visible_at(year);
        state.active = state.visible.last().map(|&index| ActiveLocation {
            index,
            origin: ActiveOrigin::Timeline,
        });
        self.redraw(&state.visible, effects);
    }

    fn play(&self, state: &mut TimelineState, effects: &mut Vec<MapEffect>) {
        if state.is_playing() {
            return;
        }
        if state.year.is_max() {
            self.set_year(state, TimelineYear::MIN, effects);
        }
        let generation = state.next_generation;
        state.next_generation += 1;
        state.playback = PlaybackState::Playing { generation };
        effects.push(MapEffect::StartTicker { generation });
    }

    fn pause(state: &mut TimelineState, effects: &mut Vec<MapEffect>) {
        if state.is_playing() {
            state.playback = PlaybackState::Paused;
            effects.push(MapEffect::StopTicker);
        }
    }

    /// Stale markers first, then one marker per visible location, then the path.
    fn redraw(&self, visible: &[usize], effects: &mut Vec<MapEffect>) {
        effects.push(MapEffect::ClearMarkers);
        let mut path = Vec::with_capacity(visible.len());
        for (ordinal, &index) in visible.iter().enumerate() {
            let location = &self.locations[index];
            effects.push(MapEffect::AddMarker {
                id: location.id,
                at: location.coordinates,
                label: (ordinal + 1).to_string(),
            });
            path.push(location.coordinates);
        }
        effects.push(MapEffect::SetPath(path));
    }
}
