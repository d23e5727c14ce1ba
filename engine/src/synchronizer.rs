//! Drives a [`MapSurface`] and a [`PlaybackTicker`] from the pure timeline
//! state machine.

use std::time::Duration;

use tokio::sync::mpsc;

use rizal_core::{
    ActiveLocation, MapEffect, MapSurface, Marker, TimelineInput, TimelineModel, TimelineState,
};
use rizal_types::{LocationRecord, TimelineYear};

use crate::ticker::{PlaybackTick, PlaybackTicker};

/// The journey view: year, visible locations, active location and playback,
/// kept in step with the map it owns.
///
/// The surface is drawn on construction and the ticker is cancelled on drop.
pub struct Synchronizer<S: MapSurface> {
    model: TimelineModel<'static>,
    state: TimelineState,
    surface: S,
    ticker: PlaybackTicker,
    ticks: mpsc::UnboundedReceiver<PlaybackTick>,
}

impl<S: MapSurface> Synchronizer<S> {
    pub fn new(model: TimelineModel<'static>, surface: S, tick_period: Duration) -> Self {
        let (ticker, ticks) = PlaybackTicker::new(tick_period);
        let state = model.initial_state();
        let mut sync = Self {
            model,
            state,
            surface,
            ticker,
            ticks,
        };
        let effects = sync.model.mount(&sync.state);
        sync.apply(effects);
        sync
    }

    pub fn dispatch(&mut self, input: TimelineInput) {
        let transition = self.model.reduce(&self.state, input);
        self.state = transition.state;
        self.apply(transition.effects);
    }

    pub fn set_year(&mut self, year: i64) {
        self.dispatch(TimelineInput::SetYear(year));
    }

    /// Move the year by `delta`, clamped to the timeline range.
    pub fn step_year(&mut self, delta: i64) {
        let year = self.state.year().offset(delta);
        self.set_year(i64::from(year.get()));
    }

    pub fn select_location(&mut self, index: usize) {
        self.dispatch(TimelineInput::Select(index));
    }

    pub fn play(&mut self) {
        self.dispatch(TimelineInput::Play);
    }

    pub fn pause(&mut self) {
        self.dispatch(TimelineInput::Pause);
    }

    pub fn toggle_play(&mut self) {
        self.dispatch(TimelineInput::TogglePlay);
    }

    /// Feed every tick received since the last call into the state machine.
    /// Returns the number of ticks drained.
    pub fn pump_ticks(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(tick) = self.ticks.try_recv() {
            drained += 1;
            self.dispatch(TimelineInput::Tick {
                generation: tick.generation,
            });
        }
        drained
    }

    #[must_use]
    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    #[must_use]
    pub fn year(&self) -> TimelineYear {
        self.state.year()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    #[must_use]
    pub fn ticker_running(&self) -> bool {
        self.ticker.is_running()
    }

    #[must_use]
    pub fn locations(&self) -> &'static [LocationRecord] {
        self.model.locations()
    }

    pub fn visible_locations(&self) -> impl Iterator<Item = &'static LocationRecord> + '_ {
        let locations = self.model.locations();
        self.state.visible().iter().map(move |&index| &locations[index])
    }

    #[must_use]
    pub fn active_location(&self) -> Option<(ActiveLocation, &'static LocationRecord)> {
        let active = self.state.active()?;
        let record = self.model.locations().get(active.index)?;
        Some((active, record))
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn apply(&mut self, effects: Vec<MapEffect>) {
        for effect in effects {
            match effect {
                MapEffect::ClearMarkers => self.surface.clear_markers(),
                MapEffect::AddMarker { id, at, label } => {
                    self.surface.add_marker(Marker { id, at, label });
                }
                MapEffect::SetPath(points) => self.surface.set_polyline(&points),
                MapEffect::FlyTo { at, zoom, duration } => {
                    self.surface.set_view(at, zoom, Some(duration));
                }
                MapEffect::StartTicker { generation } => {
                    tracing::info!(year = %self.state.year(), generation, "Playback started");
                    self.ticker.start(generation);
                }
                MapEffect::StopTicker => {
                    tracing::info!(year = %self.state.year(), "Playback stopped");
                    self.ticker.stop();
                }
            }
        }
        tracing::debug!(
            year = %self.state.year(),
            visible = self.state.visible().len(),
            "Map synchronized"
        );
    }
}
