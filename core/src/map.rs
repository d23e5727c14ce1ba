//! Map rendering surface.
//!
//! [`MapSurface`] is the contract the journey synchronizer drives. The
//! [`RetainedMap`] implementation keeps the resulting scene in memory so the
//! TUI can draw it every frame.

use std::time::Duration;

use rizal_types::Coordinates;
use rizal_types::ui::{EffectTimer, ease_out_cubic};

/// Camera position shown before the first flight.
pub const INITIAL_CENTER: Coordinates = Coordinates::new(20.0, 30.0);
pub const INITIAL_ZOOM: f64 = 2.0;

/// Longitude span covered at zoom 1; each zoom level halves it.
const WORLD_SPAN_LNG: f64 = 360.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: u32,
    pub at: Coordinates,
    pub label: String,
}

/// Operations a map backend must support.
pub trait MapSurface {
    /// Move the camera. `None` jumps immediately; `Some(d)` animates over `d`,
    /// replacing any flight already in progress.
    fn set_view(&mut self, center: Coordinates, zoom: f64, transition: Option<Duration>);

    /// Place a marker. A marker with the same id is replaced.
    fn add_marker(&mut self, marker: Marker);

    fn remove_marker(&mut self, id: u32);

    fn clear_markers(&mut self);

    /// Replace the journey path with `points`, in order.
    fn set_polyline(&mut self, points: &[Coordinates]);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub center: Coordinates,
    pub zoom: f64,
}

impl Camera {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            center: self.center.lerp(to.center, t),
            zoom: self.zoom + (to.zoom - self.zoom) * t.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone)]
struct CameraFlight {
    from: Camera,
    to: Camera,
    timer: EffectTimer,
}

impl CameraFlight {
    fn current(&self) -> Camera {
        let t = f64::from(ease_out_cubic(self.timer.progress()));
        self.from.lerp(self.to, t)
    }
}

/// Degree bounds of the visible map area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub lng: [f64; 2],
    pub lat: [f64; 2],
}

/// In-memory map scene: camera, markers, and journey path.
#[derive(Debug, Clone)]
pub struct RetainedMap {
    camera: Camera,
    flight: Option<CameraFlight>,
    markers: Vec<Marker>,
    polyline: Vec<Coordinates>,
}

impl Default for RetainedMap {
    fn default() -> Self {
        Self::new()
    }
}

impl RetainedMap {
    #[must_use]
    pub fn new() -> Self {
        Self {
            camera: Camera {
                center: INITIAL_CENTER,
                zoom: INITIAL_ZOOM,
            },
            flight: None,
            markers: Vec::new(),
            polyline: Vec::new(),
        }
    }

    /// Camera as currently displayed, mid-flight if a transition is running.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.flight
            .as_ref()
            .map_or(self.camera, CameraFlight::current)
    }

    /// Where the camera will rest once any flight finishes.
    #[must_use]
    pub fn target_camera(&self) -> Camera {
        self.flight.as_ref().map_or(self.camera, |f| f.to)
    }

    #[must_use]
    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn polyline(&self) -> &[Coordinates] {
        &self.polyline
    }

    pub fn advance(&mut self, delta: Duration) {
        let Some(flight) = self.flight.as_mut() else {
            return;
        };
        flight.timer.advance(delta);
        if flight.timer.is_finished() {
            self.camera = flight.to;
            self.flight = None;
        }
    }

    /// Visible bounds for a canvas whose width/height ratio (in degree-equal
    /// units) is `aspect`.
    #[must_use]
    pub fn viewport(&self, aspect: f64) -> Viewport {
        let camera = self.camera();
        let lng_span = WORLD_SPAN_LNG / 2f64.powf(camera.zoom - 1.0);
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            2.0
        };
        let lat_span = (lng_span / aspect).min(180.0);

        let half_lat = lat_span / 2.0;
        let lat_center = camera.center.lat.clamp(-90.0 + half_lat, 90.0 - half_lat);
        let half_lng = lng_span / 2.0;
        Viewport {
            lng: [camera.center.lng - half_lng, camera.center.lng + half_lng],
            lat: [lat_center - half_lat, lat_center + half_lat],
        }
    }
}

impl MapSurface for RetainedMap {
    fn set_view(&mut self, center: Coordinates, zoom: f64, transition: Option<Duration>) {
        let to = Camera { center, zoom };
        match transition {
            Some(duration) if !duration.is_zero() => {
                // Start from wherever an interrupted flight had reached.
                let from = self.camera();
                self.camera = from;
                self.flight = Some(CameraFlight {
                    from,
                    to,
                    timer: EffectTimer::new(duration),
                });
            }
            _ => {
                self.camera = to;
                self.flight = None;
            }
        }
    }

    fn add_marker(&mut self, marker: Marker) {
        if let Some(existing) = self.markers.iter_mut().find(|m| m.id == marker.id) {
            *existing = marker;
        } else {
            self.markers.push(marker);
        }
    }

    fn remove_marker(&mut self, id: u32) {
        self.markers.retain(|m| m.id != id);
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
    }

    fn set_polyline(&mut self, points: &[Coordinates]) {
        self.polyline.clear();
        self.polyline.extend_from_slice(points);
    }
}

#[cfg(test)]
mod tests {
    use super::{INITIAL_CENTER, INITIAL_ZOOM, MapSurface, Marker, RetainedMap};
    use rizal_types::Coordinates;
    use std::time::Duration;

    const MADRID: Coordinates = Coordinates::new(40.4168, -3.7038);
    const MANILA: Coordinates = Coordinates::new(14.5995, 120.9842);

    fn marker(id: u32) -> Marker {
        Marker {
            id,
            at: MADRID,
            label: id.to_string(),
        }
    }

    #[test]
    fn starts_at_world_view() {
        let map = RetainedMap::new();
        assert_eq!(map.camera().center, INITIAL_CENTER);
        assert!((map.camera().zoom - INITIAL_ZOOM).abs() < f64::EPSILON);
        assert!(!map.is_flying());
        assert!(map.markers().is_empty());
    }

    #[test]
    fn immediate_set_view_jumps() {
        let mut map = RetainedMap::new();
        map.set_view(MADRID, 6.0, None);
        assert_eq!(map.camera().center, MADRID);
        assert!(!map.is_flying());
    }

    #[test]
    fn flight_interpolates_and_lands() {
        let mut map = RetainedMap::new();
        map.set_view(MADRID, 6.0, Some(Duration::from_secs(2)));
        assert!(map.is_flying());
        assert_eq!(map.camera().center, INITIAL_CENTER);
        assert_eq!(map.target_camera().center, MADRID);

        map.advance(Duration::from_secs(1));
        let mid = map.camera();
        assert!(mid.center.lat > INITIAL_CENTER.lat && mid.center.lat < MADRID.lat);

        map.advance(Duration::from_secs(1));
        assert!(!map.is_flying());
        assert_eq!(map.camera().center, MADRID);
        assert!((map.camera().zoom - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn new_flight_replaces_in_flight_one() {
        let mut map = RetainedMap::new();
        map.set_view(MADRID, 6.0, Some(Duration::from_secs(2)));
        map.advance(Duration::from_millis(500));
        let interrupted_at = map.camera();

        map.set_view(MANILA, 6.0, Some(Duration::from_secs(2)));
        assert_eq!(map.camera(), interrupted_at);
        assert_eq!(map.target_camera().center, MANILA);

        map.advance(Duration::from_secs(5));
        assert_eq!(map.camera().center, MANILA);
    }

    #[test]
    fn markers_replace_by_id() {
        let mut map = RetainedMap::new();
        map.add_marker(marker(1));
        map.add_marker(marker(2));
        map.add_marker(Marker {
            label: "again".to_string(),
            ..marker(1)
        });
        assert_eq!(map.markers().len(), 2);
        assert_eq!(map.markers()[0].label, "again");

        map.remove_marker(1);
        assert_eq!(map.markers().len(), 1);
        map.clear_markers();
        assert!(map.markers().is_empty());
    }

    #[test]
    fn polyline_is_replaced_not_appended() {
        let mut map = RetainedMap::new();
        map.set_polyline(&[MADRID, MANILA]);
        map.set_polyline(&[MANILA]);
        assert_eq!(map.polyline(), &[MANILA]);
    }

    #[test]
    fn viewport_narrows_with_zoom_and_stays_on_globe() {
        let mut map = RetainedMap::new();
        let world = map.viewport(2.0);
        assert!((world.lng[1] - world.lng[0] - 180.0).abs() < 1e-9);
        assert!(world.lat[0] >= -90.0 && world.lat[1] <= 90.0);

        map.set_view(Coordinates::new(89.0, 0.0), 6.0, None);
        let close = map.viewport(2.0);
        assert!(close.lng[1] - close.lng[0] < world.lng[1] - world.lng[0]);
        assert!(close.lat[1] <= 90.0);
    }
}
