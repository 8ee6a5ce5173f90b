//! Fundamental geographic and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAP_CENTER_LATITUDE, DEFAULT_MAP_CENTER_LONGITUDE, DEFAULT_MAP_ZOOM, TICK_INTERVAL_MS,
};

/// Geographic position in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Degrees north, in [-90, 90].
    pub latitude: f64,
    /// Degrees east, in [-180, 180].
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True if both coordinates are finite and inside the valid degree ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// One predicted position on a storm's forecast track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Display label, e.g. "now" or "06:00 25/9".
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    pub wind_speed_kph: f64,
}

impl ForecastPoint {
    pub fn new(label: impl Into<String>, latitude: f64, longitude: f64, wind_speed_kph: f64) -> Self {
        Self {
            label: label.into(),
            latitude,
            longitude,
            wind_speed_kph,
        }
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Reported storm movement. Descriptive only; the simulation does not
/// derive position from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub direction_label: String,
    pub speed_kph: f64,
}

impl Movement {
    pub fn new(direction_label: impl Into<String>, speed_kph: f64) -> Self {
        Self {
            direction_label: direction_label.into(),
            speed_kph,
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick interval.
    pub fn dt(&self) -> f64 {
        TICK_INTERVAL_MS as f64 / 1000.0
    }

    /// Advance by one tick at the default tick interval.
    pub fn advance(&mut self) {
        self.advance_by(self.dt());
    }

    /// Advance by one tick lasting `dt_secs`.
    pub fn advance_by(&mut self, dt_secs: f64) {
        self.tick += 1;
        self.elapsed_secs += dt_secs;
    }
}

/// Initial view of the tile-based map surface.
///
/// Opaque to the core: carried into snapshots for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapView {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center_latitude: DEFAULT_MAP_CENTER_LATITUDE,
            center_longitude: DEFAULT_MAP_CENTER_LONGITUDE,
            zoom: DEFAULT_MAP_ZOOM,
        }
    }
}
