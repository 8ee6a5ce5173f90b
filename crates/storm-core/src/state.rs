//! Tracker state snapshot: the complete read-only view handed to the
//! rendering layer after each tick.

use chrono::{DateTime, Utc};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{ProjectionMode, SeverityColor, StatusUrgency, StormStatus};
use crate::types::{ForecastPoint, GeoPoint, MapView, Movement, SimTime};

/// Complete tracker state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    pub time: SimTime,
    pub running: bool,
    pub projection: ProjectionMode,
    pub map_view: MapView,
    /// Store order.
    pub storms: Vec<StormView>,
    /// Present only while a storm is selected.
    pub selected: Option<SelectedStormView>,
}

/// One storm marker with its display attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StormView {
    pub id: u32,
    pub name: String,
    pub international_name: String,
    pub category: u8,
    pub category_name: String,
    pub color: SeverityColor,
    pub status: StormStatus,
    pub urgency: StatusUrgency,
    pub position: GeoPoint,
    /// Marker position on the active projection surface.
    pub marker: DVec2,
    pub wind_speed_kph: f64,
    pub pressure_hpa: f64,
    pub movement: Movement,
    pub affected_area_names: Vec<String>,
    pub description: Option<String>,
    pub landfall: Option<String>,
    pub last_update: DateTime<Utc>,
    /// Overlay influence ring diameter (pixels).
    pub footprint_px: u32,
    /// Marker scale factor (enlarged when selected).
    pub marker_scale: f64,
    pub selected: bool,
}

/// Derived geometry for the focused storm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedStormView {
    pub id: u32,
    pub geometry: TrackGeometry,
    /// Next forecast points after "current", for the detail panel.
    pub outlook: Vec<ForecastPoint>,
}

/// Forecast polyline, influence radii and color for one storm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    /// Projected forecast points; empty if the track has fewer than 2 points.
    pub forecast_polyline: Vec<DVec2>,
    pub radii: InfluenceRadii,
    pub color: SeverityColor,
}

/// Category-scaled circles around the storm's current position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfluenceRadii {
    pub danger_radius_m: f64,
    pub warning_radius_m: f64,
}
