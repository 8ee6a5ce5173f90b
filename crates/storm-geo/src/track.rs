//! Track geometry: forecast polylines and category-scaled influence radii.

use glam::DVec2;

use storm_core::constants::{DANGER_RADIUS_PER_CATEGORY_M, OUTLOOK_POINTS, WARNING_RADIUS_FACTOR};
use storm_core::entity::StormEntity;
use storm_core::enums::SeverityColor;
use storm_core::state::{InfluenceRadii, TrackGeometry};
use storm_core::types::ForecastPoint;

use crate::projection::Projector;

/// Project a forecast track in order. A line needs two endpoints, so a
/// track with fewer than two points yields an empty polyline without
/// touching the projector.
pub fn forecast_polyline(track: &[ForecastPoint], projector: &dyn Projector) -> Vec<DVec2> {
    if track.len() < 2 {
        return Vec::new();
    }
    track
        .iter()
        .map(|point| projector.project(point.position()))
        .collect()
}

/// Danger radius is `category * 100 km`; warning is 1.5x danger.
pub fn influence_radii(category: u8) -> InfluenceRadii {
    let danger_radius_m = f64::from(category) * DANGER_RADIUS_PER_CATEGORY_M;
    InfluenceRadii {
        danger_radius_m,
        warning_radius_m: danger_radius_m * WARNING_RADIUS_FACTOR,
    }
}

/// All derived geometry for one storm.
pub fn derive_geometry(storm: &StormEntity, projector: &dyn Projector) -> TrackGeometry {
    TrackGeometry {
        forecast_polyline: forecast_polyline(storm.forecast(), projector),
        radii: influence_radii(storm.category),
        color: SeverityColor::for_category(storm.category),
    }
}

/// Upcoming forecast points after "current", at most `OUTLOOK_POINTS`.
pub fn forecast_outlook(track: &[ForecastPoint]) -> Vec<ForecastPoint> {
    track.iter().skip(1).take(OUTLOOK_POINTS).cloned().collect()
}
