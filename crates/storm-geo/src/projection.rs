//! Geographic projection: converts lat/lon into each rendering surface's
//! local space.
//!
//! Two surfaces share one contract. The custom overlay uses a fixed affine
//! window mapped onto a percentage plane; the tile map projects internally,
//! so its projection is the identity.

use glam::DVec2;

use storm_core::constants::{PLANE_LAT_MAX, PLANE_LAT_MIN, PLANE_LON_MAX, PLANE_LON_MIN};
use storm_core::enums::ProjectionMode;
use storm_core::types::GeoPoint;

/// A pure transform from geographic degrees to surface coordinates.
pub trait Projector {
    fn project(&self, point: GeoPoint) -> DVec2;
}

/// Overlay projection: lon [100,120] x lat [5,25] onto [0,100]%.
///
/// `x% = (lon - 100) / 20 * 100`, `y% = 100 - (lat - 5) / 20 * 100`.
/// y is inverted so higher latitude renders higher on screen. Points
/// outside the window land outside [0,100]; callers clip.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NormalizedPlane;

impl NormalizedPlane {
    const LON_SPAN: f64 = PLANE_LON_MAX - PLANE_LON_MIN;
    const LAT_SPAN: f64 = PLANE_LAT_MAX - PLANE_LAT_MIN;

    /// Inverse transform: plane percentages back to degrees.
    pub fn unproject(&self, plane: DVec2) -> GeoPoint {
        let longitude = PLANE_LON_MIN + plane.x / 100.0 * Self::LON_SPAN;
        let latitude = PLANE_LAT_MIN + (100.0 - plane.y) / 100.0 * Self::LAT_SPAN;
        GeoPoint::new(latitude, longitude)
    }

    /// True if the projected point falls on the visible plane.
    pub fn is_visible(plane: DVec2) -> bool {
        (0.0..=100.0).contains(&plane.x) && (0.0..=100.0).contains(&plane.y)
    }
}

impl Projector for NormalizedPlane {
    fn project(&self, point: GeoPoint) -> DVec2 {
        let x = (point.longitude - PLANE_LON_MIN) / Self::LON_SPAN * 100.0;
        let y = 100.0 - (point.latitude - PLANE_LAT_MIN) / Self::LAT_SPAN * 100.0;
        DVec2::new(x, y)
    }
}

/// Tile-map projection: x = latitude, y = longitude, unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeographicPassthrough;

impl Projector for GeographicPassthrough {
    fn project(&self, point: GeoPoint) -> DVec2 {
        DVec2::new(point.latitude, point.longitude)
    }
}

impl Projector for ProjectionMode {
    fn project(&self, point: GeoPoint) -> DVec2 {
        match self {
            ProjectionMode::NormalizedPlane => NormalizedPlane.project(point),
            ProjectionMode::GeographicPassthrough => GeographicPassthrough.project(point),
        }
    }
}
