//! Geospatial math for the storm tracker.
//!
//! Projection of geographic coordinates onto each rendering surface,
//! and derivation of forecast polylines and influence radii.

pub use storm_core as core;

pub mod projection;
pub mod track;

// Re-export key types for convenience.
pub use projection::{GeographicPassthrough, NormalizedPlane, Projector};
pub use track::{derive_geometry, forecast_outlook, forecast_polyline, influence_radii};
