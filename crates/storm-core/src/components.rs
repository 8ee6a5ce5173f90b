//! ECS components for hecs storm entities.
//!
//! Components are plain data structs with no methods.
//! Mutation logic lives in the store and the update policy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::StormStatus;
use crate::types::{ForecastPoint, GeoPoint};

/// Immutable identity of a storm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StormIdentity {
    pub id: u32,
    pub name: String,
    pub international_name: String,
}

/// Severity classification. Category drives color, icon scale and radius;
/// status drives styling urgency only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Severity {
    pub category: u8,
    pub status: StormStatus,
}

/// The fields the simulation mutates every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StormVitals {
    pub position: GeoPoint,
    pub wind_speed_kph: f64,
    pub pressure_hpa: f64,
}

/// Ordered forecast positions. Empty when the storm has no track.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastTrack {
    pub points: Vec<ForecastPoint>,
}

/// Informational text carried through to the rendering layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StormNarrative {
    pub affected_area_names: Vec<String>,
    pub description: Option<String>,
    pub landfall: Option<String>,
}

/// Time of the most recent update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LastUpdate(pub DateTime<Utc>);
