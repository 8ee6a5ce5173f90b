//! The canonical storm record and its validation rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::components::{ForecastTrack, LastUpdate, Severity, StormIdentity, StormNarrative, StormVitals};
use crate::constants::{
    CATEGORY_MAX, CATEGORY_MIN, PRESSURE_MAX_HPA, PRESSURE_MIN_HPA, WIND_SPEED_FLOOR_KPH,
};
use crate::enums::StormStatus;
use crate::error::StormError;
use crate::types::{ForecastPoint, GeoPoint, Movement};

/// Component bundle for spawning a storm into a hecs world.
pub type StormBundle = (
    StormIdentity,
    Severity,
    StormVitals,
    Movement,
    ForecastTrack,
    StormNarrative,
    LastUpdate,
);

/// One tracked storm: current and forecast state.
///
/// This is both the seed record (deserialized from config) and the
/// read-only view handed out by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StormEntity {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub international_name: String,
    pub category: u8,
    #[serde(default)]
    pub status: StormStatus,
    pub current_position: GeoPoint,
    pub wind_speed_kph: f64,
    pub pressure_hpa: f64,
    #[serde(default)]
    pub movement: Movement,
    /// First point conventionally represents "current". `None` when the
    /// storm has no forecast; never `Some(empty)`.
    #[serde(default)]
    pub forecast_track: Option<Vec<ForecastPoint>>,
    #[serde(default)]
    pub affected_area_names: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub landfall: Option<String>,
    #[serde(default = "Utc::now")]
    pub last_update: DateTime<Utc>,
}

impl StormEntity {
    /// Check every data-model invariant. Run eagerly on seed data so the
    /// tick loop never encounters malformed state.
    pub fn validate(&self) -> Result<(), StormError> {
        let id = self.id;
        if self.name.trim().is_empty() {
            return Err(StormError::invalid_seed(id, "name is empty"));
        }
        if !(CATEGORY_MIN..=CATEGORY_MAX).contains(&self.category) {
            return Err(StormError::invalid_seed(
                id,
                format!("category {} outside [{CATEGORY_MIN}, {CATEGORY_MAX}]", self.category),
            ));
        }
        if !self.current_position.is_valid() {
            return Err(StormError::invalid_seed(
                id,
                format!(
                    "position ({}, {}) outside valid coordinates",
                    self.current_position.latitude, self.current_position.longitude
                ),
            ));
        }
        if !self.wind_speed_kph.is_finite() || self.wind_speed_kph < WIND_SPEED_FLOOR_KPH {
            return Err(StormError::invalid_seed(
                id,
                format!("wind speed {} below {WIND_SPEED_FLOOR_KPH} km/h", self.wind_speed_kph),
            ));
        }
        if !(PRESSURE_MIN_HPA..=PRESSURE_MAX_HPA).contains(&self.pressure_hpa) {
            return Err(StormError::invalid_seed(
                id,
                format!(
                    "pressure {} outside [{PRESSURE_MIN_HPA}, {PRESSURE_MAX_HPA}] hPa",
                    self.pressure_hpa
                ),
            ));
        }
        if let Some(track) = &self.forecast_track {
            if track.is_empty() {
                return Err(StormError::invalid_seed(id, "forecast track is present but empty"));
            }
            if let Some(bad) = track.iter().find(|p| !p.position().is_valid()) {
                return Err(StormError::invalid_seed(
                    id,
                    format!("forecast point '{}' outside valid coordinates", bad.label),
                ));
            }
        }
        Ok(())
    }

    /// Mutable fields as a component.
    pub fn vitals(&self) -> StormVitals {
        StormVitals {
            position: self.current_position,
            wind_speed_kph: self.wind_speed_kph,
            pressure_hpa: self.pressure_hpa,
        }
    }

    /// Forecast points, empty if the storm has no track.
    pub fn forecast(&self) -> &[ForecastPoint] {
        self.forecast_track.as_deref().unwrap_or(&[])
    }

    /// Split into the component bundle stored in the ECS world.
    pub fn into_bundle(self) -> StormBundle {
        let vitals = self.vitals();
        (
            StormIdentity {
                id: self.id,
                name: self.name,
                international_name: self.international_name,
            },
            Severity {
                category: self.category,
                status: self.status,
            },
            vitals,
            self.movement,
            ForecastTrack {
                points: self.forecast_track.unwrap_or_default(),
            },
            StormNarrative {
                affected_area_names: self.affected_area_names,
                description: self.description,
                landfall: self.landfall,
            },
            LastUpdate(self.last_update),
        )
    }

    /// Reassemble a record from its components.
    pub fn from_components(
        identity: &StormIdentity,
        severity: &Severity,
        vitals: &StormVitals,
        movement: &Movement,
        track: &ForecastTrack,
        narrative: &StormNarrative,
        last_update: &LastUpdate,
    ) -> Self {
        Self {
            id: identity.id,
            name: identity.name.clone(),
            international_name: identity.international_name.clone(),
            category: severity.category,
            status: severity.status,
            current_position: vitals.position,
            wind_speed_kph: vitals.wind_speed_kph,
            pressure_hpa: vitals.pressure_hpa,
            movement: movement.clone(),
            forecast_track: (!track.points.is_empty()).then(|| track.points.clone()),
            affected_area_names: narrative.affected_area_names.clone(),
            description: narrative.description.clone(),
            landfall: narrative.landfall.clone(),
            last_update: last_update.0,
        }
    }
}

/// Replacement values for a storm's mutable fields, produced once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StormUpdate {
    pub vitals: StormVitals,
    pub last_update: DateTime<Utc>,
}

impl StormUpdate {
    /// Guard for the store: every value must already be clamped.
    pub fn check(&self, id: u32) -> Result<(), StormError> {
        let StormVitals {
            position,
            wind_speed_kph,
            pressure_hpa,
        } = self.vitals;

        let violation = |field: &'static str, value: f64| StormError::ClampViolation { id, field, value };

        if !position.latitude.is_finite() || !(-90.0..=90.0).contains(&position.latitude) {
            return Err(violation("latitude", position.latitude));
        }
        if !position.longitude.is_finite() || !(-180.0..=180.0).contains(&position.longitude) {
            return Err(violation("longitude", position.longitude));
        }
        if !wind_speed_kph.is_finite() || wind_speed_kph < WIND_SPEED_FLOOR_KPH {
            return Err(violation("wind_speed_kph", wind_speed_kph));
        }
        if !(PRESSURE_MIN_HPA..=PRESSURE_MAX_HPA).contains(&pressure_hpa) {
            return Err(violation("pressure_hpa", pressure_hpa));
        }
        Ok(())
    }
}
