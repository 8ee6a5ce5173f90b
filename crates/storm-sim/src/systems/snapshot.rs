//! Snapshot system: reads the store and builds a complete TrackerSnapshot.
//!
//! This system is read-only. Track geometry is derived for the selected
//! storm only; unselected storms never have their polyline computed.

use storm_core::constants::{FOOTPRINT_PX_PER_CATEGORY, SELECTED_MARKER_SCALE};
use storm_core::entity::StormEntity;
use storm_core::enums::{category_name, ProjectionMode, SeverityColor};
use storm_core::state::{SelectedStormView, StormView, TrackerSnapshot};
use storm_core::types::{MapView, SimTime};
use storm_geo::projection::Projector;
use storm_geo::track::{derive_geometry, forecast_outlook};

use crate::selection::SelectionController;
use crate::store::StormStore;

/// Build a complete TrackerSnapshot from the current store state.
pub fn build_snapshot(
    store: &StormStore,
    time: &SimTime,
    running: bool,
    projection: ProjectionMode,
    map_view: MapView,
    selection: &SelectionController,
) -> TrackerSnapshot {
    let storms = store.all();

    let selected = selection
        .current()
        .and_then(|id| storms.iter().find(|storm| storm.id == id))
        .map(|storm| build_selected(storm, projection));

    TrackerSnapshot {
        time: *time,
        running,
        projection,
        map_view,
        storms: storms
            .iter()
            .map(|storm| build_storm_view(storm, projection, selection.is_selected(storm.id)))
            .collect(),
        selected,
    }
}

/// Build the marker view for one storm.
fn build_storm_view(storm: &StormEntity, projection: ProjectionMode, selected: bool) -> StormView {
    StormView {
        id: storm.id,
        name: storm.name.clone(),
        international_name: storm.international_name.clone(),
        category: storm.category,
        category_name: category_name(storm.category).to_string(),
        color: SeverityColor::for_category(storm.category),
        status: storm.status,
        urgency: storm.status.urgency(),
        position: storm.current_position,
        marker: projection.project(storm.current_position),
        wind_speed_kph: storm.wind_speed_kph,
        pressure_hpa: storm.pressure_hpa,
        movement: storm.movement.clone(),
        affected_area_names: storm.affected_area_names.clone(),
        description: storm.description.clone(),
        landfall: storm.landfall.clone(),
        last_update: storm.last_update,
        footprint_px: u32::from(storm.category) * FOOTPRINT_PX_PER_CATEGORY,
        marker_scale: if selected { SELECTED_MARKER_SCALE } else { 1.0 },
        selected,
    }
}

/// Build the derived geometry for the focused storm.
fn build_selected(storm: &StormEntity, projection: ProjectionMode) -> SelectedStormView {
    SelectedStormView {
        id: storm.id,
        geometry: derive_geometry(storm, &projection),
        outlook: forecast_outlook(storm.forecast()),
    }
}
