//! Tests for the storm store, simulation engine, selection, and snapshots.

use chrono::{DateTime, TimeZone, Utc};
use glam::DVec2;

use storm_core::commands::TrackerCommand;
use storm_core::components::StormVitals;
use storm_core::entity::{StormEntity, StormUpdate};
use storm_core::enums::*;
use storm_core::error::StormError;
use storm_core::types::{ForecastPoint, GeoPoint, Movement};

use crate::engine::{SimConfig, Simulation};
use crate::scenario::default_storms;
use crate::source::{ChaChaJitter, FixedClock, ScriptedJitter};
use crate::store::StormStore;
use crate::systems::random_walk::{RandomWalkUpdatePolicy, UpdatePolicy};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 24, 18, 0, 0).unwrap()
}

fn storm(id: u32, category: u8) -> StormEntity {
    StormEntity {
        id,
        name: format!("STORM-{id}"),
        international_name: format!("Storm {id}"),
        category,
        status: StormStatus::Active,
        current_position: GeoPoint::new(15.0, 110.0),
        wind_speed_kph: 200.0,
        pressure_hpa: 970.0,
        movement: Movement::new("West", 18.0),
        forecast_track: Some(vec![
            ForecastPoint::new("Current", 15.0, 110.0, 200.0),
            ForecastPoint::new("+6h", 15.5, 108.0, 180.0),
            ForecastPoint::new("+12h", 16.0, 106.0, 160.0),
        ]),
        affected_area_names: vec!["Coast".into()],
        description: None,
        landfall: None,
        last_update: t0(),
    }
}

fn scripted_sim(seeds: Vec<StormEntity>, units: Vec<f64>) -> Simulation {
    Simulation::with_sources(
        SimConfig::default(),
        seeds,
        RandomWalkUpdatePolicy::new(ScriptedJitter::new(units)),
        FixedClock(t0()),
    )
    .unwrap()
}

fn seeded_sim(seed: u64) -> Simulation {
    Simulation::with_sources(
        SimConfig {
            seed,
            ..Default::default()
        },
        default_storms(),
        RandomWalkUpdatePolicy::new(ChaChaJitter::new(seed)),
        FixedClock(t0()),
    )
    .unwrap()
}

fn update(latitude: f64, longitude: f64, wind: f64, pressure: f64) -> StormUpdate {
    StormUpdate {
        vitals: StormVitals {
            position: GeoPoint::new(latitude, longitude),
            wind_speed_kph: wind,
            pressure_hpa: pressure,
        },
        last_update: t0(),
    }
}

// ---- Store ----

#[test]
fn test_store_rejects_duplicate_ids() {
    let result = StormStore::initialize(vec![storm(1, 2), storm(2, 3), storm(1, 4)]);
    assert_eq!(result.err(), Some(StormError::DuplicateId { id: 1 }));
}

#[test]
fn test_store_rejects_malformed_seed() {
    let mut bad = storm(5, 3);
    bad.wind_speed_kph = 40.0;
    let result = StormStore::initialize(vec![storm(1, 2), bad]);
    assert!(matches!(result, Err(StormError::InvalidSeed { id: 5, .. })));
}

#[test]
fn test_store_all_keeps_insertion_order() {
    let store = StormStore::initialize(vec![storm(30, 1), storm(4, 5), storm(17, 2)]).unwrap();
    let ids: Vec<u32> = store.all().iter().map(|s| s.id).collect();
    assert_eq!(ids, [30, 4, 17]);
    assert_eq!(store.ids(), [30, 4, 17]);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_store_get_roundtrips_seed() {
    let seed = storm(8, 4);
    let store = StormStore::initialize(vec![seed.clone()]).unwrap();
    assert_eq!(store.get(8).unwrap(), seed);
    assert_eq!(store.get(99), Err(StormError::NotFound { id: 99 }));
}

#[test]
fn test_apply_update_replaces_mutable_fields_only() {
    let mut store = StormStore::initialize(vec![storm(1, 3)]).unwrap();
    let later = t0() + chrono::Duration::seconds(1);
    let mut next = update(15.001, 109.999, 198.0, 971.0);
    next.last_update = later;

    store.apply_update(1, next).unwrap();

    let after = store.get(1).unwrap();
    assert_eq!(after.current_position, GeoPoint::new(15.001, 109.999));
    assert_eq!(after.wind_speed_kph, 198.0);
    assert_eq!(after.pressure_hpa, 971.0);
    assert_eq!(after.last_update, later);
    assert_eq!(after.name, "STORM-1");
    assert_eq!(after.category, 3);
    assert_eq!(after.forecast().len(), 3);
}

#[test]
fn test_apply_update_clamp_violation_leaves_state() {
    let mut store = StormStore::initialize(vec![storm(1, 3)]).unwrap();
    let before = store.get(1).unwrap();

    let result = store.apply_update(1, update(15.0, 110.0, 79.0, 970.0));
    assert!(matches!(
        result,
        Err(StormError::ClampViolation { id: 1, field: "wind_speed_kph", .. })
    ));

    let result = store.apply_update(1, update(15.0, 110.0, 120.0, 1001.0));
    assert!(matches!(
        result,
        Err(StormError::ClampViolation { field: "pressure_hpa", .. })
    ));

    assert_eq!(store.get(1).unwrap(), before);
}

#[test]
fn test_apply_update_unknown_id() {
    let mut store = StormStore::initialize(vec![storm(1, 3)]).unwrap();
    assert_eq!(
        store.apply_update(2, update(15.0, 110.0, 120.0, 980.0)),
        Err(StormError::NotFound { id: 2 })
    );
}

#[test]
fn test_apply_tick_is_all_or_nothing() {
    let mut store = StormStore::initialize(vec![storm(1, 3), storm(2, 4)]).unwrap();
    let before = store.all();

    let updates = vec![
        (1, update(15.002, 110.0, 201.0, 969.0)),
        (2, update(15.0, 110.0, 201.0, 940.0)),
    ];
    assert!(store.apply_tick(&updates).is_err());
    assert_eq!(store.all(), before, "a rejected tick must not partially apply");
}

// ---- Ticking ----

#[test]
fn test_stopped_simulation_does_not_mutate() {
    let mut sim = seeded_sim(1);
    let before = sim.store().all();
    for _ in 0..10 {
        sim.tick();
    }
    assert_eq!(sim.time().tick, 0);
    assert_eq!(sim.store().all(), before);
}

#[test]
fn test_invariants_hold_every_tick() {
    let mut sim = seeded_sim(2024);
    sim.start();
    for _ in 0..2_000 {
        let snap = sim.tick();
        for storm in &snap.storms {
            assert!(storm.wind_speed_kph >= 80.0, "wind {}", storm.wind_speed_kph);
            assert!(
                (950.0..=1000.0).contains(&storm.pressure_hpa),
                "pressure {}",
                storm.pressure_hpa
            );
            assert!(storm.position.is_valid());
        }
    }
    assert_eq!(sim.time().tick, 2_000);
}

#[test]
fn test_low_seed_values_pinned_at_bounds() {
    // A storm sitting on both bounds, pushed outward every tick.
    let mut edge = storm(1, 1);
    edge.wind_speed_kph = 80.0;
    edge.pressure_hpa = 950.0;
    let mut sim = scripted_sim(vec![edge], vec![0.5, 0.5, 0.0, 0.0]);
    sim.start();
    for _ in 0..20 {
        let snap = sim.tick();
        assert_eq!(snap.storms[0].wind_speed_kph, 80.0);
        assert_eq!(snap.storms[0].pressure_hpa, 950.0);
    }
}

#[test]
fn test_scripted_ticks_match_hand_computed_sequence() {
    // Per tick: latitude, longitude, wind, pressure.
    let units = vec![
        0.5, 0.5, 1.0, 0.0, //
        0.5, 0.5, 0.0, 1.0, //
        0.5, 0.5, 0.75, 0.25,
    ];
    let mut sim = scripted_sim(vec![storm(1, 3)], units);
    sim.start();

    let expected = [(202.5, 969.0), (200.0, 970.0), (201.25, 969.5)];
    for (wind, pressure) in expected {
        let snap = sim.tick();
        let view = &snap.storms[0];
        assert_eq!(view.wind_speed_kph, wind);
        assert_eq!(view.pressure_hpa, pressure);
        assert_eq!(view.position, GeoPoint::new(15.0, 110.0));
    }
}

#[test]
fn test_all_storms_advance_from_same_snapshot() {
    // Wind jitter +2.5 for every storm, nothing else moves.
    let mut sim = scripted_sim(vec![storm(1, 3), storm(2, 4)], vec![0.5, 0.5, 1.0, 0.5]);
    sim.start();
    let snap = sim.tick();

    assert_eq!(snap.storms.len(), 2);
    for view in &snap.storms {
        assert_eq!(view.wind_speed_kph, 202.5, "storm {} advanced once", view.id);
        assert_eq!(view.last_update, t0());
    }
}

#[test]
fn test_stop_halts_further_mutation() {
    let mut sim = seeded_sim(5);
    sim.start();
    for _ in 0..5 {
        sim.tick();
    }
    sim.stop();
    let frozen = sim.store().all();
    let frozen_tick = sim.time().tick;

    for _ in 0..5 {
        let snap = sim.tick();
        assert!(!snap.running);
    }
    assert_eq!(sim.store().all(), frozen);
    assert_eq!(sim.time().tick, frozen_tick);

    sim.queue_command(TrackerCommand::Start);
    sim.tick();
    assert_eq!(sim.time().tick, frozen_tick + 1);
    assert_ne!(sim.store().all(), frozen);
}

#[test]
fn test_elapsed_secs_uses_configured_interval() {
    let mut sim = Simulation::with_sources(
        SimConfig {
            tick_interval: std::time::Duration::from_millis(100),
            ..Default::default()
        },
        default_storms(),
        RandomWalkUpdatePolicy::new(ChaChaJitter::new(1)),
        FixedClock(t0()),
    )
    .unwrap();
    sim.start();
    for _ in 0..10 {
        sim.tick();
    }
    assert_eq!(sim.time().tick, 10);
    assert!((sim.time().elapsed_secs - 1.0).abs() < 1e-9);

    sim.stop();
    sim.tick();
    assert!((sim.time().elapsed_secs - 1.0).abs() < 1e-9);
}

#[test]
fn test_stop_command_applies_at_tick_boundary() {
    let mut sim = seeded_sim(6);
    sim.queue_command(TrackerCommand::Start);
    sim.tick();
    assert_eq!(sim.time().tick, 1);

    sim.queue_command(TrackerCommand::Stop);
    let snap = sim.tick();
    assert!(!snap.running);
    assert_eq!(snap.time.tick, 1);
}

#[test]
fn test_invalid_policy_tick_is_dropped() {
    struct Broken;
    impl UpdatePolicy for Broken {
        fn next_vitals(&mut self, current: &StormVitals, _movement: &Movement) -> StormVitals {
            StormVitals {
                pressure_hpa: 900.0,
                ..*current
            }
        }
    }

    let mut sim =
        Simulation::with_sources(SimConfig::default(), default_storms(), Broken, FixedClock(t0()))
            .unwrap();
    let before = sim.store().all();
    sim.start();
    sim.tick();
    assert_eq!(sim.store().all(), before);
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut sim_a = seeded_sim(12345);
    let mut sim_b = seeded_sim(12345);
    sim_a.start();
    sim_b.start();

    for _ in 0..300 {
        let json_a = serde_json::to_string(&sim_a.tick().storms).unwrap();
        let json_b = serde_json::to_string(&sim_b.tick().storms).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut sim_a = seeded_sim(111);
    let mut sim_b = seeded_sim(222);
    sim_a.start();
    sim_b.start();

    let a = sim_a.tick();
    let b = sim_b.tick();
    assert_ne!(
        serde_json::to_string(&a.storms).unwrap(),
        serde_json::to_string(&b.storms).unwrap()
    );
}

// ---- Selection ----

#[test]
fn test_select_unknown_keeps_prior_selection() {
    let mut sim = seeded_sim(1);
    sim.select(9).unwrap();
    assert_eq!(sim.select(404), Err(StormError::NotFound { id: 404 }));
    assert_eq!(sim.selected(), Some(9));

    sim.queue_command(TrackerCommand::Select { storm_id: 405 });
    let snap = sim.tick();
    assert_eq!(snap.selected.map(|s| s.id), Some(9));
}

#[test]
fn test_select_replaces_and_clear_removes() {
    let mut sim = seeded_sim(1);
    sim.select(9).unwrap();
    sim.select(3).unwrap();
    assert_eq!(sim.selected(), Some(3));

    let snap = sim.snapshot();
    let flags: Vec<(u32, bool)> = snap.storms.iter().map(|s| (s.id, s.selected)).collect();
    assert_eq!(flags, [(9, false), (3, true)]);

    sim.queue_command(TrackerCommand::ClearSelection);
    let snap = sim.tick();
    assert!(snap.selected.is_none());
    assert!(snap.storms.iter().all(|s| !s.selected));
    assert_eq!(sim.selected_geometry(), None);
}

#[test]
fn test_geometry_only_for_selected_storm() {
    let mut sim = seeded_sim(1);
    assert!(sim.snapshot().selected.is_none());

    sim.queue_command(TrackerCommand::Select { storm_id: 3 });
    let snap = sim.tick();
    let selected = snap.selected.expect("storm 3 selected");
    assert_eq!(selected.id, 3);
    assert_eq!(selected.geometry.forecast_polyline.len(), 3);
    assert_eq!(selected.geometry.radii.danger_radius_m, 300_000.0);
    assert_eq!(selected.geometry.color, SeverityColor::Red);
    assert_eq!(selected.outlook.len(), 2);

    let marker = snap.storms.iter().find(|s| s.id == 3).unwrap();
    assert_eq!(marker.marker_scale, 1.25);
    let other = snap.storms.iter().find(|s| s.id == 9).unwrap();
    assert_eq!(other.marker_scale, 1.0);
}

#[test]
fn test_super_typhoon_scenario() {
    let mut sim = scripted_sim(default_storms(), Vec::new());
    sim.select(9).unwrap();

    let geometry = sim.selected_geometry().unwrap();
    assert_eq!(geometry.radii.danger_radius_m, 500_000.0);
    assert_eq!(geometry.radii.warning_radius_m, 750_000.0);
    assert_eq!(geometry.forecast_polyline.len(), 5);
    assert!((geometry.forecast_polyline[0].x - 69.0).abs() < 1e-9);

    let snap = sim.snapshot();
    let ragasa = &snap.storms[0];
    assert_eq!(ragasa.footprint_px, 200);
    assert_eq!(ragasa.category_name, "Super Typhoon");
    assert_eq!(ragasa.urgency, StatusUrgency::Critical);
    assert_eq!(ragasa.color, SeverityColor::Pink);
}

// ---- Projection ----

#[test]
fn test_projection_switch_moves_markers() {
    let mut sim = seeded_sim(1);
    let snap = sim.snapshot();
    assert_eq!(snap.projection, ProjectionMode::NormalizedPlane);
    let ragasa = &snap.storms[0];
    assert!((ragasa.marker.x - 69.0).abs() < 1e-9);
    assert!((ragasa.marker.y - 27.5).abs() < 1e-9);

    sim.queue_command(TrackerCommand::SetProjection {
        mode: ProjectionMode::GeographicPassthrough,
    });
    let snap = sim.tick();
    assert_eq!(snap.projection, ProjectionMode::GeographicPassthrough);
    assert_eq!(snap.storms[0].marker, DVec2::new(19.5, 113.8));
}

#[test]
fn test_snapshot_carries_map_view() {
    let sim = seeded_sim(1);
    let snap = sim.snapshot();
    assert_eq!(snap.map_view.center_latitude, 15.0);
    assert_eq!(snap.map_view.center_longitude, 108.0);
    assert_eq!(snap.map_view.zoom, 6);
}
