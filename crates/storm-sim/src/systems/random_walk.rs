//! Random-walk update policy.
//!
//! Models jittery upstream telemetry, not physics: each tick nudges
//! position, wind and pressure by bounded uniform noise, then clamps.
//! Movement is carried for policies that want it; the random walk
//! ignores it.

use chrono::{DateTime, Utc};

use storm_core::components::StormVitals;
use storm_core::constants::{
    POSITION_JITTER_DEG, PRESSURE_JITTER_HPA, PRESSURE_MAX_HPA, PRESSURE_MIN_HPA,
    WIND_JITTER_KPH, WIND_SPEED_FLOOR_KPH,
};
use storm_core::entity::StormUpdate;
use storm_core::types::{GeoPoint, Movement};

use crate::source::JitterSource;
use crate::store::StormStore;

/// Computes a storm's next mutable state from its current state.
pub trait UpdatePolicy {
    /// Must return already-clamped values.
    fn next_vitals(&mut self, current: &StormVitals, movement: &Movement) -> StormVitals;
}

/// Bounded random walk. Draw order per storm: latitude, longitude,
/// wind, pressure.
#[derive(Debug, Clone)]
pub struct RandomWalkUpdatePolicy<J> {
    source: J,
}

impl<J: JitterSource> RandomWalkUpdatePolicy<J> {
    pub fn new(source: J) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &J {
        &self.source
    }
}

impl<J: JitterSource> UpdatePolicy for RandomWalkUpdatePolicy<J> {
    fn next_vitals(&mut self, current: &StormVitals, _movement: &Movement) -> StormVitals {
        let latitude = current.position.latitude + self.source.jitter(POSITION_JITTER_DEG);
        let longitude = current.position.longitude + self.source.jitter(POSITION_JITTER_DEG);
        let wind_speed_kph =
            (current.wind_speed_kph + self.source.jitter(WIND_JITTER_KPH)).max(WIND_SPEED_FLOOR_KPH);
        let pressure_hpa = (current.pressure_hpa + self.source.jitter(PRESSURE_JITTER_HPA))
            .clamp(PRESSURE_MIN_HPA, PRESSURE_MAX_HPA);

        StormVitals {
            position: GeoPoint::new(latitude.clamp(-90.0, 90.0), wrap_longitude(longitude)),
            wind_speed_kph,
            pressure_hpa,
        }
    }
}

/// Wrap into [-180, 180].
fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        longitude
    } else {
        (longitude + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Plan one tick: every update is computed from the same pre-tick
/// snapshot, so no storm observes another's post-tick state.
pub fn run(
    store: &StormStore,
    policy: &mut dyn UpdatePolicy,
    now: DateTime<Utc>,
) -> Vec<(u32, StormUpdate)> {
    store
        .vitals_snapshot()
        .into_iter()
        .map(|(id, vitals, movement)| {
            let update = StormUpdate {
                vitals: policy.next_vitals(&vitals, &movement),
                last_update: now,
            };
            (id, update)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ChaChaJitter, ScriptedJitter};

    fn vitals(latitude: f64, longitude: f64, wind: f64, pressure: f64) -> StormVitals {
        StormVitals {
            position: GeoPoint::new(latitude, longitude),
            wind_speed_kph: wind,
            pressure_hpa: pressure,
        }
    }

    #[test]
    fn test_step_uses_formula() {
        let mut policy = RandomWalkUpdatePolicy::new(ScriptedJitter::new(vec![0.75, 0.25, 1.0, 0.0]));
        let next = policy.next_vitals(&vitals(19.5, 113.8, 220.0, 960.0), &Movement::default());

        assert!((next.position.latitude - 19.5025).abs() < 1e-12);
        assert!((next.position.longitude - 113.7975).abs() < 1e-12);
        assert_eq!(next.wind_speed_kph, 222.5);
        assert_eq!(next.pressure_hpa, 959.0);
        assert_eq!(policy.source().drawn(), 4);
    }

    #[test]
    fn test_wind_floor_and_pressure_clamp() {
        // Everything pushed down as far as possible.
        let mut policy = RandomWalkUpdatePolicy::new(ScriptedJitter::new(vec![0.0]));
        let next = policy.next_vitals(&vitals(10.0, 110.0, 81.0, 950.5), &Movement::default());
        assert_eq!(next.wind_speed_kph, 80.0);
        assert_eq!(next.pressure_hpa, 950.0);

        // And up.
        let mut policy = RandomWalkUpdatePolicy::new(ScriptedJitter::new(vec![1.0]));
        let next = policy.next_vitals(&vitals(10.0, 110.0, 81.0, 999.5), &Movement::default());
        assert_eq!(next.wind_speed_kph, 83.5);
        assert_eq!(next.pressure_hpa, 1000.0);
    }

    #[test]
    fn test_coordinates_stay_valid_at_edges() {
        let mut policy = RandomWalkUpdatePolicy::new(ScriptedJitter::new(vec![1.0]));
        let next = policy.next_vitals(&vitals(89.999, 179.999, 100.0, 980.0), &Movement::default());
        assert_eq!(next.position.latitude, 90.0);
        assert!(next.position.is_valid(), "{:?}", next.position);
        assert!(next.position.longitude < 0.0, "longitude should wrap west");
    }

    #[test]
    fn test_random_walk_bounded_per_step() {
        let mut policy = RandomWalkUpdatePolicy::new(ChaChaJitter::new(3));
        let mut current = vitals(15.0, 110.0, 150.0, 975.0);
        const EPS: f64 = 1e-9;
        for _ in 0..1_000 {
            let next = policy.next_vitals(&current, &Movement::default());
            assert!((next.position.latitude - current.position.latitude).abs() <= 0.005 + EPS);
            assert!((next.position.longitude - current.position.longitude).abs() <= 0.005 + EPS);
            assert!((next.wind_speed_kph - current.wind_speed_kph).abs() <= 2.5 + EPS);
            assert!((next.pressure_hpa - current.pressure_hpa).abs() <= 1.0 + EPS);
            current = next;
        }
    }

    #[test]
    fn test_wrap_longitude() {
        assert_eq!(wrap_longitude(120.0), 120.0);
        assert!((wrap_longitude(180.5) - -179.5).abs() < 1e-9);
        assert!((wrap_longitude(-180.5) - 179.5).abs() < 1e-9);
    }
}
