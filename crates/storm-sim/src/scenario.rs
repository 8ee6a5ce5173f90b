//! Built-in seed scenario, used when the configuration supplies no storms.

use chrono::{Duration, Utc};

use storm_core::entity::StormEntity;
use storm_core::enums::StormStatus;
use storm_core::types::{ForecastPoint, GeoPoint, Movement};

/// The default tracked storms: one live super typhoon and one past event.
pub fn default_storms() -> Vec<StormEntity> {
    vec![ragasa(), wipha()]
}

/// Category 5, five-point track toward the northern coast.
fn ragasa() -> StormEntity {
    StormEntity {
        id: 9,
        name: "RAGASA".into(),
        international_name: "Super Typhoon Ragasa".into(),
        category: 5,
        status: StormStatus::ExtremelyDangerous,
        current_position: GeoPoint::new(19.5, 113.8),
        wind_speed_kph: 220.0,
        // Reported at 920 hPa; stored at the clamp floor.
        pressure_hpa: 950.0,
        movement: Movement::new("North-west", 20.0),
        forecast_track: Some(vec![
            ForecastPoint::new("Current", 19.5, 113.8, 220.0),
            ForecastPoint::new("06:00 25/9", 20.2, 109.5, 185.0),
            ForecastPoint::new("12:00 25/9", 20.8, 107.2, 165.0),
            ForecastPoint::new("18:00 25/9", 21.2, 106.8, 140.0),
            ForecastPoint::new("00:00 26/9", 21.8, 106.0, 120.0),
        ]),
        affected_area_names: [
            "Quang Ninh",
            "Hai Phong",
            "Thai Binh",
            "Nam Dinh",
            "Ninh Binh",
            "Thanh Hoa",
            "Nghe An",
            "Ha Tinh",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        description: Some("Strongest typhoon of the 2025 season".into()),
        landfall: Some("Expected landfall Quang Ninh to Ha Tinh, 25-26/9".into()),
        last_update: Utc::now(),
    }
}

/// Category 3, already made landfall.
fn wipha() -> StormEntity {
    StormEntity {
        id: 3,
        name: "WIPHA".into(),
        international_name: "Typhoon Wipha".into(),
        category: 3,
        status: StormStatus::PastEvent,
        current_position: GeoPoint::new(18.5, 105.2),
        wind_speed_kph: 150.0,
        pressure_hpa: 955.0,
        movement: Movement::new("West", 25.0),
        forecast_track: Some(vec![
            ForecastPoint::new("Past", 18.5, 105.2, 150.0),
            ForecastPoint::new("Past", 18.8, 104.0, 135.0),
            ForecastPoint::new("Past", 19.0, 102.8, 120.0),
        ]),
        affected_area_names: ["Nghe An", "Ha Tinh", "Quang Binh"]
            .into_iter()
            .map(String::from)
            .collect(),
        description: Some("Fast-moving, dangerous storm No. 3 of 2025".into()),
        landfall: Some("Made landfall over the central provinces".into()),
        last_update: Utc::now() - Duration::days(7),
    }
}
