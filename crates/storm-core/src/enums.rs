//! Enumeration types used throughout the tracker.

use serde::{Deserialize, Serialize};

/// Reported lifecycle status of a storm. Independent of category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StormStatus {
    #[default]
    Active,
    Weakening,
    ExtremelyDangerous,
    PastEvent,
}

impl StormStatus {
    /// Styling urgency for this status.
    pub fn urgency(self) -> StatusUrgency {
        match self {
            StormStatus::ExtremelyDangerous => StatusUrgency::Critical,
            StormStatus::Active => StatusUrgency::Elevated,
            StormStatus::Weakening => StatusUrgency::Moderate,
            StormStatus::PastEvent => StatusUrgency::Inactive,
        }
    }
}

/// How urgently the rendering layer should style a storm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusUrgency {
    Inactive,
    Moderate,
    Elevated,
    /// Drawn pulsing.
    Critical,
}

/// Category severity color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityColor {
    Yellow,
    Orange,
    Red,
    Purple,
    Pink,
    /// Fallback for categories outside [1, 5].
    Gray,
}

impl SeverityColor {
    /// Fixed ordinal-to-color mapping.
    pub fn for_category(category: u8) -> Self {
        match category {
            1 => SeverityColor::Yellow,
            2 => SeverityColor::Orange,
            3 => SeverityColor::Red,
            4 => SeverityColor::Purple,
            5 => SeverityColor::Pink,
            _ => SeverityColor::Gray,
        }
    }

    /// CSS hex value.
    pub fn hex(self) -> &'static str {
        match self {
            SeverityColor::Yellow => "#eab308",
            SeverityColor::Orange => "#f97316",
            SeverityColor::Red => "#ef4444",
            SeverityColor::Purple => "#a855f7",
            SeverityColor::Pink => "#db2777",
            SeverityColor::Gray => "#6b7280",
        }
    }
}

/// Display name for a category, with a fallback outside [1, 5].
pub fn category_name(category: u8) -> &'static str {
    match category {
        1 => "Tropical Storm",
        2 => "Severe Tropical Storm",
        3 => "Typhoon",
        4 => "Very Strong Typhoon",
        5 => "Super Typhoon",
        _ => "Tropical Depression",
    }
}

/// Which rendering surface the projected coordinates are destined for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Custom overlay: fixed lon [100,120] / lat [5,25] window as percentages.
    #[default]
    NormalizedPlane,
    /// Tile-based map: (latitude, longitude) unchanged.
    GeographicPassthrough,
}
