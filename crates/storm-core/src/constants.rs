//! Simulation constants and tuning parameters.

/// Wall-clock interval between simulation ticks (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 1000;

// --- Intensity bounds ---

/// Lowest category on the severity scale.
pub const CATEGORY_MIN: u8 = 1;

/// Highest (most severe) category.
pub const CATEGORY_MAX: u8 = 5;

/// Wind speed floor (km/h).
pub const WIND_SPEED_FLOOR_KPH: f64 = 80.0;

/// Central pressure lower clamp (hPa).
pub const PRESSURE_MIN_HPA: f64 = 950.0;

/// Central pressure upper clamp (hPa).
pub const PRESSURE_MAX_HPA: f64 = 1000.0;

// --- Random walk ---

/// Full width of the per-tick latitude/longitude jitter (degrees).
/// Each tick moves by U(-0.005, 0.005).
pub const POSITION_JITTER_DEG: f64 = 0.01;

/// Full width of the per-tick wind speed jitter (km/h).
pub const WIND_JITTER_KPH: f64 = 5.0;

/// Full width of the per-tick pressure jitter (hPa).
pub const PRESSURE_JITTER_HPA: f64 = 2.0;

// --- Normalized-plane window ---

/// Western edge of the overlay window (degrees east).
pub const PLANE_LON_MIN: f64 = 100.0;

/// Eastern edge of the overlay window (degrees east).
pub const PLANE_LON_MAX: f64 = 120.0;

/// Southern edge of the overlay window (degrees north).
pub const PLANE_LAT_MIN: f64 = 5.0;

/// Northern edge of the overlay window (degrees north).
pub const PLANE_LAT_MAX: f64 = 25.0;

// --- Influence geometry ---

/// Danger radius per category step (meters).
pub const DANGER_RADIUS_PER_CATEGORY_M: f64 = 100_000.0;

/// Warning radius as a multiple of the danger radius.
pub const WARNING_RADIUS_FACTOR: f64 = 1.5;

/// Overlay influence ring diameter per category step (pixels).
pub const FOOTPRINT_PX_PER_CATEGORY: u32 = 40;

/// Marker scale for the selected storm.
pub const SELECTED_MARKER_SCALE: f64 = 1.25;

/// Number of forecast points after "current" shown in the detail outlook.
pub const OUTLOOK_POINTS: usize = 3;

// --- Map surface ---

pub const DEFAULT_MAP_CENTER_LATITUDE: f64 = 15.0;
pub const DEFAULT_MAP_CENTER_LONGITUDE: f64 = 108.0;
pub const DEFAULT_MAP_ZOOM: u8 = 6;

/// Default RNG seed for the jitter source.
pub const DEFAULT_SEED: u64 = 42;
