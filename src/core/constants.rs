/// Latitude span of a first-level mesh band, in minutes.
pub const FIRST_LAT_MIN: f64 = 40.0;

/// Longitude span of a first-level mesh band, in minutes (one degree).
pub const FIRST_LON_MIN: f64 = 60.0;

/// Latitude span of a second-level cell, in minutes.
pub const SECOND_LAT_MIN: f64 = 5.0;

/// Longitude span of a second-level cell, in minutes.
pub const SECOND_LON_MIN: f64 = 7.5;

/// Latitude span of a third-level cell, in seconds.
pub const THIRD_LAT_SEC: f64 = 30.0;

/// Longitude span of a third-level cell, in seconds.
pub const THIRD_LON_SEC: f64 = 45.0;

/// Latitude span of a half cell, in seconds.
pub const HALF_LAT_SEC: f64 = 15.0;

/// Longitude span of a half cell, in seconds.
pub const HALF_LON_SEC: f64 = 22.5;

/// Latitude span of a quarter cell, in seconds.
pub const QUARTER_LAT_SEC: f64 = 7.5;

/// Longitude span of a quarter cell, in seconds.
pub const QUARTER_LON_SEC: f64 = 11.25;

/// Quarter-cell latitude span in degrees, the north/south step between
/// geometrically adjacent cells.
pub const QUARTER_LAT_DEG: f64 = QUARTER_LAT_SEC / 3600.0;

/// Quarter-cell longitude span in degrees, the east/west step between
/// geometrically adjacent cells.
pub const QUARTER_LON_DEG: f64 = QUARTER_LON_SEC / 3600.0;

/// ARV returned when neither a cell nor any neighbor holds a usable value.
pub const FALLBACK_ARV: &str = "1";
