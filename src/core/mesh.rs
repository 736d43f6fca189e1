use crate::core::constants::{
    FIRST_LAT_MIN, FIRST_LON_MIN, HALF_LAT_SEC, HALF_LON_SEC, QUARTER_LAT_SEC, QUARTER_LON_SEC,
    SECOND_LAT_MIN, SECOND_LON_MIN, THIRD_LAT_SEC, THIRD_LON_SEC,
};
use crate::util::coord::Coordinate;
use crate::util::error::QmeshError;

/// Derives the quarter-level mesh code for a coordinate.
///
/// The code is eight numeric segments concatenated without separators,
/// coarse to fine: first-level latitude band, first-level longitude band,
/// second-level cell, third-level cell, then a half and a quarter
/// subdivision digit, each folding a 2x2 split into a single digit 1-4.
///
/// The encoding is total over finite floats; no range validation is
/// performed, so coordinates outside the Japanese mesh domain still
/// produce a (semantically meaningless) code. Use [`mesh_code_checked`]
/// to reject such inputs instead.
///
/// # Example
/// ```
/// use qmesh_rs::mesh_code;
///
/// assert_eq!(mesh_code(&(35.6895, 139.6917)), "5339452532");
/// ```
pub fn mesh_code<C: Coordinate>(coord: &C) -> String {
    let lat60 = coord.lat() * 60.0;
    let lon60 = coord.lon() * 60.0;

    // Remainders within each enclosing cell, minutes then seconds.
    let lat_min = lat60.rem_euclid(FIRST_LAT_MIN);
    let lon_min = lon60.rem_euclid(FIRST_LON_MIN);
    let lat_sec = lat_min.rem_euclid(SECOND_LAT_MIN) * 60.0;
    let lon_sec = lon_min.rem_euclid(SECOND_LON_MIN) * 60.0;
    let lat_rem = lat_sec.rem_euclid(THIRD_LAT_SEC);
    let lon_rem = lon_sec.rem_euclid(THIRD_LON_SEC);

    let s1 = (lat60 / FIRST_LAT_MIN).floor() as i64;
    let s2 = (coord.lon() - 100.0).trunc() as i64;
    let s3 = (lat_min / SECOND_LAT_MIN).floor() as i64;
    let s4 = (lon_min / SECOND_LON_MIN).floor() as i64;
    let s5 = (lat_sec / THIRD_LAT_SEC).floor() as i64;
    let s6 = (lon_sec / THIRD_LON_SEC).floor() as i64;
    let s7 = (lat_rem / HALF_LAT_SEC).floor() as i64 * 2
        + (lon_rem / HALF_LON_SEC).floor() as i64
        + 1;
    let s8 = (lat_rem.rem_euclid(HALF_LAT_SEC) / QUARTER_LAT_SEC).floor() as i64 * 2
        + (lon_rem.rem_euclid(HALF_LON_SEC) / QUARTER_LON_SEC).floor() as i64
        + 1;

    format!("{s1}{s2}{s3}{s4}{s5}{s6}{s7}{s8}")
}

/// Strict variant of [`mesh_code`]: rejects coordinates for which the
/// first two segments would not render as conventional two-digit bands.
///
/// Accepts finite latitudes in `[0, 66.67)` and longitudes in `[100, 200)`.
pub fn mesh_code_checked<C: Coordinate>(coord: &C) -> Result<String, QmeshError> {
    let lat = coord.lat();
    let lon = coord.lon();

    if !lat.is_finite() || !lon.is_finite() {
        return Err(QmeshError::OutOfRange(format!(
            "coordinate ({}, {}) is not finite",
            lat, lon
        )));
    }
    if !(0.0..100.0).contains(&(lat * 60.0 / FIRST_LAT_MIN)) {
        return Err(QmeshError::OutOfRange(format!(
            "latitude {} outside [0, 66.67)",
            lat
        )));
    }
    if !(100.0..200.0).contains(&lon) {
        return Err(QmeshError::OutOfRange(format!(
            "longitude {} outside [100, 200)",
            lon
        )));
    }

    Ok(mesh_code(coord))
}
