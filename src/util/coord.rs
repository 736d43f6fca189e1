use geo_types::Point;

pub trait Coordinate {
    fn lat(&self) -> f64;
    fn lon(&self) -> f64;
}

/// Tuples are read as `(latitude, longitude)`.
impl Coordinate for (f64, f64) {
    fn lat(&self) -> f64 { self.0 }
    fn lon(&self) -> f64 { self.1 }
}

/// Points follow the geo convention: x is longitude, y is latitude.
impl Coordinate for Point<f64> {
    fn lat(&self) -> f64 { self.y() }
    fn lon(&self) -> f64 { self.x() }
}
