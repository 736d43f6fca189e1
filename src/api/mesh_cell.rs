use crate::core::mesh::{mesh_code, mesh_code_checked};
use crate::core::neighbor::{geometric_neighbors, structural_neighbors};
use crate::util::coord::Coordinate;
use crate::util::error::QmeshError;

/// A quarter-level mesh cell together with the coordinate that produced it.
///
/// Many coordinates map to the same cell; the stored latitude/longitude is
/// whichever one was encoded, not the cell center.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshCell {
    pub code: String,
    pub lat: f64,
    pub lon: f64,
}

impl MeshCell {
    /// Create a MeshCell from WGS84 (lat/lon) coordinates.
    ///
    /// # Example
    /// ```
    /// use qmesh_rs::MeshCell;
    ///
    /// let cell = MeshCell::from_wgs84(&(35.6895, 139.6917));
    /// assert_eq!(cell.code, "5339452532");
    /// ```
    pub fn from_wgs84<C: Coordinate>(coord: &C) -> Self {
        Self {
            code: mesh_code(coord),
            lat: coord.lat(),
            lon: coord.lon(),
        }
    }

    /// Create a MeshCell, rejecting coordinates outside the mesh domain.
    ///
    /// # Example
    /// ```
    /// use qmesh_rs::MeshCell;
    ///
    /// # fn main() -> Result<(), qmesh_rs::QmeshError> {
    /// let cell = MeshCell::from_wgs84_checked(&(35.6895, 139.6917))?;
    /// assert_eq!(cell.code.len(), 10);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84_checked<C: Coordinate>(coord: &C) -> Result<Self, QmeshError> {
        Ok(Self {
            code: mesh_code_checked(coord)?,
            lat: coord.lat(),
            lon: coord.lon(),
        })
    }

    /// Candidate adjacent codes from final-digit perturbation.
    pub fn neighbors(&self) -> Vec<String> {
        structural_neighbors(&self.code)
    }

    /// The eight geometrically adjacent cell codes.
    pub fn geometric_neighbors(&self) -> Vec<String> {
        geometric_neighbors(&(self.lat, self.lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_from_wgs84() {
        let cell = MeshCell::from_wgs84(&(35.6895, 139.6917));
        assert_eq!(cell.code, "5339452532");
        assert_eq!(cell.lat, 35.6895);
        assert_eq!(cell.lon, 139.6917);
    }

    #[test]
    fn test_from_point() {
        let cell = MeshCell::from_wgs84(&point! { x: 139.6917, y: 35.6895 });
        assert_eq!(cell.code, "5339452532");
    }

    #[test]
    fn test_same_point_same_cell() {
        let cell1 = MeshCell::from_wgs84(&(34.69374, 135.50218));
        let cell2 = MeshCell::from_wgs84(&(34.69374, 135.50218));
        assert_eq!(cell1, cell2);
    }

    #[test]
    fn test_checked_rejects_southern_hemisphere() {
        assert!(MeshCell::from_wgs84_checked(&(-33.8688, 151.2093)).is_err());
    }

    #[test]
    fn test_neighbor_accessors() {
        let cell = MeshCell::from_wgs84(&(35.6895, 139.6917));
        // final digit 2: structural candidates stay within 1..=4
        assert_eq!(
            cell.neighbors(),
            vec![
                "5339452531",
                "5339452532",
                "5339452531",
                "5339452533",
                "5339452532",
                "5339452533",
                "5339452534",
            ]
        );
        assert_eq!(cell.geometric_neighbors().len(), 8);
    }
}
