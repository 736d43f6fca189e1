//! # qmesh-rs
//!
//! There are currently three main entry points.
//!
//! ### 1. `MeshCell` - Single Cell Operations
//!
//! ```
//! use qmesh_rs::MeshCell;
//!
//! let cell = MeshCell::from_wgs84(&(35.6895, 139.6917));
//! assert_eq!(cell.code, "5339452532");
//! let candidates = cell.neighbors();
//! ```
//!
//! ### 2. `ArvTable` + `resolve_arv` - Amplification Lookup
//!
//! ```
//! use qmesh_rs::{ArvTable, resolve_arv};
//!
//! # fn main() -> Result<(), qmesh_rs::QmeshError> {
//! let table = ArvTable::from_reader("5339452532,x,y,0.8000\n".as_bytes())?;
//! assert_eq!(resolve_arv("5339452532", &table), "0.8000");
//! # Ok(())
//! # }
//! ```
//!
//! A cell whose value is missing or zero borrows the first usable value
//! from an adjacent cell, and resolves to `"1"` when none exists.
//!
//! ### 3. `coords_to_arv_csv` - Batch File Conversion
//!
//! Convert two parallel coordinate files (one latitude per line, one
//! longitude per line) into `latitude,longitude,meshcode,arv` records:
//!
//! ```no_run
//! use qmesh_rs::{BatchConfig, NeighborMode, coords_to_arv_csv};
//!
//! let config = BatchConfig::new()
//!     .neighbor_mode(NeighborMode::Geometric)
//!     .strict_range(true);
//!
//! coords_to_arv_csv("lat.txt", "lon.txt", "arv.csv", "output_arv.txt", &config).unwrap();
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    ArvTable, BatchConfig, MeshCell, NeighborMode, OutputRecord, coords_to_arv_csv, is_zero_arv,
    read_coordinates, resolve_arv, resolve_cell, run_batch, write_records,
};
pub use crate::core::{
    FALLBACK_ARV, QUARTER_LAT_DEG, QUARTER_LON_DEG, geometric_neighbors, mesh_code,
    mesh_code_checked, structural_neighbors,
};
pub use util::{Coordinate, QmeshError};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), QmeshError> {
        let table = ArvTable::from_reader(
            "# J-SHIS style reference extract\n\
             5339452532,35.68,139.69,0.0000\n\
             5339452533,35.68,139.69,1.4142\n"
                .as_bytes(),
        )?;
        assert_eq!(table.len(), 2);

        let cell = MeshCell::from_wgs84(&(35.6895, 139.6917));
        assert_eq!(cell.code, "5339452532");

        // Direct value is the zero sentinel, so the structural fallback
        // lands on the ...3 quarter cell.
        assert_eq!(resolve_arv(&cell.code, &table), "1.4142");

        let records = run_batch(&[35.6895], &[139.6917], &table, &BatchConfig::new())?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].meshcode, "5339452532");
        assert_eq!(records[0].arv, "1.4142");
        Ok(())
    }

    #[test]
    fn test_output_echoes_inputs_in_order() -> Result<(), QmeshError> {
        let table = ArvTable::default();
        let records = run_batch(&[35.0, 36.0], &[139.0, 140.0], &table, &BatchConfig::new())?;

        assert_eq!(records.len(), 2);
        assert_eq!(
            (records[0].latitude, records[0].longitude),
            (35.0, 139.0)
        );
        assert_eq!(
            (records[1].latitude, records[1].longitude),
            (36.0, 140.0)
        );
        // Empty table: everything resolves to the defined fallback.
        assert!(records.iter().all(|r| r.arv == "1"));
        Ok(())
    }

    #[test]
    fn test_point_input_through_full_stack() -> Result<(), QmeshError> {
        use geo_types::point;

        let table = ArvTable::from_reader("5235043011,x,y,0.9000\n".as_bytes())?;
        let cell = MeshCell::from_wgs84(&point! { x: 135.50218, y: 34.69374 });
        assert_eq!(resolve_cell(&cell, &table, NeighborMode::Structural), "0.9000");
        Ok(())
    }
}
