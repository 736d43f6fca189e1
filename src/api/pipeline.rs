use crate::api::arv_table::ArvTable;
use crate::api::mesh_cell::MeshCell;
use crate::api::resolver::{NeighborMode, resolve_cell};
use crate::util::error::QmeshError;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

/// One line of pipeline output, fields in serialization order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub meshcode: String,
    pub arv: String,
}

/// Configuration for a batch run.
///
/// # Example
/// ```
/// use qmesh_rs::{BatchConfig, NeighborMode};
///
/// let config = BatchConfig::new()
///     .neighbor_mode(NeighborMode::Geometric)
///     .strict_range(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchConfig {
    pub neighbor_mode: NeighborMode,
    pub strict_range: bool,
}

impl BatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select how fallback neighbors are generated.
    pub fn neighbor_mode(mut self, mode: NeighborMode) -> Self {
        self.neighbor_mode = mode;
        self
    }

    /// Reject coordinates outside the mesh domain instead of encoding
    /// them permissively.
    pub fn strict_range(mut self, strict: bool) -> Self {
        self.strict_range = strict;
        self
    }
}

/// Reads a coordinate list: one float per line, whitespace trimmed,
/// blank lines skipped.
///
/// A non-numeric line is a hard error carrying its 1-based line number;
/// silently defaulting a bad coordinate would misplace the whole record.
pub fn read_coordinates<R: Read>(reader: R) -> Result<Vec<f64>, QmeshError> {
    let mut coords = Vec::new();
    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|e| QmeshError::IoError(e.to_string()))?;
        let value = line.trim();
        if value.is_empty() {
            continue;
        }
        let parsed = value.parse::<f64>().map_err(|_| QmeshError::CoordinateParse {
            line: idx + 1,
            value: value.to_string(),
        })?;
        coords.push(parsed);
    }
    Ok(coords)
}

/// Runs the batch: one output record per coordinate pair, in input order.
///
/// The two lists pair by position and must be the same length; a mismatch
/// is an error rather than a silent truncation to the shorter list, which
/// would misalign data with no diagnostic.
pub fn run_batch(
    latitudes: &[f64],
    longitudes: &[f64],
    table: &ArvTable,
    config: &BatchConfig,
) -> Result<Vec<OutputRecord>, QmeshError> {
    if latitudes.len() != longitudes.len() {
        return Err(QmeshError::LengthMismatch {
            latitudes: latitudes.len(),
            longitudes: longitudes.len(),
        });
    }

    let mut records = Vec::with_capacity(latitudes.len());
    for (&lat, &lon) in latitudes.iter().zip(longitudes) {
        let cell = if config.strict_range {
            MeshCell::from_wgs84_checked(&(lat, lon))?
        } else {
            MeshCell::from_wgs84(&(lat, lon))
        };
        let arv = resolve_cell(&cell, table, config.neighbor_mode);
        records.push(OutputRecord {
            latitude: lat,
            longitude: lon,
            meshcode: cell.code,
            arv,
        });
    }
    Ok(records)
}

/// Writes records as headerless CSV: `latitude,longitude,meshcode,arv`.
pub fn write_records<W: Write>(records: &[OutputRecord], writer: W) -> Result<(), QmeshError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for record in records {
        csv_writer
            .serialize(record)
            .map_err(|e| QmeshError::CsvError(e.to_string()))?;
    }
    csv_writer
        .flush()
        .map_err(|e| QmeshError::IoError(e.to_string()))?;
    Ok(())
}

/// Converts two parallel coordinate files plus a reference table into an
/// output file of `latitude,longitude,meshcode,arv` records.
///
/// # Example
/// ```no_run
/// use qmesh_rs::{BatchConfig, coords_to_arv_csv};
///
/// coords_to_arv_csv(
///     "lat.txt",
///     "lon.txt",
///     "Z-V4-JAPAN-AMP-VS400_M250.csv",
///     "output_arv.txt",
///     &BatchConfig::new(),
/// )
/// .unwrap();
/// ```
pub fn coords_to_arv_csv(
    lat_path: impl AsRef<Path>,
    lon_path: impl AsRef<Path>,
    arv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &BatchConfig,
) -> Result<(), QmeshError> {
    let table = ArvTable::from_path(arv_path)?;

    let lat_file = File::open(lat_path).map_err(|e| QmeshError::IoError(e.to_string()))?;
    let lon_file = File::open(lon_path).map_err(|e| QmeshError::IoError(e.to_string()))?;
    let latitudes = read_coordinates(lat_file)?;
    let longitudes = read_coordinates(lon_file)?;

    let records = run_batch(&latitudes, &longitudes, &table, config)?;

    let out_file = File::create(output_path).map_err(|e| QmeshError::IoError(e.to_string()))?;
    write_records(&records, out_file)
}
