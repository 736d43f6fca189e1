/// Error type for qmesh-rs operations.
#[derive(Debug, PartialEq)]
pub enum QmeshError {
    /// A coordinate line could not be parsed as a floating point number.
    CoordinateParse { line: usize, value: String },
    /// The latitude and longitude lists have different lengths.
    LengthMismatch { latitudes: usize, longitudes: usize },
    /// A coordinate is outside the encodable mesh range (strict mode only).
    OutOfRange(String),
    /// File I/O error.
    IoError(String),
    /// CSV parsing or writing error.
    CsvError(String),
}

impl std::fmt::Display for QmeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QmeshError::CoordinateParse { line, value } => {
                write!(f, "Invalid coordinate '{}' at line {}", value, line)
            }
            QmeshError::LengthMismatch {
                latitudes,
                longitudes,
            } => write!(
                f,
                "Coordinate list length mismatch: {} latitudes, {} longitudes",
                latitudes, longitudes
            ),
            QmeshError::OutOfRange(msg) => write!(f, "Coordinate out of range: {}", msg),
            QmeshError::IoError(msg) => write!(f, "IO error: {}", msg),
            QmeshError::CsvError(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for QmeshError {}
