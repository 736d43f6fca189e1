use crate::util::error::QmeshError;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Minimum field count for a data row: mesh code plus three value columns,
/// of which the fourth holds the ARV.
const MIN_FIELDS: usize = 4;
const CODE_FIELD: usize = 0;
const ARV_FIELD: usize = 3;

/// In-memory amplification table keyed by mesh code.
///
/// Built once from a comma-delimited reference file and read-only
/// afterwards. Values are kept as text so the stored representation
/// (including the `"0.0000"` sentinel) passes through to output
/// records unchanged.
#[derive(Debug, Clone, Default)]
pub struct ArvTable {
    values: HashMap<String, String>,
}

impl ArvTable {
    /// Load a table from a reference file.
    ///
    /// # Example
    /// ```no_run
    /// use qmesh_rs::ArvTable;
    ///
    /// # fn main() -> Result<(), qmesh_rs::QmeshError> {
    /// let table = ArvTable::from_path("Z-V4-JAPAN-AMP-VS400_M250.csv")?;
    /// println!("{} cells", table.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QmeshError> {
        let file = File::open(path).map_err(|e| QmeshError::IoError(e.to_string()))?;
        Self::from_reader(file)
    }

    /// Load a table from any reader.
    ///
    /// Rows with fewer than four fields, blank lines, and lines starting
    /// with `#` are skipped, not errors. A repeated mesh code keeps the
    /// last value seen.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, QmeshError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut values = HashMap::new();
        for result in csv_reader.records() {
            let record = result.map_err(|e| QmeshError::CsvError(e.to_string()))?;
            if record.len() < MIN_FIELDS {
                continue;
            }
            let code = &record[CODE_FIELD];
            if code.is_empty() {
                continue;
            }
            values.insert(code.to_string(), record[ARV_FIELD].to_string());
        }

        Ok(Self { values })
    }

    /// Look up the stored ARV text for a mesh code. Unknown codes are
    /// absent, not zero.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.values.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
