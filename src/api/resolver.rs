use crate::api::arv_table::ArvTable;
use crate::api::mesh_cell::MeshCell;
use crate::core::constants::FALLBACK_ARV;
use crate::core::neighbor::structural_neighbors;

/// How adjacent cells are generated during fallback resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborMode {
    /// Perturb the final code digit. Matches the reference behavior.
    #[default]
    Structural,
    /// Re-encode coordinates offset by one quarter-cell span in each of
    /// the eight directions.
    Geometric,
}

/// True when a stored ARV text denotes zero.
///
/// The comparison is numeric rather than literal so `"0"`, `"0.0000"`,
/// `"0.00"` and `"-0.0"` all count. Text that does not parse as a number
/// is treated as usable and passed through.
pub fn is_zero_arv(value: &str) -> bool {
    value.trim().parse::<f64>().map(|v| v == 0.0).unwrap_or(false)
}

/// Resolve the ARV for a mesh code.
///
/// Direct non-zero hit wins; otherwise the first structural neighbor
/// with a usable value; otherwise the literal fallback `"1"`. Total:
/// an unresolved cell is never an error, amplification estimates being
/// advisory.
///
/// # Example
/// ```
/// use qmesh_rs::{resolve_arv, ArvTable};
///
/// # fn main() -> Result<(), qmesh_rs::QmeshError> {
/// let table = ArvTable::from_reader("5339452532,x,y,0.8000\n".as_bytes())?;
/// assert_eq!(resolve_arv("5339452532", &table), "0.8000");
/// assert_eq!(resolve_arv("9999999999", &table), "1");
/// # Ok(())
/// # }
/// ```
pub fn resolve_arv(code: &str, table: &ArvTable) -> String {
    resolve_from_candidates(code, table, || structural_neighbors(code))
}

/// Resolve the ARV for a cell, with the neighbor source chosen by `mode`.
///
/// `Structural` is byte-for-byte equivalent to [`resolve_arv`] on the
/// cell's code; `Geometric` substitutes true 8-directional adjacency.
pub fn resolve_cell(cell: &MeshCell, table: &ArvTable, mode: NeighborMode) -> String {
    resolve_from_candidates(&cell.code, table, || match mode {
        NeighborMode::Structural => cell.neighbors(),
        NeighborMode::Geometric => cell.geometric_neighbors(),
    })
}

fn resolve_from_candidates<F>(code: &str, table: &ArvTable, candidates: F) -> String
where
    F: FnOnce() -> Vec<String>,
{
    if let Some(arv) = table.get(code)
        && !is_zero_arv(arv)
    {
        return arv.to_string();
    }
    for candidate in candidates() {
        if let Some(arv) = table.get(&candidate)
            && !is_zero_arv(arv)
        {
            return arv.to_string();
        }
    }
    FALLBACK_ARV.to_string()
}
