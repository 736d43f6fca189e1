use crate::core::constants::{QUARTER_LAT_DEG, QUARTER_LON_DEG};
use crate::core::mesh::mesh_code;
use crate::util::coord::Coordinate;

/// Generates candidate adjacent mesh codes by perturbing the final digit.
///
/// This is a structural approximation, not true 8-directional adjacency:
/// only the quarter digit is varied, so most geometric neighbors are
/// never produced. The exact candidate order and duplicates are kept as
/// downstream resolution short-circuits on the first usable hit. See
/// [`geometric_neighbors`] for the coordinate-offset alternative.
pub fn structural_neighbors(code: &str) -> Vec<String> {
    let Some(last) = code.chars().last().and_then(|c| c.to_digit(10)) else {
        return Vec::new();
    };
    let base = &code[..code.len() - 1];
    let last = last as i32;

    let mut neighbors = Vec::with_capacity(8);
    for delta in -1..=1 {
        for delta2 in -1..=1 {
            if delta == 0 && delta2 == 0 {
                continue;
            }
            let candidate = last + delta + delta2;
            if (1..=4).contains(&candidate) {
                neighbors.push(format!("{base}{candidate}"));
            }
        }
    }
    neighbors
}

/// Generates the eight geometrically adjacent quarter-cell codes by
/// re-encoding the coordinate offset one cell span in each cardinal and
/// diagonal direction, south-to-north, west-to-east.
pub fn geometric_neighbors<C: Coordinate>(coord: &C) -> Vec<String> {
    let mut neighbors = Vec::with_capacity(8);
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dy == 0 && dx == 0 {
                continue;
            }
            let shifted = (
                coord.lat() + dy as f64 * QUARTER_LAT_DEG,
                coord.lon() + dx as f64 * QUARTER_LON_DEG,
            );
            neighbors.push(mesh_code(&shifted));
        }
    }
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_order_and_duplicates() {
        // last digit 1: sums per (delta, delta2) pass the 1..=4 filter as
        // 1, 2, 1, 2, 3 in loop order, duplicates kept.
        assert_eq!(
            structural_neighbors("12345671"),
            vec!["12345671", "12345672", "12345671", "12345672", "12345673"]
        );
        // last digit 4: sums 2, 3, 4, 3, 4 survive; 5 and 6 are clamped out.
        assert_eq!(
            structural_neighbors("12345674"),
            vec!["12345672", "12345673", "12345674", "12345673", "12345674"]
        );
    }

    #[test]
    fn test_structural_keeps_base_prefix() {
        for candidate in structural_neighbors("5339452532") {
            assert!(candidate.starts_with("533945253"));
            assert_eq!(candidate.len(), 10);
        }
    }

    #[test]
    fn test_structural_out_of_band_digit() {
        // A final digit of 8 can never perturb back into 1..=4.
        assert!(structural_neighbors("12345678").is_empty());
    }

    #[test]
    fn test_structural_non_digit_tail() {
        assert!(structural_neighbors("").is_empty());
        assert!(structural_neighbors("533945253x").is_empty());
    }

    #[test]
    fn test_geometric_neighbors_tokyo() {
        let neighbors = geometric_neighbors(&(35.6895, 139.6917));
        assert_eq!(
            neighbors,
            vec![
                "5339452513",
                "5339452514",
                "5339452523",
                "5339452531",
                "5339452541",
                "5339452533",
                "5339452534",
                "5339452543",
            ]
        );
        // True adjacency: none of the eight is the center cell itself.
        assert!(!neighbors.contains(&mesh_code(&(35.6895, 139.6917))));
    }
}
