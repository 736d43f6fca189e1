pub mod constants;
pub mod mesh;
pub mod neighbor;

pub use constants::{
    FALLBACK_ARV, FIRST_LAT_MIN, FIRST_LON_MIN, HALF_LAT_SEC, HALF_LON_SEC, QUARTER_LAT_DEG,
    QUARTER_LAT_SEC, QUARTER_LON_DEG, QUARTER_LON_SEC, SECOND_LAT_MIN, SECOND_LON_MIN,
    THIRD_LAT_SEC, THIRD_LON_SEC,
};
pub use mesh::{mesh_code, mesh_code_checked};
pub use neighbor::{geometric_neighbors, structural_neighbors};
