pub mod arv_table;
pub mod mesh_cell;
pub mod pipeline;
pub mod resolver;

pub use arv_table::ArvTable;
pub use mesh_cell::MeshCell;
pub use pipeline::{
    BatchConfig, OutputRecord, coords_to_arv_csv, read_coordinates, run_batch, write_records,
};
pub use resolver::{NeighborMode, is_zero_arv, resolve_arv, resolve_cell};
