pub mod traits;
pub mod matrix;
pub mod parse;
pub mod generators;

pub use traits::Graph;
pub use matrix::{CostMatrix, MAX_ABS_WEIGHT};
pub use parse::{
    matrix_from_cells, parse_cell, parse_matrix, parse_row, MatrixCell, ParseMode, LEGACY_NO_EDGE,
};
