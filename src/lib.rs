mod exports;
pub use exports::*;

pub mod error;
pub mod index;
pub mod system_matrix;
pub mod raytrace;
pub mod grid;
pub mod lor;
pub mod config;
pub mod utils;
