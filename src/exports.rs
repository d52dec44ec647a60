pub use crate::error::{Error, Result};
pub use crate::grid::Grid;
pub use crate::lor::LOR;
pub use crate::raytrace::{ray_trace_voxels, MAX_COORDINATE, NEAR_ZERO};
pub use crate::system_matrix::{LineAccumulator, SystemMatrixElement, SystemMatrixRow};
pub use crate::index::{BoxDim_u, Index1_u, Index3_i, Index3_u};

pub use geometry::{Point, RatioPoint, RatioVec, Vector};
