mod point;
mod vector;

pub use point::{Point, RatioPoint};
pub use vector::{Vector, RatioVec};

mod mix;
