//! Conversions between our uom-aware types and the bare-`f32` types used by
//! `ncollide3d`. The `ncollide3d` side is always in millimetres.

use units::{mm, mm_, ratio, ratio_};
use crate::{Point, Vector, RatioVec};

type NcPoint  = ncollide3d::math::Point <f32>;
type NcVector = ncollide3d::math::Vector<f32>;

impl From<NcPoint> for Point {
    fn from(p: NcPoint) -> Self { Self::new(mm(p.x), mm(p.y), mm(p.z)) }
}

impl From<&NcPoint> for Point {
    fn from(p: &NcPoint) -> Self { (*p).into() }
}

impl From<Point> for NcPoint {
    fn from(p: Point) -> Self { Self::new(mm_(p.x), mm_(p.y), mm_(p.z)) }
}

impl From<&Point> for NcPoint {
    fn from(p: &Point) -> Self { (*p).into() }
}

impl From<NcVector> for Vector {
    fn from(v: NcVector) -> Self { Self::new(mm(v.x), mm(v.y), mm(v.z)) }
}

impl From<Vector> for NcVector {
    fn from(v: Vector) -> Self { Self::new(mm_(v.x), mm_(v.y), mm_(v.z)) }
}

impl From<&Vector> for NcVector {
    fn from(v: &Vector) -> Self { (*v).into() }
}

impl From<RatioVec> for NcVector {
    fn from(v: RatioVec) -> Self { Self::new(ratio_(v.x), ratio_(v.y), ratio_(v.z)) }
}

impl From<&NcVector> for RatioVec {
    fn from(v: &NcVector) -> Self {
        Self { x: ratio(v.x), y: ratio(v.y), z: ratio(v.z) }
    }
}
