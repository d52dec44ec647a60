use std::ops::{Add, Index, Sub};
use units::{Length, Ratio, ratio, ratio_};
use crate::{Vector, RatioVec};

/// Position in physical space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: Length,
    pub y: Length,
    pub z: Length,
}

impl Point {
    pub fn new(x: Length, y: Length, z: Length) -> Self { Self { x, y, z } }

    /// Divide each component by the corresponding component of `other`,
    /// giving a dimensionless position. Typically used to express a point in
    /// units of voxels.
    pub fn component_div(&self, other: Vector) -> RatioPoint {
        RatioPoint {
            x: self.x / other.x,
            y: self.y / other.y,
            z: self.z / other.z,
        }
    }
}

impl Sub for Point {
    type Output = Vector;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Sub for &Point {
    type Output = Vector;
    fn sub(self, rhs: Self) -> Self::Output { *self - *rhs }
}

impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Self::Output {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Index<usize> for Point {
    type Output = Length;
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index {index} is out of bounds [0,2]")
        }
    }
}

// --------------------------------------------------------------------------------
/// Dimensionless position, such as a point expressed in voxel units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatioPoint {
    pub x: Ratio,
    pub y: Ratio,
    pub z: Ratio,
}

impl RatioPoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self { Self { x: ratio(x), y: ratio(y), z: ratio(z) } }

    pub fn map(self, f: impl Fn(Ratio) -> Ratio) -> Self {
        Self { x: f(self.x), y: f(self.y), z: f(self.z) }
    }

    /// Bare floats, for use in inner loops
    pub fn to_array(self) -> [f32; 3] { [ratio_(self.x), ratio_(self.y), ratio_(self.z)] }
}

impl Sub for RatioPoint {
    type Output = RatioVec;
    fn sub(self, rhs: Self) -> Self::Output {
        RatioVec {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Index<usize> for RatioPoint {
    type Output = Ratio;
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index {index} is out of bounds [0,2]")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use units::{mm, cm, nm, assert_uom_eq};
    use units::uom::si::length::millimeter;
    use units::uom::si::ratio::ratio as rr;

    #[test]
    fn point_components() {
        let p = Point::new(mm(10.0), nm(1000.0), mm(2.0));
        assert_eq!(              p.x, mm(10.0  ));
        assert_uom_eq!(millimeter, p.y, mm( 0.001), r2nd <= f32::EPSILON);
        assert_uom_eq!(millimeter, p.z, cm( 0.2  ), r2nd <= f32::EPSILON);
    }

    #[test]
    fn point_minus_point_is_vector() {
        let lhs      = Point ::new(cm(3.0), mm( 20.0), cm( 8.0));
        let rhs      = Point ::new(cm(2.0), cm(  4.0), mm(20.0));
        let expected = Vector::new(cm(1.0), mm(-20.0), mm(60.0));
        let result: Vector = lhs - rhs;
        assert_uom_eq!(millimeter, result.x, expected.x, ulps <= 1);
        assert_uom_eq!(millimeter, result.y, expected.y, ulps <= 2);
        assert_uom_eq!(millimeter, result.z, expected.z, ulps <= 2);
    }

    #[test]
    fn point_plus_vector() {
        let p = Point::new(mm(1.0), mm(2.0), mm(3.0)) + Vector::new(mm(10.0), mm(-2.0), mm(0.5));
        assert_uom_eq!(millimeter, p.x, mm(11.0), ulps <= 1);
        assert_uom_eq!(millimeter, p.y, mm( 0.0), abs  <= 1e-6);
        assert_uom_eq!(millimeter, p.z, mm( 3.5), ulps <= 1);
    }

    #[test]
    fn point_component_div_gives_voxel_units() {
        let p = Point::new(mm(10.0), mm(-3.0), cm(1.5));
        let size = Vector::new(mm(2.0), mm(1.5), mm(5.0));
        let q = p.component_div(size);
        assert_uom_eq!(rr, q.x, ratio( 5.0), ulps <= 1);
        assert_uom_eq!(rr, q.y, ratio(-2.0), ulps <= 1);
        assert_uom_eq!(rr, q.z, ratio( 3.0), ulps <= 2);
    }

    #[test]
    fn ratio_point_map_and_array() {
        let p = RatioPoint::new(0.5, -1.0, 2.0).map(|c| c * 2.0);
        assert_eq!(p.to_array(), [1.0, -2.0, 4.0]);
        assert_eq!(p[1], ratio(-2.0));
        let d = p - RatioPoint::new(1.0, 1.0, 1.0);
        assert_eq!(d, RatioVec::new(0.0, -3.0, 3.0));
    }
}
