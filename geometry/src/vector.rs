use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};
use units::{Length, Ratio, ratio, ratio_};

/// Displacement in physical space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    pub x: Length,
    pub y: Length,
    pub z: Length,
}

impl Mul<f32> for Vector {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        Vector {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vector { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self::Output { Vector { x: -self.x, y: -self.y, z: -self.z } }
}

impl Index<usize> for Vector {
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

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index {index} is out of bounds [0,2]")
        }
    }
}

impl Vector {

    pub fn new(x: Length, y: Length, z: Length) -> Self { Self { x, y, z } }

    pub fn from<T>(x: f32, y: f32, z: f32) -> Self
    where
        T: units::uom::Conversion<f32, T = f32> + units::uom::si::length::Unit,
    {
        Self {
            x: Length::new::<T>(x),
            y: Length::new::<T>(y),
            z: Length::new::<T>(z),
        }
    }

    pub fn magnitude(&self) -> Length {
        let &Self { x, y, z } = self;
        (x*x + y*y + z*z).sqrt()
    }

    /// Unit vector in the direction of `self`. Components of the result are
    /// NaN if `self` has zero length.
    pub fn normalize(self) -> RatioVec {
        let m = self.magnitude();
        RatioVec { x: self.x / m, y: self.y / m, z: self.z / m }
    }

    /// Scale each component by the corresponding dimensionless factor
    pub fn component_mul(&self, other: RatioVec) -> Self {
        Vector { x: self.x * other.x, y: self.y * other.y, z: self.z * other.z }
    }

    /// Component-wise quotient of two vectors
    pub fn component_div(&self, other: Vector) -> RatioVec {
        RatioVec { x: self.x / other.x, y: self.y / other.y, z: self.z / other.z }
    }

}

// --------------------------------------------------------------------------------
/// Dimensionless displacement, such as a direction or a step measured in voxels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatioVec {
    pub x: Ratio,
    pub y: Ratio,
    pub z: Ratio,
}

impl RatioVec {
    pub fn new(x: f32, y: f32, z: f32) -> Self { Self { x: ratio(x), y: ratio(y), z: ratio(z) } }

    pub fn to_array(self) -> [f32; 3] { [ratio_(self.x), ratio_(self.y), ratio_(self.z)] }
}

impl Index<usize> for RatioVec {
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
    use crate::{Vector, RatioVec};
    use units::uom::si::length::meter;
    use units::uom::si::ratio::ratio as rr;
    use units::{mm, cm, nm, assert_uom_eq};
    use rstest::rstest;

    #[test]
    fn vector_components() {
        let v = Vector::new(mm(10.0), nm(1000.0), mm(2.0));
        assert_eq!(           v.x, mm(10.0  ));
        assert_uom_eq!(meter, v.y, mm( 0.001), r2nd <= f32::EPSILON);
        assert_uom_eq!(meter, v.z, cm( 0.2  ), r2nd <= f32::EPSILON);
    }

    #[test]
    fn scaling_a_voxel_size_by_grid_count() {
        // Half-width of a box of 6 voxels of (2.5, 4, 0.5) mm
        let voxel = Vector::new(mm(2.5), mm(4.0), mm(0.5));
        let half_width = voxel * 3.0;
        assert_uom_eq!(meter, half_width.x, mm( 7.5), abs <= 1e-8);
        assert_uom_eq!(meter, half_width.y, cm( 1.2), abs <= 1e-8);
        assert_uom_eq!(meter, half_width.z, mm( 1.5), abs <= 1e-8);
        // Negation and subtraction agree
        let flipped = -half_width;
        assert_eq!(flipped - flipped, half_width - half_width);
        assert_uom_eq!(meter, (half_width + flipped).x, mm(0.0), abs <= 1e-9);
    }

    #[rstest(/**/ x,  y,  z,  magnitude,
             case(0.0,  0.0,  0.0,  0.0),
             case(1.0,  0.0,  0.0,  1.0),
             case(0.0,  1.0,  0.0,  1.0),
             case(0.0,  0.0,  1.0,  1.0),
             case(3.0,  4.0,  0.0,  5.0),
             case(0.0, -3.0,  4.0,  5.0),
             case(5.0,  0.0, 12.0, 13.0),
             case(3.0,  4.0,  5.0,  7.0710678),
    )]
    fn vector_magnitude(x: f32, y: f32, z: f32, magnitude: f32) {
        let v = Vector::from::<meter>(x, y, z);
        units::float_eq::assert_float_eq!(v.magnitude().get::<meter>(), magnitude, ulps <= 1);
    }

    #[test]
    fn normalize_gives_unit_direction() {
        let d = Vector::from::<meter>(3.0, 0.0, -4.0).normalize();
        assert_uom_eq!(rr, d.x, units::ratio( 0.6), ulps <= 1);
        assert_uom_eq!(rr, d.y, units::ratio( 0.0), abs  <= 0.0);
        assert_uom_eq!(rr, d.z, units::ratio(-0.8), ulps <= 1);
    }

    #[test]
    fn component_mul_and_div() {
        let v = Vector::new(mm(2.0), mm(6.0), mm(-9.0));
        let s = Vector::new(mm(2.0), mm(3.0), mm( 3.0));
        units::float_eq::assert_float_eq!(v.component_div(s).to_array(), [1.0, 2.0, -3.0], ulps <= [1, 1, 2]);
        let back = s.component_mul(RatioVec::new(1.0, 2.0, -3.0));
        assert_uom_eq!(meter, back.y, v.y, ulps <= 1);
        assert_uom_eq!(meter, back.z, v.z, ulps <= 2);
    }

    #[test]
    fn index_for_vector() {
        let mut v = Vector::from::<meter>(1.0, 2.0, 3.0);
        assert_uom_eq!(meter, v[0], cm(100.0), ulps <= 1);
        assert_uom_eq!(meter, v[1], cm(200.0), ulps <= 1);
        assert_uom_eq!(meter, v[2], cm(300.0), ulps <= 1);
        v[1] = mm(5.0);
        assert_eq!(v.y, mm(5.0));
    }

}
