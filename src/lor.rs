use units::{mm_, Length};
use crate::Point;


/// Line Of Response.
///
/// The positions of two coincident detector element activations, in physical
/// space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub struct LOR {
    pub p1: Point,
    pub p2: Point,
}

impl LOR {
    pub fn new(p1: Point, p2: Point) -> Self { Self { p1, p2 } }

    pub fn from_components((x1, y1, z1): (Length, Length, Length),
                           (x2, y2, z2): (Length, Length, Length),
                          ) -> Self
    {
        Self::new(Point::new(x1,y1,z1), Point::new(x2,y2,z2))
    }

    pub fn length(&self) -> Length { (self.p2 - self.p1).magnitude() }
}

use core::fmt;
impl fmt::Display for LOR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (p, q) = (self.p1, self.p2);
        write!(f, "<LOR ({:8.2} {:8.2} {:8.2}) ({:8.2} {:8.2} {:8.2}) /{:7.2} >",
               mm_(p.x), mm_(p.y), mm_(p.z),
               mm_(q.x), mm_(q.y), mm_(q.z),
               mm_(self.length())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use units::mm;
    use float_eq::assert_float_eq;

    #[test]
    fn lor_length_and_display() {
        let lor = LOR::from_components((mm(0.0), mm(0.0), mm(0.0)), (mm(3.0), mm(0.0), mm(-4.0)));
        assert_float_eq!(mm_(lor.length()), 5.0, abs <= 1e-5);
        assert_eq!(format!("{lor}"),
                   "<LOR (    0.00     0.00     0.00) (    3.00     0.00    -4.00) /   5.00 >");
    }
}
