pub mod todo;

pub use uom;
pub use float_eq;

pub use uom::si::Quantity;
pub use uom::si::f32::{Length, Ratio};

mod unit {
  pub use uom::si::{length::{nanometer, millimeter, centimeter},
                    ratio ::ratio,
  };
}

// Making values from float literals seems to be very long-winded, so provide
// some pithily-named convenience constructors.

/// Generate a function called NAME which returns QUANTITY by interpreting its
/// argument as UNIT
///
/// wrap!(NAME QUANTITY UNIT);
macro_rules! wrap {
  ($name:ident $quantity:ident $unit:ident ) => {
    pub fn $name(x: f32) -> $quantity { $quantity::new::<unit::$unit>(x) }
  };
}

wrap!(cm     Length         centimeter);
wrap!(mm     Length         millimeter);
wrap!(nm     Length          nanometer);
wrap!(ratio  Ratio               ratio);

// Reverse direction of the above.
pub fn mm_   (x: Length) -> f32 { x.get::<unit::millimeter>() }
pub fn ratio_(x: Ratio ) -> f32 { x.get::<unit::ratio>() }

/// Compare two quantities by extracting their values in `$unit` and handing
/// them to `float_eq`
#[macro_export]
macro_rules! assert_uom_eq {
  ($unit:ident, $lhs:expr, $rhs:expr, $algo:ident <= $tol:expr) => {
    $crate::float_eq::assert_float_eq!($lhs.get::<$unit>(), $rhs.get::<$unit>(), $algo <= $tol)
  };
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sum_of_lengths_in_different_units() {
    let v = vec![mm(1.0), cm(1.0)];
    let total: Length = v.into_iter().sum();
    use unit::nanometer;
    assert_uom_eq!(nanometer, total, mm(11.0), ulps <= 1);
  }

  #[test]
  fn constructors_and_extractors_are_inverse() {
    use float_eq::assert_float_eq;
    assert_float_eq!(mm_(mm(2.5)), 2.5, ulps <= 1);
    assert_eq!(ratio_(ratio(0.25)), 0.25);
    assert_float_eq!(mm_(cm(3.0)), 30.0, ulps <= 2);
  }

  #[test]
  fn parse_length_with_units() -> Result<(), Box<dyn std::error::Error>> {
    let l: Length = "2 mm".parse()?;
    assert_eq!(l, mm(2.0));
    let l: Length = "3 cm".parse()?;
    use unit::millimeter;
    assert_uom_eq!(millimeter, l, mm(30.0), ulps <= 2);
    Ok(())
  }
}
