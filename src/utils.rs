use std::str::FromStr;

use units::{mm, todo::Lengthf32};

use crate::{Error, Point, Result, LOR};

/// Parse `"x,y,z"` into a 3-tuple
pub fn parse_triplet<T: FromStr>(s: &str) -> Result<(T,T,T)>
where
    Error: From<<T as FromStr>::Err>,
{
    let v = s.split(',').map(str::trim).collect::<Vec<_>>();
    if v.len() != 3 {
        return Err(Error::WrongNumberOfValues { expected: 3, found: v.len(), text: s.into() })
    }
    let x = v[0].parse()?;
    let y = v[1].parse()?;
    let z = v[2].parse()?;
    Ok((x, y, z))
}

/// Parse exactly `N` whitespace-separated numbers
pub fn parse_numbers<const N: usize>(s: &str) -> Result<[f32; N]> {
    let words = s.split_whitespace().collect::<Vec<_>>();
    if words.len() != N {
        return Err(Error::WrongNumberOfValues { expected: N, found: words.len(), text: s.into() })
    }
    let mut numbers = [0.0; N];
    for (n, word) in numbers.iter_mut().zip(words) {
        *n = word.parse()?;
    }
    Ok(numbers)
}

/// Parse `"x1 y1 z1  x2 y2 z2"`, with all coordinates in mm
pub fn parse_lor(s: &str) -> Result<LOR> {
    let [x1, y1, z1, x2, y2, z2] = parse_numbers::<6>(s)?;
    let point = |x: Lengthf32, y, z| Point::new(mm(x), mm(y), mm(z));
    Ok(LOR::new(point(x1, y1, z1), point(x2, y2, z2)))
}
