//! Voxel indices: signed 3D indices as produced by the ray tracer, unsigned
//! ones for addressing images, and conversion between them.

#[allow(non_camel_case_types)] pub type Index1_u = usize;
#[allow(non_camel_case_types)] pub type Index3_u = [usize; 3];
#[allow(non_camel_case_types)] pub type Index3_i = [i32; 3];
#[allow(non_camel_case_types)] pub type BoxDim_u = [usize; 3];

/// The unsigned version of `i`, if it lies inside a box of size `n`
#[inline]
pub fn unsigned_within(i: Index3_i, n: BoxDim_u) -> Option<Index3_u> {
    let [x, y, z] = i;
    let [nx, ny, nz] = n;
    let x = usize::try_from(x).ok().filter(|&x| x < nx)?;
    let y = usize::try_from(y).ok().filter(|&y| y < ny)?;
    let z = usize::try_from(z).ok().filter(|&z| z < nz)?;
    Some([x, y, z])
}

// --------------------------------------------------------------------------------
//                  Conversion between 1d and 3d indices

use std::ops::{Add, Mul};

/// Position of voxel `[ix, iy, iz]` in the flat storage of a box of size `n`,
/// with `x` varying fastest
pub fn index3_to_1<T>([ix, iy, iz]: [T; 3], [nx, ny, _nz]: [T; 3]) -> T
where
    T: Mul<Output = T> + Add<Output = T>
{
    ix + (iy + iz * ny) * nx
}


#[cfg(test)]
mod test_index_conversion {
    use super::*;
    use rstest::rstest;

    // -------------------- Some hand-picked examples ------------------------------
    #[rstest(/**/    size   , index3 , index1,
             // 1-d examples
             case([ 1, 1, 1], [0,0,0],   0),
             case([ 9, 1, 1], [3,0,0],   3),
             case([ 1, 8, 1], [0,4,0],   4),
             case([ 1, 1, 7], [0,0,5],   5),
             // Counting in binary: note digit reversal
             case([ 2, 2, 2], [0,0,0],   0),
             case([ 2, 2, 2], [1,0,0],   1),
             case([ 2, 2, 2], [0,1,0],   2),
             case([ 2, 2, 2], [1,1,1],   7),
             // Relation to decimal: note reversal
             case([10,10,10], [1,2,3], 321),
             case([10,10,10], [7,9,6], 697),
    )]
    fn hand_picked(size: Index3_u, index3: Index3_u, index1: usize) {
        assert_eq!(index3_to_1(index3, size), index1);
    }

    #[rstest(/**/  index    ,  expected,
             case([ 0, 0, 0], Some([0, 0, 0])),
             case([ 3, 4, 5], Some([3, 4, 5])),
             case([-1, 0, 0], None),
             case([ 0,-1, 0], None),
             case([ 0, 0,-7], None),
             case([ 4, 0, 0], None),
             case([ 0, 5, 0], None),
             case([ 0, 0, 6], None),
    )]
    fn unsigned_within_box(index: Index3_i, expected: Option<Index3_u>) {
        assert_eq!(unsigned_within(index, [4, 5, 6]), expected);
    }

    // -------------------- Every voxel gets its own slot ------------------------------
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn flat_indices_fill_storage_exactly(size in [1..12_usize, 1..12_usize, 1..12_usize]) {
            let [nx, ny, nz] = size;
            let mut flat: Vec<usize> = itertools::iproduct!(0..nx, 0..ny, 0..nz)
                .map(|(x, y, z)| index3_to_1([x, y, z], size))
                .collect();
            flat.sort_unstable();
            assert_eq!(flat, (0..nx * ny * nz).collect::<Vec<_>>());
        }
    }
}
