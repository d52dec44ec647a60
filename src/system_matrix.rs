//! Sparse storage of one row of the system matrix: the voxels coupled to a
//! single LOR, and the weight of each coupling.

use itertools::Itertools;
use ndarray::Array3;

use units::todo::{Intensityf32, Weightf32};

use crate::index::{BoxDim_u, Index1_u, Index3_i, index3_to_1, unsigned_within};

// ----- The trait --------------------------------------------------------------------

/// Anything the ray tracer can append its (voxel, weight) pairs to.
pub trait LineAccumulator {
    /// Make room for at least `additional` more elements. Only a hint: the
    /// tracer never relies on it.
    fn reserve(&mut self, additional: usize);

    /// Append one element. Order of calls is the order along the LOR.
    fn push(&mut self, index: Index3_i, weight: Weightf32);
}

impl LineAccumulator for Vec<SystemMatrixElement> {
    fn reserve(&mut self, additional: usize) { Vec::reserve(self, additional) }
    fn push(&mut self, index: Index3_i, weight: Weightf32) { Vec::push(self, (index, weight)) }
}

// ----- Storage of system matrix elements. Only one row is relevant at any single time ------
pub type SystemMatrixElement = (Index3_i, Weightf32);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SystemMatrixRow(pub Vec<SystemMatrixElement>);

impl LineAccumulator for SystemMatrixRow {
    fn reserve(&mut self, additional: usize) { self.0.reserve(additional) }
    fn push(&mut self, index: Index3_i, weight: Weightf32) { self.0.push((index, weight)) }
}

impl SystemMatrixRow {
    // Allocating these anew for each LOR has a noticeable runtime cost in
    // projection loops, so callers should create one up-front and reuse it.
    pub fn with_capacity(n: usize) -> Self { Self(Vec::with_capacity(n)) }

    pub fn iter(&self) -> std::slice::Iter<SystemMatrixElement> { self.0.iter() }
    pub fn clear(&mut self) { self.0.clear(); }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Sum of the weights of all elements: the (normalized) length of the LOR
    /// covered by this row
    pub fn total_weight(&self) -> Weightf32 { self.iter().map(|(_, w)| w).sum() }

    /// Discard elements whose voxels lie outside a grid of size `n`. The ray
    /// tracer performs no bounds checking, so this is the caller's job.
    pub fn retain_within(&mut self, n: BoxDim_u) {
        self.0.retain(|&(index, _)| unsigned_within(index, n).is_some());
    }

    /// Does each voxel share a face with the one before it?
    pub fn is_face_connected(&self) -> bool {
        self.iter()
            .tuple_windows()
            .all(|((a, _), (b, _))| {
                let steps: i32 = a.iter().zip(b).map(|(a, b)| (a - b).abs()).sum();
                steps == 1
            })
    }

    /// Forward projection of `image` into the LOR described by this row. Out
    /// of range voxels contribute nothing.
    pub fn forward_project(&self, image: &Array3<Intensityf32>) -> Intensityf32 {
        let n = dims(image);
        self.iter()
            .filter_map(|&(index, weight)| {
                unsigned_within(index, n).map(|i| image[i] * weight)
            })
            .sum()
    }

    /// Backprojection of `projection` along the LOR described by this row,
    /// accumulating into `image`. Out of range voxels are ignored.
    pub fn back_project(&self, image: &mut Array3<Intensityf32>, projection: Intensityf32) {
        let n = dims(image);
        for &(index, weight) in self {
            if let Some(i) = unsigned_within(index, n) {
                image[i] += weight * projection;
            }
        }
    }

    /// The in-range elements, addressed by their position in the flat
    /// (x-fastest) storage of a box of size `n`
    pub fn flat_elements(&self, n: BoxDim_u) -> impl Iterator<Item = (Index1_u, Weightf32)> + '_ {
        self.iter().filter_map(move |&(index, weight)| {
            unsigned_within(index, n).map(|i| (index3_to_1(i, n), weight))
        })
    }
}

fn dims(image: &Array3<Intensityf32>) -> BoxDim_u {
    let (nx, ny, nz) = image.dim();
    [nx, ny, nz]
}

impl IntoIterator for SystemMatrixRow {
    type Item = SystemMatrixElement;
    type IntoIter = std::vec::IntoIter<Self::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SystemMatrixRow {
    type Item = &'a SystemMatrixElement;
    type IntoIter = std::slice::Iter<'a, SystemMatrixElement>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
