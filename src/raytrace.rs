//! Find the voxels traversed by a straight line segment in a Cartesian grid,
//! and the length of the segment inside each of them.
//!
//! The segment is parametrized by `a`, the distance travelled from its start
//! point, in physical units. The algorithm is centred around two
//! simplifications:
//!
//! 1. Crossing one voxel along any given axis always advances `a` by the same
//!    amount (`inc` for that axis). So, once the first crossing on each axis
//!    is known, all the others follow by repeated addition.
//!
//! 2. The number of boundary crossings on each axis is fixed by the voxels
//!    containing the start and stop points. Counting crossings, rather than
//!    comparing `a` against its final value, means that rounding errors can
//!    make the lengths slightly inaccurate, but can never add or lose a voxel.
//!
//! Coordinates are given in grid units: voxel `i` is centred on `i` and
//! spans `[i - 1/2, i + 1/2]`.

use units::{Ratio, ratio_, mm_};
use units::todo::Lengthf32;
use geometry::{RatioPoint, Vector};

use crate::index::Index3_i;
use crate::system_matrix::LineAccumulator;

/// Direction components (in grid units) at or below this magnitude are
/// treated as exactly zero: the segment is taken to be parallel to that
/// axis' boundary planes.
// Empirical, suited to `f32`. Re-derive if the precision ever changes.
pub const NEAR_ZERO: f32 = 1e-5;

/// Largest grid coordinate magnitude at which every voxel index is exactly
/// representable as an `f32` (2^24)
pub const MAX_COORDINATE: f32 = 16_777_216.0;

/// Upper limit on the space reserved up-front in the accumulator
const MAX_RESERVE: usize = 1 << 16;

/// Append to `acc` the voxels traversed by the segment `start`-`stop`, each
/// paired with the length of the segment inside it, multiplied by
/// `normalization`.
///
/// + `start` and `stop` are in grid units.
///
/// + `voxel_size` is only used to turn grid-unit displacements into physical
///   lengths; its components must be strictly positive.
///
/// Elements are appended in the order in which the segment, travelling from
/// `start` to `stop`, passes through the voxels. Consecutive voxels always
/// share a face: where the segment passes exactly through an edge or corner,
/// the voxel that it only touches is included with zero weight. A point lying
/// exactly on a boundary belongs to the voxel on the side the segment is
/// travelling towards (for `start`) or coming from (for `stop`).
///
/// Nothing is appended if `start == stop`. No bounds checking is done: the
/// caller must discard any voxels that lie outside its grid.
///
/// Coordinates should stay within `±MAX_COORDINATE`: beyond that `f32` can no
/// longer tell neighbouring voxels apart.
pub fn ray_trace_voxels(
    acc          : &mut impl LineAccumulator,
    start        : RatioPoint,
    stop         : RatioPoint,
    voxel_size   : Vector,
    normalization: Ratio,
) {
    let start = start.to_array();
    let stop  =  stop.to_array();
    let size  = [mm_(voxel_size.x), mm_(voxel_size.y), mm_(voxel_size.z)];
    let normalization = ratio_(normalization);

    debug_assert!(size.iter().all(|&s| s > 0.0), "voxel size must be positive: {size:?}");
    debug_assert!(start.iter().chain(&stop).all(|c| c.is_finite()), "non-finite end point: {start:?} {stop:?}");

    let difference = [stop[0] - start[0], stop[1] - start[1], stop[2] - start[2]];

    acc.reserve(capacity_hint(difference));

    // Physical length of the whole segment
    let d12: Lengthf32 = difference.iter().zip(size)
        .map(|(d, s)| (d * s) * (d * s))
        .sum::<f32>()
        .sqrt();

    // Degenerate segment: nothing to trace
    if d12 <= 0.0 { return; }

    let mut voxel: Index3_i = [0; 3];
    let mut axes = [Axis::PARALLEL; 3];
    for dim in 0..3 {
        let (axis, first_voxel) = Axis::new(start[dim], stop[dim], d12);
        axes[dim]  = axis;
        voxel[dim] = first_voxel;
    }

    // The crossings on a parallel axis must never be mistaken for the next one
    debug_assert!(axes.iter().filter(|a| a.parallel()).all(|a| a.remaining == 0 && a.next > d12));

    // How far we have moved along the segment
    let mut here: Lengthf32 = 0.0;

    // Which voxel boundary will be crossed next, and where
    while let Some(dim) = next_crossing(&axes) {
        let boundary = axes[dim].next;

        // The weight is the length of segment in the voxel we are leaving
        acc.push(voxel, (boundary - here) * normalization);

        // Move along segment until it leaves this voxel
        here = boundary;

        // Find the next boundary in this dimension
        axes[dim].next += axes[dim].inc;
        axes[dim].remaining -= 1;

        // Move index across the boundary we are crossing
        voxel[dim] += axes[dim].step;
    }

    // The voxel containing `stop` gets whatever is left
    acc.push(voxel, (d12 - here).max(0.0) * normalization);
}

/// The progress of the traversal along a single axis
#[derive(Clone, Copy, Debug)]
struct Axis {
    /// Direction of index change at each crossing: +1 or -1
    step: i32,
    /// Distance along segment between successive boundary crossings
    inc: Lengthf32,
    /// Distance along segment from `start` to the next boundary crossing
    next: Lengthf32,
    /// Number of boundary crossings still to be made
    remaining: i32,
}

impl Axis {

    /// An axis along which the segment does not move
    const PARALLEL: Self = Self { step: 1, inc: f32::INFINITY, next: f32::INFINITY, remaining: 0 };

    /// Returns the axis' traversal state and the index of the first voxel
    fn new(start: f32, stop: f32, d12: Lengthf32) -> (Self, i32) {
        let difference = stop - start;
        let step = if difference >= 0.0 { 1 } else { -1 };
        let forwards = step > 0;

        // Boundary points belong to the voxel in the direction of travel
        let first = if forwards { (start + 0.5).floor() } else { (start - 0.5).ceil() };

        if difference.abs() <= NEAR_ZERO {
            return (Self { step, ..Self::PARALLEL }, first as i32)
        }

        // ... and, at the far end, to the voxel being left
        let last = if forwards { (stop - 0.5).ceil() } else { (stop + 0.5).floor() };

        let inc = d12 / difference.abs();
        let boundary = first + step as f32 * 0.5;
        let next = (boundary - start) * step as f32 * inc;
        // Saturates, rather than overflowing, on spans beyond `i32::MAX`
        let remaining = ((last - first) * step as f32).max(0.0) as i32;

        (Self { step, inc, next, remaining }, first as i32)
    }

    fn parallel(&self) -> bool { self.inc.is_infinite() }
}

/// Room for all the voxels in one go: one per crossing, plus the first, plus a
/// little slack for rounding. Only a hint, so it is capped.
fn capacity_hint(difference: [f32; 3]) -> usize {
    let crossings: f32 = difference.iter().map(|d| d.abs().ceil()).sum();
    (crossings as usize).min(MAX_RESERVE) + 3
}

/// The axis on which the next boundary crossing occurs, or `None` if all
/// crossings have been made. Ties go to the lowest axis: x, then y, then z.
#[inline]
fn next_crossing(axes: &[Axis; 3]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (dim, axis) in axes.iter().enumerate() {
        if axis.remaining == 0 { continue; }
        match best {
            Some(b) if axes[b].next <= axis.next => {},
            _ => best = Some(dim),
        }
    }
    best
}
