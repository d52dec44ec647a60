//! The size and granularity of the Cartesian voxel grid through which LORs
//! are traced. The grid is centred on the origin.

use tracing::{debug, trace};

use units::{mm_, ratio, ratio_, Length, Ratio};
use units::todo::Lengthf32;
use crate::{Point, Vector, RatioPoint, RatioVec, LOR};
use crate::index::{BoxDim_u, Index3_u};
use crate::raytrace::ray_trace_voxels;
use crate::system_matrix::SystemMatrixRow;

/// Grid coordinates this close to a voxel boundary are moved onto it
const EPS: f32 = 1e-5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub half_width: Vector,
    pub n: BoxDim_u,
    pub voxel_size: Vector,
}

impl Grid {

    pub fn new(
        full_size: (Length, Length, Length),
        (nx, ny, nz): (usize, usize, usize)
    ) -> Self {
        let (dx, dy, dz) = full_size;
        let half_width = Vector::new(dx/2.0, dy/2.0, dz/2.0);
        let n = [nx, ny, nz];
        let voxel_size = Self::voxel_size(n, half_width);
        Self { half_width, n, voxel_size }
    }

    pub fn from_voxel_size(voxel_size: Vector, n: BoxDim_u) -> Self {
        let [nx, ny, nz] = n;
        let half_voxels = RatioVec::new(nx as f32 / 2.0, ny as f32 / 2.0, nz as f32 / 2.0);
        let half_width = voxel_size.component_mul(half_voxels);
        Self { half_width, n, voxel_size }
    }

    fn voxel_size(n: BoxDim_u, half_width: Vector) -> Vector {
        let full_width = half_width * 2.0;
        Vector::new(full_width[0] / n[0] as f32,
                    full_width[1] / n[1] as f32,
                    full_width[2] / n[2] as f32,
        )
    }

    /// An empty row, big enough to hold any LOR's voxels in this grid without
    /// reallocating
    pub fn buffers(&self) -> SystemMatrixRow {
        let [nx, ny, nz] = self.n;
        SystemMatrixRow::with_capacity(nx + ny + nz + 1)
    }

    /// Find centre of voxel with given 3D index
    pub fn voxel_centre(&self, i: Index3_u) -> Point {
        let s = self.voxel_size;
        Point::new(s.x * (i[0] as Lengthf32 + 0.5) - self.half_width.x,
                   s.y * (i[1] as Lengthf32 + 0.5) - self.half_width.y,
                   s.z * (i[2] as Lengthf32 + 0.5) - self.half_width.z,)
    }

    /// Express a physical position in grid units: the centre of voxel `[i, j,
    /// k]` is at `(i, j, k)`.
    pub fn grid_coordinates(&self, p: Point) -> RatioPoint {
        (p + self.half_width)
            .component_div(self.voxel_size)
            .map(|x| snap_to_boundary(x - ratio(0.5)))
    }

    /// The point at which the segment from `p1` towards `p2` enters the grid,
    /// or `None` if it misses. `p1` itself, if it lies inside.
    pub fn entry(&self, p1: Point, p2: Point) -> Option<Point> {

        use ncollide3d::query::RayCast;
        use ncollide3d::shape::Cuboid;

        type Ray      = ncollide3d::query::Ray    <Lengthf32>;
        type Isometry = ncollide3d::math::Isometry<Lengthf32>;

        let lor_length = (p2 - p1).magnitude();
        if mm_(lor_length) <= 0.0 { return None; }

        let lor_direction = (p2 - p1).normalize();
        let lor: Ray = Ray::new(p1.into(), lor_direction.into());
        let iso: Isometry = Isometry::identity();
        Cuboid::new(self.half_width.into())
            .toi_with_ray(&iso, &lor, mm_(lor_length), true)
            .map(|toi| lor.origin + lor.dir * toi)
            .map(Into::into)
    }

    /// The voxels of this grid coupled to `lor`, with the LOR's length in each,
    /// multiplied by `normalization`
    pub fn system_matrix_row(&self, lor: &LOR, normalization: Ratio) -> SystemMatrixRow {
        let mut row = self.buffers();
        self.update_system_matrix_row(&mut row, lor, normalization);
        row
    }

    /// Like `system_matrix_row`, but reusing the storage in `row`. Whatever
    /// `row` contained before is thrown away.
    pub fn update_system_matrix_row(&self, row: &mut SystemMatrixRow, lor: &LOR, normalization: Ratio) {
        // Throw away previous LOR's values
        row.clear();

        let (Some(entry), Some(exit)) = (self.entry(lor.p1, lor.p2), self.entry(lor.p2, lor.p1)) else {
            debug!(%lor, "LOR misses grid");
            return;
        };

        ray_trace_voxels(
            row,
            self.grid_coordinates(entry),
            self.grid_coordinates(exit),
            self.voxel_size,
            normalization,
        );

        // Rounding at the grid's faces can step just outside
        row.retain_within(self.n);
        trace!(%lor, voxels = row.len(), "Traced LOR");
    }
}

// Floating-point calculations which should land exactly on a voxel boundary
// usually miss very slightly, which can decide which voxel a point is assigned
// to. Assume that anything very close to a boundary is on it.
fn snap_to_boundary(x: Ratio) -> Ratio {
    let x = ratio_(x);
    let boundary = (x - 0.5).round() + 0.5;
    ratio(if (x - boundary).abs() < EPS { boundary } else { x })
}
