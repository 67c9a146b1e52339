//! Ray-cube intersection by slab reduction.
//!
//! One helper tests the two faces perpendicular to Y. The faces perpendicular
//! to X and Z reuse it on a ray and center with swapped axes, and the result
//! is swapped back to world axes.

use solidray_math::{Point3, Swizzle, Tolerance, Vec3};

use crate::{Geometry, IntersectionData, Ray};

/// An axis-aligned cube given by center and side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    /// Center of the cube.
    pub center: Point3,
    /// Edge length.
    pub side: f64,
    /// Epsilon below which a ray counts as parallel to a face.
    pub tolerance: Tolerance,
}

impl Cube {
    /// Create a cube with the default tolerance.
    pub fn new(center: Point3, side: f64) -> Self {
        Self {
            center,
            side,
            tolerance: Tolerance::DEFAULT,
        }
    }

    /// Use `tolerance.parallel` for the parallel-face test.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Test the pair of faces perpendicular to Y, keeping the nearer valid hit.
    ///
    /// `(u, v)` are the hit's X and Z offsets from `center`.
    fn intersect_side(&self, ray: &Ray, center: &Point3, data: &mut IntersectionData) -> bool {
        if self.tolerance.is_parallel(ray.dir.y) {
            return false;
        }

        let half_side = self.side * 0.5;
        let mut found = false;
        for side in [-1.0, 1.0] {
            let face_y = center.y + side * half_side;
            let mult = (face_y - ray.start.y) / ray.dir.y;
            if mult.is_nan() || mult < 0.0 || mult >= data.dist {
                continue;
            }

            let p = ray.at(mult);
            let inside_x = p.x >= center.x - half_side && p.x <= center.x + half_side;
            let inside_z = p.z >= center.z - half_side && p.z <= center.z + half_side;
            if !(inside_x && inside_z) {
                continue;
            }

            data.p = p;
            data.dist = mult;
            data.normal = Vec3::new(0.0, side, 0.0);
            data.u = p.x - center.x;
            data.v = p.z - center.z;
            found = true;
        }
        found
    }
}

impl Geometry for Cube {
    fn intersect(&self, ray: &Ray, data: &mut IntersectionData) -> bool {
        // -Y and +Y faces
        let mut found = self.intersect_side(ray, &self.center, data);

        // -X/+X faces, then -Z/+Z faces
        for swizzle in [Swizzle::SWAP_XY, Swizzle::SWAP_YZ] {
            let local = Ray::new(swizzle.project_point(&ray.start), swizzle.project(&ray.dir));
            let center = swizzle.project_point(&self.center);
            if self.intersect_side(&local, &center, data) {
                found = true;
                data.normal = swizzle.unproject(&data.normal);
                data.p = swizzle.unproject_point(&data.p);
            }
        }

        if found {
            data.g = Some(self.id());
        }
        found
    }
}
