//! Ray-plane intersection (closed-form).

use solidray_math::{Tolerance, Vec3};

use crate::{Geometry, IntersectionData, Ray};

/// The infinite horizontal plane `y = height`.
///
/// Parameterization: `u = x`, `v = z` of the hit point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Height of the plane.
    pub y: f64,
    /// Epsilon below which a ray counts as parallel to the plane.
    pub tolerance: Tolerance,
}

impl Plane {
    /// Create a plane at height `y` with the default tolerance.
    pub fn new(y: f64) -> Self {
        Self {
            y,
            tolerance: Tolerance::DEFAULT,
        }
    }

    /// Use `tolerance.parallel` for the parallel-ray test.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Geometry for Plane {
    fn intersect(&self, ray: &Ray, data: &mut IntersectionData) -> bool {
        let dy = ray.dir.y;

        // Ray is parallel to the plane
        if self.tolerance.is_parallel(dy) {
            return false;
        }

        // Above and heading up, or below and heading down
        if (ray.start.y > self.y && dy > 0.0) || (ray.start.y < self.y && dy < 0.0) {
            return false;
        }

        let mult = (self.y - ray.start.y) / dy;
        // NaN from a non-finite start is a miss
        if mult.is_nan() || mult >= data.dist {
            return false;
        }

        data.p = ray.at(mult);
        data.dist = mult;
        data.normal = Vec3::y();
        data.u = data.p.x;
        data.v = data.p.z;
        data.g = Some(self.id());
        true
    }
}
