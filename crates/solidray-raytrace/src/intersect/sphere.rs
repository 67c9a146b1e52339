//! Ray-sphere intersection (quadratic equation).

use solidray_math::Point3;
use std::f64::consts::PI;

use crate::{Geometry, IntersectionData, Ray};

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius of the sphere.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Compute the `(u, v)` surface parameters of a point on the sphere.
    ///
    /// u = longitude rescaled to [0, 1], v = latitude rescaled to [0, 1]
    /// with v = 0 at the top pole.
    fn surface_uv(&self, point: &Point3) -> (f64, f64) {
        let d = point - self.center;
        let u = (PI + d.z.atan2(d.x)) / (2.0 * PI);
        let lat = (d.y / self.radius).clamp(-1.0, 1.0).asin();
        let v = 1.0 - (PI / 2.0 + lat) / PI;
        (u, v)
    }
}

impl Geometry for Sphere {
    fn intersect(&self, ray: &Ray, data: &mut IntersectionData) -> bool {
        if self.radius <= 0.0 {
            return false;
        }

        // Quadratic: |h + t*dir|^2 = r^2
        let h = ray.start - self.center;
        let a = ray.dir.norm_squared();
        if a == 0.0 {
            return false;
        }
        let b = 2.0 * h.dot(&ray.dir);
        let c = h.norm_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return false;
        }

        let sqrt_disc = discriminant.sqrt();
        let near = (-b - sqrt_disc) / (2.0 * a);
        let far = (-b + sqrt_disc) / (2.0 * a);

        // Near surface first, the far one if we start inside, none if both are
        // behind. NaN roots fail both tests.
        let t = if near >= 0.0 {
            near
        } else if far >= 0.0 {
            far
        } else {
            return false;
        };

        if t >= data.dist {
            return false;
        }

        let point = ray.at(t);
        let (u, v) = self.surface_uv(&point);
        data.p = point;
        data.dist = t;
        data.normal = (point - self.center).normalize();
        data.u = u;
        data.v = v;
        data.g = Some(self.id());
        true
    }
}
