//! The intersect contract shared by every solid, and nearest-hit helpers.

use std::fmt::Debug;
use std::sync::Arc;

use rayon::prelude::*;

use crate::{GeometryId, IntersectionData, Ray};

/// A solid that can be intersected with a ray.
///
/// Implementations must honor the record contract:
/// - return `true` only if a hit strictly nearer than `data.dist` was found
///   in the ray's forward direction;
/// - on `true`, overwrite point, distance, normal, `(u, v)` and back-reference;
/// - on `false`, leave `data` untouched.
///
/// Solids are read-only during traversal, so one tree can serve many threads.
pub trait Geometry: Send + Sync + Debug {
    /// Intersect `ray` with this solid, improving `data` if possible.
    fn intersect(&self, ray: &Ray, data: &mut IntersectionData) -> bool;

    /// Identity of this solid, as stored in [`IntersectionData::g`].
    fn id(&self) -> GeometryId {
        GeometryId::of(self)
    }
}

/// Query every solid with one record and return the nearest hit, if any.
pub fn trace_closest(solids: &[Arc<dyn Geometry>], ray: &Ray) -> Option<IntersectionData> {
    let mut data = IntersectionData::new();
    let mut found = false;
    for solid in solids {
        found |= solid.intersect(ray, &mut data);
    }
    found.then_some(data)
}

/// [`trace_closest`] for a batch of rays, processed in parallel.
///
/// Results are in the same order as `rays`.
pub fn trace_closest_many(
    solids: &[Arc<dyn Geometry>],
    rays: &[Ray],
) -> Vec<Option<IntersectionData>> {
    rays.par_iter().map(|ray| trace_closest(solids, ray)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cube, Plane, Sphere};
    use solidray_math::{Point3, Vec3};

    fn scene() -> Vec<Arc<dyn Geometry>> {
        vec![
            Arc::new(Plane::new(-2.0)),
            Arc::new(Sphere::new(Point3::new(0.0, 0.0, 10.0), 1.0)),
            Arc::new(Cube::new(Point3::new(0.0, 0.0, 5.0), 2.0)),
        ]
    }

    #[test]
    fn test_trace_closest_picks_nearest() {
        let solids = scene();
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0));
        let hit = trace_closest(&solids, &ray).unwrap();
        // Cube near face at z = 4 beats the sphere at z = 9.
        assert!((hit.dist - 4.0).abs() < 1e-12);
        assert_eq!(hit.g, Some(solids[2].id()));
    }

    #[test]
    fn test_trace_closest_order_independent() {
        let mut solids = scene();
        solids.reverse();
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0));
        let hit = trace_closest(&solids, &ray).unwrap();
        assert!((hit.dist - 4.0).abs() < 1e-12);
        assert_eq!(hit.g, Some(solids[0].id()));
    }

    #[test]
    fn test_trace_closest_miss() {
        let solids = scene();
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 1.0, 0.0));
        assert!(trace_closest(&solids, &ray).is_none());
    }

    #[test]
    fn test_trace_closest_many_matches_serial() {
        let solids = scene();
        let rays: Vec<Ray> = (0..64)
            .map(|i| {
                let a = i as f64 * 0.1;
                Ray::new(Point3::origin(), Vec3::new(a.sin() * 0.3, a.cos() - 0.5, 1.0))
            })
            .collect();
        let parallel = trace_closest_many(&solids, &rays);
        assert_eq!(parallel.len(), rays.len());
        for (ray, hit) in rays.iter().zip(&parallel) {
            assert_eq!(*hit, trace_closest(&solids, ray));
        }
    }
}
