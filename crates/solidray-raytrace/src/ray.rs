//! Ray representation and the per-query intersection record.

use solidray_math::{Point3, Vec3};

/// A ray in 3D space defined by a start point and a direction.
///
/// The direction is not normalized; distances reported by intersections are
/// ray parameters in units of `dir`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub start: Point3,
    /// Direction of travel.
    pub dir: Vec3,
}

impl Ray {
    /// Create a new ray from a start point and direction.
    pub fn new(start: Point3, dir: Vec3) -> Self {
        Self { start, dir }
    }

    /// Evaluate the ray at parameter `t`: `start + t * dir`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.start + self.dir * t
    }
}

/// Identity of a solid, used as the back-reference of a hit.
///
/// Two ids are equal only when they were taken from the same solid
/// instance. The id carries no ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryId(usize);

impl GeometryId {
    /// Identity of the value behind `solid`.
    ///
    /// For a shared `Arc<dyn Geometry>` call [`Geometry::id`](crate::Geometry::id)
    /// on it instead of passing the `Arc` itself, which would identify the
    /// handle rather than the solid.
    pub fn of<T: ?Sized>(solid: &T) -> Self {
        Self((solid as *const T).cast::<()>() as usize)
    }
}

/// Accumulator and result record for one intersection query.
///
/// `dist` starts at [`IntersectionData::SENTINEL`] and only ever decreases:
/// an intersect call overwrites the record only with a strictly nearer hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionData {
    /// Hit point.
    pub p: Point3,
    /// Ray parameter of the hit, measured from the original ray start.
    pub dist: f64,
    /// Unit surface normal at the hit.
    pub normal: Vec3,
    /// First surface coordinate.
    pub u: f64,
    /// Second surface coordinate.
    pub v: f64,
    /// The solid that produced the hit.
    pub g: Option<GeometryId>,
}

impl IntersectionData {
    /// Initial distance meaning "nothing found yet".
    pub const SENTINEL: f64 = 1e99;

    /// Create an empty record with `dist` set to the sentinel.
    pub fn new() -> Self {
        Self {
            p: Point3::origin(),
            dist: Self::SENTINEL,
            normal: Vec3::zeros(),
            u: 0.0,
            v: 0.0,
            g: None,
        }
    }

    /// Whether any intersect call has filled this record.
    pub fn is_hit(&self) -> bool {
        self.g.is_some()
    }
}

impl Default for IntersectionData {
    fn default() -> Self {
        Self::new()
    }
}
