#![warn(missing_docs)]

//! Ray intersection for analytic solids and their boolean combinations.
//!
//! Every solid implements one operation, [`Geometry::intersect`], which
//! improves a caller-owned [`IntersectionData`] record with a strictly nearer
//! hit or leaves it untouched. A renderer can query any number of solids with
//! one record and keep the globally nearest hit.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray with start point and (unnormalized) direction
//! - [`IntersectionData`] - Nearest-hit accumulator with point, normal and `(u, v)`
//! - [`intersect`] - Closed-form primitives: [`Plane`], [`Sphere`], [`Cube`]
//! - [`csg`] - [`CsgOp`], boolean composition by crossing parity
//! - [`TraceSettings`] - Restart distance and the crossing-enumeration cap
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use solidray_math::{Point3, Vec3};
//! use solidray_raytrace::{Cube, CsgOp, Geometry, IntersectionData, Ray, Sphere};
//!
//! let block: Arc<dyn Geometry> = Arc::new(Cube::new(Point3::origin(), 2.0));
//! let ball: Arc<dyn Geometry> = Arc::new(Sphere::new(Point3::origin(), 1.2));
//! let shape = CsgOp::difference(block, ball);
//!
//! // Passes outside the ball, through a corner of the block
//! let ray = Ray::new(Point3::new(-10.0, 0.9, 0.9), Vec3::new(1.0, 0.0, 0.0));
//! let mut data = IntersectionData::new();
//! assert!(shape.intersect(&ray, &mut data));
//! assert!((data.dist - 9.0).abs() < 1e-9);
//! ```

pub mod csg;
mod error;
mod geometry;
pub mod intersect;
mod ray;
mod settings;

pub use csg::{find_all_intersections, BooleanOp, CsgOp};
pub use error::{Result, TraceError};
pub use geometry::{trace_closest, trace_closest_many, Geometry};
pub use intersect::{Cube, Plane, Sphere};
pub use ray::{GeometryId, IntersectionData, Ray};
pub use settings::TraceSettings;
