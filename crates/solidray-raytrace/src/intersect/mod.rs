//! Ray intersection for the analytic primitives.
//!
//! Each primitive solves its surface equation in closed form and fills the
//! shared [`IntersectionData`](crate::IntersectionData) record directly.

mod cube;
mod plane;
mod sphere;

pub use cube::Cube;
pub use plane::Plane;
pub use sphere::Sphere;
