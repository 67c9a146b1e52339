#![warn(missing_docs)]

//! Math types for solidray.
//!
//! Thin wrappers around nalgebra providing the value types shared by every
//! solid: points, vectors, directions, tolerance constants, and the axis
//! permutations used to reduce box tests to a single slab test.

use nalgebra::{Unit, Vector3};
use serde::{Deserialize, Serialize};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A point in 2D surface-parameter space.
pub type Point2 = nalgebra::Point2<f64>;

/// Tolerance constants for ray queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Direction components with a magnitude below this are treated as zero
    /// (ray parallel to the tested plane).
    pub parallel: f64,
    /// Distance a ray origin is advanced past a found surface before
    /// searching for the next one.
    pub restart: f64,
}

impl Tolerance {
    /// Default ray tolerances (1e-9 parallel, 1e-6 restart).
    pub const DEFAULT: Self = Self {
        parallel: 1e-9,
        restart: 1e-6,
    };

    /// Check if a direction component is effectively zero.
    #[inline]
    pub fn is_parallel(&self, component: f64) -> bool {
        component.abs() < self.parallel
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A permutation of the three coordinate axes.
///
/// `project` moves world coordinates into the permuted frame, `unproject`
/// moves them back. Component `i` of a projected vector is component
/// `axes[i]` of the world vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swizzle {
    axes: [usize; 3],
}

impl Swizzle {
    /// The identity permutation.
    pub const IDENTITY: Self = Self { axes: [0, 1, 2] };

    /// Exchange the X and Y axes.
    pub const SWAP_XY: Self = Self { axes: [1, 0, 2] };

    /// Exchange the Y and Z axes.
    pub const SWAP_YZ: Self = Self { axes: [0, 2, 1] };

    /// Build a permutation from axis indices.
    ///
    /// Returns `None` unless `axes` contains each of 0, 1, 2 exactly once.
    pub fn new(axes: [usize; 3]) -> Option<Self> {
        let mut seen = [false; 3];
        for &a in &axes {
            if a > 2 || seen[a] {
                return None;
            }
            seen[a] = true;
        }
        Some(Self { axes })
    }

    /// The axis indices of this permutation.
    pub fn axes(&self) -> [usize; 3] {
        self.axes
    }

    /// Move a vector into the permuted frame.
    #[inline]
    pub fn project(&self, v: &Vec3) -> Vec3 {
        Vec3::new(v[self.axes[0]], v[self.axes[1]], v[self.axes[2]])
    }

    /// Move a vector from the permuted frame back to world axes.
    #[inline]
    pub fn unproject(&self, v: &Vec3) -> Vec3 {
        let mut out = Vec3::zeros();
        for (i, &axis) in self.axes.iter().enumerate() {
            out[axis] = v[i];
        }
        out
    }

    /// Move a point into the permuted frame.
    #[inline]
    pub fn project_point(&self, p: &Point3) -> Point3 {
        Point3::from(self.project(&p.coords))
    }

    /// Move a point from the permuted frame back to world axes.
    #[inline]
    pub fn unproject_point(&self, p: &Point3) -> Point3 {
        Point3::from(self.unproject(&p.coords))
    }
}

impl Default for Swizzle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_swap_xy() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let p = Swizzle::SWAP_XY.project(&v);
        assert_abs_diff_eq!(p, Vec3::new(2.0, 1.0, 3.0));
        assert_abs_diff_eq!(Swizzle::SWAP_XY.unproject(&p), v);
    }

    #[test]
    fn test_swap_yz() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Swizzle::SWAP_YZ.project_point(&p);
        assert_abs_diff_eq!(q, Point3::new(1.0, 3.0, 2.0));
        assert_abs_diff_eq!(Swizzle::SWAP_YZ.unproject_point(&q), p);
    }

    #[test]
    fn test_cyclic_permutation_roundtrip() {
        // Not an involution, so unproject must differ from project.
        let s = Swizzle::new([1, 2, 0]).unwrap();
        let v = Vec3::new(1.0, 2.0, 3.0);
        let p = s.project(&v);
        assert_abs_diff_eq!(p, Vec3::new(2.0, 3.0, 1.0));
        assert_abs_diff_eq!(s.unproject(&p), v);
        assert_ne!(s.project(&p), v);
    }

    #[test]
    fn test_swizzle_rejects_invalid() {
        assert!(Swizzle::new([0, 0, 1]).is_none());
        assert!(Swizzle::new([0, 1, 3]).is_none());
        assert_eq!(Swizzle::new([0, 1, 2]), Some(Swizzle::IDENTITY));
    }

    #[test]
    fn test_tolerance_parallel() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.is_parallel(0.0));
        assert!(tol.is_parallel(-5e-10));
        assert!(!tol.is_parallel(2e-9));
        assert!(!tol.is_parallel(-1.0));
    }

    #[test]
    fn test_tolerance_serialization() {
        let tol = Tolerance::default();
        let json = serde_json::to_string(&tol).unwrap();
        let parsed: Tolerance = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tol);
    }
}
