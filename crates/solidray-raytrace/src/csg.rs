//! Boolean composition of solids along a ray.
//!
//! A [`CsgOp`] never builds geometry. For each ray it collects every boundary
//! crossing of both children, merges them by distance, and tracks whether the
//! ray is inside each child by parity. The first crossing where the boolean
//! predicate changes value is a boundary of the combined solid.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Result, TraceError};
use crate::{Geometry, IntersectionData, Ray, TraceSettings};

/// CSG boolean operation type.
#[derive(Debug, Clone, Copy)]
pub enum BooleanOp {
    /// Union: inside either solid.
    Union,
    /// Intersection: inside both solids.
    Intersection,
    /// Difference: inside the left solid and outside the right one.
    Difference,
    /// Caller-supplied predicate over `(in_left, in_right)`.
    Custom(fn(bool, bool) -> bool),
}

impl BooleanOp {
    /// Whether a point inside/outside each child is inside the combination.
    #[inline]
    pub fn evaluate(self, in_left: bool, in_right: bool) -> bool {
        match self {
            BooleanOp::Union => in_left || in_right,
            BooleanOp::Intersection => in_left && in_right,
            BooleanOp::Difference => in_left && !in_right,
            BooleanOp::Custom(f) => f(in_left, in_right),
        }
    }
}

/// Collect every crossing of `geom` along the whole forward ray, nearest first.
///
/// After each hit the search restarts `settings.restart` world units past the
/// hit point, whatever the length of `ray.dir`. Distances in the result are
/// measured from the start of `ray`. A zero-length direction crosses nothing.
/// Fails with [`TraceError::CrossingLimitExceeded`] if `geom` keeps reporting
/// hits past `settings.max_crossings`.
pub fn find_all_intersections(
    geom: &dyn Geometry,
    ray: &Ray,
    settings: &TraceSettings,
) -> Result<Vec<IntersectionData>> {
    let len = ray.dir.norm();
    let mut hits = Vec::new();
    if len == 0.0 {
        return Ok(hits);
    }
    // Restart step in ray-parameter units
    let restart = settings.restart / len;
    let mut ray = *ray;
    let mut offset = 0.0;

    loop {
        let mut temp = IntersectionData::new();
        if !geom.intersect(&ray, &mut temp) {
            return Ok(hits);
        }
        if hits.len() == settings.max_crossings {
            return Err(TraceError::CrossingLimitExceeded {
                limit: settings.max_crossings,
            });
        }

        temp.dist += offset;
        offset = temp.dist + restart;
        ray.start = temp.p + ray.dir * restart;
        hits.push(temp);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// A boolean combination of two shared solids.
///
/// Children are held by `Arc`, so one solid can appear in several nodes (or
/// as both children of one node). The tree is read-only after construction.
#[derive(Debug)]
pub struct CsgOp {
    left: Arc<dyn Geometry>,
    right: Arc<dyn Geometry>,
    op: BooleanOp,
    settings: TraceSettings,
    limit_reported: AtomicBool,
}

impl CsgOp {
    /// Combine `left` and `right` under `op` with default settings.
    pub fn new(left: Arc<dyn Geometry>, right: Arc<dyn Geometry>, op: BooleanOp) -> Self {
        let node = Self {
            left,
            right,
            op,
            settings: TraceSettings::default(),
            limit_reported: AtomicBool::new(false),
        };
        log::debug!("building CSG node: {}", node.describe());
        node
    }

    /// Union of two solids.
    pub fn union(left: Arc<dyn Geometry>, right: Arc<dyn Geometry>) -> Self {
        Self::new(left, right, BooleanOp::Union)
    }

    /// Intersection of two solids.
    pub fn intersection(left: Arc<dyn Geometry>, right: Arc<dyn Geometry>) -> Self {
        Self::new(left, right, BooleanOp::Intersection)
    }

    /// `left` with `right` removed.
    pub fn difference(left: Arc<dyn Geometry>, right: Arc<dyn Geometry>) -> Self {
        Self::new(left, right, BooleanOp::Difference)
    }

    /// Replace the crossing-enumeration settings after validating them.
    pub fn with_settings(mut self, settings: TraceSettings) -> Result<Self> {
        settings.validate()?;
        self.settings = settings;
        Ok(self)
    }

    /// The left child.
    pub fn left(&self) -> &Arc<dyn Geometry> {
        &self.left
    }

    /// The right child.
    pub fn right(&self) -> &Arc<dyn Geometry> {
        &self.right
    }

    /// The boolean operation.
    pub fn op(&self) -> BooleanOp {
        self.op
    }

    /// The crossing-enumeration settings.
    pub fn settings(&self) -> &TraceSettings {
        &self.settings
    }

    /// One-line summary naming the operation and child ids, not the subtrees.
    fn describe(&self) -> String {
        format!("{:?} of {:?} and {:?}", self.op, self.left.id(), self.right.id())
    }

    /// Nearest crossing along `ray` where the combined predicate changes.
    fn nearest_boundary(&self, ray: &Ray) -> Result<Option<IntersectionData>> {
        let left = find_all_intersections(self.left.as_ref(), ray, &self.settings)?;
        let right = find_all_intersections(self.right.as_ref(), ray, &self.settings)?;

        // Odd number of crossings ahead: the ray starts inside
        let mut in_left = left.len() % 2 == 1;
        let mut in_right = right.len() % 2 == 1;
        let inside = self.op.evaluate(in_left, in_right);

        let mut all: Vec<(Side, IntersectionData)> = left
            .into_iter()
            .map(|hit| (Side::Left, hit))
            .chain(right.into_iter().map(|hit| (Side::Right, hit)))
            .collect();
        // Stable: at equal distance, left crossings come first
        all.sort_by(|a, b| a.1.dist.total_cmp(&b.1.dist));

        for (side, hit) in all {
            match side {
                Side::Left => in_left = !in_left,
                Side::Right => in_right = !in_right,
            }
            if self.op.evaluate(in_left, in_right) != inside {
                return Ok(Some(hit));
            }
        }
        Ok(None)
    }

    fn report(&self, err: &TraceError) {
        if !self.limit_reported.swap(true, Ordering::Relaxed) {
            log::warn!("CSG child is malformed, treating ray as a miss: {err}");
        } else {
            log::trace!("CSG child is malformed, treating ray as a miss: {err}");
        }
    }
}

impl Geometry for CsgOp {
    fn intersect(&self, ray: &Ray, data: &mut IntersectionData) -> bool {
        match self.nearest_boundary(ray) {
            Ok(Some(hit)) if hit.dist < data.dist => {
                *data = hit;
                true
            }
            Ok(_) => false,
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }
}
