//! Axis-aligned bounding boxes, possibly wrapping the antimeridian.

use serde::{Deserialize, Serialize};

use crate::context::SpatialContext;
use crate::geometry::{Point, x_span};
use crate::relation::{SpatialRelation, relate_range};

/// An axis-aligned bounding box.
///
/// The Y axis is an ordinary linear interval (`min_y <= max_y` always). The
/// X axis is circular in geodetic mode: a box whose `min_x` exceeds its
/// `max_x` wraps around the ±180° antimeridian. Whether a box crosses is
/// derived from the stored bounds, never stored separately.
///
/// Construct boxes through
/// [`SpatialContext::make_bbox`](crate::context::SpatialContext::make_bbox)
/// to get validation and canonicalization of the ±180 seam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    /// Western edge (or plain minimum X in cartesian mode).
    pub min_x: f64,
    /// Eastern edge. Less than `min_x` when the box wraps the dateline.
    pub max_x: f64,
    /// Southern edge. Never exceeds `max_y`.
    pub min_y: f64,
    /// Northern edge.
    pub max_y: f64,
}

impl BBox {
    /// The whole geodetic world.
    pub const WORLD: BBox = BBox {
        min_x: -180.0,
        max_x: 180.0,
        min_y: -90.0,
        max_y: 90.0,
    };

    /// Create a bounding box from already-validated bounds.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        BBox {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// True when the box wraps around the ±180° antimeridian.
    pub fn crosses_dateline(&self) -> bool {
        self.min_x > self.max_x
    }

    /// Wrap-aware width, normalized into `[0, 360)` for crossing boxes.
    pub fn width(&self) -> f64 {
        x_span(self.min_x, self.max_x)
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Area in squared degrees (or squared plain units), using the
    /// wrap-aware width. Zero for degenerate boxes.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The four corner points of the box.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.min_x, self.max_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.max_x, self.min_y),
        ]
    }

    /// Whether `x` falls inside the (possibly circular) X interval.
    pub fn contains_x(&self, x: f64, ctx: &SpatialContext) -> bool {
        if ctx.is_geo() && self.crosses_dateline() {
            x >= self.min_x || x <= self.max_x
        } else {
            x >= self.min_x && x <= self.max_x
        }
    }

    /// Whether the box contains a point (boundary included).
    pub fn contains_point(&self, point: &Point, ctx: &SpatialContext) -> bool {
        point.y >= self.min_y && point.y <= self.max_y && self.contains_x(point.x, ctx)
    }

    /// Relate this box to a point. Points have no area, so the answer is
    /// either `Contains` or `Disjoint`.
    pub fn relate_point(&self, point: &Point, ctx: &SpatialContext) -> SpatialRelation {
        if self.contains_point(point, ctx) {
            SpatialRelation::Contains
        } else {
            SpatialRelation::Disjoint
        }
    }

    /// Relate this box's X interval to `[ext_min, ext_max]`.
    ///
    /// In geodetic mode both intervals are circular. They are compared by
    /// rotating the pair into one non-wrapping frame: a crossing interval is
    /// unwrapped by extending its max by +360, and if the two unwrapped
    /// intervals still cannot overlap linearly the lower one is rotated up
    /// by +360 as well.
    pub(crate) fn relate_x_range(
        &self,
        ext_min: f64,
        ext_max: f64,
        ctx: &SpatialContext,
    ) -> SpatialRelation {
        let (mut int_min, mut int_max) = (self.min_x, self.max_x);
        let (mut ext_min, mut ext_max) = (ext_min, ext_max);
        if ctx.is_geo() {
            // full-width intervals span every longitude
            if x_span(int_min, int_max) == 360.0 {
                return SpatialRelation::Contains;
            }
            if x_span(ext_min, ext_max) == 360.0 {
                return SpatialRelation::Within;
            }
            if int_max < int_min {
                int_max += 360.0;
            }
            if ext_max < ext_min {
                ext_max += 360.0;
            }
            if int_max < ext_min {
                int_min += 360.0;
                int_max += 360.0;
            } else if ext_max < int_min {
                ext_min += 360.0;
                ext_max += 360.0;
            }
        }
        relate_range(int_min, int_max, ext_min, ext_max)
    }

    /// Relate this box to another box.
    ///
    /// The two axes are related independently and combined: disjoint on
    /// either axis is disjoint overall, agreement on both axes is the
    /// combined answer, and a containment mismatch collapses to
    /// `Intersects` unless the mismatching axis is an exact interval match,
    /// in which case the other axis decides.
    pub fn relate(&self, other: &BBox, ctx: &SpatialContext) -> SpatialRelation {
        let rel_y = relate_range(self.min_y, self.max_y, other.min_y, other.max_y);
        if rel_y == SpatialRelation::Disjoint {
            return SpatialRelation::Disjoint;
        }
        let rel_x = self.relate_x_range(other.min_x, other.max_x, ctx);
        if rel_x == SpatialRelation::Disjoint {
            return SpatialRelation::Disjoint;
        }
        if rel_x == rel_y {
            return rel_x;
        }
        // one axis is an exact interval match: the other axis decides
        if self.min_x == other.min_x && self.max_x == other.max_x {
            return rel_y;
        }
        if self.min_y == other.min_y && self.max_y == other.max_y {
            return rel_x;
        }
        SpatialRelation::Intersects
    }

    /// Relate this box to a circle.
    pub fn relate_circle(
        &self,
        circle: &crate::geometry::Circle,
        ctx: &SpatialContext,
    ) -> SpatialRelation {
        circle.relate_bbox(self, ctx).transpose()
    }
}
