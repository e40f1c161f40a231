//! Circles: a center point plus a distance radius.

use serde::{Deserialize, Serialize};

use crate::context::SpatialContext;
use crate::geometry::{BBox, Point, lon_delta};
use crate::relation::SpatialRelation;

/// A circle around a center point.
///
/// The radius is a distance in the same linear units as the active
/// [`DistanceCalculator`](crate::distance::DistanceCalculator)'s radius
/// (kilometers for the default Earth sphere). The enclosing bounding box is
/// computed once at construction and cached; it may cross the dateline, and
/// a circle whose angular radius reaches past a pole degenerates to a
/// full-width band or the whole world.
///
/// Construct circles through
/// [`SpatialContext::make_circle`](crate::context::SpatialContext::make_circle).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: Point,
    distance: f64,
    enclosing: BBox,
}

impl Circle {
    pub(crate) fn new(center: Point, distance: f64, ctx: &SpatialContext) -> Self {
        let enclosing = ctx.calculator().box_by_distance(&center, distance);
        Circle {
            center,
            distance,
            enclosing,
        }
    }

    /// The center point.
    pub fn center(&self) -> Point {
        self.center
    }

    /// The radius, in calculator units.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// The cached enclosing bounding box.
    pub fn enclosing_box(&self) -> &BBox {
        &self.enclosing
    }

    /// Whether the circle contains a point (boundary included).
    pub fn contains_point(&self, point: &Point, ctx: &SpatialContext) -> bool {
        ctx.calculator().within(&self.center, point, self.distance)
    }

    /// Relate this circle to a bounding box.
    ///
    /// The enclosing box gives a cheap first answer for the disjoint and
    /// within cases. Otherwise the box's corners are tested for circle
    /// membership: all four inside means the circle contains the box unless
    /// the box's X span escapes the circle's span on the far side of the
    /// globe; none inside means the circle overlaps the box exactly when the
    /// box's point nearest the center does.
    pub fn relate_bbox(&self, bbox: &BBox, ctx: &SpatialContext) -> SpatialRelation {
        if *bbox == self.enclosing {
            return SpatialRelation::Within;
        }
        match self.enclosing.relate(bbox, ctx) {
            SpatialRelation::Disjoint => return SpatialRelation::Disjoint,
            SpatialRelation::Within => return SpatialRelation::Within,
            _ => {}
        }
        let inside = bbox
            .corners()
            .iter()
            .filter(|corner| self.contains_point(corner, ctx))
            .count();
        if inside == 4 {
            if self.enclosing.relate_x_range(bbox.min_x, bbox.max_x, ctx)
                == SpatialRelation::Contains
            {
                SpatialRelation::Contains
            } else {
                SpatialRelation::Intersects
            }
        } else if inside == 0 {
            if self.contains_point(&self.nearest_point_in(bbox, ctx), ctx) {
                SpatialRelation::Intersects
            } else {
                SpatialRelation::Disjoint
            }
        } else {
            SpatialRelation::Intersects
        }
    }

    /// Relate this circle to another circle by center distance and radii.
    pub fn relate_circle(&self, other: &Circle, ctx: &SpatialContext) -> SpatialRelation {
        let separation = ctx.calculator().distance(&self.center, &other.center);
        if separation > self.distance + other.distance {
            return SpatialRelation::Disjoint;
        }
        if separation + other.distance <= self.distance {
            return SpatialRelation::Contains;
        }
        if separation + self.distance <= other.distance {
            return SpatialRelation::Within;
        }
        SpatialRelation::Intersects
    }

    /// The point of the rectangle nearest the circle center: the center
    /// itself clamped into the rectangle, with the X clamp taking the
    /// circular axis into account. With no rectangle corner inside the
    /// circle, this point decides overlap.
    fn nearest_point_in(&self, bbox: &BBox, ctx: &SpatialContext) -> Point {
        let x = if bbox.contains_x(self.center.x, ctx) {
            self.center.x
        } else if ctx.is_geo() {
            if lon_delta(self.center.x, bbox.min_x) <= lon_delta(self.center.x, bbox.max_x) {
                bbox.min_x
            } else {
                bbox.max_x
            }
        } else if self.center.x < bbox.min_x {
            bbox.min_x
        } else {
            bbox.max_x
        };
        Point::new(x, self.center.y.clamp(bbox.min_y, bbox.max_y))
    }
}
