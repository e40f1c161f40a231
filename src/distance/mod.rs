//! Pluggable distance and bearing math over points.

pub mod cartesian;
pub mod sphere;

pub use self::cartesian::CartesianCalculator;
pub use self::sphere::{EARTH_MEAN_RADIUS_KM, SphereCalculator, SphereFormula};

use crate::geometry::{BBox, Circle, Point};

/// Distance, bearing, and bounding math over points.
///
/// Implementations are immutable and safe to share across any number of
/// threads. All distances are in the implementation's native linear units
/// (plain units for the cartesian plane, the sphere radius' units for the
/// geodesic calculators).
pub trait DistanceCalculator: Send + Sync + std::fmt::Debug {
    /// Distance between two points.
    fn distance(&self, from: &Point, to: &Point) -> f64 {
        self.distance_xy(from, to.x, to.y)
    }

    /// Distance from a point to the coordinates `(x, y)`.
    fn distance_xy(&self, from: &Point, x: f64, y: f64) -> f64;

    /// Whether `to` lies within `dist` of `from`. Comparison-only callers
    /// should prefer this over [`DistanceCalculator::distance`] so that
    /// squared-distance implementations stay valid.
    fn within(&self, from: &Point, to: &Point, dist: f64) -> bool {
        self.distance(from, to) <= dist
    }

    /// The point reached by travelling `dist` from `from` on the given
    /// bearing (degrees clockwise from north).
    fn point_on_bearing(&self, from: &Point, dist: f64, bearing_deg: f64) -> Point;

    /// The smallest bounding box enclosing the circle of radius `dist`
    /// around `from`. May cross the dateline, degenerate to a full-width
    /// band when a pole is reached, or cover the whole world.
    fn box_by_distance(&self, from: &Point, dist: f64) -> BBox;

    /// Surface area of a bounding box, in squared distance units.
    fn area_bbox(&self, bbox: &BBox) -> f64;

    /// Surface area of a circle, in squared distance units.
    fn area_circle(&self, circle: &Circle) -> f64;
}
