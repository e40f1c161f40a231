//! Planar Euclidean distance math.

use crate::distance::DistanceCalculator;
use crate::geometry::{BBox, Circle, Point};

/// Euclidean distance on a flat plane.
///
/// The squared variant skips the square root and is only valid for
/// comparisons; its [`within`](DistanceCalculator::within) compares against
/// the squared threshold so callers never see the difference.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartesianCalculator {
    squared: bool,
}

impl CartesianCalculator {
    /// Create a calculator returning true Euclidean distances.
    pub fn new() -> Self {
        CartesianCalculator { squared: false }
    }

    /// Create a calculator returning squared distances (comparison-only
    /// fast path).
    pub fn squared() -> Self {
        CartesianCalculator { squared: true }
    }

    /// Whether this calculator returns squared distances.
    pub fn is_squared(&self) -> bool {
        self.squared
    }
}

impl DistanceCalculator for CartesianCalculator {
    fn distance_xy(&self, from: &Point, x: f64, y: f64) -> f64 {
        let dx = from.x - x;
        let dy = from.y - y;
        let squared = dx * dx + dy * dy;
        if self.squared { squared } else { squared.sqrt() }
    }

    fn within(&self, from: &Point, to: &Point, dist: f64) -> bool {
        if self.squared {
            self.distance(from, to) <= dist * dist
        } else {
            self.distance(from, to) <= dist
        }
    }

    fn point_on_bearing(&self, from: &Point, dist: f64, bearing_deg: f64) -> Point {
        let bearing = bearing_deg.to_radians();
        Point::new(from.x + dist * bearing.sin(), from.y + dist * bearing.cos())
    }

    fn box_by_distance(&self, from: &Point, dist: f64) -> BBox {
        BBox::new(from.x - dist, from.x + dist, from.y - dist, from.y + dist)
    }

    fn area_bbox(&self, bbox: &BBox) -> f64 {
        bbox.area()
    }

    fn area_circle(&self, circle: &Circle) -> f64 {
        std::f64::consts::PI * circle.distance() * circle.distance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let calc = CartesianCalculator::new();
        let d = calc.distance(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn test_squared_distance_is_comparison_compatible() {
        let plain = CartesianCalculator::new();
        let squared = CartesianCalculator::squared();
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);

        assert_eq!(squared.distance(&a, &b), 25.0);
        // within() agrees between the two variants
        assert_eq!(plain.within(&a, &b, 5.0), squared.within(&a, &b, 5.0));
        assert_eq!(plain.within(&a, &b, 4.9), squared.within(&a, &b, 4.9));
    }

    #[test]
    fn test_point_on_bearing_cardinal_directions() {
        let calc = CartesianCalculator::new();
        let origin = Point::new(0.0, 0.0);

        let north = calc.point_on_bearing(&origin, 10.0, 0.0);
        assert!((north.x - 0.0).abs() < 1e-9);
        assert!((north.y - 10.0).abs() < 1e-9);

        let east = calc.point_on_bearing(&origin, 10.0, 90.0);
        assert!((east.x - 10.0).abs() < 1e-9);
        assert!((east.y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_box_by_distance() {
        let calc = CartesianCalculator::new();
        let bbox = calc.box_by_distance(&Point::new(5.0, 5.0), 2.0);
        assert_eq!(bbox, BBox::new(3.0, 7.0, 3.0, 7.0));
        assert_eq!(calc.area_bbox(&bbox), 16.0);
    }
}
