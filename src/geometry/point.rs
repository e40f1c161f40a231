//! A two-dimensional point.

use serde::{Deserialize, Serialize};

/// An immutable (x, y) coordinate pair.
///
/// In geodetic mode `x` is longitude and `y` is latitude, both in degrees;
/// in cartesian mode they are plain planar coordinates. Construct points
/// through [`SpatialContext::make_point`](crate::context::SpatialContext::make_point)
/// to get world-bounds validation and optional longitude wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate (longitude in geodetic mode).
    pub x: f64,
    /// Y coordinate (latitude in geodetic mode).
    pub y: f64,
}

impl Point {
    /// Create a new point from already-validated coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}
