//! Geometry primitives: points, bounding boxes, and circles.

pub mod bbox;
pub mod circle;
pub mod point;

pub use self::bbox::BBox;
pub use self::circle::Circle;
pub use self::point::Point;

/// Normalize a longitude into `[-180, 180]`.
///
/// In-range values come back unchanged, so the +180 edge is preserved.
/// Non-finite input propagates as NaN for the validation layer to reject.
pub(crate) fn normalize_lon(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        return lon;
    }
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Absolute circular difference between two longitudes, in `[0, 180]`.
pub(crate) fn lon_delta(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Width of an X interval, wrap-aware: `max - min`, plus 360 when the
/// interval crosses the dateline (`min > max`).
pub(crate) fn x_span(min_x: f64, max_x: f64) -> f64 {
    let width = max_x - min_x;
    if width < 0.0 { width + 360.0 } else { width }
}
