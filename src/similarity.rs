//! Overlap-ratio scoring between a query box and an indexed box.
//!
//! The score rewards documents whose box tightly matches the query box:
//! it is the product of the fraction of the query covered by the overlap
//! and the fraction of the target covered by the overlap, each raised to a
//! configurable power, scaled by 10,000.

use crate::context::SpatialContext;
use crate::geometry::{BBox, x_span};

/// Scores the area overlap between two bounding boxes.
///
/// # Examples
///
/// ```
/// use graticule::context::SpatialContext;
/// use graticule::similarity::AreaSimilarity;
///
/// let ctx = SpatialContext::geodetic();
/// let sim = AreaSimilarity::new();
/// let query = ctx.make_bbox(0.0, 10.0, 0.0, 10.0).unwrap();
/// let exact = sim.score(&query, &query, &ctx);
/// let half = ctx.make_bbox(0.0, 5.0, 0.0, 10.0).unwrap();
/// assert!(sim.score(&query, &half, &ctx) < exact);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AreaSimilarity {
    query_power: f64,
    target_power: f64,
}

impl Default for AreaSimilarity {
    fn default() -> Self {
        AreaSimilarity {
            query_power: 1.0,
            target_power: 1.0,
        }
    }
}

impl AreaSimilarity {
    /// Create a scorer with both powers at 1.0.
    pub fn new() -> Self {
        AreaSimilarity::default()
    }

    /// Set the exponent applied to the query-coverage ratio.
    pub fn with_query_power(mut self, power: f64) -> Self {
        self.query_power = power;
        self
    }

    /// Set the exponent applied to the target-coverage ratio.
    pub fn with_target_power(mut self, power: f64) -> Self {
        self.target_power = power;
        self
    }

    /// Score the overlap between `query` and `target`.
    ///
    /// Returns 0.0 when either box has non-positive area or the boxes do
    /// not overlap. Otherwise returns
    /// `(overlap/query_area)^qp * (overlap/target_area)^tp * 10000`,
    /// which is maximal (10,000 at unit powers) when the boxes coincide.
    pub fn score(&self, query: &BBox, target: &BBox, ctx: &SpatialContext) -> f64 {
        let query_area = query.area();
        let target_area = target.area();
        if query_area <= 0.0 || target_area <= 0.0 {
            return 0.0;
        }
        let height = query.max_y.min(target.max_y) - query.min_y.max(target.min_y);
        if height <= 0.0 {
            return 0.0;
        }
        let width = intersect_width(query, target, ctx);
        if width <= 0.0 {
            return 0.0;
        }
        let overlap = width * height;
        (overlap / query_area).powf(self.query_power)
            * (overlap / target_area).powf(self.target_power)
            * 10_000.0
    }
}

/// Width of the X overlap between two boxes, wrap-aware.
///
/// Both intervals are unwrapped onto the real line (a crossing interval
/// extends past 180) and one is rotated by 360 into the other's frame when
/// that produces an overlap. Only the widest single arc is counted when two
/// crossing boxes overlap on both sides of the sphere.
fn intersect_width(query: &BBox, target: &BBox, ctx: &SpatialContext) -> f64 {
    let q_width = x_span(query.min_x, query.max_x);
    let t_width = x_span(target.min_x, target.max_x);
    if ctx.is_geo() {
        if q_width == 360.0 {
            return t_width;
        }
        if t_width == 360.0 {
            return q_width;
        }
        let q_max = query.min_x + q_width;
        let t_max = target.min_x + t_width;
        let mut best = 0.0_f64;
        for shift in [-360.0, 0.0, 360.0] {
            let lo = query.min_x + shift;
            let hi = q_max + shift;
            let overlap = hi.min(t_max) - lo.max(target.min_x);
            best = best.max(overlap);
        }
        best
    } else {
        query.max_x.min(target.max_x) - query.min_x.max(target.min_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(ctx: &SpatialContext, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> BBox {
        ctx.make_bbox(min_x, max_x, min_y, max_y).unwrap()
    }

    #[test]
    fn test_exact_match_is_maximal() {
        let ctx = SpatialContext::geodetic();
        let sim = AreaSimilarity::new();
        let query = bbox(&ctx, -10.0, 10.0, -10.0, 10.0);
        assert_eq!(sim.score(&query, &query, &ctx), 10_000.0);
    }

    #[test]
    fn test_disjoint_is_zero() {
        let ctx = SpatialContext::geodetic();
        let sim = AreaSimilarity::new();
        let query = bbox(&ctx, 0.0, 10.0, 0.0, 10.0);
        let target = bbox(&ctx, 20.0, 30.0, 0.0, 10.0);
        assert_eq!(sim.score(&query, &target, &ctx), 0.0);
        let below = bbox(&ctx, 0.0, 10.0, -40.0, -20.0);
        assert_eq!(sim.score(&query, &below, &ctx), 0.0);
    }

    #[test]
    fn test_degenerate_boxes_score_zero() {
        let ctx = SpatialContext::geodetic();
        let sim = AreaSimilarity::new();
        let line = bbox(&ctx, 0.0, 0.0, 0.0, 10.0);
        let query = bbox(&ctx, -5.0, 5.0, -5.0, 5.0);
        assert_eq!(sim.score(&line, &query, &ctx), 0.0);
        assert_eq!(sim.score(&query, &line, &ctx), 0.0);
    }

    #[test]
    fn test_partial_overlap_ratios() {
        let ctx = SpatialContext::geodetic();
        let sim = AreaSimilarity::new();
        let query = bbox(&ctx, 0.0, 10.0, 0.0, 10.0);
        // target is the left half of the query: overlap/query = 0.5,
        // overlap/target = 1.0
        let half = bbox(&ctx, 0.0, 5.0, 0.0, 10.0);
        let score = sim.score(&query, &half, &ctx);
        assert!((score - 5_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_grows_toward_exact_match() {
        let ctx = SpatialContext::geodetic();
        let sim = AreaSimilarity::new();
        let query = bbox(&ctx, 0.0, 40.0, 0.0, 40.0);
        let mut last = 0.0;
        for margin in [15.0, 10.0, 5.0, 1.0, 0.0] {
            let target = bbox(&ctx, 0.0, 40.0 - margin, 0.0, 40.0 - margin);
            let score = sim.score(&query, &target, &ctx);
            assert!(score > last);
            last = score;
        }
        assert_eq!(last, 10_000.0);
    }

    #[test]
    fn test_powers_shift_emphasis() {
        let ctx = SpatialContext::geodetic();
        let query = bbox(&ctx, 0.0, 10.0, 0.0, 10.0);
        // tiny target fully inside the query: target ratio 1, query ratio
        // small
        let tiny = bbox(&ctx, 0.0, 1.0, 0.0, 1.0);
        let balanced = AreaSimilarity::new();
        let query_heavy = AreaSimilarity::new().with_query_power(2.0);
        assert!(query_heavy.score(&query, &tiny, &ctx) < balanced.score(&query, &tiny, &ctx));
        let target_only = AreaSimilarity::new().with_query_power(0.0);
        assert_eq!(target_only.score(&query, &tiny, &ctx), 10_000.0);
    }

    #[test]
    fn test_crossing_query_overlap() {
        let ctx = SpatialContext::geodetic();
        let sim = AreaSimilarity::new();
        // query wraps the dateline; target sits on the eastern remnant
        let query = bbox(&ctx, 170.0, -170.0, -10.0, 10.0);
        let target = bbox(&ctx, 175.0, 179.0, -5.0, 5.0);
        // overlap equals the target: 4 x 10 over query 20 x 20 and
        // target 4 x 10
        let score = sim.score(&query, &target, &ctx);
        assert!((score - (40.0 / 400.0) * 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_crossing_target_overlap() {
        let ctx = SpatialContext::geodetic();
        let sim = AreaSimilarity::new();
        let query = bbox(&ctx, -180.0, -170.0, 0.0, 10.0);
        let target = bbox(&ctx, 175.0, -175.0, 0.0, 10.0);
        // overlap arc is [-180, -175]: width 5 of query 10, target 10
        let score = sim.score(&query, &target, &ctx);
        assert!((score - 0.5 * 0.5 * 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_both_crossing() {
        let ctx = SpatialContext::geodetic();
        let sim = AreaSimilarity::new();
        let a = bbox(&ctx, 160.0, -160.0, 0.0, 10.0);
        let b = bbox(&ctx, 170.0, -150.0, 0.0, 10.0);
        // common arc [170, -160]: width 30 of a 40, b 40
        let score = sim.score(&a, &b, &ctx);
        assert!((score - (30.0 / 40.0) * (30.0 / 40.0) * 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_cartesian_overlap() {
        let ctx = SpatialContext::cartesian();
        let sim = AreaSimilarity::new();
        let query = bbox(&ctx, 0.0, 1000.0, 0.0, 1000.0);
        let target = bbox(&ctx, 500.0, 1500.0, 0.0, 1000.0);
        let score = sim.score(&query, &target, &ctx);
        assert!((score - 0.5 * 0.5 * 10_000.0).abs() < 1e-9);
    }
}
