//! Accumulates many X/Y ranges into one minimum enclosing bounding box.
//!
//! On the circular longitude axis there is no natural "leftmost" edge, so
//! the merger keeps every distinct X arc it has seen and, once all ranges
//! are in, picks the enclosing arc as the complement of the largest gap
//! between the accumulated arcs.

use crate::error::{GraticuleError, Result};
use crate::geometry::BBox;

/// Single-use accumulator producing the minimum enclosing [`BBox`] of a
/// sequence of ranges.
///
/// Feed ranges with [`expand_range`](BBoxRangeMerger::expand_range), then
/// take the result with [`boundary`](BBoxRangeMerger::boundary). The result
/// is cached; feeding further ranges after `boundary` has been taken is not
/// supported.
///
/// # Examples
///
/// ```
/// use graticule::merge::BBoxRangeMerger;
///
/// let mut merger = BBoxRangeMerger::new(true);
/// merger.expand_range(-170.0, -160.0, 0.0, 5.0);
/// merger.expand_range(170.0, 175.0, -5.0, 0.0);
/// let bbox = merger.boundary().unwrap();
/// // the enclosing arc wraps through the dateline rather than spanning
/// // nearly the whole globe
/// assert!(bbox.crosses_dateline());
/// ```
#[derive(Debug, Clone)]
pub struct BBoxRangeMerger {
    geo: bool,
    // sorted, pairwise disjoint, non-crossing X arcs
    ranges: Vec<(f64, f64)>,
    world_x: bool,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    has_any: bool,
    boundary: Option<BBox>,
}

impl BBoxRangeMerger {
    /// Create a merger; `geo` selects circular X-axis handling.
    pub fn new(geo: bool) -> Self {
        BBoxRangeMerger {
            geo,
            ranges: Vec::new(),
            world_x: false,
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            has_any: false,
            boundary: None,
        }
    }

    /// Add one range. In geodetic mode `min_x > max_x` denotes an arc that
    /// crosses the dateline.
    pub fn expand_range(&mut self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) {
        self.has_any = true;
        self.boundary = None;
        self.min_y = self.min_y.min(min_y);
        self.max_y = self.max_y.max(max_y);
        if self.geo {
            self.insert_x_range(min_x, max_x);
        } else {
            self.min_x = self.min_x.min(min_x);
            self.max_x = self.max_x.max(max_x);
        }
    }

    /// Add a whole bounding box.
    pub fn expand(&mut self, bbox: &BBox) {
        self.expand_range(bbox.min_x, bbox.max_x, bbox.min_y, bbox.max_y);
    }

    /// The minimum enclosing box of everything fed so far.
    ///
    /// Errors if no range was ever added. The result is computed once and
    /// cached.
    pub fn boundary(&mut self) -> Result<BBox> {
        if let Some(bbox) = self.boundary {
            return Ok(bbox);
        }
        if !self.has_any {
            return Err(GraticuleError::invalid_shape(
                "cannot compute the boundary of an empty range set",
            ));
        }
        let bbox = if self.geo {
            let (min_x, max_x) = self.enclosing_arc();
            BBox::new(min_x, max_x, self.min_y, self.max_y)
        } else {
            BBox::new(self.min_x, self.max_x, self.min_y, self.max_y)
        };
        self.boundary = Some(bbox);
        Ok(bbox)
    }

    fn insert_x_range(&mut self, min_x: f64, max_x: f64) {
        if self.world_x {
            return;
        }
        if min_x > max_x {
            // crossing arc, split at the dateline into two linear pieces
            self.merge_piece(min_x, 180.0);
            self.merge_piece(-180.0, max_x);
        } else {
            self.merge_piece(min_x, max_x);
        }
    }

    // insert [lo, hi] into the sorted disjoint arc list, coalescing
    // overlapping and touching neighbors
    fn merge_piece(&mut self, lo: f64, hi: f64) {
        if self.world_x {
            return;
        }
        let start = self.ranges.partition_point(|&(_, max)| max < lo);
        let end = self.ranges.partition_point(|&(min, _)| min <= hi);
        let mut lo = lo;
        let mut hi = hi;
        if start < end {
            lo = lo.min(self.ranges[start].0);
            hi = hi.max(self.ranges[end - 1].1);
        }
        self.ranges.splice(start..end, [(lo, hi)]);
        if self.ranges.len() == 1 && self.ranges[0] == (-180.0, 180.0) {
            self.world_x = true;
        }
    }

    // complement of the largest circular gap between the arcs
    fn enclosing_arc(&self) -> (f64, f64) {
        if self.world_x {
            return (-180.0, 180.0);
        }
        let n = self.ranges.len();
        if n == 1 {
            return self.ranges[0];
        }
        let mut largest_gap = self.ranges[0].0 + 360.0 - self.ranges[n - 1].1;
        let mut after_gap = 0;
        for i in 1..n {
            let gap = self.ranges[i].0 - self.ranges[i - 1].1;
            if gap > largest_gap {
                largest_gap = gap;
                after_gap = i;
            }
        }
        if largest_gap <= 0.0 {
            return (-180.0, 180.0);
        }
        let min_x = self.ranges[after_gap].0;
        let max_x = self.ranges[(after_gap + n - 1) % n].1;
        (min_x, max_x)
    }
}
