//! Spatial context: the explicit, immutable configuration every geometry
//! and query operation runs under.
//!
//! A context fixes the coordinate topology (geodetic or cartesian), the
//! world bounds shapes are validated against, the longitude-wrapping
//! policy, and the active [`DistanceCalculator`]. It is created once and
//! shared; nothing in it mutates afterwards.

use crate::distance::{
    CartesianCalculator, DistanceCalculator, SphereCalculator, SphereFormula,
};
use crate::error::{GraticuleError, Result};
use crate::geometry::{BBox, Circle, Point, normalize_lon};

use serde::{Deserialize, Serialize};

/// Which distance calculator a context uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceMode {
    /// Planar Euclidean distance.
    Cartesian,
    /// Planar squared distance (comparison-only fast path).
    CartesianSquared,
    /// Great-circle distance via the haversine formula.
    Haversine,
    /// Great-circle distance via the spherical law of cosines.
    LawOfCosines,
    /// Great-circle distance via Vincenty's spherical formula.
    Vincenty,
}

impl DistanceMode {
    /// Whether this mode implies geodetic (spherical) topology.
    pub fn is_geo(&self) -> bool {
        !matches!(self, DistanceMode::Cartesian | DistanceMode::CartesianSquared)
    }

    fn make_calculator(&self) -> Box<dyn DistanceCalculator> {
        match self {
            DistanceMode::Cartesian => Box::new(CartesianCalculator::new()),
            DistanceMode::CartesianSquared => Box::new(CartesianCalculator::squared()),
            DistanceMode::Haversine => Box::new(SphereCalculator::new(SphereFormula::Haversine)),
            DistanceMode::LawOfCosines => {
                Box::new(SphereCalculator::new(SphereFormula::LawOfCosines))
            }
            DistanceMode::Vincenty => Box::new(SphereCalculator::new(SphereFormula::Vincenty)),
        }
    }
}

/// The fixed configuration for one coordinate system.
#[derive(Debug)]
pub struct SpatialContext {
    geo: bool,
    world_bounds: BBox,
    norm_wrap_longitude: bool,
    calculator: Box<dyn DistanceCalculator>,
}

impl SpatialContext {
    /// A geodetic context over the Earth sphere with haversine distances.
    pub fn geodetic() -> Self {
        SpatialContext {
            geo: true,
            world_bounds: BBox::WORLD,
            norm_wrap_longitude: false,
            calculator: DistanceMode::Haversine.make_calculator(),
        }
    }

    /// A planar context with Euclidean distances and unbounded coordinates.
    pub fn cartesian() -> Self {
        SpatialContext {
            geo: false,
            world_bounds: BBox::new(-f64::MAX, f64::MAX, -f64::MAX, f64::MAX),
            norm_wrap_longitude: false,
            calculator: DistanceMode::Cartesian.make_calculator(),
        }
    }

    /// Start building a custom context.
    pub fn builder(mode: DistanceMode) -> SpatialContextBuilder {
        SpatialContextBuilder::new(mode)
    }

    /// Whether the X axis is the circular longitude axis.
    pub fn is_geo(&self) -> bool {
        self.geo
    }

    /// The bounds coordinates are validated against.
    pub fn world_bounds(&self) -> &BBox {
        &self.world_bounds
    }

    /// The active distance calculator.
    pub fn calculator(&self) -> &dyn DistanceCalculator {
        self.calculator.as_ref()
    }

    /// Create a validated point.
    pub fn make_point(&self, x: f64, y: f64) -> Result<Point> {
        let x = self.normalize_x(x);
        self.verify_x(x)?;
        self.verify_y(y)?;
        Ok(Point::new(x, y))
    }

    /// Create a validated bounding box.
    ///
    /// `min_x > max_x` denotes a dateline-crossing box in geodetic mode and
    /// is rejected in cartesian mode. A crossing box pinned to the exact
    /// ±180 seam is canonicalized to its non-crossing representation.
    pub fn make_bbox(&self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<BBox> {
        if min_y > max_y {
            return Err(GraticuleError::invalid_shape(format!(
                "minY {min_y} must not exceed maxY {max_y}"
            )));
        }
        let mut min_x = self.normalize_x(min_x);
        let mut max_x = self.normalize_x(max_x);
        if self.geo && min_x == 180.0 && max_x == 180.0 {
            // a degenerate line on the dateline has two representations;
            // keep the -180 one
            min_x = -180.0;
            max_x = -180.0;
        }
        if min_x > max_x {
            if !self.geo {
                return Err(GraticuleError::invalid_shape(format!(
                    "minX {min_x} must not exceed maxX {max_x} in cartesian mode"
                )));
            }
            // 180 and -180 are the same meridian; a crossing box pinned to
            // the seam is really a plain box
            if min_x == 180.0 {
                min_x = -180.0;
            }
            if max_x == -180.0 {
                max_x = 180.0;
            }
        }
        self.verify_x(min_x)?;
        self.verify_x(max_x)?;
        self.verify_y(min_y)?;
        self.verify_y(max_y)?;
        Ok(BBox::new(min_x, max_x, min_y, max_y))
    }

    /// Create a validated circle with its cached enclosing box.
    pub fn make_circle(&self, x: f64, y: f64, distance: f64) -> Result<Circle> {
        if distance < 0.0 {
            return Err(GraticuleError::invalid_shape(format!(
                "circle distance {distance} must not be negative"
            )));
        }
        let center = self.make_point(x, y)?;
        Ok(Circle::new(center, distance, self))
    }

    fn normalize_x(&self, x: f64) -> f64 {
        if self.geo && self.norm_wrap_longitude {
            normalize_lon(x)
        } else {
            x
        }
    }

    fn verify_x(&self, x: f64) -> Result<()> {
        if !x.is_finite() {
            return Err(GraticuleError::invalid_shape(format!(
                "x {x} is not a finite coordinate"
            )));
        }
        if x < self.world_bounds.min_x || x > self.world_bounds.max_x {
            return Err(GraticuleError::invalid_shape(format!(
                "x {x} is outside world bounds [{}, {}]",
                self.world_bounds.min_x, self.world_bounds.max_x
            )));
        }
        Ok(())
    }

    fn verify_y(&self, y: f64) -> Result<()> {
        if !y.is_finite() {
            return Err(GraticuleError::invalid_shape(format!(
                "y {y} is not a finite coordinate"
            )));
        }
        if y < self.world_bounds.min_y || y > self.world_bounds.max_y {
            return Err(GraticuleError::invalid_shape(format!(
                "y {y} is outside world bounds [{}, {}]",
                self.world_bounds.min_y, self.world_bounds.max_y
            )));
        }
        Ok(())
    }
}

/// Builder for [`SpatialContext`].
#[derive(Debug, Clone)]
pub struct SpatialContextBuilder {
    mode: DistanceMode,
    geo: bool,
    world_bounds: Option<BBox>,
    norm_wrap_longitude: bool,
}

impl SpatialContextBuilder {
    /// Start from a distance mode; the topology defaults to the mode's.
    pub fn new(mode: DistanceMode) -> Self {
        SpatialContextBuilder {
            mode,
            geo: mode.is_geo(),
            world_bounds: None,
            norm_wrap_longitude: false,
        }
    }

    /// Override the world bounds shapes are validated against.
    pub fn world_bounds(mut self, bounds: BBox) -> Self {
        self.world_bounds = Some(bounds);
        self
    }

    /// Wrap out-of-range longitudes into [-180, 180] instead of rejecting
    /// them. Geodetic mode only.
    pub fn norm_wrap_longitude(mut self, wrap: bool) -> Self {
        self.norm_wrap_longitude = wrap;
        self
    }

    /// Build the context.
    pub fn build(self) -> Result<SpatialContext> {
        if self.norm_wrap_longitude && !self.geo {
            return Err(GraticuleError::invalid_config(
                "longitude wrapping requires geodetic mode",
            ));
        }
        let world_bounds = match self.world_bounds {
            Some(bounds) => {
                if bounds.min_y > bounds.max_y || bounds.min_x > bounds.max_x {
                    return Err(GraticuleError::invalid_config(
                        "world bounds must not be inverted or cross the dateline",
                    ));
                }
                bounds
            }
            None if self.geo => BBox::WORLD,
            None => BBox::new(-f64::MAX, f64::MAX, -f64::MAX, f64::MAX),
        };
        Ok(SpatialContext {
            geo: self.geo,
            world_bounds,
            norm_wrap_longitude: self.norm_wrap_longitude,
            calculator: self.mode.make_calculator(),
        })
    }
}
