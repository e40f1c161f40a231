//! # Graticule
//!
//! Geodetic bounding-box algebra and spatial query compilation for
//! inverted-index search engines.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Dateline-aware bounding-box relation algebra
//! - Compilation of spatial operations into boolean range predicates
//! - Pluggable distance calculators (planar and spherical)
//! - Area-overlap similarity scoring
//! - Minimum enclosing box over circular range sets

pub mod context;
pub mod distance;
pub mod error;
pub mod geometry;
pub mod merge;
pub mod query;
pub mod relation;
pub mod similarity;

pub mod prelude {
    pub use crate::context::{DistanceMode, SpatialContext};
    pub use crate::distance::DistanceCalculator;
    pub use crate::error::{GraticuleError, Result};
    pub use crate::geometry::{BBox, Circle, Point};
    pub use crate::merge::BBoxRangeMerger;
    pub use crate::query::{
        BBoxFields, BBoxQueryCompiler, SpatialOperation, SpatialPredicate,
    };
    pub use crate::relation::SpatialRelation;
    pub use crate::similarity::AreaSimilarity;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
