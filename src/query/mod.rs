//! Query compilation: turning a spatial operation over a query shape into
//! a boolean predicate tree over indexed sub-fields.

pub mod compiler;
pub mod fields;
pub mod predicate;
pub mod score_cache;

pub use self::compiler::{BBoxQueryCompiler, SpatialOperation};
pub use self::fields::{BBoxFields, IndexedBBox};
pub use self::predicate::{Bound, SpatialPredicate};
pub use self::score_cache::DistanceScoreCache;
