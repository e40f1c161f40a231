//! Spatial relation outcomes and the interval algebra they are built from.

use serde::{Deserialize, Serialize};

/// The relationship of one shape to another.
///
/// `relate(a, b)` reads as "a RELATION b": `Contains` means `a` fully covers
/// `b`, `Within` means `a` lies fully inside `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpatialRelation {
    /// The first shape fully contains the second.
    Contains,
    /// The first shape lies fully inside the second.
    Within,
    /// The shapes overlap without either containing the other.
    Intersects,
    /// The shapes share no point at all.
    Disjoint,
}

impl SpatialRelation {
    /// Swap the roles of the two shapes: `relate(a, b).transpose() == relate(b, a)`.
    pub fn transpose(self) -> Self {
        match self {
            SpatialRelation::Contains => SpatialRelation::Within,
            SpatialRelation::Within => SpatialRelation::Contains,
            other => other,
        }
    }

    /// True for every relation except [`SpatialRelation::Disjoint`].
    pub fn intersects(self) -> bool {
        self != SpatialRelation::Disjoint
    }
}

/// Relate the linear interval `[int_min, int_max]` to `[ext_min, ext_max]`.
///
/// Identical intervals report `Contains`; callers that need to tell equality
/// apart compare the endpoints themselves.
pub(crate) fn relate_range(
    int_min: f64,
    int_max: f64,
    ext_min: f64,
    ext_max: f64,
) -> SpatialRelation {
    if ext_min > int_max || ext_max < int_min {
        return SpatialRelation::Disjoint;
    }
    if ext_min >= int_min && ext_max <= int_max {
        return SpatialRelation::Contains;
    }
    if int_min >= ext_min && int_max <= ext_max {
        return SpatialRelation::Within;
    }
    SpatialRelation::Intersects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose() {
        assert_eq!(
            SpatialRelation::Contains.transpose(),
            SpatialRelation::Within
        );
        assert_eq!(
            SpatialRelation::Within.transpose(),
            SpatialRelation::Contains
        );
        assert_eq!(
            SpatialRelation::Intersects.transpose(),
            SpatialRelation::Intersects
        );
        assert_eq!(
            SpatialRelation::Disjoint.transpose(),
            SpatialRelation::Disjoint
        );
    }

    #[test]
    fn test_intersects() {
        assert!(SpatialRelation::Contains.intersects());
        assert!(SpatialRelation::Within.intersects());
        assert!(SpatialRelation::Intersects.intersects());
        assert!(!SpatialRelation::Disjoint.intersects());
    }

    #[test]
    fn test_relate_range() {
        // disjoint on either side
        assert_eq!(relate_range(0.0, 10.0, 11.0, 20.0), SpatialRelation::Disjoint);
        assert_eq!(relate_range(0.0, 10.0, -20.0, -1.0), SpatialRelation::Disjoint);
        // containment both ways
        assert_eq!(relate_range(0.0, 10.0, 2.0, 8.0), SpatialRelation::Contains);
        assert_eq!(relate_range(2.0, 8.0, 0.0, 10.0), SpatialRelation::Within);
        // partial overlap
        assert_eq!(relate_range(0.0, 10.0, 5.0, 15.0), SpatialRelation::Intersects);
        // touching edges intersect
        assert_eq!(relate_range(0.0, 10.0, 10.0, 20.0), SpatialRelation::Intersects);
        // identical intervals report Contains
        assert_eq!(relate_range(0.0, 10.0, 0.0, 10.0), SpatialRelation::Contains);
    }
}
