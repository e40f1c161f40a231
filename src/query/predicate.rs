//! The boolean predicate tree a compiled spatial query decomposes into.
//!
//! A predicate is a host-index-neutral representation: range and equality
//! leaves over the five indexed sub-fields, composed under `And`, `Or` and
//! `AndNot`. A host engine translates the tree into its native boolean
//! query; [`SpatialPredicate::matches`] is the reference evaluator used to
//! verify that translation.

use crate::query::fields::{BBoxFields, IndexedBBox};

use serde::{Deserialize, Serialize};

/// One endpoint of a numeric range leaf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Bound<T> {
    /// The endpoint itself satisfies the range.
    Included(T),
    /// The endpoint itself does not satisfy the range.
    Excluded(T),
    /// No constraint on this side.
    Unbounded,
}

impl Bound<f64> {
    fn contains_lower(&self, value: f64) -> bool {
        match *self {
            Bound::Included(lower) => value >= lower,
            Bound::Excluded(lower) => value > lower,
            Bound::Unbounded => true,
        }
    }

    fn contains_upper(&self, value: f64) -> bool {
        match *self {
            Bound::Included(upper) => value <= upper,
            Bound::Excluded(upper) => value < upper,
            Bound::Unbounded => true,
        }
    }
}

/// A node of a compiled spatial query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpatialPredicate {
    /// Numeric range test on one sub-field.
    Range {
        field: String,
        lower: Bound<f64>,
        upper: Bound<f64>,
    },
    /// Equality test on the crossing-flag sub-field.
    CrossesDateline { field: String, value: bool },
    /// Every child must match.
    And(Vec<SpatialPredicate>),
    /// At least one child must match.
    Or(Vec<SpatialPredicate>),
    /// `positive` must match and `negative` must not.
    AndNot {
        positive: Box<SpatialPredicate>,
        negative: Box<SpatialPredicate>,
    },
}

impl SpatialPredicate {
    /// `field <= value`
    pub fn lte(field: &str, value: f64) -> Self {
        SpatialPredicate::Range {
            field: field.to_string(),
            lower: Bound::Unbounded,
            upper: Bound::Included(value),
        }
    }

    /// `field < value`
    pub fn lt(field: &str, value: f64) -> Self {
        SpatialPredicate::Range {
            field: field.to_string(),
            lower: Bound::Unbounded,
            upper: Bound::Excluded(value),
        }
    }

    /// `field >= value`
    pub fn gte(field: &str, value: f64) -> Self {
        SpatialPredicate::Range {
            field: field.to_string(),
            lower: Bound::Included(value),
            upper: Bound::Unbounded,
        }
    }

    /// `field > value`
    pub fn gt(field: &str, value: f64) -> Self {
        SpatialPredicate::Range {
            field: field.to_string(),
            lower: Bound::Excluded(value),
            upper: Bound::Unbounded,
        }
    }

    /// `field == value`
    pub fn eq(field: &str, value: f64) -> Self {
        SpatialPredicate::Range {
            field: field.to_string(),
            lower: Bound::Included(value),
            upper: Bound::Included(value),
        }
    }

    /// Crossing-flag equality.
    pub fn xdl(field: &str, value: bool) -> Self {
        SpatialPredicate::CrossesDateline {
            field: field.to_string(),
            value,
        }
    }

    /// Conjunction of `clauses`.
    pub fn and(clauses: Vec<SpatialPredicate>) -> Self {
        SpatialPredicate::And(clauses)
    }

    /// Disjunction of `clauses`.
    pub fn or(clauses: Vec<SpatialPredicate>) -> Self {
        SpatialPredicate::Or(clauses)
    }

    /// `positive AND NOT negative`.
    pub fn and_not(positive: SpatialPredicate, negative: SpatialPredicate) -> Self {
        SpatialPredicate::AndNot {
            positive: Box::new(positive),
            negative: Box::new(negative),
        }
    }

    /// Evaluate this tree against one indexed document.
    ///
    /// Leaves naming a sub-field `fields` does not know never match.
    pub fn matches(&self, doc: &IndexedBBox, fields: &BBoxFields) -> bool {
        match self {
            SpatialPredicate::Range {
                field,
                lower,
                upper,
            } => match fields.numeric_value(doc, field) {
                Some(value) => lower.contains_lower(value) && upper.contains_upper(value),
                None => false,
            },
            SpatialPredicate::CrossesDateline { field, value } => {
                field == fields.crosses_dateline() && doc.crosses_dateline == *value
            }
            SpatialPredicate::And(clauses) => {
                clauses.iter().all(|clause| clause.matches(doc, fields))
            }
            SpatialPredicate::Or(clauses) => {
                clauses.iter().any(|clause| clause.matches(doc, fields))
            }
            SpatialPredicate::AndNot { positive, negative } => {
                positive.matches(doc, fields) && !negative.matches(doc, fields)
            }
        }
    }
}
