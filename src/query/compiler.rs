//! Compilation of a spatial operation over a query box into a predicate
//! tree over the indexed sub-fields.
//!
//! The compiler and the direct [`BBox::relate`] algebra implement the same
//! relations on two substrates and must agree on every input: a compiled
//! tree evaluated against a document's stored values gives the same answer
//! as relating the two boxes in memory.
//!
//! The X-axis decomposition splits every operation into clauses for
//! documents that cross the dateline and documents that do not, because
//! the stored numeric ranges of a crossing document describe two disjoint
//! arcs rather than one interval.

use crate::context::SpatialContext;
use crate::error::{GraticuleError, Result};
use crate::geometry::{BBox, Circle};
use crate::query::fields::BBoxFields;
use crate::query::predicate::SpatialPredicate;
use crate::relation::SpatialRelation;

use serde::{Deserialize, Serialize};

/// The predicate a caller requests between the indexed shape and the query
/// shape.
///
/// Several operations share an underlying relation test; they are kept
/// distinct because hosts expose them under distinct names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpatialOperation {
    /// The shapes share at least one point.
    Intersects,
    /// The indexed shape lies entirely inside the query shape.
    IsWithin,
    /// The indexed shape entirely covers the query shape.
    Contains,
    /// The shapes share no point.
    IsDisjointTo,
    /// The shapes are identical.
    IsEqualTo,
    /// Alias of [`Intersects`](SpatialOperation::Intersects).
    Overlaps,
    /// Bounding-box intersection test.
    BBoxIntersects,
    /// Bounding-box containment test.
    BBoxWithin,
}

impl SpatialOperation {
    /// Ground-truth evaluation of this operation directly on two boxes.
    ///
    /// This is the law every compiled predicate tree is tested against.
    pub fn evaluate(&self, indexed: &BBox, query: &BBox, ctx: &SpatialContext) -> bool {
        let relation = indexed.relate(query, ctx);
        match self {
            SpatialOperation::Intersects
            | SpatialOperation::Overlaps
            | SpatialOperation::BBoxIntersects => relation.intersects(),
            SpatialOperation::IsWithin | SpatialOperation::BBoxWithin => {
                relation == SpatialRelation::Within || indexed == query
            }
            SpatialOperation::Contains => {
                relation == SpatialRelation::Contains || indexed == query
            }
            SpatialOperation::IsDisjointTo => relation == SpatialRelation::Disjoint,
            SpatialOperation::IsEqualTo => indexed == query,
        }
    }
}

/// Compiles (operation, query box) pairs into [`SpatialPredicate`] trees
/// over one field's sub-fields.
///
/// # Examples
///
/// ```
/// use graticule::context::SpatialContext;
/// use graticule::query::{BBoxFields, BBoxQueryCompiler, SpatialOperation};
///
/// let ctx = SpatialContext::geodetic();
/// let compiler = BBoxQueryCompiler::new(BBoxFields::new("geo"), &ctx);
/// let query = ctx.make_bbox(170.0, -170.0, -10.0, 10.0).unwrap();
/// let tree = compiler.compile(SpatialOperation::Intersects, &query).unwrap();
/// let doc = ctx.make_bbox(175.0, 179.0, -5.0, 5.0).unwrap();
/// assert!(tree.matches(&compiler.fields().index_value(&doc), compiler.fields()));
/// ```
#[derive(Debug, Clone)]
pub struct BBoxQueryCompiler {
    fields: BBoxFields,
    geo: bool,
}

impl BBoxQueryCompiler {
    /// Create a compiler for one logical field under `ctx`'s topology.
    pub fn new(fields: BBoxFields, ctx: &SpatialContext) -> Self {
        BBoxQueryCompiler {
            fields,
            geo: ctx.is_geo(),
        }
    }

    /// The sub-field naming contract this compiler emits leaves for.
    pub fn fields(&self) -> &BBoxFields {
        &self.fields
    }

    /// Compile `op` over `query` into a predicate tree.
    pub fn compile(&self, op: SpatialOperation, query: &BBox) -> Result<SpatialPredicate> {
        match op {
            SpatialOperation::Intersects
            | SpatialOperation::Overlaps
            | SpatialOperation::BBoxIntersects => Ok(self.make_intersects(query)),
            SpatialOperation::IsWithin | SpatialOperation::BBoxWithin => {
                Ok(self.make_within(query))
            }
            SpatialOperation::Contains => Ok(self.make_contains(query)),
            SpatialOperation::IsDisjointTo => Ok(self.make_disjoint(query)),
            SpatialOperation::IsEqualTo => Ok(self.make_equals(query)),
        }
    }

    /// Compile `op` over a circle through its enclosing box.
    ///
    /// Only the intersection family is sound against an enclosing box (a
    /// box-intersection miss is a circle miss); the other operations are
    /// rejected.
    pub fn compile_circle(
        &self,
        op: SpatialOperation,
        circle: &Circle,
    ) -> Result<SpatialPredicate> {
        match op {
            SpatialOperation::Intersects
            | SpatialOperation::Overlaps
            | SpatialOperation::BBoxIntersects => Ok(self.make_intersects(circle.enclosing_box())),
            other => Err(GraticuleError::unsupported_operation(format!(
                "{other:?} cannot be compiled against a circle's enclosing box"
            ))),
        }
    }

    /// Indexed box covers the query box.
    fn make_contains(&self, query: &BBox) -> SpatialPredicate {
        let f = &self.fields;
        let y = SpatialPredicate::and(vec![
            SpatialPredicate::lte(f.min_y(), query.min_y),
            SpatialPredicate::gte(f.max_y(), query.max_y),
        ]);

        let x = if self.geo && query.crosses_dateline() {
            // only a crossing document, or the whole-world box, can cover
            // a crossing query
            SpatialPredicate::or(vec![
                SpatialPredicate::and(vec![
                    SpatialPredicate::xdl(f.crosses_dateline(), true),
                    SpatialPredicate::lte(f.min_x(), query.min_x),
                    SpatialPredicate::gte(f.max_x(), query.max_x),
                ]),
                SpatialPredicate::and(vec![
                    SpatialPredicate::eq(f.min_x(), -180.0),
                    SpatialPredicate::eq(f.max_x(), 180.0),
                ]),
            ])
        } else if self.geo {
            let mut clauses = vec![
                SpatialPredicate::and(vec![
                    SpatialPredicate::xdl(f.crosses_dateline(), false),
                    SpatialPredicate::lte(f.min_x(), query.min_x),
                    SpatialPredicate::gte(f.max_x(), query.max_x),
                ]),
                // a crossing document covers the query if either of its
                // arcs reaches past the matching query edge
                SpatialPredicate::and(vec![
                    SpatialPredicate::xdl(f.crosses_dateline(), true),
                    SpatialPredicate::or(vec![
                        SpatialPredicate::lte(f.min_x(), query.min_x),
                        SpatialPredicate::gte(f.max_x(), query.max_x),
                    ]),
                ]),
            ];
            if query.min_x == query.max_x && query.min_x.abs() == 180.0 {
                // a degenerate line on the dateline is covered by any
                // document edge pinned to the opposite representation
                let opposite = -query.min_x;
                clauses.push(SpatialPredicate::or(vec![
                    SpatialPredicate::eq(f.min_x(), opposite),
                    SpatialPredicate::eq(f.max_x(), opposite),
                ]));
            }
            SpatialPredicate::or(clauses)
        } else {
            SpatialPredicate::and(vec![
                SpatialPredicate::lte(f.min_x(), query.min_x),
                SpatialPredicate::gte(f.max_x(), query.max_x),
            ])
        };

        SpatialPredicate::and(vec![x, y])
    }

    /// Indexed box lies inside the query box.
    fn make_within(&self, query: &BBox) -> SpatialPredicate {
        let f = &self.fields;
        let y = SpatialPredicate::and(vec![
            SpatialPredicate::gte(f.min_y(), query.min_y),
            SpatialPredicate::lte(f.max_y(), query.max_y),
        ]);

        if self.geo && query.min_x == -180.0 && query.max_x == 180.0 {
            // the query spans every longitude
            return y;
        }

        let x = if self.geo && query.crosses_dateline() {
            SpatialPredicate::or(vec![
                // a plain document fits inside either remnant of the query
                SpatialPredicate::and(vec![
                    SpatialPredicate::xdl(f.crosses_dateline(), false),
                    SpatialPredicate::or(vec![
                        SpatialPredicate::and(vec![
                            SpatialPredicate::gte(f.min_x(), query.min_x),
                            SpatialPredicate::lte(f.max_x(), 180.0),
                        ]),
                        SpatialPredicate::and(vec![
                            SpatialPredicate::gte(f.min_x(), -180.0),
                            SpatialPredicate::lte(f.max_x(), query.max_x),
                        ]),
                    ]),
                ]),
                // a crossing document fits only inside a crossing query
                SpatialPredicate::and(vec![
                    SpatialPredicate::xdl(f.crosses_dateline(), true),
                    SpatialPredicate::gte(f.min_x(), query.min_x),
                    SpatialPredicate::lte(f.max_x(), query.max_x),
                ]),
            ])
        } else if self.geo {
            let mut clauses = vec![SpatialPredicate::and(vec![
                SpatialPredicate::xdl(f.crosses_dateline(), false),
                SpatialPredicate::gte(f.min_x(), query.min_x),
                SpatialPredicate::lte(f.max_x(), query.max_x),
            ])];
            // a degenerate document pinned to the opposite dateline edge
            // is the same line, hence within
            if query.min_x == -180.0 {
                clauses.push(SpatialPredicate::and(vec![
                    SpatialPredicate::eq(f.min_x(), 180.0),
                    SpatialPredicate::eq(f.max_x(), 180.0),
                ]));
            }
            if query.max_x == 180.0 {
                clauses.push(SpatialPredicate::and(vec![
                    SpatialPredicate::eq(f.min_x(), -180.0),
                    SpatialPredicate::eq(f.max_x(), -180.0),
                ]));
            }
            if clauses.len() == 1 {
                clauses.remove(0)
            } else {
                SpatialPredicate::or(clauses)
            }
        } else {
            SpatialPredicate::and(vec![
                SpatialPredicate::gte(f.min_x(), query.min_x),
                SpatialPredicate::lte(f.max_x(), query.max_x),
            ])
        };

        SpatialPredicate::and(vec![x, y])
    }

    /// The boxes share no point on either axis.
    fn make_disjoint(&self, query: &BBox) -> SpatialPredicate {
        let f = &self.fields;
        let y = SpatialPredicate::or(vec![
            SpatialPredicate::gt(f.min_y(), query.max_y),
            SpatialPredicate::lt(f.max_y(), query.min_y),
        ]);

        let x = if self.geo && query.crosses_dateline() {
            // a crossing document always shares the dateline with a
            // crossing query; only a plain document in the uncovered
            // middle band can be disjoint
            SpatialPredicate::and(vec![
                SpatialPredicate::xdl(f.crosses_dateline(), false),
                SpatialPredicate::gt(f.min_x(), query.max_x),
                SpatialPredicate::lt(f.max_x(), query.min_x),
            ])
        } else {
            let mut right_of = SpatialPredicate::gt(f.min_x(), query.max_x);
            let mut left_of = SpatialPredicate::lt(f.max_x(), query.min_x);
            if self.geo && query.min_x == -180.0 {
                // a document ending exactly on the dateline touches the
                // query's left edge through the wrap
                right_of =
                    SpatialPredicate::and_not(right_of, SpatialPredicate::eq(f.max_x(), 180.0));
            }
            if self.geo && query.max_x == 180.0 {
                left_of =
                    SpatialPredicate::and_not(left_of, SpatialPredicate::eq(f.min_x(), -180.0));
            }
            let plain = SpatialPredicate::and(vec![
                SpatialPredicate::xdl(f.crosses_dateline(), false),
                SpatialPredicate::or(vec![right_of, left_of]),
            ]);
            if self.geo {
                // a crossing document is disjoint only when both of its
                // arcs clear the query
                SpatialPredicate::or(vec![
                    plain,
                    SpatialPredicate::and(vec![
                        SpatialPredicate::xdl(f.crosses_dateline(), true),
                        SpatialPredicate::gt(f.min_x(), query.max_x),
                        SpatialPredicate::lt(f.max_x(), query.min_x),
                    ]),
                ])
            } else {
                plain
            }
        };

        SpatialPredicate::or(vec![x, y])
    }

    /// Negation of disjoint, guarded by an always-true existence clause so
    /// a host index never sees a tree made of a lone negation.
    fn make_intersects(&self, query: &BBox) -> SpatialPredicate {
        let f = &self.fields;
        let exists = SpatialPredicate::or(vec![
            SpatialPredicate::xdl(f.crosses_dateline(), true),
            SpatialPredicate::xdl(f.crosses_dateline(), false),
        ]);
        SpatialPredicate::and_not(exists, self.make_disjoint(query))
    }

    /// Exact equality on all four numeric sub-fields.
    fn make_equals(&self, query: &BBox) -> SpatialPredicate {
        let f = &self.fields;
        SpatialPredicate::and(vec![
            SpatialPredicate::eq(f.min_x(), query.min_x),
            SpatialPredicate::eq(f.max_x(), query.max_x),
            SpatialPredicate::eq(f.min_y(), query.min_y),
            SpatialPredicate::eq(f.max_y(), query.max_y),
        ])
    }
}
