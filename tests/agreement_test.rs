//! The central correctness law: the compiled predicate tree evaluated
//! against a document's stored values must agree with the direct relate
//! algebra on the same pair of boxes, for every operation.

use graticule::context::{DistanceMode, SpatialContext};
use graticule::geometry::BBox;
use graticule::query::{BBoxFields, BBoxQueryCompiler, SpatialOperation};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const OPS: [SpatialOperation; 8] = [
    SpatialOperation::Intersects,
    SpatialOperation::IsWithin,
    SpatialOperation::Contains,
    SpatialOperation::IsDisjointTo,
    SpatialOperation::IsEqualTo,
    SpatialOperation::Overlaps,
    SpatialOperation::BBoxIntersects,
    SpatialOperation::BBoxWithin,
];

// multiples of 5 along X and 10 along Y hit the dateline, the poles and
// exact edge coincidences often
fn random_bbox(rng: &mut StdRng, ctx: &SpatialContext) -> BBox {
    let x1 = f64::from(rng.random_range(-36..=36) * 5);
    let x2 = f64::from(rng.random_range(-36..=36) * 5);
    let mut y1 = f64::from(rng.random_range(-9..=9) * 10);
    let mut y2 = f64::from(rng.random_range(-9..=9) * 10);
    if y1 > y2 {
        std::mem::swap(&mut y1, &mut y2);
    }
    ctx.make_bbox(x1, x2, y1, y2).unwrap()
}

#[test]
fn test_compiled_queries_agree_with_relate() {
    let ctx = SpatialContext::geodetic();
    let compiler = BBoxQueryCompiler::new(BBoxFields::new("geo"), &ctx);
    let mut rng = StdRng::seed_from_u64(0x6a70);

    for _ in 0..2000 {
        let query = random_bbox(&mut rng, &ctx);
        let doc = random_bbox(&mut rng, &ctx);
        let indexed = compiler.fields().index_value(&doc);
        for op in OPS {
            let tree = compiler.compile(op, &query).unwrap();
            assert_eq!(
                tree.matches(&indexed, compiler.fields()),
                op.evaluate(&doc, &query, &ctx),
                "{op:?} disagrees for doc {doc:?} vs query {query:?}"
            );
        }
    }
}

#[test]
fn test_cartesian_compiled_queries_agree_with_relate() {
    let ctx = SpatialContext::cartesian();
    let compiler = BBoxQueryCompiler::new(BBoxFields::new("plane"), &ctx);
    let mut rng = StdRng::seed_from_u64(0x6a71);

    for _ in 0..500 {
        let mut coords = [0.0; 4];
        for c in &mut coords {
            *c = f64::from(rng.random_range(-20..=20) * 25);
        }
        let (mut x1, mut x2, mut y1, mut y2) = (coords[0], coords[1], coords[2], coords[3]);
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
        }
        if y1 > y2 {
            std::mem::swap(&mut y1, &mut y2);
        }
        let query = ctx.make_bbox(x1, x2, y1, y2).unwrap();
        let doc = random_cartesian_bbox(&mut rng, &ctx);
        let indexed = compiler.fields().index_value(&doc);
        for op in OPS {
            let tree = compiler.compile(op, &query).unwrap();
            assert_eq!(
                tree.matches(&indexed, compiler.fields()),
                op.evaluate(&doc, &query, &ctx),
                "{op:?} disagrees for doc {doc:?} vs query {query:?}"
            );
        }
    }
}

fn random_cartesian_bbox(rng: &mut StdRng, ctx: &SpatialContext) -> BBox {
    let mut x1 = f64::from(rng.random_range(-20..=20) * 25);
    let mut x2 = f64::from(rng.random_range(-20..=20) * 25);
    let mut y1 = f64::from(rng.random_range(-20..=20) * 25);
    let mut y2 = f64::from(rng.random_range(-20..=20) * 25);
    if x1 > x2 {
        std::mem::swap(&mut x1, &mut x2);
    }
    if y1 > y2 {
        std::mem::swap(&mut y1, &mut y2);
    }
    ctx.make_bbox(x1, x2, y1, y2).unwrap()
}

#[test]
fn test_relate_symmetry() {
    let ctx = SpatialContext::geodetic();
    let mut rng = StdRng::seed_from_u64(0x5e77);
    for _ in 0..2000 {
        let a = random_bbox(&mut rng, &ctx);
        let b = random_bbox(&mut rng, &ctx);
        assert_eq!(
            a.relate(&b, &ctx).transpose(),
            b.relate(&a, &ctx),
            "transpose symmetry broken for {a:?} vs {b:?}"
        );
    }
}

#[test]
fn test_relate_rotation_invariance() {
    // the longitude axis has no privileged origin: rotating both operands
    // by the same amount must not change how they relate
    let ctx = SpatialContext::geodetic();
    let wrap_ctx = SpatialContext::builder(DistanceMode::Haversine)
        .norm_wrap_longitude(true)
        .build()
        .unwrap();
    let rotate = |bbox: &BBox, degrees: f64| -> BBox {
        if bbox.width() == 360.0 {
            return *bbox;
        }
        wrap_ctx
            .make_bbox(
                bbox.min_x + degrees,
                bbox.max_x + degrees,
                bbox.min_y,
                bbox.max_y,
            )
            .unwrap()
    };

    let mut rng = StdRng::seed_from_u64(0x0107);
    for _ in 0..2000 {
        let a = random_bbox(&mut rng, &ctx);
        let b = random_bbox(&mut rng, &ctx);
        let degrees = f64::from(rng.random_range(-72..=72) * 5);
        let relation = a.relate(&b, &ctx);
        assert_eq!(
            rotate(&a, degrees).relate(&rotate(&b, degrees), &ctx),
            relation,
            "rotation by {degrees} changed relate({a:?}, {b:?})"
        );
    }
}
