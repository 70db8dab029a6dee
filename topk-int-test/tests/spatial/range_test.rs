use rand::Rng;
use topk_int_test::test_util::{
    brute_force_range, create_spatial_test_context, random_box, run_test,
};
use topk_spatial::{range_3d, Point, QueryBox, WeightRange};

#[test]
fn test_range_matches_brute_force() {
    run_test(11, create_spatial_test_context, |ctx| {
        let mut rng = ctx.rng();
        for _ in 0..60 {
            let query = random_box(&mut rng, ctx.side());
            let a = rng.random_range(0..220);
            let b = rng.random_range(0..220);
            let range = WeightRange::new(a.min(b), a.max(b));

            let mut points: Vec<Point> = range_3d(ctx.treap(), query, range)
                .map(|hit| hit.point)
                .collect();
            points.sort();
            let expected: Vec<Point> = brute_force_range(ctx.points(), &query, range)
                .into_iter()
                .map(|p| p.point)
                .collect();
            assert_eq!(points, expected, "query {} range {:?}", query, range);
        }
        Ok(())
    })
}

#[test]
fn test_range_hits_respect_bounds() {
    run_test(12, create_spatial_test_context, |ctx| {
        let range = WeightRange::new(50, 60);
        let hits: Vec<_> = range_3d(ctx.treap(), QueryBox::everything(), range).collect();
        assert!(hits.iter().all(|h| range.contains(h.weight)));
        Ok(())
    })
}

#[test]
fn test_range_above_every_weight_is_empty() {
    run_test(13, create_spatial_test_context, |ctx| {
        let range = WeightRange::new(10_000, u64::MAX);
        assert_eq!(range_3d(ctx.treap(), QueryBox::everything(), range).count(), 0);
        Ok(())
    })
}

#[test]
fn test_inverted_range_is_empty() {
    run_test(14, create_spatial_test_context, |ctx| {
        let range = WeightRange::new(100, 10);
        assert!(!range.is_valid());
        assert_eq!(range_3d(ctx.treap(), QueryBox::everything(), range).count(), 0);
        Ok(())
    })
}
