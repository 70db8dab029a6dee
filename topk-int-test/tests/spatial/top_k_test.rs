use topk::errors::TopKResult;
use topk_int_test::test_util::{
    brute_force_top_k, create_spatial_test_context, create_spatial_test_context_with, random_box,
    run_test, SpatialTestContext,
};
use topk_spatial::{top_k, Point, QueryBox, TopKCursor};

fn check_against_brute_force(ctx: &SpatialTestContext, queries: usize) -> TopKResult<()> {
    let mut rng = ctx.rng();
    for _ in 0..queries {
        let query = random_box(&mut rng, ctx.side());
        let expected = brute_force_top_k(ctx.points(), &query);

        let hits: Vec<_> = top_k(ctx.treap(), query).collect();
        assert_eq!(hits.len(), expected.len(), "query {}", query);

        let weights: Vec<u64> = hits.iter().map(|h| h.weight).collect();
        let expected_weights: Vec<u64> = expected.iter().map(|p| p.weight).collect();
        assert_eq!(weights, expected_weights, "query {}", query);

        let mut points: Vec<Point> = hits.iter().map(|h| h.point).collect();
        let mut expected_points: Vec<Point> = expected.iter().map(|p| p.point).collect();
        points.sort();
        expected_points.sort();
        assert_eq!(points, expected_points, "query {}", query);
    }
    Ok(())
}

#[test]
fn test_top_k_matches_brute_force() {
    run_test(
        1,
        create_spatial_test_context,
        |ctx| check_against_brute_force(&ctx, 60),
    )
}

#[test]
fn test_top_k_with_branching_factor_three() {
    run_test(
        2,
        |seed| create_spatial_test_context_with(seed, 300, 30, 3),
        |ctx| check_against_brute_force(&ctx, 40),
    )
}

#[test]
fn test_top_k_with_branching_factor_four_sparse() {
    run_test(
        3,
        |seed| create_spatial_test_context_with(seed, 200, 1 << 12, 4),
        |ctx| check_against_brute_force(&ctx, 40),
    )
}

#[test]
fn test_top_k_prefix_is_heaviest() {
    run_test(4, create_spatial_test_context, |ctx| {
        let everything = QueryBox::everything();
        let expected = brute_force_top_k(ctx.points(), &everything);
        for k in [1, 5, 25] {
            let weights: Vec<u64> = top_k(ctx.treap(), everything)
                .take(k)
                .map(|h| h.weight)
                .collect();
            let expected: Vec<u64> = expected.iter().take(k).map(|p| p.weight).collect();
            assert_eq!(weights, expected);
        }
        Ok(())
    })
}

#[test]
fn test_every_hit_is_inside_the_box() {
    run_test(5, create_spatial_test_context, |ctx| {
        let mut rng = ctx.rng();
        for _ in 0..30 {
            let query = random_box(&mut rng, ctx.side());
            assert!(top_k(ctx.treap(), query).all(|h| query.contains_point(&h.point)));
        }
        Ok(())
    })
}

#[test]
fn test_clone_mid_query_resumes_independently() {
    run_test(6, create_spatial_test_context, |ctx| {
        let query = QueryBox::new((0, 0, 0), (ctx.side() / 2, ctx.side(), ctx.side()));
        let mut iter = top_k(ctx.treap(), query);
        for _ in 0..3 {
            if !iter.done() {
                iter.advance();
            }
        }

        let snapshot = iter.clone();
        let rest: Vec<_> = iter.collect();
        let replay: Vec<_> = snapshot.collect();
        assert_eq!(rest, replay);
        Ok(())
    })
}
