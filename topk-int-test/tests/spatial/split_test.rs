use rand::Rng;
use topk_int_test::test_util::{
    brute_force_top_k, create_spatial_test_context, random_box, run_test,
};
use topk_spatial::{top_k, K3Treap, Point, SpatialHit, TopKCursor, TopKIterator};

fn sorted_points(hits: &[SpatialHit]) -> Vec<Point> {
    let mut points: Vec<Point> = hits.iter().map(|h| h.point).collect();
    points.sort();
    points
}

fn assert_non_increasing(hits: &[SpatialHit]) {
    assert!(hits.windows(2).all(|w| w[0].weight >= w[1].weight));
}

fn collect_split2(iter: TopKIterator<'_, K3Treap>, depth: u32, out: &mut Vec<SpatialHit>) {
    if depth == 0 || iter.done() {
        out.extend(iter);
        return;
    }
    let [lower, upper] = iter.split2();
    collect_split2(lower, depth - 1, out);
    collect_split2(upper, depth - 1, out);
}

#[test]
fn test_split_partitions_remaining_results() {
    run_test(31, create_spatial_test_context, |ctx| {
        let mut rng = ctx.rng();
        for _ in 0..60 {
            let query = random_box(&mut rng, ctx.side());
            let mut iter = top_k(ctx.treap(), query);
            for _ in 0..rng.random_range(0..4) {
                if !iter.done() {
                    iter.advance();
                }
            }
            if iter.done() {
                continue;
            }

            let z = iter.get().point.z();
            let expected: Vec<SpatialHit> = iter.clone().collect();
            let (lower, upper) = iter.split();

            let lower: Vec<SpatialHit> = lower.collect();
            let upper: Vec<SpatialHit> = upper.map(|u| u.collect()).unwrap_or_default();
            assert_eq!(lower.first(), expected.first());
            assert!(lower.iter().all(|h| h.point.z() <= z));
            assert!(upper.iter().all(|h| h.point.z() > z));
            assert_non_increasing(&lower);
            assert_non_increasing(&upper);

            let mut both = lower;
            both.extend(upper);
            assert_eq!(sorted_points(&both), sorted_points(&expected), "query {}", query);
        }
        Ok(())
    })
}

#[test]
fn test_split2_partitions_at_midpoint() {
    run_test(32, create_spatial_test_context, |ctx| {
        let mut rng = ctx.rng();
        for _ in 0..60 {
            let query = random_box(&mut rng, ctx.side());
            let iter = top_k(ctx.treap(), query);
            if iter.done() {
                continue;
            }

            let mid = iter.split_point();
            let expected: Vec<SpatialHit> = iter.clone().collect();
            let [lower, upper] = iter.split2();

            let lower: Vec<SpatialHit> = lower.collect();
            let upper: Vec<SpatialHit> = upper.collect();
            assert!(lower.iter().all(|h| h.point.z() <= mid));
            assert!(upper.iter().all(|h| h.point.z() > mid));
            assert_non_increasing(&lower);
            assert_non_increasing(&upper);

            let mut both = lower;
            both.extend(upper);
            assert_eq!(sorted_points(&both), sorted_points(&expected), "query {}", query);
        }
        Ok(())
    })
}

#[test]
fn test_recursive_split2_covers_the_box() {
    run_test(33, create_spatial_test_context, |ctx| {
        let mut rng = ctx.rng();
        for _ in 0..20 {
            let query = random_box(&mut rng, ctx.side());
            let mut hits = Vec::new();
            collect_split2(top_k(ctx.treap(), query), 5, &mut hits);

            let expected: Vec<Point> = {
                let mut points: Vec<Point> = brute_force_top_k(ctx.points(), &query)
                    .into_iter()
                    .map(|p| p.point)
                    .collect();
                points.sort();
                points
            };
            assert_eq!(sorted_points(&hits), expected, "query {}", query);
        }
        Ok(())
    })
}
