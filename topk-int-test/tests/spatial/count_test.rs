use topk_int_test::test_util::{
    brute_force_count, create_spatial_test_context, create_spatial_test_context_with, random_box,
    run_test,
};
use topk_spatial::{count, subtree_size, top_k, QueryBox, SpatialIndex};

#[test]
fn test_count_matches_brute_force_and_top_k() {
    run_test(21, create_spatial_test_context, |ctx| {
        let mut rng = ctx.rng();
        for _ in 0..80 {
            let query = random_box(&mut rng, ctx.side());
            let counted = count(ctx.treap(), &query);
            assert_eq!(counted, brute_force_count(ctx.points(), &query), "query {}", query);
            assert_eq!(counted, top_k(ctx.treap(), query).count() as u64, "query {}", query);
        }
        Ok(())
    })
}

#[test]
fn test_count_of_everything_is_size() {
    run_test(
        22,
        |seed| create_spatial_test_context_with(seed, 250, 20, 3),
        |ctx| {
            let treap = ctx.treap();
            assert_eq!(count(treap, &QueryBox::everything()), treap.size());
            assert_eq!(subtree_size(treap, &treap.root()), treap.size());
            Ok(())
        },
    )
}
