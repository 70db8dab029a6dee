use topk_spatial::{
    count, range_3d, top_k, K3Treap, QueryBox, SpatialHit, TopKCursor, TreapConfig, WeightRange,
    WeightedPoint,
};

fn five_points() -> K3Treap {
    K3Treap::build(
        vec![
            WeightedPoint::new((0, 0, 0), 9),
            WeightedPoint::new((1, 1, 1), 5),
            WeightedPoint::new((2, 2, 2), 7),
            WeightedPoint::new((3, 0, 0), 1),
            WeightedPoint::new((0, 3, 0), 3),
        ],
        &TreapConfig::default(),
    )
    .unwrap()
}

#[test]
fn test_five_points_top_k_and_count() {
    let treap = five_points();
    let query = QueryBox::new((0, 0, 0), (2, 2, 2));
    let weights: Vec<u64> = top_k(&treap, query).map(|hit| hit.weight).collect();
    assert_eq!(weights, vec![9, 7, 5]);
    assert_eq!(count(&treap, &query), 3);
}

#[test]
fn test_box_outside_universe() {
    let treap = five_points();
    let query = QueryBox::new((100, 100, 100), (200, 200, 200));
    assert!(top_k(&treap, query).done());
    assert_eq!(count(&treap, &query), 0);
}

#[test]
fn test_weight_range_five_to_seven() {
    let treap = five_points();
    let mut weights: Vec<u64> = range_3d(&treap, QueryBox::everything(), WeightRange::new(5, 7))
        .map(|hit| hit.weight)
        .collect();
    weights.sort();
    assert_eq!(weights, vec![5, 7]);
}

#[test]
fn test_boxed_cursor_protocol() {
    let treap = five_points();
    let mut cursor: Box<dyn TopKCursor<Item = SpatialHit> + '_> =
        Box::new(top_k(&treap, QueryBox::new((0, 0, 0), (2, 2, 2))));
    let mut weights = Vec::new();
    while !cursor.done() {
        weights.push(cursor.get().weight);
        cursor.advance();
    }
    assert_eq!(weights, vec![9, 7, 5]);
}
