use rand::rngs::StdRng;
use rand::SeedableRng;
use topk::errors::TopKResult;
use topk_int_test::test_util::{
    create_text_test_context_with, random_box, random_pattern, random_points,
};
use topk_spatial::{count, range_3d, top_k, K3Treap, QueryBox, TreapConfig, WeightRange};

fn main() -> TopKResult<()> {
    colog::init();
    log::info!("Starting stress test...");

    let count_points = 1_000_000;
    let side = 1 << 16;
    let mut rng = StdRng::seed_from_u64(2024);
    let points = random_points(&mut rng, count_points, side, 1 << 20);

    let start = std::time::Instant::now();
    let treap = K3Treap::build(points, &TreapConfig::default())?;
    log::info!(
        "Built treap of {} points ({} levels) in {:?}",
        count_points,
        treap.height(),
        start.elapsed()
    );

    let queries: Vec<QueryBox> = (0..1000).map(|_| random_box(&mut rng, side)).collect();

    let start = std::time::Instant::now();
    let reported: usize = queries
        .iter()
        .map(|query| top_k(&treap, *query).take(10).count())
        .sum();
    log::info!(
        "Answered {} top-10 queries ({} results) in {:?}",
        queries.len(),
        reported,
        start.elapsed()
    );

    let start = std::time::Instant::now();
    let counted: u64 = queries.iter().map(|query| count(&treap, query)).sum();
    log::info!(
        "Counted {} points over {} boxes in {:?}",
        counted,
        queries.len(),
        start.elapsed()
    );

    let start = std::time::Instant::now();
    let in_range: usize = queries
        .iter()
        .take(100)
        .map(|query| range_3d(&treap, *query, WeightRange::new(1 << 19, (1 << 19) + 1024)).count())
        .sum();
    log::info!(
        "Found {} points by weight range in {:?}",
        in_range,
        start.elapsed()
    );

    let start = std::time::Instant::now();
    let ctx = create_text_test_context_with(2024, 20_000, b'h')?;
    log::info!(
        "Built document index of {} documents ({} tokens) in {:?}",
        ctx.index().doc_cnt(),
        ctx.index().word_cnt(),
        start.elapsed()
    );

    let mut rng = ctx.rng();
    let patterns: Vec<Vec<u8>> = (0..1000)
        .map(|i| random_pattern(&mut rng, 1 + i % 4, b'h'))
        .collect();
    let start = std::time::Instant::now();
    let documents: usize = patterns
        .iter()
        .map(|pattern| ctx.index().top_down(pattern, false, false).take(10).count())
        .sum();
    log::info!(
        "Answered {} top-10 document queries ({} documents) in {:?}",
        patterns.len(),
        documents,
        start.elapsed()
    );

    Ok(())
}
