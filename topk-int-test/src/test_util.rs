use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::any::Any;
use std::collections::HashSet;
use std::env;
use std::panic::UnwindSafe;
use std::sync::Arc;
use std::time::Instant;
use topk::errors::{ErrorKind, TopKError, TopKResult};
use topk_spatial::{K3Treap, Point, QueryBox, TreapConfig, WeightRange, WeightedPoint};
use topk_text::{DocumentHit, FlatIndex, FlatIndexBuilder, TextIndexConfig};

/// Environment variable overriding the seed of every test context.
pub const SEED_VAR: &str = "TOPK_TEST_SEED";

/// Document separator of text test contexts.
pub const SEPARATOR: u8 = b'$';

/// Runs a test against a context built from `seed`.
///
/// The seed can be overridden with `TOPK_TEST_SEED`; it is printed with the
/// failure so a failing run can be reproduced.
pub fn run_test<C, B, T>(seed: u64, before: B, test: T)
where
    B: FnOnce(u64) -> TopKResult<C> + UnwindSafe,
    T: FnOnce(C) -> TopKResult<()> + UnwindSafe,
{
    let seed = env::var(SEED_VAR)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(seed);
    let start_time = Instant::now();

    let result = std::panic::catch_unwind(move || {
        let ctx = before(seed).map_err(|e| format!("Before run failed: {:?}", e))?;
        test(ctx).map_err(|e| format!("Test failed: {:?}", e))
    });

    let error = match result {
        Ok(Ok(())) => return,
        Ok(Err(e)) => e,
        Err(panic_err) => format!("Panic: {}", panic_message(panic_err.as_ref())),
    };

    eprintln!("\n==================== TEST FAILED ====================");
    eprintln!("Seed: {} (rerun with {}={})", seed, SEED_VAR, seed);
    eprintln!("Elapsed: {:?}", start_time.elapsed());
    eprintln!("Error: {}", error);
    eprintln!("=====================================================\n");

    panic!("Test failed with seed {}. Last error: {}", seed, error);
}

fn panic_message(panic_err: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_err.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_err.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// A treap over random points together with the points it was built from.
#[derive(Clone)]
pub struct SpatialTestContext {
    seed: u64,
    side: u64,
    points: Arc<Vec<WeightedPoint>>,
    treap: Arc<K3Treap>,
}

impl SpatialTestContext {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Coordinates of the points lie in `[0, side)`.
    pub fn side(&self) -> u64 {
        self.side
    }

    pub fn points(&self) -> &[WeightedPoint] {
        &self.points
    }

    pub fn treap(&self) -> &K3Treap {
        &self.treap
    }

    /// A generator for queries, independent from the one that drew the
    /// points.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(0x9e37_79b9))
    }
}

pub fn create_spatial_test_context(seed: u64) -> TopKResult<SpatialTestContext> {
    create_spatial_test_context_with(seed, 400, 48, 2)
}

pub fn create_spatial_test_context_with(
    seed: u64,
    count: usize,
    side: u64,
    branching_factor: u64,
) -> TopKResult<SpatialTestContext> {
    let mut rng = StdRng::seed_from_u64(seed);
    let points = random_points(&mut rng, count, side, 200);
    let config = TreapConfig::new().with_branching_factor(branching_factor);
    let treap = K3Treap::build(points.clone(), &config).map_err(|e| {
        TopKError::new_with_cause(
            "Failed to build test treap",
            ErrorKind::IndexBuildFailed,
            e.into(),
        )
    })?;

    Ok(SpatialTestContext {
        seed,
        side,
        points: Arc::new(points),
        treap: Arc::new(treap),
    })
}

/// Draws `count` distinct points with coordinates in `[0, side)` and
/// weights in `[0, max_weight)`. Weights repeat on purpose.
pub fn random_points(
    rng: &mut StdRng,
    count: usize,
    side: u64,
    max_weight: u64,
) -> Vec<WeightedPoint> {
    let capacity = side.saturating_pow(3);
    assert!(
        (count as u64) <= capacity,
        "{} distinct points do not fit a side of {}",
        count,
        side
    );

    let mut seen = HashSet::with_capacity(count);
    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let point = Point::new(
            rng.random_range(0..side),
            rng.random_range(0..side),
            rng.random_range(0..side),
        );
        if seen.insert(point) {
            points.push(WeightedPoint::new(point, rng.random_range(0..max_weight)));
        }
    }
    points
}

/// A random box that may stick out of `[0, side)` or be degenerate.
pub fn random_box(rng: &mut StdRng, side: u64) -> QueryBox {
    let mut min = [0; 3];
    let mut max = [0; 3];
    for axis in 0..3 {
        let a = rng.random_range(0..side + side / 4);
        let b = rng.random_range(0..side + side / 4);
        min[axis] = a.min(b);
        max[axis] = a.max(b);
    }
    QueryBox::new(min, max)
}

/// Points inside `query`, heaviest first.
pub fn brute_force_top_k(points: &[WeightedPoint], query: &QueryBox) -> Vec<WeightedPoint> {
    let mut inside: Vec<WeightedPoint> = points
        .iter()
        .filter(|p| query.contains_point(&p.point))
        .copied()
        .collect();
    inside.sort_by(|a, b| b.weight.cmp(&a.weight).then(a.point.cmp(&b.point)));
    inside
}

pub fn brute_force_range(
    points: &[WeightedPoint],
    query: &QueryBox,
    range: WeightRange,
) -> Vec<WeightedPoint> {
    let mut inside: Vec<WeightedPoint> = points
        .iter()
        .filter(|p| query.contains_point(&p.point) && range.contains(p.weight))
        .copied()
        .collect();
    inside.sort_by_key(|p| p.point);
    inside
}

pub fn brute_force_count(points: &[WeightedPoint], query: &QueryBox) -> u64 {
    points
        .iter()
        .filter(|p| query.contains_point(&p.point))
        .count() as u64
}

/// A flat document index over random documents together with the
/// documents it was built from.
#[derive(Clone)]
pub struct TextTestContext {
    seed: u64,
    documents: Arc<Vec<(Vec<u8>, u64)>>,
    index: Arc<FlatIndex<u8>>,
}

impl TextTestContext {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Tokens and weight of every document, by document id.
    pub fn documents(&self) -> &[(Vec<u8>, u64)] {
        &self.documents
    }

    pub fn index(&self) -> &FlatIndex<u8> {
        &self.index
    }

    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(0x7f4a_7c15))
    }
}

pub fn create_text_test_context(seed: u64) -> TopKResult<TextTestContext> {
    create_text_test_context_with(seed, 150, b'e')
}

/// Random documents of 5 to 40 tokens drawn from `b'a'..=last_token`.
pub fn create_text_test_context_with(
    seed: u64,
    count: usize,
    last_token: u8,
) -> TopKResult<TextTestContext> {
    let mut rng = StdRng::seed_from_u64(seed);
    let documents: Vec<(Vec<u8>, u64)> = (0..count)
        .map(|_| {
            let length = rng.random_range(5..=40);
            let tokens = random_pattern(&mut rng, length, last_token);
            (tokens, rng.random_range(0..100))
        })
        .collect();

    let builder = documents
        .iter()
        .fold(FlatIndexBuilder::new(SEPARATOR), |builder, (tokens, weight)| {
            builder.document(tokens.clone(), *weight)
        });
    let index = builder.build(&TextIndexConfig::default()).map_err(|e| {
        TopKError::new_with_cause(
            "Failed to build test document index",
            ErrorKind::IndexBuildFailed,
            e.into(),
        )
    })?;

    Ok(TextTestContext {
        seed,
        documents: Arc::new(documents),
        index: Arc::new(index),
    })
}

pub fn random_pattern(rng: &mut StdRng, length: usize, last_token: u8) -> Vec<u8> {
    (0..length)
        .map(|_| rng.random_range(b'a'..=last_token))
        .collect()
}

/// Documents containing `pattern`, heaviest first, ties by document id.
pub fn brute_force_documents(documents: &[(Vec<u8>, u64)], pattern: &[u8]) -> Vec<DocumentHit> {
    let mut hits: Vec<DocumentHit> = documents
        .iter()
        .enumerate()
        .filter(|(_, (tokens, _))| {
            pattern.is_empty() || tokens.windows(pattern.len()).any(|w| w == pattern)
        })
        .map(|(id, (_, weight))| DocumentHit::new(id as u64, *weight))
        .collect();
    hits.sort_by(|a, b| b.weight.cmp(&a.weight).then(a.document.cmp(&b.document)));
    hits
}
