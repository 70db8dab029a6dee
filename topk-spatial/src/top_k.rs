//! Best-first top-k search over a [`SpatialIndex`].
//!
//! The frontier is a max-heap of regions keyed by their summary weight.
//! Because a region's `max_weight` bounds everything below it and only
//! regions overlapping the query are kept, the first region popped whose
//! `max_point` lies in the query box carries the heaviest unreported point.
//! Results therefore come out in exact non-increasing weight order.

use topk::collections::CowPriorityQueue;
use topk::cursor::{exhausted, TopKCursor};

use crate::geometry::{point_in_box, region_overlaps_box};
use crate::point::Point;
use crate::query_box::QueryBox;
use crate::region::Region;
use crate::spatial_index::SpatialIndex;

/// One result of a top-k query: the point, its weight and the region that
/// stores it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SpatialHit {
    pub point: Point,
    pub weight: u64,
    pub region: Region,
}

/// Lazy iterator over the points of a query box in decreasing weight order.
///
/// Built positioned on its first result. Cloning is O(1): the frontier is a
/// copy-on-write heap, so clones share it until one of them advances.
///
/// ```rust
/// use topk_spatial::{top_k, K3Treap, QueryBox, TreapConfig, WeightedPoint};
///
/// let treap = K3Treap::build(
///     vec![
///         WeightedPoint::new((0, 0, 0), 9),
///         WeightedPoint::new((1, 1, 1), 5),
///         WeightedPoint::new((2, 2, 2), 7),
///         WeightedPoint::new((3, 0, 0), 1),
///     ],
///     &TreapConfig::default(),
/// )?;
///
/// let weights: Vec<u64> = top_k(&treap, QueryBox::new((0, 0, 0), (2, 2, 2)))
///     .map(|hit| hit.weight)
///     .collect();
/// assert_eq!(weights, vec![9, 7, 5]);
/// # Ok::<(), topk_spatial::SpatialError>(())
/// ```
pub struct TopKIterator<'a, I: SpatialIndex + ?Sized> {
    index: &'a I,
    frontier: CowPriorityQueue<Region>,
    current: Option<SpatialHit>,
    query: QueryBox,
}

impl<'a, I: SpatialIndex + ?Sized> Clone for TopKIterator<'a, I> {
    fn clone(&self) -> Self {
        TopKIterator {
            index: self.index,
            frontier: self.frontier.clone(),
            current: self.current,
            query: self.query,
        }
    }
}

impl<'a, I: SpatialIndex + ?Sized> TopKIterator<'a, I> {
    /// Starts a query over `index` restricted to `query`.
    ///
    /// `query` must satisfy `min <= max` on every axis; this is not checked.
    pub fn new(index: &'a I, query: QueryBox) -> Self {
        let mut iter = TopKIterator {
            index,
            frontier: CowPriorityQueue::new(),
            current: None,
            query,
        };
        if index.size() > 0 {
            iter.frontier.push(index.root());
            iter.step();
        }
        iter
    }

    /// The query box this iterator is restricted to.
    pub fn query(&self) -> &QueryBox {
        &self.query
    }

    /// Number of regions waiting in the frontier.
    pub fn queue_size(&self) -> usize {
        self.frontier.len()
    }

    /// Midpoint of the third-axis range, used by [`TopKIterator::split2`].
    pub fn split_point(&self) -> u64 {
        let (lo, hi) = (self.query.min.z(), self.query.max.z());
        lo + (hi - lo) / 2
    }

    /// Bisects the remaining work at the z-coordinate of the current result.
    ///
    /// The lower half covers `z` in `[min.z, current.z]` and keeps the current
    /// result; the upper half covers `[current.z + 1, max.z]` and is advanced
    /// to its own first result. The upper half is `None` when that range is
    /// empty. Each half continues from this iterator's frontier, so together
    /// they produce exactly the current result plus everything this iterator
    /// would still have produced. Order holds within each half only.
    ///
    /// # Panics
    ///
    /// Panics if the iterator is done.
    pub fn split(&self) -> (Self, Option<Self>) {
        let Some(hit) = self.current else {
            exhausted("TopKIterator");
        };
        let z = hit.point.z();

        let mut lower = self.clone();
        lower.query = self.query.with_z_range(self.query.min.z(), z);

        let upper = (z < self.query.max.z()).then(|| {
            let mut upper = self.clone();
            upper.query = self.query.with_z_range(z + 1, self.query.max.z());
            upper.current = None;
            upper.step();
            upper
        });
        (lower, upper)
    }

    /// Bisects the remaining work at [`TopKIterator::split_point`].
    ///
    /// The half that contains the current result keeps it; the other half is
    /// advanced to its own first result. A half whose z-range is empty comes
    /// back already done.
    ///
    /// # Panics
    ///
    /// Panics if the iterator is done.
    pub fn split2(&self) -> [Self; 2] {
        let Some(hit) = self.current else {
            exhausted("TopKIterator");
        };
        let mid = self.split_point();
        let z = hit.point.z();

        let mut lower = self.clone();
        lower.query = self.query.with_z_range(self.query.min.z(), mid);
        if z > mid {
            lower.current = None;
            lower.step();
        }

        let mut upper = self.clone();
        if mid < self.query.max.z() {
            upper.query = self.query.with_z_range(mid + 1, self.query.max.z());
            if z <= mid {
                upper.current = None;
                upper.step();
            }
        } else {
            upper.frontier.clear();
            upper.current = None;
        }
        [lower, upper]
    }

    fn step(&mut self) {
        self.current = None;
        let powers = self.index.powers();
        while let Some(region) = self.frontier.pop() {
            if !region_overlaps_box(&self.query, &region, powers) {
                continue;
            }
            for child in self.index.children(&region) {
                if region_overlaps_box(&self.query, &child, powers) {
                    self.frontier.push(child);
                }
            }
            if point_in_box(&region.max_point, &self.query) {
                self.current = Some(SpatialHit {
                    point: region.max_point,
                    weight: region.max_weight,
                    region,
                });
                break;
            }
        }
    }
}

impl<'a, I: SpatialIndex + ?Sized> TopKCursor for TopKIterator<'a, I> {
    type Item = SpatialHit;

    fn done(&self) -> bool {
        self.current.is_none()
    }

    fn get(&self) -> SpatialHit {
        match self.current {
            Some(hit) => hit,
            None => exhausted("TopKIterator"),
        }
    }

    fn advance(&mut self) {
        if self.current.is_none() {
            exhausted("TopKIterator");
        }
        self.step();
    }
}

impl<'a, I: SpatialIndex + ?Sized> Iterator for TopKIterator<'a, I> {
    type Item = SpatialHit;

    fn next(&mut self) -> Option<SpatialHit> {
        let hit = self.current?;
        self.step();
        Some(hit)
    }
}

/// Returns an iterator over the points in `query`, heaviest first.
pub fn top_k<I: SpatialIndex + ?Sized>(index: &I, query: QueryBox) -> TopKIterator<'_, I> {
    TopKIterator::new(index, query)
}
