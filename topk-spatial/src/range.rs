//! Weight-range reporting over a [`SpatialIndex`].
//!
//! Like the top-k search, but only points whose weight lies in a closed
//! range are reported and the output order is unspecified. Frontier entries
//! remember whether their cuboid is already known to lie inside the query
//! box, in which case descendants skip the geometry tests.

use std::cmp::Ordering;

use topk::collections::CowPriorityQueue;
use topk::cursor::{exhausted, TopKCursor};

use crate::geometry::{point_in_box, region_inside_box, region_overlaps_box};
use crate::point::{Point, WeightRange};
use crate::query_box::QueryBox;
use crate::region::Region;
use crate::spatial_index::SpatialIndex;

/// A point reported by a [`RangeIterator`] with its weight.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RangeHit {
    pub point: Point,
    pub weight: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct RangeEntry {
    region: Region,
    contained: bool,
}

impl Ord for RangeEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.region
            .cmp(&other.region)
            .then_with(|| self.contained.cmp(&other.contained))
    }
}

impl PartialOrd for RangeEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lazy iterator over every point in a query box whose weight falls in a
/// [`WeightRange`].
///
/// Regions whose `max_weight` is below the range minimum are never queued.
pub struct RangeIterator<'a, I: SpatialIndex + ?Sized> {
    index: &'a I,
    frontier: CowPriorityQueue<RangeEntry>,
    current: Option<RangeHit>,
    query: QueryBox,
    range: WeightRange,
}

impl<'a, I: SpatialIndex + ?Sized> Clone for RangeIterator<'a, I> {
    fn clone(&self) -> Self {
        RangeIterator {
            index: self.index,
            frontier: self.frontier.clone(),
            current: self.current,
            query: self.query,
            range: self.range,
        }
    }
}

impl<'a, I: SpatialIndex + ?Sized> RangeIterator<'a, I> {
    /// Starts a range query. Neither `query` nor `range` is validated.
    pub fn new(index: &'a I, query: QueryBox, range: WeightRange) -> Self {
        let mut iter = RangeIterator {
            index,
            frontier: CowPriorityQueue::new(),
            current: None,
            query,
            range,
        };
        if index.size() > 0 {
            iter.enqueue(index.root(), false);
            iter.step();
        }
        iter
    }

    pub fn query(&self) -> &QueryBox {
        &self.query
    }

    pub fn range(&self) -> &WeightRange {
        &self.range
    }

    #[inline]
    fn enqueue(&mut self, region: Region, contained: bool) {
        if region.max_weight >= self.range.min {
            self.frontier.push(RangeEntry { region, contained });
        }
    }

    fn step(&mut self) {
        self.current = None;
        let index = self.index;
        let powers = index.powers();
        while let Some(RangeEntry { region, contained }) = self.frontier.pop() {
            if contained {
                for child in index.children(&region) {
                    self.enqueue(child, true);
                }
                if region.max_weight <= self.range.max {
                    self.current = Some(RangeHit {
                        point: region.max_point,
                        weight: region.max_weight,
                    });
                    break;
                }
            } else if region_inside_box(&self.query, &region, powers) {
                self.frontier.push(RangeEntry {
                    region,
                    contained: true,
                });
            } else if region_overlaps_box(&self.query, &region, powers) {
                for child in index.children(&region) {
                    self.enqueue(child, false);
                }
                if point_in_box(&region.max_point, &self.query)
                    && region.max_weight <= self.range.max
                {
                    self.current = Some(RangeHit {
                        point: region.max_point,
                        weight: region.max_weight,
                    });
                    break;
                }
            }
        }
    }
}

impl<'a, I: SpatialIndex + ?Sized> TopKCursor for RangeIterator<'a, I> {
    type Item = RangeHit;

    fn done(&self) -> bool {
        self.current.is_none()
    }

    fn get(&self) -> RangeHit {
        match self.current {
            Some(hit) => hit,
            None => exhausted("RangeIterator"),
        }
    }

    fn advance(&mut self) {
        if self.current.is_none() {
            exhausted("RangeIterator");
        }
        self.step();
    }
}

impl<'a, I: SpatialIndex + ?Sized> Iterator for RangeIterator<'a, I> {
    type Item = RangeHit;

    fn next(&mut self) -> Option<RangeHit> {
        let hit = self.current?;
        self.step();
        Some(hit)
    }
}

/// Returns an iterator over the points in `query` with weight in `range`.
pub fn range_3d<I: SpatialIndex + ?Sized>(
    index: &I,
    query: QueryBox,
    range: WeightRange,
) -> RangeIterator<'_, I> {
    RangeIterator::new(index, query, range)
}
