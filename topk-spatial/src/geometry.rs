//! Containment and overlap predicates between query boxes and regions.
//!
//! A region `(anchor, t)` covers the cuboid `[anchor, anchor + k^t - 1]` on
//! every axis. All predicates are O(1); `k^t` comes from a [`PowerTable`].

use crate::point::{Point, DIMENSIONS};
use crate::query_box::QueryBox;
use crate::region::Region;

/// Precomputed powers `k^0, k^1, ...` of a branching factor `k`, up to the
/// largest power representable in a `u64`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerTable {
    k: u64,
    powers: Vec<u64>,
}

impl PowerTable {
    /// Builds the table for branching factor `k`.
    ///
    /// # Panics
    ///
    /// Panics if `k` is less than 2. `TreapConfig` rejects such factors
    /// before a table is built.
    pub fn new(k: u64) -> PowerTable {
        assert!(k >= 2, "branching factor must be at least 2, got {}", k);
        let mut powers = vec![1u64];
        while let Some(next) = powers[powers.len() - 1].checked_mul(k) {
            powers.push(next);
        }
        PowerTable { k, powers }
    }

    #[inline]
    pub fn branching_factor(&self) -> u64 {
        self.k
    }

    /// Highest level `t` for which `k^t` fits in a `u64`.
    #[inline]
    pub fn max_level(&self) -> u8 {
        (self.powers.len() - 1) as u8
    }

    /// Returns `k^t`.
    #[inline]
    pub fn exp(&self, t: u8) -> u64 {
        self.powers[t as usize]
    }

    /// Returns `k^t - 1`, the per-axis extent of a level-`t` cuboid past its anchor.
    #[inline]
    pub fn span(&self, t: u8) -> u64 {
        self.powers[t as usize] - 1
    }

    /// Smallest level whose cuboid anchored at the origin covers `coordinate`.
    pub fn level_for(&self, coordinate: u64) -> Option<u8> {
        self.powers
            .iter()
            .position(|&p| p > coordinate)
            .map(|level| level as u8)
    }
}

/// Checks if `point` lies inside `query`.
#[inline]
pub fn point_in_box(point: &Point, query: &QueryBox) -> bool {
    query.contains_point(point)
}

/// Checks if the whole cuboid of `region` lies inside `query`.
#[inline]
pub fn region_inside_box(query: &QueryBox, region: &Region, powers: &PowerTable) -> bool {
    let d = powers.span(region.level);
    (0..DIMENSIONS).all(|axis| {
        query.min[axis] <= region.anchor[axis]
            && query.max[axis] >= region.anchor[axis].saturating_add(d)
    })
}

/// Checks if the cuboid of `region` and `query` intersect on every axis.
#[inline]
pub fn region_overlaps_box(query: &QueryBox, region: &Region, powers: &PowerTable) -> bool {
    let d = powers.span(region.level);
    (0..DIMENSIONS).all(|axis| {
        query.min[axis] <= region.anchor[axis].saturating_add(d)
            && query.max[axis] >= region.anchor[axis]
    })
}
