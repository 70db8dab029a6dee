use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::point::Point;

/// A quantized cuboid of a spatial index together with its weight summary.
///
/// The region `(anchor, level)` covers `[anchor, anchor + k^level - 1]` on
/// every axis. `max_point` is the heaviest point inside the cuboid and
/// `max_weight` its weight, which bounds every weight below the region.
/// Level 0 regions are single points.
///
/// `handle` is opaque to the search algorithms; the owning index uses it to
/// find the region's children again.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Region {
    pub anchor: Point,
    pub level: u8,
    pub max_point: Point,
    pub max_weight: u64,
    pub handle: u64,
}

impl Region {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.level == 0
    }
}

// Frontier order: heavier regions first. The remaining fields only make the
// order total; ties carry no meaning.
impl Ord for Region {
    fn cmp(&self, other: &Self) -> Ordering {
        self.max_weight
            .cmp(&other.max_weight)
            .then_with(|| other.level.cmp(&self.level))
            .then_with(|| other.handle.cmp(&self.handle))
            .then_with(|| self.anchor.cmp(&other.anchor))
            .then_with(|| self.max_point.cmp(&other.max_point))
    }
}

impl PartialOrd for Region {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
