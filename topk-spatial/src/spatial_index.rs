//! SpatialIndex trait definition.

use smallvec::SmallVec;

use crate::geometry::PowerTable;
use crate::region::Region;

/// Children of a region. Binary treaps have at most eight per region.
pub type Children = SmallVec<[Region; 8]>;

/// Read-only view of a weight-summarized k³ partition of the point space.
///
/// The search algorithms only navigate the index through this trait; how
/// nodes are stored or encoded is up to the implementation. An index must
/// stay immutable while any iterator borrows it.
///
/// Every region handed out must satisfy the summary invariant: its
/// `max_weight` is the true maximum weight below it and `max_point` lies in
/// its cuboid. Each region stores exactly one point (its `max_point`); the
/// remaining points of the cuboid live in its children.
pub trait SpatialIndex {
    /// Number of stored points.
    fn size(&self) -> u64;

    /// The region covering the whole universe.
    ///
    /// Only meaningful when `size() > 0`.
    fn root(&self) -> Region;

    /// The non-empty level `t - 1` regions partitioning `region`'s cuboid,
    /// empty for leaves.
    fn children(&self, region: &Region) -> Children;

    /// Powers of the branching factor used by this index.
    fn powers(&self) -> &PowerTable;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<I: SpatialIndex + ?Sized> SpatialIndex for &I {
    fn size(&self) -> u64 {
        (**self).size()
    }

    fn root(&self) -> Region {
        (**self).root()
    }

    fn children(&self, region: &Region) -> Children {
        (**self).children(region)
    }

    fn powers(&self) -> &PowerTable {
        (**self).powers()
    }
}
