//! Exact range counting.

use crate::geometry::{point_in_box, region_inside_box, region_overlaps_box};
use crate::query_box::QueryBox;
use crate::region::Region;
use crate::spatial_index::SpatialIndex;

/// Counts the points of `index` inside `query`.
///
/// Regions fully inside the box contribute their whole subtree without any
/// further geometry tests; partially overlapping regions contribute their
/// own point (if inside) plus the counts of their children.
///
/// ```rust
/// use topk_spatial::{count, K3Treap, QueryBox, TreapConfig, WeightedPoint};
///
/// let treap = K3Treap::build(
///     vec![WeightedPoint::new((0, 0, 0), 9), WeightedPoint::new((3, 0, 0), 1)],
///     &TreapConfig::default(),
/// )?;
/// assert_eq!(count(&treap, &QueryBox::new((0, 0, 0), (2, 2, 2))), 1);
/// # Ok::<(), topk_spatial::SpatialError>(())
/// ```
pub fn count<I: SpatialIndex + ?Sized>(index: &I, query: &QueryBox) -> u64 {
    if index.size() == 0 {
        return 0;
    }
    count_region(index, query, &index.root())
}

fn count_region<I: SpatialIndex + ?Sized>(index: &I, query: &QueryBox, region: &Region) -> u64 {
    let powers = index.powers();
    if region_inside_box(query, region, powers) {
        subtree_size(index, region)
    } else if region_overlaps_box(query, region, powers) {
        let own = u64::from(point_in_box(&region.max_point, query));
        index
            .children(region)
            .iter()
            .fold(own, |acc, child| acc + count_region(index, query, child))
    } else {
        0
    }
}

/// Number of points stored in the subtree of `region`, one per node.
pub fn subtree_size<I: SpatialIndex + ?Sized>(index: &I, region: &Region) -> u64 {
    let mut total = 0;
    let mut stack = vec![*region];
    while let Some(next) = stack.pop() {
        total += 1;
        stack.extend(index.children(&next));
    }
    total
}
