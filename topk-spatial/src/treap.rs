//! In-memory k³-treap.
//!
//! The treap is a k³-tree whose every node additionally stores the heaviest
//! point of its cuboid. That point is taken out of the node's point set
//! before the rest is split among the `k^3` sub-cuboids, so each stored
//! point appears in exactly one node. Nodes live in a flat arena with the
//! children of a node stored contiguously.

use crate::config::TreapConfig;
use crate::error::{SpatialError, SpatialResult};
use crate::geometry::PowerTable;
use crate::point::{Point, WeightedPoint, DIMENSIONS};
use crate::region::Region;
use crate::spatial_index::{Children, SpatialIndex};

#[derive(Clone, Copy, Default, Debug)]
struct TreapNode {
    anchor: Point,
    level: u8,
    max_point: Point,
    max_weight: u64,
    first_child: usize,
    child_count: usize,
}

/// A static, weight-summarized k³ partition of a set of weighted points.
///
/// # Examples
///
/// ```rust
/// use topk_spatial::{K3Treap, SpatialIndex, TreapConfig, WeightedPoint};
///
/// let treap = K3Treap::build(
///     vec![
///         WeightedPoint::new((0, 0, 0), 9),
///         WeightedPoint::new((1, 1, 1), 5),
///         WeightedPoint::new((2, 2, 2), 7),
///     ],
///     &TreapConfig::default(),
/// )?;
/// assert_eq!(treap.size(), 3);
/// assert_eq!(treap.root().max_weight, 9);
/// # Ok::<(), topk_spatial::SpatialError>(())
/// ```
#[derive(Clone, Debug)]
pub struct K3Treap {
    nodes: Vec<TreapNode>,
    size: u64,
    height: u8,
    powers: PowerTable,
}

impl K3Treap {
    /// Creates a treap holding no points.
    pub fn empty(config: &TreapConfig) -> SpatialResult<Self> {
        config.validate()?;
        Ok(K3Treap {
            nodes: Vec::new(),
            size: 0,
            height: 0,
            powers: PowerTable::new(config.branching_factor()),
        })
    }

    /// Builds a treap over `points`.
    ///
    /// The universe is the smallest origin-anchored cube of side `k^h`
    /// covering every coordinate. Among points of equal weight the smallest
    /// coordinate triple becomes the node maximum.
    ///
    /// # Errors
    ///
    /// * [`SpatialError::InvalidConfiguration`] for an unusable branching factor
    /// * [`SpatialError::DuplicatePoint`] if a coordinate triple occurs twice
    /// * [`SpatialError::CoordinateOutOfRange`] if `k^h` would overflow
    pub fn build(mut points: Vec<WeightedPoint>, config: &TreapConfig) -> SpatialResult<Self> {
        let mut treap = Self::empty(config)?;
        if points.is_empty() {
            log::debug!("Built empty k3-treap (k = {})", config.branching_factor());
            return Ok(treap);
        }

        points.sort_unstable_by_key(|wp| wp.point);
        if let Some(pair) = points.windows(2).find(|pair| pair[0].point == pair[1].point) {
            return Err(SpatialError::DuplicatePoint(pair[0].point));
        }

        let max_coordinate = points
            .iter()
            .map(|wp| wp.point.max_coordinate())
            .max()
            .unwrap_or(0);
        let height = treap.powers.level_for(max_coordinate).ok_or_else(|| {
            SpatialError::CoordinateOutOfRange {
                coordinate: max_coordinate,
                branching_factor: treap.powers.branching_factor(),
                max_level: treap.powers.max_level(),
            }
        })?;

        treap.size = points.len() as u64;
        treap.height = height;
        treap.nodes.reserve(points.len());
        treap.nodes.push(TreapNode::default());
        treap.fill(0, Point::default(), height, points);

        log::debug!(
            "Built k3-treap with {} points, {} nodes, height {} (k = {})",
            treap.size,
            treap.nodes.len(),
            treap.height,
            treap.powers.branching_factor()
        );
        Ok(treap)
    }

    /// Level of the root region.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of arena nodes. Equals [`SpatialIndex::size`] since every
    /// node stores exactly one point.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn fill(&mut self, idx: usize, anchor: Point, level: u8, mut points: Vec<WeightedPoint>) {
        let max_at = points
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| {
                a.weight
                    .cmp(&b.weight)
                    .then_with(|| b.point.cmp(&a.point))
            })
            .map(|(i, _)| i)
            .unwrap_or(0);
        let top = points.swap_remove(max_at);

        self.nodes[idx] = TreapNode {
            anchor,
            level,
            max_point: top.point,
            max_weight: top.weight,
            first_child: 0,
            child_count: 0,
        };

        if points.is_empty() || level == 0 {
            return;
        }

        let k = self.powers.branching_factor();
        let child_level = level - 1;
        let side = self.powers.exp(child_level);
        let child_key = |p: &Point| {
            (0..DIMENSIONS).fold(0u64, |key, axis| key * k + (p[axis] - anchor[axis]) / side)
        };

        points.sort_unstable_by_key(|wp| child_key(&wp.point));
        let mut groups: Vec<(Point, Vec<WeightedPoint>)> = Vec::new();
        let mut last_key = None;
        for wp in points {
            let key = child_key(&wp.point);
            if last_key != Some(key) {
                let mut child_anchor = anchor;
                for axis in 0..DIMENSIONS {
                    child_anchor[axis] += (wp.point[axis] - anchor[axis]) / side * side;
                }
                groups.push((child_anchor, Vec::new()));
                last_key = Some(key);
            }
            if let Some((_, group)) = groups.last_mut() {
                group.push(wp);
            }
        }

        let first_child = self.nodes.len();
        self.nodes[idx].first_child = first_child;
        self.nodes[idx].child_count = groups.len();
        self.nodes
            .resize(first_child + groups.len(), TreapNode::default());

        for (offset, (child_anchor, group)) in groups.into_iter().enumerate() {
            self.fill(first_child + offset, child_anchor, child_level, group);
        }
    }

    fn region(&self, handle: usize) -> Region {
        let node = &self.nodes[handle];
        Region {
            anchor: node.anchor,
            level: node.level,
            max_point: node.max_point,
            max_weight: node.max_weight,
            handle: handle as u64,
        }
    }
}

impl SpatialIndex for K3Treap {
    fn size(&self) -> u64 {
        self.size
    }

    fn root(&self) -> Region {
        self.region(0)
    }

    fn children(&self, region: &Region) -> Children {
        let node = &self.nodes[region.handle as usize];
        (node.first_child..node.first_child + node.child_count)
            .map(|handle| self.region(handle))
            .collect()
    }

    fn powers(&self) -> &PowerTable {
        &self.powers
    }
}
