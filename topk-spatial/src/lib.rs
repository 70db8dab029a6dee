//! # topk_spatial - Top-K Queries over k³-Treaps
//!
//! Lazy best-first queries over a weight-summarized hierarchical partition
//! of a quantized 3-dimensional point space.
//!
//! ## Features
//!
//! - **Top-K**: points of a query box in exact decreasing weight order,
//!   produced one at a time
//! - **Weight Range**: every point of a box whose weight lies in `[min, max]`
//! - **Count**: exact number of points in a box
//! - **Bisection**: split an in-progress top-k query along the z-axis into two
//!   independent continuations for divide-and-conquer consumption
//! - **Pluggable Index**: the algorithms only see the [`SpatialIndex`] trait;
//!   [`K3Treap`] is the bundled in-memory implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use topk_spatial::{
//!     count, range_3d, top_k, K3Treap, QueryBox, TreapConfig, WeightRange, WeightedPoint,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let treap = K3Treap::build(
//!     vec![
//!         WeightedPoint::new((0, 0, 0), 9),
//!         WeightedPoint::new((1, 1, 1), 5),
//!         WeightedPoint::new((2, 2, 2), 7),
//!         WeightedPoint::new((3, 0, 0), 1),
//!         WeightedPoint::new((0, 3, 0), 3),
//!     ],
//!     &TreapConfig::default(),
//! )?;
//!
//! let query = QueryBox::new((0, 0, 0), (2, 2, 2));
//! let best: Vec<u64> = top_k(&treap, query).take(2).map(|hit| hit.weight).collect();
//! assert_eq!(best, vec![9, 7]);
//! assert_eq!(count(&treap, &query), 3);
//!
//! let in_range = range_3d(&treap, QueryBox::everything(), WeightRange::new(5, 7)).count();
//! assert_eq!(in_range, 2);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod count;
pub mod error;
pub mod geometry;
pub mod point;
pub mod query_box;
pub mod range;
pub mod region;
pub mod spatial_index;
pub mod top_k;
pub mod treap;

pub use config::TreapConfig;
pub use count::{count, subtree_size};
pub use error::{SpatialError, SpatialResult};
pub use geometry::{point_in_box, region_inside_box, region_overlaps_box, PowerTable};
pub use point::{Point, WeightRange, WeightedPoint};
pub use query_box::QueryBox;
pub use range::{range_3d, RangeHit, RangeIterator};
pub use region::Region;
pub use spatial_index::{Children, SpatialIndex};
pub use top_k::{top_k, SpatialHit, TopKIterator};
pub use treap::K3Treap;

pub use topk::cursor::TopKCursor;
