use serde::{Deserialize, Serialize};

use crate::point::{Point, DIMENSIONS};

/// An axis-aligned query cuboid `[min, max]`, closed on every axis.
///
/// `QueryBox` is the query rectangle `(p1, p2)` of every spatial query. The
/// constructor does not check `min <= max`; a malformed box is the caller's
/// responsibility and simply matches nothing useful.
///
/// # Examples
///
/// ```rust
/// use topk_spatial::{Point, QueryBox};
///
/// let query = QueryBox::new(Point::new(0, 0, 0), Point::new(2, 2, 2));
/// assert!(query.contains_point(&Point::new(1, 1, 1)));
/// assert!(!query.contains_point(&Point::new(3, 0, 0)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct QueryBox {
    /// Lower corner
    pub min: Point,
    /// Upper corner
    pub max: Point,
}

impl std::fmt::Display for QueryBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "QueryBox({}, {})", self.min, self.max)
    }
}

impl QueryBox {
    pub fn new(min: impl Into<Point>, max: impl Into<Point>) -> QueryBox {
        QueryBox {
            min: min.into(),
            max: max.into(),
        }
    }

    /// The box covering the whole universe.
    pub fn everything() -> QueryBox {
        QueryBox::new(Point::new(0, 0, 0), Point::new(u64::MAX, u64::MAX, u64::MAX))
    }

    /// Checks if this box contains a point.
    #[inline]
    pub fn contains_point(&self, point: &Point) -> bool {
        (0..DIMENSIONS).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }

    /// Checks if this box is well formed (`min <= max` on every axis).
    pub fn is_valid(&self) -> bool {
        (0..DIMENSIONS).all(|axis| self.min[axis] <= self.max[axis])
    }

    /// Returns a copy restricted to `z` in `[lo, hi]` on the third axis.
    pub fn with_z_range(&self, lo: u64, hi: u64) -> QueryBox {
        let mut restricted = *self;
        restricted.min[2] = lo;
        restricted.max[2] = hi;
        restricted
    }
}
