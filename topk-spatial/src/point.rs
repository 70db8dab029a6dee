use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of axes of the point space.
pub const DIMENSIONS: usize = 3;

/// A point of the quantized 3-dimensional universe.
///
/// Axis 0, 1 and 2 are exposed as `x`, `y` and `z`. The third axis is the one
/// along which in-progress top-k queries are bisected.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug, Serialize, Deserialize,
)]
pub struct Point(pub [u64; DIMENSIONS]);

impl Point {
    pub const fn new(x: u64, y: u64, z: u64) -> Point {
        Point([x, y, z])
    }

    #[inline]
    pub fn x(&self) -> u64 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> u64 {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> u64 {
        self.0[2]
    }

    /// Largest coordinate over all axes.
    pub fn max_coordinate(&self) -> u64 {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

impl Index<usize> for Point {
    type Output = u64;

    #[inline]
    fn index(&self, axis: usize) -> &u64 {
        &self.0[axis]
    }
}

impl IndexMut<usize> for Point {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut u64 {
        &mut self.0[axis]
    }
}

impl From<[u64; DIMENSIONS]> for Point {
    fn from(coords: [u64; DIMENSIONS]) -> Self {
        Point(coords)
    }
}

impl From<(u64, u64, u64)> for Point {
    fn from((x, y, z): (u64, u64, u64)) -> Self {
        Point([x, y, z])
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

/// A stored point together with its weight.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct WeightedPoint {
    pub point: Point,
    pub weight: u64,
}

impl WeightedPoint {
    pub fn new(point: impl Into<Point>, weight: u64) -> Self {
        WeightedPoint {
            point: point.into(),
            weight,
        }
    }
}

/// A closed weight interval `[min, max]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: u64,
    pub max: u64,
}

impl WeightRange {
    pub fn new(min: u64, max: u64) -> Self {
        WeightRange { min, max }
    }

    #[inline]
    pub fn contains(&self, weight: u64) -> bool {
        weight >= self.min && weight <= self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

impl From<(u64, u64)> for WeightRange {
    fn from((min, max): (u64, u64)) -> Self {
        WeightRange { min, max }
    }
}
