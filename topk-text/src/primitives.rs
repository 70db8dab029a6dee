//! Contracts of the succinct structures a [`crate::TopDownIndex`] is
//! assembled from.
//!
//! The index never builds these itself. Any implementation honoring the
//! contracts below can be plugged in; [`crate::succinct`] ships plain
//! in-memory reference versions.

use serde::{Deserialize, Serialize};

/// Inclusive range `[sp, ep]` of suffix-array positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LexRange {
    pub sp: usize,
    pub ep: usize,
}

impl LexRange {
    pub fn new(sp: usize, ep: usize) -> Self {
        LexRange { sp, ep }
    }

    /// Number of suffixes in the range.
    pub fn len(&self) -> usize {
        self.ep + 1 - self.sp
    }

    /// A `LexRange` is never empty; absent matches are `None`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Inclusive range `[start, end]` of positions in the duplicate array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DupRange {
    pub start: usize,
    pub end: usize,
}

impl DupRange {
    pub fn new(start: usize, end: usize) -> Self {
        DupRange { start, end }
    }
}

/// A compressed suffix array over tokens of type [`Self::Token`].
pub trait CompressedSuffixArray {
    type Token;

    /// Number of suffixes, including the one for the end-of-text sentinel.
    fn size(&self) -> usize;

    /// Narrows `range`, the suffixes prefixed by some string `S`, to the
    /// suffixes prefixed by `pattern` followed by `S`.
    ///
    /// Returns `None` when no suffix matches.
    fn backward_search(&self, range: LexRange, pattern: &[Self::Token]) -> Option<LexRange>;
}

/// Maps a lexicographic range to the range of duplicate entries it covers.
pub trait DuplicateRangeMap {
    /// Returns `None` when the range covers no duplicate entries.
    fn dup_range(&self, range: LexRange) -> Option<DupRange>;
}

/// Rank support over a bit vector.
pub trait RankSupport {
    /// Length of the underlying bit vector.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of set bits in positions `[0, pos)`. `pos` may equal `len()`.
    fn rank(&self, pos: usize) -> usize;
}

/// Range-maximum query over a fixed array of weights.
pub trait RangeMaxQuery {
    /// Length of the underlying array.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the maximum in `[start, end]` (both inclusive). Ties go
    /// to the leftmost position.
    fn rmq(&self, start: usize, end: usize) -> usize;
}
