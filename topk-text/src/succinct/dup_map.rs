use crate::primitives::{DupRange, DuplicateRangeMap, LexRange};

/// Duplicate array laid out one entry per suffix-array position.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityDupMap;

impl DuplicateRangeMap for IdentityDupMap {
    fn dup_range(&self, range: LexRange) -> Option<DupRange> {
        Some(DupRange::new(range.sp, range.ep))
    }
}

/// Duplicate array where each pair of adjacent suffixes `(i - 1, i)`
/// contributes a variable number of entries.
///
/// A lexicographic range `[sp, ep]` covers the entries of the pairs
/// `sp + 1 ..= ep`.
#[derive(Debug, Clone)]
pub struct PrefixDupMap {
    prefix: Vec<usize>,
}

impl PrefixDupMap {
    /// `counts[i]` is the number of entries of the pair `(i - 1, i)`.
    /// `counts[0]` has no pair and is ignored.
    pub fn from_counts(counts: &[usize]) -> Self {
        let mut prefix = Vec::with_capacity(counts.len());
        let mut total = 0;
        for (i, &c) in counts.iter().enumerate() {
            if i > 0 {
                total += c;
            }
            prefix.push(total);
        }
        PrefixDupMap { prefix }
    }

    /// Length of the duplicate array.
    pub fn total(&self) -> usize {
        self.prefix.last().copied().unwrap_or(0)
    }
}

impl DuplicateRangeMap for PrefixDupMap {
    fn dup_range(&self, range: LexRange) -> Option<DupRange> {
        let start = self.prefix[range.sp];
        let end = self.prefix[range.ep];
        (end > start).then(|| DupRange::new(start, end - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(
            IdentityDupMap.dup_range(LexRange::new(3, 7)),
            Some(DupRange::new(3, 7))
        );
    }

    #[test]
    fn test_prefix_ranges() {
        let map = PrefixDupMap::from_counts(&[5, 2, 0, 1, 3]);
        assert_eq!(map.total(), 6);
        assert_eq!(map.dup_range(LexRange::new(1, 4)), Some(DupRange::new(2, 5)));
        assert_eq!(map.dup_range(LexRange::new(0, 1)), Some(DupRange::new(0, 1)));
        assert_eq!(map.dup_range(LexRange::new(0, 4)), Some(DupRange::new(0, 5)));
    }

    #[test]
    fn test_prefix_empty_ranges() {
        let map = PrefixDupMap::from_counts(&[0, 2, 0, 1, 3]);
        assert_eq!(map.dup_range(LexRange::new(1, 2)), None);
        assert_eq!(map.dup_range(LexRange::new(3, 3)), None);
        assert_eq!(PrefixDupMap::from_counts(&[]).total(), 0);
    }
}
