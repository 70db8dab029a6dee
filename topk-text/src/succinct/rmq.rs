use crate::primitives::RangeMaxQuery;

/// Sparse table answering range-maximum queries in constant time.
///
/// Level `j` stores, for every start position, the position of the leftmost
/// maximum of the window of width `2^j` beginning there.
#[derive(Debug, Clone, Default)]
pub struct SparseTableRmq {
    values: Vec<u64>,
    table: Vec<Vec<usize>>,
}

impl SparseTableRmq {
    pub fn new(values: &[u64]) -> Self {
        let n = values.len();
        let mut table: Vec<Vec<usize>> = vec![(0..n).collect()];
        let mut width = 1;
        while width * 2 <= n {
            let prev = &table[table.len() - 1];
            let next = (0..=n - 2 * width)
                .map(|i| leftmost_max(values, prev[i], prev[i + width]))
                .collect();
            table.push(next);
            width *= 2;
        }

        SparseTableRmq {
            values: values.to_vec(),
            table,
        }
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }
}

// `left` must not lie right of `right`
#[inline]
fn leftmost_max(values: &[u64], left: usize, right: usize) -> usize {
    if values[right] > values[left] {
        right
    } else {
        left
    }
}

impl RangeMaxQuery for SparseTableRmq {
    fn len(&self) -> usize {
        self.values.len()
    }

    /// # Panics
    ///
    /// Panics if `start > end` or `end >= len()`.
    fn rmq(&self, start: usize, end: usize) -> usize {
        assert!(
            start <= end && end < self.values.len(),
            "invalid rmq range [{}, {}] over {} values",
            start,
            end,
            self.values.len()
        );
        let width = end - start + 1;
        let level = (usize::BITS - 1 - width.leading_zeros()) as usize;
        let left = self.table[level][start];
        let right = self.table[level][end + 1 - (1 << level)];
        leftmost_max(&self.values, left, right)
    }
}
