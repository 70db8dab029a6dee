use crate::primitives::{CompressedSuffixArray, LexRange};

/// Plain suffix array over a token sequence.
///
/// The text is implicitly terminated by a sentinel that sorts before every
/// token, so an index over `n` tokens holds `n + 1` suffixes and rank 0 is
/// always the empty suffix.
#[derive(Debug, Clone)]
pub struct SuffixArray<T> {
    text: Vec<T>,
    suffixes: Vec<usize>,
    inverse: Vec<usize>,
}

impl<T: Ord> SuffixArray<T> {
    pub fn new(text: Vec<T>) -> Self {
        let mut suffixes: Vec<usize> = (0..=text.len()).collect();
        suffixes.sort_by(|&a, &b| text[a..].cmp(&text[b..]));

        let mut inverse = vec![0; suffixes.len()];
        for (rank, &pos) in suffixes.iter().enumerate() {
            inverse[pos] = rank;
        }

        log::debug!("Suffix array built over {} tokens", text.len());
        SuffixArray {
            text,
            suffixes,
            inverse,
        }
    }

    pub fn text(&self) -> &[T] {
        &self.text
    }

    /// Text position of the suffix with lexicographic rank `rank`.
    pub fn suffix(&self, rank: usize) -> usize {
        self.suffixes[rank]
    }

    /// Lexicographic rank of the suffix starting at text position `pos`.
    pub fn rank_of(&self, pos: usize) -> usize {
        self.inverse[pos]
    }

    /// Prepends a single token to the strings matched by `range`.
    fn backward_step(&self, range: LexRange, token: &T) -> Option<LexRange> {
        // the sentinel suffix has no first token and sorts before everything
        let lo = self
            .suffixes
            .partition_point(|&pos| self.text.get(pos).map_or(true, |t| t < token));
        let hi = self
            .suffixes
            .partition_point(|&pos| self.text.get(pos).map_or(true, |t| t <= token));

        // every suffix of the block starts with `token`, so they are ordered by
        // the rank of the suffix that follows it
        let block = &self.suffixes[lo..hi];
        let sp = lo + block.partition_point(|&pos| self.inverse[pos + 1] < range.sp);
        let end = lo + block.partition_point(|&pos| self.inverse[pos + 1] <= range.ep);

        (sp < end).then(|| LexRange::new(sp, end - 1))
    }
}

impl<T: Ord> CompressedSuffixArray for SuffixArray<T> {
    type Token = T;

    fn size(&self) -> usize {
        self.suffixes.len()
    }

    fn backward_search(&self, range: LexRange, pattern: &[T]) -> Option<LexRange> {
        pattern
            .iter()
            .rev()
            .try_fold(range, |current, token| self.backward_step(current, token))
    }
}
