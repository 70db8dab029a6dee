use crate::primitives::RankSupport;

const WORD_BITS: usize = 64;

/// Bit vector with a rank directory of one cumulative counter per word.
#[derive(Debug, Clone)]
pub struct RankBitVector {
    words: Vec<u64>,
    // ones before each word, plus a final total
    ranks: Vec<usize>,
    len: usize,
}

impl RankBitVector {
    /// Creates a vector of `len` bits with exactly the positions in `ones`
    /// set.
    ///
    /// # Panics
    ///
    /// Panics if a position is not below `len`.
    pub fn with_ones<I: IntoIterator<Item = usize>>(len: usize, ones: I) -> Self {
        let mut words = vec![0u64; len.div_ceil(WORD_BITS)];
        for pos in ones {
            assert!(pos < len, "bit {} out of range for length {}", pos, len);
            words[pos / WORD_BITS] |= 1 << (pos % WORD_BITS);
        }
        Self::from_words(words, len)
    }

    fn from_words(words: Vec<u64>, len: usize) -> Self {
        let mut ranks = Vec::with_capacity(words.len() + 1);
        let mut total = 0;
        for word in &words {
            ranks.push(total);
            total += word.count_ones() as usize;
        }
        ranks.push(total);
        RankBitVector { words, ranks, len }
    }

    pub fn get(&self, pos: usize) -> bool {
        pos < self.len && self.words[pos / WORD_BITS] >> (pos % WORD_BITS) & 1 == 1
    }

    pub fn count_ones(&self) -> usize {
        self.ranks[self.words.len()]
    }
}

impl Default for RankBitVector {
    fn default() -> Self {
        Self::from_words(Vec::new(), 0)
    }
}

impl FromIterator<bool> for RankBitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut words = Vec::new();
        let mut len = 0;
        for bit in iter {
            if len % WORD_BITS == 0 {
                words.push(0u64);
            }
            if bit {
                words[len / WORD_BITS] |= 1 << (len % WORD_BITS);
            }
            len += 1;
        }
        Self::from_words(words, len)
    }
}

impl RankSupport for RankBitVector {
    fn len(&self) -> usize {
        self.len
    }

    /// # Panics
    ///
    /// Panics if `pos > len()`.
    fn rank(&self, pos: usize) -> usize {
        assert!(pos <= self.len, "rank position {} beyond length {}", pos, self.len);
        let (word, bit) = (pos / WORD_BITS, pos % WORD_BITS);
        if bit == 0 {
            self.ranks[word]
        } else {
            let mask = (1u64 << bit) - 1;
            self.ranks[word] + (self.words[word] & mask).count_ones() as usize
        }
    }
}
