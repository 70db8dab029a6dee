//! Single-stratum document index over plain in-memory structures.
//!
//! Every suffix of the concatenated text is a candidate at depth 0, weighted
//! with the weight of the document it starts in. Documents repeat once per
//! occurrence and are collapsed by the iterator's de-duplication, so a query
//! returns the distinct documents containing the pattern ordered by
//! document weight.

use crate::config::TextIndexConfig;
use crate::error::{TextError, TextResult};
use crate::index::{DocumentCursor, TopKIndex};
use crate::primitives::{CompressedSuffixArray, RankSupport};
use crate::succinct::{IdentityDupMap, RankBitVector, SparseTableRmq, SuffixArray};
use crate::top_down::{TopDownIndex, TopDownParts, TopDownTopKIterator};

type FlatTopDown<T> =
    TopDownIndex<SuffixArray<T>, RankBitVector, IdentityDupMap, RankBitVector, SparseTableRmq>;

/// A [`TopDownIndex`] built by [`FlatIndexBuilder`], aware of the separator
/// its documents were joined with.
///
/// A pattern containing the separator would match across document
/// boundaries, so it matches nothing.
pub struct FlatIndex<T> {
    index: FlatTopDown<T>,
    separator: T,
}

impl<T: Ord> FlatIndex<T> {
    pub fn separator(&self) -> &T {
        &self.separator
    }

    pub fn levels(&self) -> usize {
        self.index.levels()
    }

    /// Number of candidate occurrences.
    pub fn candidate_count(&self) -> usize {
        self.index.candidate_count()
    }

    pub fn doc_cnt(&self) -> u64 {
        self.index.doc_cnt()
    }

    pub fn word_cnt(&self) -> u64 {
        self.index.word_cnt()
    }

    /// Starts a top-k query for `pattern`.
    ///
    /// See [`TopKIndex::topk`] for the meaning of the flags.
    pub fn top_down(
        &self,
        pattern: &[T],
        multi_occ: bool,
        only_match: bool,
    ) -> TopDownTopKIterator<'_, SparseTableRmq> {
        if pattern.contains(&self.separator) {
            log::debug!("Pattern of length {} spans a document separator", pattern.len());
            return self.index.no_matches(multi_occ);
        }
        self.index.top_down(pattern, multi_occ, only_match)
    }
}

impl<T: Ord> TopKIndex for FlatIndex<T> {
    type Token = T;

    fn topk<'a>(
        &'a self,
        pattern: &[T],
        multi_occ: bool,
        only_match: bool,
    ) -> Box<dyn DocumentCursor<T> + 'a> {
        Box::new(self.top_down(pattern, multi_occ, only_match))
    }

    fn doc_cnt(&self) -> u64 {
        FlatIndex::doc_cnt(self)
    }

    fn word_cnt(&self) -> u64 {
        FlatIndex::word_cnt(self)
    }
}

/// Collects weighted documents and builds a [`FlatIndex`].
///
/// Documents are joined with `separator`, which must not occur inside any
/// document. Document ids are assigned in insertion order starting at 0.
///
/// ```rust
/// use topk_text::{DocumentHit, FlatIndexBuilder, TextIndexConfig};
///
/// let index = FlatIndexBuilder::new(b'$')
///     .document(b"to be or not to be".to_vec(), 3)
///     .document(b"be quick".to_vec(), 8)
///     .document(b"quiet".to_vec(), 5)
///     .build(&TextIndexConfig::default())?;
///
/// let hits: Vec<DocumentHit> = index.top_down(b"be", false, false).collect();
/// assert_eq!(hits, vec![DocumentHit::new(1, 8), DocumentHit::new(0, 3)]);
/// # Ok::<(), topk_text::TextError>(())
/// ```
pub struct FlatIndexBuilder<T> {
    separator: T,
    documents: Vec<(Vec<T>, u64)>,
}

impl<T: Ord + Clone> FlatIndexBuilder<T> {
    pub fn new(separator: T) -> Self {
        FlatIndexBuilder {
            separator,
            documents: Vec::new(),
        }
    }

    /// Adds a document. Builder-style method for chaining.
    pub fn document(mut self, tokens: Vec<T>, weight: u64) -> Self {
        self.documents.push((tokens, weight));
        self
    }

    pub fn build(self, config: &TextIndexConfig) -> TextResult<FlatIndex<T>> {
        config.validate()?;
        if self.documents.is_empty() {
            return Err(TextError::InconsistentIndex(
                "a flat index needs at least one document".to_string(),
            ));
        }

        let mut text = Vec::new();
        let mut terminators = Vec::with_capacity(self.documents.len());
        let mut doc_weights = Vec::with_capacity(self.documents.len());
        for (id, (tokens, weight)) in self.documents.into_iter().enumerate() {
            if tokens.contains(&self.separator) {
                return Err(TextError::InconsistentIndex(format!(
                    "document {} contains the separator",
                    id
                )));
            }
            text.extend(tokens);
            // the last document is terminated by the end-of-text sentinel
            terminators.push(text.len());
            text.push(self.separator.clone());
            doc_weights.push(weight);
        }
        text.pop();

        let csa = SuffixArray::new(text);
        let size = csa.size();
        let doc_border = RankBitVector::with_ones(size, terminators);

        let (weights, documents): (Vec<u64>, Vec<u64>) = (0..size)
            .map(|rank| {
                // a terminator belongs to the document it ends
                let document = doc_border.rank(csa.suffix(rank));
                (doc_weights[document], document as u64)
            })
            .unzip();

        let levels = config.levels();
        let tails = RankBitVector::with_ones(levels * size, 0..size);
        let weights_rmq = SparseTableRmq::new(&weights);

        let index = TopDownIndex::new(
            TopDownParts {
                csa,
                doc_border,
                dup_map: IdentityDupMap,
                tails,
                weights,
                weights_rmq,
                documents,
            },
            config,
        )?;
        Ok(FlatIndex {
            index,
            separator: self.separator,
        })
    }
}
