//! Top-down document retrieval driven by range-maximum queries.
//!
//! Every candidate occurrence of the index has a weight and a document.
//! Candidates are grouped into `levels` depth strata marked in the tails bit
//! vector. A query locates its pattern, maps the match onto the duplicate
//! array and takes, per depth up to the pattern length, the rank interval of
//! candidates that fall inside it. Each interval is keyed by its maximum
//! weight; popping the heaviest interval and splitting it around that
//! maximum yields an implicit max-heap over the weight array, so documents
//! come out best first without sorting anything.

use std::cmp::Ordering;

use topk::collections::CowPriorityQueue;
use topk::cursor::{exhausted, TopKCursor};

use crate::config::TextIndexConfig;
use crate::error::{TextError, TextResult};
use crate::index::{DocumentCursor, DocumentHit, TopKIndex};
use crate::primitives::{
    CompressedSuffixArray, DuplicateRangeMap, LexRange, RangeMaxQuery, RankSupport,
};
use crate::succinct::{PrefixDupMap, RankBitVector, SparseTableRmq};

/// The structures a [`TopDownIndex`] is assembled from.
///
/// `weights`, `documents` and `weights_rmq` are indexed by candidate id, the
/// rank of a set bit in `tails`.
pub struct TopDownParts<C, B, M, R, Q> {
    pub csa: C,
    /// Marks the text positions that terminate a document.
    pub doc_border: B,
    pub dup_map: M,
    pub tails: R,
    pub weights: Vec<u64>,
    pub weights_rmq: Q,
    pub documents: Vec<u64>,
}

/// Document index answering top-k queries top-down.
pub struct TopDownIndex<
    C,
    B = RankBitVector,
    M = PrefixDupMap,
    R = RankBitVector,
    Q = SparseTableRmq,
> {
    csa: C,
    doc_border: B,
    dup_map: M,
    tails: R,
    weights: Vec<u64>,
    weights_rmq: Q,
    documents: Vec<u64>,
    levels: usize,
    weight_bias: u64,
}

impl<C, B, M, R, Q> TopDownIndex<C, B, M, R, Q>
where
    C: CompressedSuffixArray,
    B: RankSupport,
    M: DuplicateRangeMap,
    R: RankSupport,
    Q: RangeMaxQuery,
{
    /// Assembles an index, checking that the parts agree with each other.
    ///
    /// The configuration is read once; later changes to it do not affect
    /// the index.
    pub fn new(parts: TopDownParts<C, B, M, R, Q>, config: &TextIndexConfig) -> TextResult<Self> {
        config.validate()?;
        let levels = config.levels();
        let TopDownParts {
            csa,
            doc_border,
            dup_map,
            tails,
            weights,
            weights_rmq,
            documents,
        } = parts;

        if tails.len() % levels != 0 {
            return Err(TextError::InconsistentIndex(format!(
                "tails length {} is not a multiple of {} levels",
                tails.len(),
                levels
            )));
        }

        let candidates = tails.rank(tails.len());
        if weights.len() != candidates || documents.len() != candidates {
            return Err(TextError::InconsistentIndex(format!(
                "{} candidates in tails but {} weights and {} documents",
                candidates,
                weights.len(),
                documents.len()
            )));
        }

        if weights_rmq.len() != weights.len() {
            return Err(TextError::InconsistentIndex(format!(
                "range maximum structure covers {} of {} weights",
                weights_rmq.len(),
                weights.len()
            )));
        }

        if doc_border.len() < csa.size() {
            return Err(TextError::InconsistentIndex(format!(
                "document border covers {} of {} suffixes",
                doc_border.len(),
                csa.size()
            )));
        }

        log::debug!(
            "Top-down index assembled: {} suffixes, {} candidates, {} levels",
            csa.size(),
            candidates,
            levels
        );

        Ok(TopDownIndex {
            csa,
            doc_border,
            dup_map,
            tails,
            weights,
            weights_rmq,
            documents,
            levels,
            weight_bias: config.weight_bias(),
        })
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    pub fn weight_bias(&self) -> u64 {
        self.weight_bias
    }

    /// Number of candidate occurrences.
    pub fn candidate_count(&self) -> usize {
        self.weights.len()
    }

    /// Number of documents.
    pub fn doc_cnt(&self) -> u64 {
        self.doc_border.rank(self.csa.size()) as u64
    }

    /// Number of text positions that do not terminate a document.
    pub fn word_cnt(&self) -> u64 {
        (self.csa.size() as u64).saturating_sub(self.doc_cnt())
    }

    /// Starts a top-k query for `pattern`.
    ///
    /// See [`TopKIndex::topk`] for the meaning of the flags.
    pub fn top_down(
        &self,
        pattern: &[C::Token],
        multi_occ: bool,
        only_match: bool,
    ) -> TopDownTopKIterator<'_, Q> {
        let mut iter = TopDownTopKIterator::new(self.candidates(), multi_occ);
        if self.csa.size() == 0 {
            return iter;
        }

        let whole = LexRange::new(0, self.csa.size() - 1);
        let Some(matched) = self.csa.backward_search(whole, pattern) else {
            log::debug!("No occurrence of a pattern of length {}", pattern.len());
            return iter;
        };
        iter.matches = matched.len();
        if only_match {
            return iter;
        }

        let Some(dups) = self.dup_map.dup_range(matched) else {
            return iter;
        };

        let offset = self.tails.len() / self.levels;
        if dups.end >= offset {
            log::warn!(
                "Duplicate range [{}, {}] beyond a tails stratum of {}",
                dups.start,
                dups.end,
                offset
            );
            return iter;
        }
        let deepest = pattern.len().min(self.levels - 1);
        for depth in 0..=deepest {
            let start = self.tails.rank(depth * offset + dups.start);
            let end = self.tails.rank(depth * offset + dups.end + 1);
            iter.push(start, end);
        }

        log::debug!(
            "Top-down query: {} matches, {} seed intervals",
            iter.matches,
            iter.intervals.len()
        );
        iter
    }

    /// An exhausted iterator with no matches.
    pub(crate) fn no_matches(&self, multi_occ: bool) -> TopDownTopKIterator<'_, Q> {
        TopDownTopKIterator::new(self.candidates(), multi_occ)
    }

    fn candidates(&self) -> Candidates<'_, Q> {
        Candidates {
            weights: &self.weights,
            documents: &self.documents,
            rmq: &self.weights_rmq,
            bias: self.weight_bias,
        }
    }
}

impl<C, B, M, R, Q> TopKIndex for TopDownIndex<C, B, M, R, Q>
where
    C: CompressedSuffixArray,
    B: RankSupport,
    M: DuplicateRangeMap,
    R: RankSupport,
    Q: RangeMaxQuery,
{
    type Token = C::Token;

    fn topk<'a>(
        &'a self,
        pattern: &[C::Token],
        multi_occ: bool,
        only_match: bool,
    ) -> Box<dyn DocumentCursor<C::Token> + 'a> {
        Box::new(self.top_down(pattern, multi_occ, only_match))
    }

    fn doc_cnt(&self) -> u64 {
        TopDownIndex::doc_cnt(self)
    }

    fn word_cnt(&self) -> u64 {
        TopDownIndex::word_cnt(self)
    }
}

/// Candidate arrays of an index, borrowed by its iterators.
struct Candidates<'a, Q> {
    weights: &'a [u64],
    documents: &'a [u64],
    rmq: &'a Q,
    bias: u64,
}

impl<Q> Clone for Candidates<'_, Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q> Copy for Candidates<'_, Q> {}

impl<Q: RangeMaxQuery> Candidates<'_, Q> {
    /// Resolves the candidates `[start, end)` to their heaviest member.
    fn resolve(&self, start: usize, end: usize) -> Interval {
        let tails_id = self.rmq.rmq(start, end - 1);
        Interval {
            weight: self.weights[tails_id].saturating_add(self.bias),
            document: self.documents[tails_id],
            tails_id,
            start,
            end,
        }
    }
}

/// A non-empty range `[start, end)` of candidates, keyed by its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Interval {
    weight: u64,
    document: u64,
    tails_id: usize,
    start: usize,
    end: usize,
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            // equal weights: lower candidate first
            .then_with(|| other.tails_id.cmp(&self.tails_id))
            .then_with(|| other.start.cmp(&self.start))
            .then_with(|| other.end.cmp(&self.end))
            .then_with(|| other.document.cmp(&self.document))
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lazy iterator over the documents matching a pattern, heaviest first.
///
/// Each document is reported once, with the weight of its heaviest
/// candidate. Cloning is cheap: the frontier and the reported set are both
/// shared until one of the clones advances.
pub struct TopDownTopKIterator<'a, Q> {
    candidates: Candidates<'a, Q>,
    intervals: CowPriorityQueue<Interval>,
    reported: im::HashSet<u64>,
    matches: usize,
    multi_occ: bool,
}

impl<Q> Clone for TopDownTopKIterator<'_, Q> {
    fn clone(&self) -> Self {
        TopDownTopKIterator {
            candidates: self.candidates,
            intervals: self.intervals.clone(),
            reported: self.reported.clone(),
            matches: self.matches,
            multi_occ: self.multi_occ,
        }
    }
}

impl<'a, Q: RangeMaxQuery> TopDownTopKIterator<'a, Q> {
    fn new(candidates: Candidates<'a, Q>, multi_occ: bool) -> Self {
        TopDownTopKIterator {
            candidates,
            intervals: CowPriorityQueue::new(),
            reported: im::HashSet::new(),
            matches: 0,
            multi_occ,
        }
    }

    /// Number of suffixes the pattern matched, before any document
    /// de-duplication. Zero when the pattern does not occur.
    pub fn matches(&self) -> usize {
        self.matches
    }

    pub fn multi_occ(&self) -> bool {
        self.multi_occ
    }

    /// Number of documents reported so far.
    pub fn reported(&self) -> usize {
        self.reported.len()
    }

    fn push(&mut self, start: usize, end: usize) {
        if start < end {
            let interval = self.candidates.resolve(start, end);
            self.intervals.push(interval);
        }
    }

    // A discarded interval is still split so documents behind a repeated
    // maximum stay reachable.
    fn skip_reported(&mut self) {
        while let Some(top) = self.intervals.peek().copied() {
            if !self.reported.contains(&top.document) {
                break;
            }
            self.intervals.pop();
            self.push(top.start, top.tails_id);
            self.push(top.tails_id + 1, top.end);
        }
    }

    fn step(&mut self) {
        let Some(top) = self.intervals.pop() else {
            exhausted("TopDownTopKIterator");
        };
        self.reported.insert(top.document);
        self.push(top.start, top.tails_id);
        self.push(top.tails_id + 1, top.end);
        self.skip_reported();
    }
}

impl<Q: RangeMaxQuery> TopKCursor for TopDownTopKIterator<'_, Q> {
    type Item = DocumentHit;

    fn done(&self) -> bool {
        self.intervals.is_empty()
    }

    fn get(&self) -> DocumentHit {
        match self.intervals.peek() {
            Some(top) => DocumentHit::new(top.document, top.weight),
            None => exhausted("TopDownTopKIterator"),
        }
    }

    fn advance(&mut self) {
        self.step();
    }
}

impl<T, Q: RangeMaxQuery> DocumentCursor<T> for TopDownTopKIterator<'_, Q> {
    fn extract_snippet(&self, _k: usize) -> TextResult<Vec<T>> {
        Err(TextError::Unsupported("extract_snippet"))
    }
}

impl<Q: RangeMaxQuery> Iterator for TopDownTopKIterator<'_, Q> {
    type Item = DocumentHit;

    fn next(&mut self) -> Option<DocumentHit> {
        if self.done() {
            return None;
        }
        let hit = self.get();
        self.step();
        Some(hit)
    }
}
