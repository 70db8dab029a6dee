//! Public query surface of document indexes.

use serde::{Deserialize, Serialize};
use topk::cursor::TopKCursor;

use crate::error::TextResult;

/// A document reported by a top-k query together with its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentHit {
    pub document: u64,
    pub weight: u64,
}

impl DocumentHit {
    pub fn new(document: u64, weight: u64) -> Self {
        DocumentHit { document, weight }
    }
}

/// Cursor over the documents of a top-k query, best first.
pub trait DocumentCursor<T>: TopKCursor<Item = DocumentHit> {
    /// Returns the `k` tokens around the current result.
    fn extract_snippet(&self, k: usize) -> TextResult<Vec<T>>;
}

/// A document index answering top-k queries.
pub trait TopKIndex {
    type Token;

    /// Starts a top-k query for `pattern`.
    ///
    /// With `only_match` set the pattern is only located and the returned
    /// cursor is exhausted from the start. `multi_occ` asks for documents
    /// with more than one occurrence; indexes may ignore it.
    fn topk<'a>(
        &'a self,
        pattern: &[Self::Token],
        multi_occ: bool,
        only_match: bool,
    ) -> Box<dyn DocumentCursor<Self::Token> + 'a>;

    /// Number of documents.
    fn doc_cnt(&self) -> u64;

    /// Number of text positions that do not terminate a document.
    fn word_cnt(&self) -> u64;
}
