//! # topk_text - Top-K Document Retrieval
//!
//! Reports the documents containing a token pattern in decreasing weight
//! order, each document once, by walking an implicit max-heap built from
//! range-maximum queries over a weight array.
//!
//! ## Features
//!
//! - **Top-Down Index**: [`TopDownIndex`] assembles a compressed suffix
//!   array, a duplicate-range map, a depth-stratified tails bit vector and a
//!   weight array into a queryable index
//! - **Pluggable Structures**: the index only sees the traits of
//!   [`primitives`]; [`succinct`] ships plain reference implementations
//! - **Lazy Results**: [`TopDownTopKIterator`] does only the work needed for
//!   the next document and clones in O(1)
//! - **Flat Index**: [`FlatIndexBuilder`] builds a ready-to-query index from
//!   weighted documents
//!
//! ## Quick Start
//!
//! ```rust
//! use topk_text::{FlatIndexBuilder, TextIndexConfig, TopKCursor, TopKIndex};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let index = FlatIndexBuilder::new(b'$')
//!     .document(b"the quick brown fox".to_vec(), 4)
//!     .document(b"a quick look".to_vec(), 9)
//!     .document(b"slow and brown".to_vec(), 6)
//!     .build(&TextIndexConfig::default())?;
//!
//! let mut cursor = index.topk(b"quick", false, false);
//! let mut documents = Vec::new();
//! while !cursor.done() {
//!     documents.push(cursor.get().document);
//!     cursor.advance();
//! }
//! assert_eq!(documents, vec![1, 0]);
//! assert_eq!(index.doc_cnt(), 3);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod flat;
pub mod index;
pub mod primitives;
pub mod succinct;
pub mod top_down;

pub use config::TextIndexConfig;
pub use error::{TextError, TextResult};
pub use flat::{FlatIndex, FlatIndexBuilder};
pub use index::{DocumentCursor, DocumentHit, TopKIndex};
pub use primitives::{
    CompressedSuffixArray, DupRange, DuplicateRangeMap, LexRange, RangeMaxQuery, RankSupport,
};
pub use succinct::{IdentityDupMap, PrefixDupMap, RankBitVector, SparseTableRmq, SuffixArray};
pub use top_down::{TopDownIndex, TopDownParts, TopDownTopKIterator};

pub use topk::cursor::TopKCursor;

#[cfg(test)]
mod tests {
    #[ctor::ctor]
    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}
