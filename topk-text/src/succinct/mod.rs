//! In-memory reference implementations of the [`crate::primitives`]
//! contracts.
//!
//! These favor simplicity over space: a plain suffix array, a rank
//! directory of one counter per 64-bit word and a sparse table for range
//! maxima. Production deployments plug compressed structures in through the
//! same traits.

mod dup_map;
mod rank;
mod rmq;
mod suffix_array;

pub use dup_map::{IdentityDupMap, PrefixDupMap};
pub use rank::RankBitVector;
pub use rmq::SparseTableRmq;
pub use suffix_array::SuffixArray;
