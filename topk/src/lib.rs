//! # topk - Lazy Best-First Top-K Retrieval
//!
//! Shared building blocks for the top-k crates of this workspace:
//!
//! - [`cursor`] - the pull-based `done` / `get` / `advance` result protocol
//! - [`collections`] - the copy-on-write priority queue used as search frontier
//! - [`errors`] - error kinds and the `TopKError` type
//!
//! The spatial (`topk_spatial`) and document (`topk_text`) iterators are
//! built on these. Both perform work only when advanced and never sort or
//! materialize the full result set.
//!
//! ```rust
//! use topk::collections::CowPriorityQueue;
//!
//! let mut frontier: CowPriorityQueue<(u64, &str)> = CowPriorityQueue::new();
//! frontier.push((7, "b"));
//! frontier.push((9, "a"));
//! assert_eq!(frontier.pop(), Some((9, "a")));
//! ```

pub mod collections;
pub mod common;
pub mod cursor;
pub mod errors;

pub use collections::CowPriorityQueue;
pub use cursor::{CursorIter, TopKCursor};
pub use errors::{ErrorKind, TopKError, TopKResult};
