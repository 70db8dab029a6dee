//! Document retrieval integration test module.
//!
//! These tests check top-down document queries against brute-force scans of
//! the indexed documents.

mod top_down_test;
