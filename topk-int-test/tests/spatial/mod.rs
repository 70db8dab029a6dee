//! Spatial integration test module.
//!
//! These tests check the k3-treap queries against brute-force scans of the
//! points the treap was built from.

mod count_test;
mod range_test;
mod scenario_test;
mod split_test;
mod top_k_test;
