//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `place_unplace.rs` - Place/unplace correctness against a pairwise check
//! - `edge_cases.rs` - Smallest and largest boards, rank boundaries
//! - `proptest.rs` - Property-based tests
