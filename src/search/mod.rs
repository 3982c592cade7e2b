//! The placement search: a backtracking engine run once per distinct
//! ordering of the piece multiset.

pub mod engine;
pub mod orderings;

pub use orderings::play;
