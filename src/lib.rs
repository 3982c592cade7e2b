//! Counting placements of a chess-piece multiset on an M×N board so that no
//! placed piece attacks another (the chess "independence" game).

pub mod attacks;
pub mod board;
pub mod coord;
pub mod pieces;
pub mod problem;
pub mod search;
pub mod solution;
pub mod state;
