//! Implementation of the chess board and the candidate move rules of each
//! piece.

pub mod board;
pub mod core;
pub mod movegen;
