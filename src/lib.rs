//! Randomized min-conflicts solver and validator for the N-Queens problem
//!
//! A board of size `n` is described by a [`Placement`](board::Placement): one
//! queen per row, with the queen's column stored per row. Conflict counting
//! measures how many queens attack each other, the solver repairs a random
//! placement one queen at a time, and the validator classifies caller-supplied
//! placements.

#![forbid(unsafe_code)]

/// Stochastic search, random selection and validation
pub mod algorithm;
/// Board representation and conflict counting
pub mod board;
/// Input/output operations, configuration and error handling
pub mod io;

pub use io::error::{QueensError, Result};
