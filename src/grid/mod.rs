//! Paper state model for the fold simulator
//!
//! This module provides the core state abstractions:
//! - [`stacked`]: The paper grid itself, with a token queue per cell
//! - [`mask`]: Per-cell punch validity (cells on a diagonal crease can never be punched)
//! - [`result`]: The unfolded hole grid produced by a punch query
//!
//! # Coordinates
//!
//! All coordinates are 1-indexed `(row, col)` pairs in `[1, GRID_SIZE]`,
//! matching the input format. The grid size is a compile-time constant:
//! the simulation models a fixed 6×6 sheet of paper.

pub mod mask;
pub mod result;
pub mod stacked;

use std::fmt;

/// Side length of the paper grid
pub const GRID_SIZE: i32 = 6;

/// A 1-indexed (row, col) position on the paper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    /// Check that this coordinate lies on the paper
    pub fn in_bounds(&self) -> bool {
        (1..=GRID_SIZE).contains(&self.row) && (1..=GRID_SIZE).contains(&self.col)
    }

    /// Flat index into a GRID_SIZE × GRID_SIZE array
    ///
    /// Callers must only index with in-bounds coordinates; this is upheld by
    /// construction everywhere in the engine (out-of-bounds mirrors are
    /// filtered before any cell access).
    pub(crate) fn index(&self) -> usize {
        debug_assert!(self.in_bounds(), "out-of-bounds coordinate {:?}", self);
        ((self.row - 1) * GRID_SIZE + (self.col - 1)) as usize
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Iterate every cell of the grid in row-major order
pub fn all_coords() -> impl Iterator<Item = Coord> {
    (1..=GRID_SIZE).flat_map(|row| (1..=GRID_SIZE).map(move |col| Coord::new(row, col)))
}
