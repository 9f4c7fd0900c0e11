//! The stacked paper grid
//!
//! Each cell owns an ordered queue of tokens, where a token is the original
//! pre-fold coordinate of one paper layer currently lying at that cell.
//! Initially every cell holds exactly one token: its own coordinate.
//!
//! Folding only ever moves tokens between cells via [`StackedGrid::move_all`],
//! so the multiset union of all queues is always exactly the full set of
//! original coordinates (no duplication, no loss). [`StackedGrid::census`]
//! exposes that invariant for conservation checks.

use super::{all_coords, Coord, GRID_SIZE};
use rustc_hash::FxHashMap;

/// A fixed-size grid of cells, each stacking the paper layers located there
#[derive(Debug, Clone)]
pub struct StackedGrid {
    cells: Vec<Vec<Coord>>,
}

impl StackedGrid {
    /// Create an unfolded sheet: every cell stacks only itself
    pub fn new() -> Self {
        let cells = all_coords().map(|c| vec![c]).collect();
        StackedGrid { cells }
    }

    /// Append every token from `source` onto `dest`, leaving `source` empty
    ///
    /// Dest's prior tokens are preserved ahead of the appended ones; the punch
    /// query only checks membership, so relative order never matters. Moving a
    /// cell onto itself is a no-op.
    pub fn move_all(&mut self, source: Coord, dest: Coord) {
        if source == dest {
            return;
        }
        let moved = std::mem::take(&mut self.cells[source.index()]);
        self.cells[dest.index()].extend(moved);
    }

    /// True iff the cell currently holds no paper layer
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.cells[coord.index()].is_empty()
    }

    /// Read-only view of the tokens stacked at a cell
    pub fn tokens(&self, coord: Coord) -> &[Coord] {
        &self.cells[coord.index()]
    }

    /// Drain the tokens stacked at a cell (used once, at punch time)
    pub fn take_tokens(&mut self, coord: Coord) -> Vec<Coord> {
        std::mem::take(&mut self.cells[coord.index()])
    }

    /// Number of layers stacked at a cell
    pub fn depth(&self, coord: Coord) -> usize {
        self.cells[coord.index()].len()
    }

    /// Total number of tokens across all cells
    pub fn total_tokens(&self) -> usize {
        self.cells.iter().map(|c| c.len()).sum()
    }

    /// All currently non-empty cells, in row-major order
    pub fn non_empty_cells(&self) -> Vec<Coord> {
        all_coords().filter(|c| !self.is_empty(*c)).collect()
    }

    /// Count how many times each original coordinate appears across the grid
    ///
    /// On a well-formed grid every original coordinate appears exactly once.
    pub fn census(&self) -> FxHashMap<Coord, usize> {
        let mut counts = FxHashMap::default();
        for cell in &self.cells {
            for token in cell {
                *counts.entry(*token).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Check the conservation invariant: one token per original coordinate
    pub fn is_conserved(&self) -> bool {
        let counts = self.census();
        counts.len() == (GRID_SIZE * GRID_SIZE) as usize && counts.values().all(|&n| n == 1)
    }
}

impl Default for StackedGrid {
    fn default() -> Self {
        Self::new()
    }
}
