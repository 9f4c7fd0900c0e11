//! The unfolded hole grid
//!
//! Produced once, at punch time: every token stacked at the queried cell
//! marks its original coordinate as punched.

use super::{Coord, GRID_SIZE};

/// Boolean grid of punched original positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGrid {
    punched: Vec<bool>,
}

impl ResultGrid {
    pub fn new() -> Self {
        ResultGrid {
            punched: vec![false; (GRID_SIZE * GRID_SIZE) as usize],
        }
    }

    /// Mark an original coordinate as punched
    pub fn mark(&mut self, coord: Coord) {
        self.punched[coord.index()] = true;
    }

    pub fn is_punched(&self, coord: Coord) -> bool {
        self.punched[coord.index()]
    }

    /// Number of punched cells
    pub fn hole_count(&self) -> usize {
        self.punched.iter().filter(|&&p| p).count()
    }

    /// Render as GRID_SIZE lines of space-separated 0/1 values
    pub fn render_lines(&self) -> Vec<String> {
        (1..=GRID_SIZE)
            .map(|row| {
                (1..=GRID_SIZE)
                    .map(|col| {
                        if self.is_punched(Coord::new(row, col)) {
                            "1"
                        } else {
                            "0"
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

impl Default for ResultGrid {
    fn default() -> Self {
        Self::new()
    }
}
