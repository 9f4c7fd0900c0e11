//! Fold specification and scenario definitions

use crate::grid::Coord;
use std::fmt;

/// A single fold operation
///
/// Axis folds carry the fold line; whether the near-edge or far-edge side of
/// the paper moves is derived from the line at apply time. Diagonal folds
/// carry the crease intercept `b` of the line `col - row = b` (rising) or
/// `row + col = b` (falling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldSpec {
    /// Crease along a row; reflects the column index
    Horizontal { line: i32 },
    /// Crease along a column; reflects the row index
    Vertical { line: i32 },
    /// 45° crease `col - row = b`
    DiagonalRising { intercept: i32 },
    /// 45° crease `row + col = b`
    DiagonalFalling { intercept: i32 },
}

impl fmt::Display for FoldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldSpec::Horizontal { line } => write!(f, "Horizontal fold (line={})", line),
            FoldSpec::Vertical { line } => write!(f, "Vertical fold (line={})", line),
            FoldSpec::DiagonalRising { intercept } => {
                write!(f, "Rising diagonal fold (b={})", intercept)
            }
            FoldSpec::DiagonalFalling { intercept } => {
                write!(f, "Falling diagonal fold (b={})", intercept)
            }
        }
    }
}

/// A complete run: the fold sequence plus the punch coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub folds: Vec<FoldSpec>,
    pub punch: Coord,
}
