//! Fold geometry
//!
//! Pure coordinate arithmetic for the three fold families. Axis creases sit
//! on the half-line boundary between `line` and `line + 1`, so reflection is
//! `2*line - i + 1`. Diagonal creases are actual 45° lattice lines:
//! `col - row = b` (rising) or `row + col = b` (falling); reflection across
//! them is an exact integer map with no division, so every cell mirrors to a
//! lattice cell for any integer intercept.

use crate::grid::{Coord, GRID_SIZE};

/// Which 45° crease family a diagonal fold uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagonalKind {
    Rising,
    Falling,
}

/// Axis folds at or below the midline move the near-edge side onto the rest;
/// lines past the midline move the far-edge side instead
pub fn axis_is_near(line: i32) -> bool {
    line <= GRID_SIZE / 2
}

/// Reflect a column index across the crease between `line` and `line + 1`
pub fn reflect_col(line: i32, col: i32) -> i32 {
    2 * line - col + 1
}

/// Reflect a row index across the crease between `line` and `line + 1`
pub fn reflect_row(line: i32, row: i32) -> i32 {
    2 * line - row + 1
}

/// Signed offset of a cell from the crease: zero on the crease, negative on
/// the small side, positive on the large side
pub fn crease_offset(kind: DiagonalKind, cell: Coord, intercept: i32) -> i32 {
    match kind {
        DiagonalKind::Rising => cell.col - cell.row - intercept,
        DiagonalKind::Falling => cell.row + cell.col - intercept,
    }
}

/// Mirror a cell across a diagonal crease
///
/// Crease cells mirror to themselves. The result can lie off the board;
/// callers decide what to do with out-of-bounds mirrors.
pub fn mirror(kind: DiagonalKind, cell: Coord, intercept: i32) -> Coord {
    match kind {
        DiagonalKind::Rising => Coord::new(cell.col - intercept, cell.row + intercept),
        DiagonalKind::Falling => Coord::new(intercept - cell.col, intercept - cell.row),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::all_coords;

    #[test]
    fn test_near_far_threshold() {
        assert!(axis_is_near(1));
        assert!(axis_is_near(3));
        assert!(!axis_is_near(4));
        assert!(!axis_is_near(5));
    }

    #[test]
    fn test_axis_reflection_examples() {
        // line=2: column 1 reflects to 4, column 2 to 3
        assert_eq!(reflect_col(2, 1), 4);
        assert_eq!(reflect_col(2, 2), 3);
        // line=4 far case: column 6 reflects to 3, column 5 to 4
        assert_eq!(reflect_col(4, 6), 3);
        assert_eq!(reflect_col(4, 5), 4);
        assert_eq!(reflect_row(3, 1), 6);
    }

    #[test]
    fn test_mirror_is_involution() {
        for kind in [DiagonalKind::Rising, DiagonalKind::Falling] {
            for b in -5..=12 {
                for cell in all_coords() {
                    let mirrored = mirror(kind, cell, b);
                    assert_eq!(mirror(kind, mirrored, b), cell);
                }
            }
        }
    }

    #[test]
    fn test_mirror_negates_crease_offset() {
        for kind in [DiagonalKind::Rising, DiagonalKind::Falling] {
            for b in -5..=12 {
                for cell in all_coords() {
                    let mirrored = mirror(kind, cell, b);
                    assert_eq!(
                        crease_offset(kind, mirrored, b),
                        -crease_offset(kind, cell, b)
                    );
                }
            }
        }
    }

    #[test]
    fn test_crease_cells_mirror_to_themselves() {
        for cell in all_coords() {
            let b = cell.col - cell.row;
            assert_eq!(crease_offset(DiagonalKind::Rising, cell, b), 0);
            assert_eq!(mirror(DiagonalKind::Rising, cell, b), cell);

            let b = cell.row + cell.col;
            assert_eq!(crease_offset(DiagonalKind::Falling, cell, b), 0);
            assert_eq!(mirror(DiagonalKind::Falling, cell, b), cell);
        }
    }

    #[test]
    fn test_rising_mirror_at_main_diagonal_is_transpose() {
        assert_eq!(
            mirror(DiagonalKind::Rising, Coord::new(2, 5), 0),
            Coord::new(5, 2)
        );
    }

    #[test]
    fn test_falling_mirror_example() {
        // Crease row + col = 7 maps (2, 1) to (6, 5)
        assert_eq!(
            mirror(DiagonalKind::Falling, Coord::new(2, 1), 7),
            Coord::new(6, 5)
        );
    }
}
