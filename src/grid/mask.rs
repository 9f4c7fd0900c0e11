//! Punch validity tracking
//!
//! A diagonal crease passes exactly through the cells it invalidates: the
//! paper is cut by the fold line there, so no hole can ever be punched at
//! those coordinates. Invalidation is monotone — once false, a cell stays
//! false for the rest of the run, even if later folds stack tokens onto it.

use super::{Coord, GRID_SIZE};

/// Per-cell punchability, all true on an unfolded sheet
#[derive(Debug, Clone)]
pub struct ValidityMask {
    valid: Vec<bool>,
}

impl ValidityMask {
    pub fn new() -> Self {
        ValidityMask {
            valid: vec![true; (GRID_SIZE * GRID_SIZE) as usize],
        }
    }

    /// Permanently mark a cell as unpunchable
    pub fn invalidate(&mut self, coord: Coord) {
        self.valid[coord.index()] = false;
    }

    pub fn is_valid(&self, coord: Coord) -> bool {
        self.valid[coord.index()]
    }
}

impl Default for ValidityMask {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_all_valid() {
        let mask = ValidityMask::new();
        assert!(mask.is_valid(Coord::new(1, 1)));
        assert!(mask.is_valid(Coord::new(6, 6)));
    }

    #[test]
    fn test_invalidate_is_permanent() {
        let mut mask = ValidityMask::new();
        mask.invalidate(Coord::new(3, 3));
        assert!(!mask.is_valid(Coord::new(3, 3)));
        // Invalidating again changes nothing
        mask.invalidate(Coord::new(3, 3));
        assert!(!mask.is_valid(Coord::new(3, 3)));
        assert!(mask.is_valid(Coord::new(3, 4)));
    }
}
