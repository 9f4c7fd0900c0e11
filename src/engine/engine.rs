// Fold application and punch query

use crate::engine::errors::SimError;
use crate::engine::geometry::{
    axis_is_near, crease_offset, mirror, reflect_col, reflect_row, DiagonalKind,
};
use crate::grid::mask::ValidityMask;
use crate::grid::result::ResultGrid;
use crate::grid::stacked::StackedGrid;
use crate::grid::{all_coords, Coord, GRID_SIZE};
use crate::parser::spec::{FoldSpec, Scenario};
use crate::snapshot::{Snapshot, SnapshotManager};

/// Output line when the punch coordinate lies on a diagonal crease
pub const BLOCKED_MESSAGE: &str = "Cannot punch hole at this position.";

/// Result of the punch query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PunchOutcome {
    /// The queried cell sits on a crease drawn by some diagonal fold
    Blocked,
    /// Original positions that end up with a hole once unfolded
    Holes(ResultGrid),
}

/// The mutable paper: token stacks plus the punch validity mask
#[derive(Debug, Clone, Default)]
pub struct PaperState {
    pub grid: StackedGrid,
    pub mask: ValidityMask,
}

impl PaperState {
    /// An unfolded sheet with every cell punchable
    pub fn new() -> Self {
        PaperState {
            grid: StackedGrid::new(),
            mask: ValidityMask::new(),
        }
    }

    /// Apply one fold, migrating tokens in place
    pub fn apply(&mut self, spec: &FoldSpec) {
        match *spec {
            FoldSpec::Horizontal { line } => self.apply_horizontal(line),
            FoldSpec::Vertical { line } => self.apply_vertical(line),
            FoldSpec::DiagonalRising { intercept } => {
                self.apply_diagonal(DiagonalKind::Rising, intercept)
            }
            FoldSpec::DiagonalFalling { intercept } => {
                self.apply_diagonal(DiagonalKind::Falling, intercept)
            }
        }
        debug_assert!(
            self.grid.is_conserved(),
            "{} broke token conservation",
            spec
        );
    }

    /// Horizontal fold: the crease is along a row, the column index reflects
    fn apply_horizontal(&mut self, line: i32) {
        let cols: Vec<i32> = if axis_is_near(line) {
            (1..=line).collect()
        } else {
            ((line + 1)..=GRID_SIZE).rev().collect()
        };

        for col in cols {
            for row in 1..=GRID_SIZE {
                let source = Coord::new(row, col);
                if self.grid.is_empty(source) {
                    continue;
                }
                let dest = Coord::new(row, reflect_col(line, col));
                self.grid.move_all(source, dest);
            }
        }
    }

    /// Vertical fold: reflects the row index, column unchanged
    fn apply_vertical(&mut self, line: i32) {
        let rows: Vec<i32> = if axis_is_near(line) {
            (1..=line).collect()
        } else {
            ((line + 1)..=GRID_SIZE).rev().collect()
        };

        for row in rows {
            for col in 1..=GRID_SIZE {
                let source = Coord::new(row, col);
                if self.grid.is_empty(source) {
                    continue;
                }
                let dest = Coord::new(reflect_row(line, row), col);
                self.grid.move_all(source, dest);
            }
        }
    }

    /// Diagonal fold in three passes: mark the crease, count the sides,
    /// fold the side with fewer stacked cells onto the other
    fn apply_diagonal(&mut self, kind: DiagonalKind, intercept: i32) {
        // Pass 1: the crease cuts through these cells; they can never be punched
        for cell in all_coords() {
            if crease_offset(kind, cell, intercept) == 0 {
                self.mask.invalidate(cell);
            }
        }

        // Pass 2: classify non-empty cells; crease cells count toward the
        // large side
        let mut small = Vec::new();
        let mut large = Vec::new();
        for cell in self.grid.non_empty_cells() {
            if crease_offset(kind, cell, intercept) < 0 {
                small.push(cell);
            } else {
                large.push(cell);
            }
        }

        // Pass 3: ties fold the small side
        let moved = if small.len() <= large.len() {
            small
        } else {
            large
        };
        for source in moved {
            let dest = mirror(kind, source, intercept);
            // Crease cells mirror to themselves and stay put; mirrors off the
            // board cannot be folded, so those tokens stay put too
            if dest == source || !dest.in_bounds() {
                continue;
            }
            self.grid.move_all(source, dest);
        }
    }

    /// Punch a hole at `target` and expand it back onto the unfolded sheet
    ///
    /// Drains the target cell's token stack; intended to be called once,
    /// after all folds.
    pub fn punch(&mut self, target: Coord) -> PunchOutcome {
        if !target.in_bounds() || !self.mask.is_valid(target) {
            return PunchOutcome::Blocked;
        }
        let mut result = ResultGrid::new();
        for token in self.grid.take_tokens(target) {
            result.mark(token);
        }
        PunchOutcome::Holes(result)
    }
}

/// Runs a whole scenario and records the fold history
///
/// [`Simulator::run`] applies every fold in input order, snapshotting the
/// paper after each one. The history can then be navigated with
/// [`Simulator::step_forward`] / [`Simulator::step_backward`] without
/// re-running anything; [`Simulator::punch`] always answers from the final
/// folded state regardless of the current history position.
#[derive(Debug)]
pub struct Simulator {
    scenario: Scenario,
    state: PaperState,
    history: SnapshotManager,
    history_position: usize,
}

impl Simulator {
    pub fn new(scenario: Scenario) -> Self {
        Simulator {
            scenario,
            state: PaperState::new(),
            history: SnapshotManager::new(),
            history_position: 0,
        }
    }

    /// Apply the whole fold sequence, recording a snapshot per step
    pub fn run(&mut self) {
        self.history.push(Snapshot::new(0, "Original paper".to_string(), None, &self.state));

        let folds = self.scenario.folds.clone();
        for (i, fold) in folds.iter().enumerate() {
            self.state.apply(fold);
            self.history
                .push(Snapshot::new(i + 1, fold.to_string(), Some(*fold), &self.state));
        }

        self.history_position = self.history.len().saturating_sub(1);
    }

    /// Punch at the scenario's query coordinate, draining the final state
    pub fn punch(&mut self) -> PunchOutcome {
        self.state.punch(self.scenario.punch)
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// The snapshot currently selected by history navigation
    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.history.get(self.history_position)
    }

    /// All recorded snapshots, in step order
    pub fn snapshots(&self) -> &[Snapshot] {
        self.history.all()
    }

    pub fn history_position(&self) -> usize {
        self.history_position
    }

    pub fn total_snapshots(&self) -> usize {
        self.history.len()
    }

    /// Move one step later in the fold history
    pub fn step_forward(&mut self) -> Result<(), SimError> {
        if self.history_position + 1 < self.history.len() {
            self.history_position += 1;
            Ok(())
        } else {
            Err(SimError::NoMoreSteps {
                position: self.history_position,
                total: self.history.len(),
            })
        }
    }

    /// Move one step earlier in the fold history
    pub fn step_backward(&mut self) -> Result<(), SimError> {
        if self.history_position > 0 {
            self.history_position -= 1;
            Ok(())
        } else {
            Err(SimError::AlreadyAtStart)
        }
    }

    /// Jump back to the unfolded sheet
    pub fn rewind_to_start(&mut self) {
        self.history_position = 0;
    }
}
