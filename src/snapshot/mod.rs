// Fold history for step-by-step replay

use crate::engine::engine::PaperState;
use crate::grid::mask::ValidityMask;
use crate::grid::stacked::StackedGrid;
use crate::parser::spec::FoldSpec;

/// The paper state after one fold step
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// 0 is the unfolded sheet; step k is the state after the k-th fold
    pub step_index: usize,
    /// Human-readable step title, e.g. "Horizontal fold (line=2)"
    pub label: String,
    /// The fold that produced this state; None for the initial sheet
    pub fold: Option<FoldSpec>,
    pub grid: StackedGrid,
    pub mask: ValidityMask,
}

impl Snapshot {
    pub fn new(step_index: usize, label: String, fold: Option<FoldSpec>, state: &PaperState) -> Self {
        Snapshot {
            step_index,
            label,
            fold,
            grid: state.grid.clone(),
            mask: state.mask.clone(),
        }
    }
}

/// Ordered fold history
///
/// A scenario produces at most a handful of 36-cell snapshots, so the history
/// is a plain growable list with no memory cap.
#[derive(Debug, Default)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
}

impl SnapshotManager {
    pub fn new() -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
        }
    }

    /// Append a snapshot to the history
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Get a snapshot by step index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// All snapshots, in step order
    pub fn all(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
