//! # Introduction
//!
//! punchfold simulates folding a 6×6 sheet of gridded paper along
//! horizontal, vertical, and 45°-diagonal creases, then punching a single
//! hole and unfolding: which original cells end up punched?  Every fold step
//! is snapshotted, and the fold history can be replayed in a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Input → ScenarioParser → Scenario → Simulator → Snapshots → grid / TUI
//! ```
//!
//! 1. [`parser`] — tokenises the integer stream and builds a
//!    [`parser::spec::Scenario`] of tagged fold operations.
//! 2. [`engine`] — applies the folds in order, migrating per-cell token
//!    stacks, and answers the punch query.
//! 3. [`grid`] — the paper state model: [`grid::stacked::StackedGrid`]
//!    token stacks, the [`grid::mask::ValidityMask`] crease mask, and the
//!    [`grid::result::ResultGrid`] hole pattern.
//! 4. [`snapshot`] — per-step fold history for forward/backward replay.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Fold families
//!
//! Horizontal folds reflect the column index across `line`; vertical folds
//! reflect the row index. Diagonal folds mark their crease cells permanently
//! unpunchable, then fold the side with fewer stacked cells onto the other.

pub mod engine;
pub mod grid;
pub mod parser;
pub mod snapshot;
pub mod ui;
