//! Fold simulation engine
//!
//! This module provides the core fold logic:
//! - [`geometry`]: pure reflection and crease-side classification
//! - [`engine`]: [`engine::PaperState`] mutation per fold, plus the
//!   [`engine::Simulator`] that records a snapshot after every step
//! - [`errors`]: history navigation errors
//!
//! # Execution Model
//!
//! The engine applies folds strictly in input order, fully draining each
//! source cell before moving to the next. After each fold a snapshot of the
//! whole paper state is taken, so the fold history can be replayed forward
//! and backward in the TUI. The punch query always answers from the final
//! folded state.

pub mod engine;
pub mod errors;
pub mod geometry;
