//! Errors for fold history navigation
//!
//! Applying folds and punching cannot fail; the only fallible operations are
//! stepping through the recorded history past either end.

use std::fmt;

/// History navigation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Stepped forward past the last recorded snapshot
    NoMoreSteps { position: usize, total: usize },

    /// Stepped backward while already at the initial state
    AlreadyAtStart,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NoMoreSteps { position, total } => {
                write!(
                    f,
                    "Already at the last step ({} of {})",
                    position + 1,
                    total
                )
            }
            SimError::AlreadyAtStart => {
                write!(f, "Already at the initial state")
            }
        }
    }
}

impl std::error::Error for SimError {}
