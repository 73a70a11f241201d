//! Read-only views of a session for presentation layers.

use serde::Serialize;

use sq_core::{Checkpoint, Profile, VirtueTally};

use crate::phase::Phase;

/// Position within a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Zero-based index of the current checkpoint.
    pub index: usize,
    /// Number of checkpoints in the quest.
    pub total: usize,
}

impl Progress {
    /// Create a progress marker.
    pub fn new(index: usize, total: usize) -> Self {
        Self { index, total }
    }

    /// Fraction of checkpoints answered, in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.index.min(self.total) as f64) / (self.total as f64)
    }

    /// One-based chapter number being played.
    pub fn chapter(&self) -> usize {
        (self.index + 1).min(self.total)
    }

    /// Label like `Chapter 2 of 3`.
    pub fn label(&self) -> String {
        format!("Chapter {} of {}", self.chapter(), self.total)
    }
}

/// Everything a front end needs to draw the current screen.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    /// Current phase.
    pub phase: Phase,
    /// Selected profile, if any.
    pub profile: Option<&'a Profile>,
    /// Checkpoint to answer, while playing.
    pub checkpoint: Option<&'a Checkpoint>,
    /// Position in the quest, if a profile is selected.
    pub progress: Option<Progress>,
    /// Virtue totals so far.
    pub virtues: &'a VirtueTally,
}
