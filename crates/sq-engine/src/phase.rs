//! The coarse state of a playthrough.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
///
/// `Selecting -> Playing -> Complete -> Selecting` is the only cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No profile chosen yet.
    #[default]
    Selecting,
    /// Answering checkpoints.
    Playing,
    /// Every checkpoint has been answered.
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selecting => write!(f, "selecting"),
            Self::Playing => write!(f, "playing"),
            Self::Complete => write!(f, "complete"),
        }
    }
}
