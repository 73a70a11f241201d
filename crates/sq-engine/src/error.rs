//! Error types for the quest engine.

use thiserror::Error;

use crate::phase::Phase;

/// Result type for quest operations.
pub type QuestResult<T> = Result<T, QuestError>;

/// Errors that can occur while driving a quest session.
///
/// Every variant is a rejected call: the session is left unchanged.
#[derive(Debug, Error)]
pub enum QuestError {
    /// The requested profile id does not exist.
    #[error("profile not found: \"{0}\"")]
    ProfileNotFound(String),

    /// The profile exists but has no checkpoints to play.
    #[error("profile \"{0}\" has no checkpoints")]
    EmptyQuest(String),

    /// The operation is not allowed in the current phase.
    #[error("cannot {action} while {phase}")]
    IllegalState {
        /// What was attempted.
        action: &'static str,
        /// The phase the session was in.
        phase: Phase,
    },

    /// The chosen option does not exist on the current challenge.
    #[error("choice {choice} out of range, {available} option(s) available")]
    ChoiceOutOfRange {
        /// Zero-based index that was submitted.
        choice: usize,
        /// Number of options on the challenge.
        available: usize,
    },

    /// Console input could not be understood.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Content error.
    #[error("{0}")]
    Content(#[from] sq_core::ContentError),
}
