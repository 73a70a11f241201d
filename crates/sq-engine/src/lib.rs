//! Quest progress engine for Saint Quest.
//!
//! A [`Session`] moves through three phases: the player selects a profile,
//! answers that profile's checkpoints one by one while virtue points
//! accumulate, and reaches completion. [`QuestEngine`] pairs a session with
//! the catalog it plays against, and [`Console`] drives an engine from lines
//! of text.

pub mod console;
pub mod engine;
pub mod error;
pub mod phase;
pub mod session;
pub mod snapshot;

pub use console::Console;
pub use engine::QuestEngine;
pub use error::{QuestError, QuestResult};
pub use phase::Phase;
pub use session::{AnswerOutcome, Session};
pub use snapshot::{Progress, Snapshot};
