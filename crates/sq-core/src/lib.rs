//! Content model for Saint Quest: profiles, checkpoints, challenges, and virtues.
//!
//! This crate defines the read-only data a quest is played against. A
//! [`Catalog`] is loaded once from two JSON tables (or from the built-in
//! content) and validated before any session uses it.

/// The loaded, read-only content tables.
pub mod catalog;
/// Story checkpoints and the challenges they carry.
pub mod checkpoint;
/// Where content is loaded from.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Selectable hero profiles.
pub mod profile;
/// Consistency checks over a loaded catalog.
pub mod validate;
/// The four virtues and the running tally of them.
pub mod virtue;

/// Re-export the catalog.
pub use catalog::Catalog;
/// Re-export checkpoint types.
pub use checkpoint::{Challenge, ChallengeBody, ChallengeKind, Checkpoint};
/// Re-export content configuration.
pub use config::ContentConfig;
/// Re-export error types.
pub use error::{ContentError, ContentResult};
/// Re-export the profile type.
pub use profile::Profile;
/// Re-export validation types.
pub use validate::{ValidationIssue, validate_catalog};
/// Re-export virtue types.
pub use virtue::{Reward, Virtue, VirtueTally};
