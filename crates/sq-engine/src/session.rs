//! The mutable state of one playthrough and its transitions.
//!
//! A `Session` never holds content itself; each operation is given the
//! [`Catalog`] it plays against. Every rejected call leaves the session
//! exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use sq_core::{Catalog, ChallengeKind, Checkpoint, Profile, Reward, VirtueTally};

use crate::error::{QuestError, QuestResult};
use crate::phase::Phase;
use crate::snapshot::Progress;

/// The result of answering a checkpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the submitted choice was the correct one.
    pub correct: bool,
    /// Kind of the challenge that was answered.
    pub kind: ChallengeKind,
    /// Virtue points added (empty on a wrong answer).
    pub reward: Reward,
    /// Whether this answer finished the quest.
    pub completed: bool,
}

impl AnswerOutcome {
    /// Feedback line for the player.
    pub fn feedback(&self) -> &'static str {
        self.kind.feedback(self.correct)
    }
}

/// A single player's progress through a quest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    profile: Option<String>,
    index: usize,
    virtues: VirtueTally,
    phase: Phase,
}

impl Session {
    /// A fresh session waiting for a profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Id of the selected profile, if any.
    pub fn profile_id(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Zero-based index of the current checkpoint.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Virtue totals so far.
    pub fn virtues(&self) -> &VirtueTally {
        &self.virtues
    }

    /// The selected profile, looked up in `catalog`.
    pub fn current_profile<'c>(&self, catalog: &'c Catalog) -> Option<&'c Profile> {
        self.profile.as_deref().and_then(|id| catalog.profile(id))
    }

    /// The checkpoint to answer next, only while playing.
    pub fn current_checkpoint<'c>(&self, catalog: &'c Catalog) -> Option<&'c Checkpoint> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.checkpoints(catalog).get(self.index)
    }

    /// Position in the selected quest, if a profile is selected.
    pub fn progress(&self, catalog: &Catalog) -> Option<Progress> {
        self.profile.as_ref()?;
        Some(Progress::new(self.index, self.checkpoints(catalog).len()))
    }

    /// Choose a profile and start its quest.
    ///
    /// Only legal while selecting. Resets the index and every virtue to zero.
    pub fn select_profile(&mut self, catalog: &Catalog, id: &str) -> QuestResult<()> {
        self.expect_phase(Phase::Selecting, "select a profile")?;

        let profile = catalog
            .profile(id)
            .ok_or_else(|| QuestError::ProfileNotFound(id.to_string()))?;
        if catalog.checkpoints(id).is_empty() {
            return Err(QuestError::EmptyQuest(id.to_string()));
        }

        self.profile = Some(profile.id.clone());
        self.index = 0;
        self.virtues.reset();
        self.phase = Phase::Playing;
        debug!(profile = id, "profile selected");
        Ok(())
    }

    /// Answer the current checkpoint with the zero-based `choice`.
    ///
    /// A correct answer adds the checkpoint's reward to the virtue totals.
    /// Right or wrong, the session moves to the next checkpoint, and past
    /// the last one the phase becomes [`Phase::Complete`].
    pub fn submit_answer(&mut self, catalog: &Catalog, choice: usize) -> QuestResult<AnswerOutcome> {
        self.expect_phase(Phase::Playing, "submit an answer")?;

        let checkpoints = self.checkpoints(catalog);
        let checkpoint = checkpoints.get(self.index).ok_or_else(|| {
            QuestError::EmptyQuest(self.profile.clone().unwrap_or_default())
        })?;
        let challenge = &checkpoint.challenge;

        let available = challenge.options().len();
        if choice >= available {
            return Err(QuestError::ChoiceOutOfRange { choice, available });
        }

        let correct = challenge.is_correct(choice);
        let reward = if correct {
            self.virtues.apply(&challenge.reward);
            challenge.reward.clone()
        } else {
            Reward::new()
        };

        self.index += 1;
        let completed = self.index >= checkpoints.len();
        if completed {
            self.phase = Phase::Complete;
            info!(
                profile = self.profile.as_deref().unwrap_or_default(),
                virtues = %self.virtues,
                "quest complete"
            );
        }
        debug!(index = self.index, correct, "answer submitted");

        Ok(AnswerOutcome {
            correct,
            kind: challenge.kind(),
            reward,
            completed,
        })
    }

    /// Return to profile selection after finishing a quest.
    ///
    /// Only legal once complete. Clears the profile, index and virtues.
    pub fn restart(&mut self) -> QuestResult<()> {
        self.expect_phase(Phase::Complete, "restart")?;
        *self = Self::new();
        debug!("session restarted");
        Ok(())
    }

    fn checkpoints<'c>(&self, catalog: &'c Catalog) -> &'c [Checkpoint] {
        match self.profile.as_deref() {
            Some(id) => catalog.checkpoints(id),
            None => &[],
        }
    }

    fn expect_phase(&self, expected: Phase, action: &'static str) -> QuestResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(QuestError::IllegalState {
                action,
                phase: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sq_core::{Challenge, Virtue};

    use super::*;

    fn two_step_catalog() -> Catalog {
        Catalog::new(
            vec![Profile::new("joan", "St. Joan", "⚔️")],
            BTreeMap::from([(
                "joan".to_string(),
                vec![
                    Checkpoint::new(
                        "Voices",
                        "Domrémy",
                        Challenge::dilemma("Go?", ["Stay", "Go"], 1)
                            .with_reward(Virtue::Courage, 2),
                    ),
                    Checkpoint::new(
                        "Orléans",
                        "The siege",
                        Challenge::question("Year?", ["1429", "1515"], 0)
                            .with_reward(Virtue::Wisdom, 1)
                            .with_reward(Virtue::Faith, 1),
                    ),
                ],
            )]),
        )
    }

    fn playing() -> (Catalog, Session) {
        let catalog = two_step_catalog();
        let mut s = Session::new();
        s.select_profile(&catalog, "joan").unwrap();
        (catalog, s)
    }

    #[test]
    fn new_session_is_selecting() {
        let s = Session::new();
        assert_eq!(s.phase(), Phase::Selecting);
        assert!(s.profile_id().is_none());
        assert_eq!(s.index(), 0);
        assert!(s.virtues().is_empty());
    }

    #[test]
    fn select_profile_starts_playing() {
        let (catalog, s) = playing();
        assert_eq!(s.phase(), Phase::Playing);
        assert_eq!(s.profile_id(), Some("joan"));
        assert_eq!(s.current_profile(&catalog).unwrap().display_name, "St. Joan");
        assert_eq!(s.current_checkpoint(&catalog).unwrap().title, "Voices");
        assert_eq!(s.progress(&catalog), Some(Progress::new(0, 2)));
    }

    #[test]
    fn select_unknown_profile_is_rejected() {
        let catalog = two_step_catalog();
        let mut s = Session::new();
        let err = s.select_profile(&catalog, "nobody").unwrap_err();
        assert!(matches!(err, QuestError::ProfileNotFound(ref id) if id == "nobody"));
        assert_eq!(s, Session::new());
    }

    #[test]
    fn select_profile_without_checkpoints_is_rejected() {
        let catalog = Catalog::new(vec![Profile::new("empty", "Empty", "?")], BTreeMap::new());
        let mut s = Session::new();
        assert!(matches!(
            s.select_profile(&catalog, "empty"),
            Err(QuestError::EmptyQuest(_))
        ));
        assert_eq!(s.phase(), Phase::Selecting);
    }

    #[test]
    fn select_while_playing_is_rejected() {
        let (catalog, mut s) = playing();
        s.submit_answer(&catalog, 1).unwrap();
        let before = s.clone();
        assert!(matches!(
            s.select_profile(&catalog, "joan"),
            Err(QuestError::IllegalState { phase: Phase::Playing, .. })
        ));
        assert_eq!(s, before);
    }

    #[test]
    fn correct_answer_applies_reward() {
        let (catalog, mut s) = playing();
        let outcome = s.submit_answer(&catalog, 1).unwrap();
        assert!(outcome.correct);
        assert!(!outcome.completed);
        assert_eq!(outcome.feedback(), "A virtuous path!");
        assert_eq!(s.virtues().get(Virtue::Courage), 2);
        assert_eq!(s.index(), 1);
    }

    #[test]
    fn wrong_answer_still_advances() {
        let (catalog, mut s) = playing();
        let outcome = s.submit_answer(&catalog, 0).unwrap();
        assert!(!outcome.correct);
        assert!(outcome.reward.is_empty());
        assert!(s.virtues().is_empty());
        assert_eq!(s.index(), 1);
        assert_eq!(s.phase(), Phase::Playing);
    }

    #[test]
    fn last_answer_completes() {
        let (catalog, mut s) = playing();
        s.submit_answer(&catalog, 1).unwrap();
        let outcome = s.submit_answer(&catalog, 0).unwrap();
        assert!(outcome.completed);
        assert_eq!(outcome.feedback(), "Correct! +Virtue");
        assert_eq!(s.phase(), Phase::Complete);
        assert_eq!(s.index(), 2);
        assert!(s.current_checkpoint(&catalog).is_none());
        assert_eq!(s.virtues().total(), 4);
    }

    #[test]
    fn out_of_range_choice_is_rejected() {
        let (catalog, mut s) = playing();
        let before = s.clone();
        assert!(matches!(
            s.submit_answer(&catalog, 2),
            Err(QuestError::ChoiceOutOfRange { choice: 2, available: 2 })
        ));
        assert_eq!(s, before);
    }

    #[test]
    fn submit_while_selecting_is_rejected() {
        let catalog = two_step_catalog();
        let mut s = Session::new();
        assert!(matches!(
            s.submit_answer(&catalog, 0),
            Err(QuestError::IllegalState { phase: Phase::Selecting, .. })
        ));
        assert_eq!(s, Session::new());
    }

    #[test]
    fn submit_after_complete_is_rejected() {
        let (catalog, mut s) = playing();
        s.submit_answer(&catalog, 0).unwrap();
        s.submit_answer(&catalog, 0).unwrap();
        let before = s.clone();
        assert!(s.submit_answer(&catalog, 0).is_err());
        assert_eq!(s, before);
    }

    #[test]
    fn restart_only_when_complete() {
        let (catalog, mut s) = playing();
        assert!(matches!(
            s.restart(),
            Err(QuestError::IllegalState { phase: Phase::Playing, .. })
        ));
        s.submit_answer(&catalog, 1).unwrap();
        s.submit_answer(&catalog, 0).unwrap();
        s.restart().unwrap();
        assert_eq!(s, Session::new());
    }

    #[test]
    fn replay_resets_scores() {
        let (catalog, mut s) = playing();
        s.submit_answer(&catalog, 1).unwrap();
        s.submit_answer(&catalog, 0).unwrap();
        s.restart().unwrap();
        s.select_profile(&catalog, "joan").unwrap();
        assert_eq!(s.index(), 0);
        assert!(s.virtues().is_empty());
    }
}
