//! A session bundled with the catalog it plays against.

use sq_core::{Catalog, Checkpoint, ContentConfig, Profile, VirtueTally};

use crate::error::QuestResult;
use crate::phase::Phase;
use crate::session::{AnswerOutcome, Session};
use crate::snapshot::{Progress, Snapshot};

/// Owns a [`Catalog`] and one [`Session`] over it.
#[derive(Debug, Clone)]
pub struct QuestEngine {
    catalog: Catalog,
    session: Session,
}

impl QuestEngine {
    /// Create an engine with a fresh session.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            session: Session::new(),
        }
    }

    /// Load content from `config` and start a fresh session.
    pub fn from_config(config: &ContentConfig) -> QuestResult<Self> {
        Ok(Self::new(config.load()?))
    }

    /// The content being played.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// The selected profile, if any.
    pub fn current_profile(&self) -> Option<&Profile> {
        self.session.current_profile(&self.catalog)
    }

    /// The checkpoint to answer next, while playing.
    pub fn current_checkpoint(&self) -> Option<&Checkpoint> {
        self.session.current_checkpoint(&self.catalog)
    }

    /// Position in the selected quest.
    pub fn progress(&self) -> Option<Progress> {
        self.session.progress(&self.catalog)
    }

    /// Virtue totals so far.
    pub fn virtues(&self) -> &VirtueTally {
        self.session.virtues()
    }

    /// Everything needed to draw the current screen.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase(),
            profile: self.current_profile(),
            checkpoint: self.current_checkpoint(),
            progress: self.progress(),
            virtues: self.virtues(),
        }
    }

    /// See [`Session::select_profile`].
    pub fn select_profile(&mut self, id: &str) -> QuestResult<()> {
        self.session.select_profile(&self.catalog, id)
    }

    /// See [`Session::submit_answer`].
    pub fn submit_answer(&mut self, choice: usize) -> QuestResult<AnswerOutcome> {
        self.session.submit_answer(&self.catalog, choice)
    }

    /// See [`Session::restart`].
    pub fn restart(&mut self) -> QuestResult<()> {
        self.session.restart()
    }
}

#[cfg(test)]
mod tests {
    use sq_core::Virtue;

    use super::*;
    use crate::error::QuestError;

    fn engine() -> QuestEngine {
        QuestEngine::new(Catalog::builtin().unwrap())
    }

    fn correct_choice(engine: &QuestEngine) -> usize {
        engine.current_checkpoint().unwrap().challenge.correct_index()
    }

    fn wrong_choice(engine: &QuestEngine) -> usize {
        let correct = correct_choice(engine);
        if correct == 0 { 1 } else { 0 }
    }

    #[test]
    fn francis_correct_correct_wrong() {
        let mut e = engine();
        e.select_profile("francis").unwrap();

        let rewards: Vec<_> = e
            .catalog()
            .checkpoints("francis")
            .iter()
            .map(|c| c.challenge.reward.clone())
            .collect();
        assert_eq!(rewards.len(), 3);

        let c = correct_choice(&e);
        assert!(e.submit_answer(c).unwrap().correct);
        let c = correct_choice(&e);
        assert!(e.submit_answer(c).unwrap().correct);
        let w = wrong_choice(&e);
        let last = e.submit_answer(w).unwrap();
        assert!(!last.correct);
        assert!(last.completed);

        assert_eq!(e.session().index(), 3);
        assert_eq!(e.phase(), Phase::Complete);

        let mut expected = VirtueTally::new();
        expected.apply(&rewards[0]);
        expected.apply(&rewards[1]);
        assert_eq!(e.virtues(), &expected);
    }

    #[test]
    fn submit_while_selecting_does_not_mutate() {
        let mut e = engine();
        let before = e.session().clone();
        assert!(matches!(
            e.submit_answer(0),
            Err(QuestError::IllegalState { .. })
        ));
        assert_eq!(e.session(), &before);
    }

    #[test]
    fn snapshot_tracks_phase() {
        let mut e = engine();
        let snap = e.snapshot();
        assert_eq!(snap.phase, Phase::Selecting);
        assert!(snap.profile.is_none());
        assert!(snap.progress.is_none());

        e.select_profile("carlo").unwrap();
        let snap = e.snapshot();
        assert_eq!(snap.phase, Phase::Playing);
        assert_eq!(snap.profile.unwrap().id, "carlo");
        assert_eq!(snap.progress, Some(Progress::new(0, 3)));
        assert!(snap.checkpoint.is_some());
    }

    #[test]
    fn snapshot_serializes() {
        let mut e = engine();
        e.select_profile("francis").unwrap();
        let c = correct_choice(&e);
        e.submit_answer(c).unwrap();
        let value = serde_json::to_value(e.snapshot()).unwrap();
        assert_eq!(value["phase"], "playing");
        assert_eq!(value["profile"]["id"], "francis");
        assert_eq!(value["progress"]["index"], 1);
        assert!(value["virtues"].get(Virtue::Faith.name()).is_some());
    }

    #[test]
    fn from_default_config_uses_builtin() {
        let e = QuestEngine::from_config(&ContentConfig::default()).unwrap();
        assert!(e.catalog().profile("francis").is_some());
        assert_eq!(e.phase(), Phase::Selecting);
    }
}
