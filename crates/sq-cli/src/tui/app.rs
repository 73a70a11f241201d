use sq_core::Reward;
use sq_engine::{AnswerOutcome, Phase, QuestEngine};

/// What the last answer earned, shown above the next chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: &'static str,
    pub correct: bool,
    pub reward: Reward,
}

impl From<&AnswerOutcome> for Feedback {
    fn from(outcome: &AnswerOutcome) -> Self {
        Self {
            message: outcome.feedback(),
            correct: outcome.correct,
            reward: outcome.reward.clone(),
        }
    }
}

pub struct App {
    pub engine: QuestEngine,
    pub cursor: usize,
    pub feedback: Option<Feedback>,
    pub error: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(engine: QuestEngine) -> Self {
        Self {
            engine,
            cursor: 0,
            feedback: None,
            error: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Number of rows the cursor can move over on the current screen.
    pub fn item_count(&self) -> usize {
        match self.engine.phase() {
            Phase::Selecting => self.engine.catalog().profile_count(),
            Phase::Playing => self
                .engine
                .current_checkpoint()
                .map(|c| c.challenge.options().len())
                .unwrap_or(0),
            Phase::Complete => 0,
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.item_count() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Jump to a one-based row and confirm it.
    pub fn pick(&mut self, number: usize) {
        if (1..=self.item_count()).contains(&number) {
            self.cursor = number - 1;
            self.confirm();
        }
    }

    /// Act on the highlighted row: choose a hero, answer, or start over.
    pub fn confirm(&mut self) {
        self.error = None;
        match self.engine.phase() {
            Phase::Selecting => {
                let Some(id) = self
                    .engine
                    .catalog()
                    .profiles()
                    .get(self.cursor)
                    .map(|p| p.id.clone())
                else {
                    return;
                };
                match self.engine.select_profile(&id) {
                    Ok(()) => {
                        self.cursor = 0;
                        self.feedback = None;
                    }
                    Err(e) => self.error = Some(e.to_string()),
                }
            }
            Phase::Playing => match self.engine.submit_answer(self.cursor) {
                Ok(outcome) => {
                    self.feedback = Some(Feedback::from(&outcome));
                    self.cursor = 0;
                }
                Err(e) => self.error = Some(e.to_string()),
            },
            Phase::Complete => self.restart(),
        }
    }

    pub fn restart(&mut self) {
        if self.engine.phase() != Phase::Complete {
            return;
        }
        match self.engine.restart() {
            Ok(()) => {
                self.cursor = 0;
                self.feedback = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Close the help popup or clear the last message.
    pub fn dismiss(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else {
            self.feedback = None;
            self.error = None;
        }
    }
}
