use std::fmt;

use serde::{Deserialize, Serialize};

use crate::virtue::{Reward, Virtue};

/// One story beat: a title, narrative text, and exactly one challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Chapter title.
    pub title: String,
    /// Narrative text shown before the challenge.
    pub story: String,
    /// The challenge the player must answer to move on.
    pub challenge: Challenge,
}

impl Checkpoint {
    /// Create a checkpoint.
    pub fn new(title: impl Into<String>, story: impl Into<String>, challenge: Challenge) -> Self {
        Self {
            title: title.into(),
            story: story.into(),
            challenge,
        }
    }
}

/// The two kinds of challenge, without their payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChallengeKind {
    /// A trivia question with one correct choice.
    Question,
    /// A moral dilemma with one virtuous option.
    Dilemma,
}

impl ChallengeKind {
    /// Heading shown above the challenge.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Question => "Knowledge Check",
            Self::Dilemma => "What will you do?",
        }
    }

    /// Label of the confirm action.
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Question => "Submit Answer",
            Self::Dilemma => "Make Choice",
        }
    }

    /// Feedback line for an answer.
    pub fn feedback(self, correct: bool) -> &'static str {
        match (self, correct) {
            (Self::Question, true) => "Correct! +Virtue",
            (Self::Question, false) => "Not quite, try the next challenge.",
            (Self::Dilemma, true) => "A virtuous path!",
            (Self::Dilemma, false) => "A difficult path... reflect on this.",
        }
    }
}

impl fmt::Display for ChallengeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Question => write!(f, "question"),
            Self::Dilemma => write!(f, "dilemma"),
        }
    }
}

/// The kind-specific part of a challenge.
///
/// On the wire both kinds share the `prompt`, `options` and `correctIndex`
/// keys and are told apart by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChallengeBody {
    /// A trivia question.
    #[serde(alias = "trivia")]
    Question {
        /// The question text.
        #[serde(alias = "question")]
        prompt: String,
        /// Possible answers, in display order.
        #[serde(rename = "options", alias = "choices")]
        choices: Vec<String>,
        /// Index of the correct answer in `choices`.
        #[serde(rename = "correctIndex", alias = "answer_index")]
        answer: usize,
    },
    /// A moral dilemma.
    Dilemma {
        /// The situation to respond to.
        prompt: String,
        /// Possible responses, in display order.
        options: Vec<String>,
        /// Index of the virtuous response in `options`.
        #[serde(rename = "correctIndex", alias = "answer_index")]
        virtuous: usize,
    },
}

/// A question or dilemma plus the reward for getting it right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Kind-specific prompt, options, and answer.
    #[serde(flatten)]
    pub body: ChallengeBody,
    /// Virtue points granted for the correct answer.
    #[serde(default)]
    pub reward: Reward,
}

impl Challenge {
    /// A trivia question with no reward yet.
    pub fn question<I, S>(prompt: impl Into<String>, choices: I, answer: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            body: ChallengeBody::Question {
                prompt: prompt.into(),
                choices: choices.into_iter().map(Into::into).collect(),
                answer,
            },
            reward: Reward::new(),
        }
    }

    /// A moral dilemma with no reward yet.
    pub fn dilemma<I, S>(prompt: impl Into<String>, options: I, virtuous: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            body: ChallengeBody::Dilemma {
                prompt: prompt.into(),
                options: options.into_iter().map(Into::into).collect(),
                virtuous,
            },
            reward: Reward::new(),
        }
    }

    /// Builder-style: add `amount` points of `virtue` to the reward.
    pub fn with_reward(mut self, virtue: Virtue, amount: u32) -> Self {
        let total = self.reward.entry(virtue).or_insert(0);
        *total = total.saturating_add(amount);
        self
    }

    /// Which kind of challenge this is.
    pub fn kind(&self) -> ChallengeKind {
        match self.body {
            ChallengeBody::Question { .. } => ChallengeKind::Question,
            ChallengeBody::Dilemma { .. } => ChallengeKind::Dilemma,
        }
    }

    /// The question or situation text.
    pub fn prompt(&self) -> &str {
        match &self.body {
            ChallengeBody::Question { prompt, .. } | ChallengeBody::Dilemma { prompt, .. } => {
                prompt
            }
        }
    }

    /// The choices offered, in display order.
    pub fn options(&self) -> &[String] {
        match &self.body {
            ChallengeBody::Question { choices, .. } => choices,
            ChallengeBody::Dilemma { options, .. } => options,
        }
    }

    /// Index of the correct (or virtuous) option.
    pub fn correct_index(&self) -> usize {
        match self.body {
            ChallengeBody::Question { answer, .. } => answer,
            ChallengeBody::Dilemma { virtuous, .. } => virtuous,
        }
    }

    /// Whether `choice` is the correct option.
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index()
    }
}
