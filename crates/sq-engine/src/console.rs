//! Line-oriented command interface over a [`QuestEngine`].
//!
//! Each call to [`Console::process`] takes one line of player input and
//! returns the text to show. Numbers typed by the player are one-based.

use std::fmt::Write as _;

use sq_core::{Catalog, Checkpoint, Profile, VirtueTally};

use crate::engine::QuestEngine;
use crate::error::{QuestError, QuestResult};
use crate::phase::Phase;
use crate::session::AnswerOutcome;

/// Closing quote on the completion screen.
pub const COMPLETION_QUOTE: &str = "\"Start by doing what's necessary; then do what's possible; \
and suddenly you are doing the impossible.\"";

/// A text front end for one quest engine.
#[derive(Debug, Clone)]
pub struct Console {
    engine: QuestEngine,
}

impl Console {
    /// Wrap an engine.
    pub fn new(engine: QuestEngine) -> Self {
        Self { engine }
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &QuestEngine {
        &self.engine
    }

    /// Whether `input` is a command that ends the session.
    pub fn is_quit(input: &str) -> bool {
        let (cmd, _) = split_command(input);
        matches!(cmd.as_str(), "quit" | "q")
    }

    /// Process a line of input and return the reply.
    pub fn process(&mut self, input: &str) -> QuestResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let (cmd, rest) = split_command(trimmed);
        match cmd.as_str() {
            "profiles" | "heroes" => Ok(render_profiles(self.engine.catalog())),
            "choose" | "start" | "select" => self.do_choose(rest),
            "answer" | "a" => self.do_answer(rest),
            "look" | "l" => Ok(self.screen()),
            "status" => Ok(self.do_status()),
            "restart" | "again" => self.do_restart(),
            "help" | "?" => Ok(help_text().to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ if cmd.parse::<usize>().is_ok() => match self.engine.phase() {
                Phase::Selecting => self.do_choose(trimmed),
                _ => self.do_answer(trimmed),
            },
            _ => Err(QuestError::InvalidInput(format!(
                "unknown command '{cmd}', type 'help' for commands"
            ))),
        }
    }

    /// Render whatever screen the current phase calls for.
    pub fn screen(&self) -> String {
        match self.engine.phase() {
            Phase::Selecting => render_profiles(self.engine.catalog()),
            Phase::Playing => match (self.engine.current_profile(), self.engine.current_checkpoint()) {
                (Some(profile), Some(checkpoint)) => {
                    render_checkpoint(&self.engine, profile, checkpoint)
                }
                _ => String::new(),
            },
            Phase::Complete => match self.engine.current_profile() {
                Some(profile) => render_complete(profile, self.engine.virtues()),
                None => String::new(),
            },
        }
    }

    fn do_choose(&mut self, arg: &str) -> QuestResult<String> {
        if arg.is_empty() {
            return Err(QuestError::InvalidInput(
                "usage: choose <profile id or number>".to_string(),
            ));
        }

        let id = resolve_profile(self.engine.catalog(), arg)
            .ok_or_else(|| QuestError::ProfileNotFound(arg.to_string()))?;
        self.engine.select_profile(&id)?;
        Ok(self.screen())
    }

    fn do_answer(&mut self, arg: &str) -> QuestResult<String> {
        let n: usize = arg.parse().map_err(|_| {
            QuestError::InvalidInput("usage: answer <option number>".to_string())
        })?;
        if n == 0 {
            return Err(QuestError::InvalidInput(
                "options are numbered from 1".to_string(),
            ));
        }

        let outcome = self.engine.submit_answer(n - 1)?;
        let mut out = render_outcome(&outcome);
        out.push_str("\n\n");
        out.push_str(&self.screen());
        Ok(out)
    }

    fn do_restart(&mut self) -> QuestResult<String> {
        self.engine.restart()?;
        Ok(self.screen())
    }

    fn do_status(&self) -> String {
        let mut out = format!("Phase: {}\n", self.engine.phase());
        if let Some(profile) = self.engine.current_profile() {
            let _ = writeln!(out, "Hero: {} {}", profile.glyph, profile.display_name);
        }
        if let Some(progress) = self.engine.progress() {
            let _ = writeln!(out, "Progress: {}/{}", progress.index, progress.total);
        }
        let _ = write!(out, "Virtues: {}", self.engine.virtues());
        out
    }
}

/// Lowercased command word and the trimmed remainder.
fn split_command(input: &str) -> (String, &str) {
    let trimmed = input.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd.to_lowercase(), rest.trim()),
        None => (trimmed.to_lowercase(), ""),
    }
}

/// Map what the player typed to a profile id.
///
/// An exact id wins over a list position, and a list position wins over a
/// case-insensitive id match.
fn resolve_profile(catalog: &Catalog, arg: &str) -> Option<String> {
    if let Some(profile) = catalog.profile(arg) {
        return Some(profile.id.clone());
    }
    if let Ok(n) = arg.parse::<usize>() {
        return catalog
            .profiles()
            .get(n.wrapping_sub(1))
            .map(|p| p.id.clone());
    }
    catalog
        .profiles()
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(arg))
        .map(|p| p.id.clone())
}

fn render_profiles(catalog: &Catalog) -> String {
    let mut out = String::from("Choose Your Hero\n");
    for (i, p) in catalog.profiles().iter().enumerate() {
        let _ = write!(out, "\n  {}. {} {} ({})", i + 1, p.glyph, p.display_name, p.id);
        if !p.virtue_tags.is_empty() {
            let _ = write!(out, "\n     Virtues: {}", p.tags_label());
        }
    }
    out.push_str("\n\nType 'choose <id>' to begin your journey.");
    out
}

fn render_checkpoint(engine: &QuestEngine, profile: &Profile, checkpoint: &Checkpoint) -> String {
    let challenge = &checkpoint.challenge;
    let mut out = String::new();

    if let Some(progress) = engine.progress() {
        let _ = writeln!(out, "{}", progress.label());
    }
    let _ = writeln!(out, "\n== {} ==\n{}\n", checkpoint.title, checkpoint.story);
    let _ = writeln!(out, "{}: {}", challenge.kind().heading(), challenge.prompt());
    for (i, option) in challenge.options().iter().enumerate() {
        let _ = writeln!(out, "  {}. {option}", i + 1);
    }

    let _ = write!(out, "\n{} {}", profile.glyph, profile.display_name);
    let earned: Vec<String> = engine
        .virtues()
        .earned()
        .map(|(v, n)| format!("{v}: {n}"))
        .collect();
    if !earned.is_empty() {
        let _ = write!(out, " | {}", earned.join(", "));
    }
    out
}

fn render_complete(profile: &Profile, virtues: &VirtueTally) -> String {
    let mut out = String::from("Sainthood Unlocked!\n\n");
    let _ = writeln!(
        out,
        "You have completed the journey of {}.\n{COMPLETION_QUOTE}\n",
        profile.display_name
    );
    out.push_str("Final Virtue Profile:");
    for (v, n) in virtues.iter() {
        let _ = write!(out, "\n  {v}: {n}");
    }
    out.push_str("\n\nType 'restart' to start a new journey.");
    out
}

fn render_outcome(outcome: &AnswerOutcome) -> String {
    let mut out = outcome.feedback().to_string();
    if !outcome.reward.is_empty() {
        let gained: Vec<String> = outcome
            .reward
            .iter()
            .map(|(v, n)| format!("+{n} {v}"))
            .collect();
        let _ = write!(out, " ({})", gained.join(", "));
    }
    out
}

fn help_text() -> &'static str {
    "\
Saint Quest Commands:
  profiles                      List the heroes
  choose <id|number>            Begin a hero's journey
  answer <number>               Answer the current challenge
  <number>                      Shortcut for choose/answer
  look                          Show the current screen
  status                        Show phase, progress and virtues
  restart                       Start over after finishing
  help                          Show this help
  quit                          Exit"
}
