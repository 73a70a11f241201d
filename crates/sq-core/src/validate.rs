//! Validation of quest content.
//!
//! Checks that every profile has a quest, every quest belongs to a profile,
//! and every challenge has a reachable answer and a sensible reward.

use std::collections::HashSet;
use std::fmt;

use crate::catalog::Catalog;
use crate::checkpoint::Checkpoint;

/// A warning or error found during content validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Where the issue was found, e.g. `francis #2` or `carlo`.
    pub location: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    /// An error-level issue.
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
            is_error: true,
        }
    }

    /// A warning-level issue.
    pub fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.location, self.message)
    }
}

/// Validate a catalog and return every issue found, errors and warnings.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut seen = HashSet::new();
    for profile in catalog.profiles() {
        if !seen.insert(profile.id.as_str()) {
            issues.push(ValidationIssue::error(
                &profile.id,
                "duplicate profile id",
            ));
        }
        if catalog.checkpoints(&profile.id).is_empty() {
            issues.push(ValidationIssue::error(&profile.id, "no checkpoints"));
        }
    }

    for (profile_id, checkpoints) in catalog.quests() {
        if !seen.contains(profile_id) {
            issues.push(ValidationIssue::error(
                profile_id,
                "quest for unknown profile",
            ));
        }
        for (i, checkpoint) in checkpoints.iter().enumerate() {
            let location = format!("{profile_id} #{}", i + 1);
            validate_checkpoint(checkpoint, &location, &mut issues);
        }
    }

    issues
}

fn validate_checkpoint(checkpoint: &Checkpoint, location: &str, issues: &mut Vec<ValidationIssue>) {
    let challenge = &checkpoint.challenge;
    let count = challenge.options().len();

    if count < 2 {
        issues.push(ValidationIssue::error(
            location,
            format!("{} needs at least two options, has {count}", challenge.kind()),
        ));
    }

    if challenge.correct_index() >= count {
        issues.push(ValidationIssue::error(
            location,
            format!(
                "correct index {} out of range for {count} option(s)",
                challenge.correct_index()
            ),
        ));
    }

    for (virtue, amount) in &challenge.reward {
        if *amount == 0 {
            issues.push(ValidationIssue::error(
                location,
                format!("reward for {virtue} must be positive"),
            ));
        }
    }

    if challenge.reward.is_empty() {
        issues.push(ValidationIssue::warning(location, "challenge has no reward"));
    }

    if checkpoint.story.trim().is_empty() {
        issues.push(ValidationIssue::warning(location, "empty story"));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::checkpoint::Challenge;
    use crate::profile::Profile;
    use crate::virtue::Virtue;

    fn good_checkpoint() -> Checkpoint {
        Checkpoint::new(
            "Title",
            "Story",
            Challenge::question("Q?", ["a", "b"], 1).with_reward(Virtue::Faith, 1),
        )
    }

    fn catalog_with(checkpoints: Vec<Checkpoint>) -> Catalog {
        Catalog::new(
            vec![Profile::new("francis", "Francis", "🐺")],
            BTreeMap::from([("francis".to_string(), checkpoints)]),
        )
    }

    fn errors(issues: &[ValidationIssue]) -> Vec<&ValidationIssue> {
        issues.iter().filter(|i| i.is_error).collect()
    }

    #[test]
    fn valid_catalog_has_no_issues() {
        let issues = validate_catalog(&catalog_with(vec![good_checkpoint()]));
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn correct_index_out_of_range() {
        let mut cp = good_checkpoint();
        cp.challenge = Challenge::dilemma("D", ["a", "b"], 2).with_reward(Virtue::Mercy, 1);
        let issues = validate_catalog(&catalog_with(vec![cp]));
        let errs = errors(&issues);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].location, "francis #1");
        assert!(errs[0].message.contains("out of range"));
    }

    #[test]
    fn too_few_options() {
        let mut cp = good_checkpoint();
        cp.challenge = Challenge::question("Q", ["only"], 0).with_reward(Virtue::Faith, 1);
        let issues = validate_catalog(&catalog_with(vec![cp]));
        assert!(errors(&issues)[0].message.contains("at least two options"));
    }

    #[test]
    fn zero_reward_is_error() {
        let mut cp = good_checkpoint();
        cp.challenge.reward.insert(Virtue::Courage, 0);
        let issues = validate_catalog(&catalog_with(vec![cp]));
        assert!(errors(&issues)[0].message.contains("Courage"));
    }

    #[test]
    fn missing_reward_and_story_are_warnings() {
        let cp = Checkpoint::new("T", "  ", Challenge::question("Q", ["a", "b"], 0));
        let issues = validate_catalog(&catalog_with(vec![cp]));
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| !i.is_error));
    }

    #[test]
    fn profile_without_checkpoints() {
        let issues = validate_catalog(&catalog_with(Vec::new()));
        assert_eq!(issues, vec![ValidationIssue::error("francis", "no checkpoints")]);
    }

    #[test]
    fn quest_for_unknown_profile() {
        let catalog = Catalog::new(
            vec![Profile::new("francis", "Francis", "🐺")],
            BTreeMap::from([
                ("francis".to_string(), vec![good_checkpoint()]),
                ("ghost".to_string(), vec![good_checkpoint()]),
            ]),
        );
        let issues = validate_catalog(&catalog);
        assert_eq!(
            issues,
            vec![ValidationIssue::error("ghost", "quest for unknown profile")]
        );
    }

    #[test]
    fn duplicate_profile_id() {
        let catalog = Catalog::new(
            vec![
                Profile::new("francis", "Francis", "🐺"),
                Profile::new("francis", "Francis again", "🐺"),
            ],
            BTreeMap::from([("francis".to_string(), vec![good_checkpoint()])]),
        );
        let issues = validate_catalog(&catalog);
        assert!(issues.iter().any(|i| i.message == "duplicate profile id"));
    }

    #[test]
    fn display_format() {
        let issue = ValidationIssue::warning("carlo #2", "empty story");
        assert_eq!(issue.to_string(), "warning: carlo #2: empty story");
    }
}
