use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::checkpoint::Checkpoint;
use crate::error::{ContentError, ContentResult};
use crate::profile::Profile;
use crate::validate::validate_catalog;

const BUILTIN_PROFILES: &str = include_str!("../data/profiles.json");
const BUILTIN_QUESTS: &str = include_str!("../data/quests.json");

/// The read-only content a quest is played against.
///
/// Profiles keep their file order; each profile id maps to its ordered
/// checkpoint list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    profiles: Vec<Profile>,
    quests: BTreeMap<String, Vec<Checkpoint>>,
}

impl Catalog {
    /// Build a catalog from already-parsed tables. No validation is done.
    pub fn new(profiles: Vec<Profile>, quests: BTreeMap<String, Vec<Checkpoint>>) -> Self {
        Self { profiles, quests }
    }

    /// The content compiled into the binary.
    pub fn builtin() -> ContentResult<Self> {
        Self::builtin_unchecked()?.validated()
    }

    /// The built-in content, parsed but not validated.
    pub fn builtin_unchecked() -> ContentResult<Self> {
        Self::parse_unchecked(
            BUILTIN_PROFILES,
            "built-in profiles",
            BUILTIN_QUESTS,
            "built-in quests",
        )
    }

    /// Parse and validate the two JSON tables.
    pub fn from_json(profiles_json: &str, quests_json: &str) -> ContentResult<Self> {
        Self::parse_unchecked(profiles_json, "profiles", quests_json, "quests")?.validated()
    }

    /// Parse the two JSON tables, naming each by `origin` in parse errors.
    pub fn parse_unchecked(
        profiles_json: &str,
        profiles_origin: &str,
        quests_json: &str,
        quests_origin: &str,
    ) -> ContentResult<Self> {
        let profiles: Vec<Profile> =
            serde_json::from_str(profiles_json).map_err(|source| ContentError::Parse {
                origin: profiles_origin.to_string(),
                source,
            })?;
        let quests: BTreeMap<String, Vec<Checkpoint>> = serde_json::from_str(quests_json)
            .map_err(|source| ContentError::Parse {
                origin: quests_origin.to_string(),
                source,
            })?;
        Ok(Self::new(profiles, quests))
    }

    /// Run validation, logging warnings and failing on any error.
    pub fn validated(self) -> ContentResult<Self> {
        let (errors, warnings): (Vec<_>, Vec<_>) = validate_catalog(&self)
            .into_iter()
            .partition(|issue| issue.is_error);

        for issue in &warnings {
            warn!(location = %issue.location, "{}", issue.message);
        }

        if !errors.is_empty() {
            return Err(ContentError::Invalid { errors });
        }

        info!(
            profiles = self.profile_count(),
            checkpoints = self.checkpoint_count(),
            "loaded quest content"
        );
        Ok(self)
    }

    /// All profiles, in file order.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Look up a profile by id.
    pub fn profile(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Look up a profile by id, failing with [`ContentError::ProfileNotFound`].
    pub fn require_profile(&self, id: &str) -> ContentResult<&Profile> {
        self.profile(id)
            .ok_or_else(|| ContentError::ProfileNotFound(id.to_string()))
    }

    /// The ordered checkpoints of a profile (empty if it has none).
    pub fn checkpoints(&self, profile_id: &str) -> &[Checkpoint] {
        self.quests
            .get(profile_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every quest table entry, keyed by profile id.
    pub fn quests(&self) -> impl Iterator<Item = (&str, &[Checkpoint])> {
        self.quests
            .iter()
            .map(|(id, list)| (id.as_str(), list.as_slice()))
    }

    /// Number of profiles.
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// Number of checkpoints across all profiles.
    pub fn checkpoint_count(&self) -> usize {
        self.quests.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkpoint::Challenge;
    use crate::virtue::Virtue;

    const PROFILES: &str = r#"[
        {"id": "clare", "displayName": "St. Clare", "glyph": "🕯️", "virtueTags": ["Faith"]}
    ]"#;

    const QUESTS: &str = r#"{
        "clare": [
            {
                "title": "The Lamp",
                "story": "Clare keeps watch.",
                "challenge": {
                    "kind": "question",
                    "prompt": "Who founded the Poor Clares?",
                    "options": ["Clare", "Benedict"],
                    "correctIndex": 0,
                    "reward": {"Faith": 1}
                }
            }
        ]
    }"#;

    #[test]
    fn builtin_content_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.profile_count() >= 2);
        assert_eq!(catalog.checkpoints("francis").len(), 3);
        assert!(catalog.profile("carlo").is_some());
    }

    #[test]
    fn builtin_profiles_all_have_quests() {
        let catalog = Catalog::builtin().unwrap();
        for p in catalog.profiles() {
            assert!(!catalog.checkpoints(&p.id).is_empty(), "{} has no quest", p.id);
        }
    }

    #[test]
    fn from_json_parses_tables() {
        let catalog = Catalog::from_json(PROFILES, QUESTS).unwrap();
        assert_eq!(catalog.profile_count(), 1);
        assert_eq!(catalog.checkpoint_count(), 1);
        let cp = &catalog.checkpoints("clare")[0];
        assert_eq!(cp.title, "The Lamp");
        assert_eq!(cp.challenge.reward.get(&Virtue::Faith), Some(&1));
    }

    #[test]
    fn parse_error_names_origin() {
        let err = Catalog::from_json("not json", QUESTS).unwrap_err();
        assert!(matches!(err, ContentError::Parse { ref origin, .. } if origin == "profiles"));
    }

    #[test]
    fn invalid_content_is_rejected() {
        let quests = QUESTS.replace("\"correctIndex\": 0", "\"correctIndex\": 7");
        let err = Catalog::from_json(PROFILES, &quests).unwrap_err();
        assert!(matches!(err, ContentError::Invalid { .. }));
    }

    #[test]
    fn unknown_profile_lookups() {
        let catalog = Catalog::from_json(PROFILES, QUESTS).unwrap();
        assert!(catalog.profile("nobody").is_none());
        assert!(catalog.checkpoints("nobody").is_empty());
        assert!(matches!(
            catalog.require_profile("nobody"),
            Err(ContentError::ProfileNotFound(_))
        ));
    }

    #[test]
    fn new_does_not_validate() {
        let quests = BTreeMap::from([(
            "ghost".to_string(),
            vec![Checkpoint::new("t", "s", Challenge::question("q", ["a"], 3))],
        )]);
        let catalog = Catalog::new(Vec::new(), quests);
        assert_eq!(catalog.checkpoint_count(), 1);
        assert!(catalog.validated().is_err());
    }
}
