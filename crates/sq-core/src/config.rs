//! Where quest content is loaded from.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{ContentError, ContentResult};

/// Default file name of the profile table.
pub const PROFILES_FILE: &str = "profiles.json";
/// Default file name of the quest table.
pub const QUESTS_FILE: &str = "quests.json";

/// Content source configuration.
///
/// With no data directory the built-in content is used.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Directory holding the two content tables.
    pub data_dir: Option<PathBuf>,
    /// File name of the profile table inside `data_dir`.
    pub profiles_file: String,
    /// File name of the quest table inside `data_dir`.
    pub quests_file: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            profiles_file: PROFILES_FILE.to_string(),
            quests_file: QUESTS_FILE.to_string(),
        }
    }
}

impl ContentConfig {
    /// Load content from `dir` instead of the built-in tables.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Override the two table file names.
    pub fn with_files(mut self, profiles: impl Into<String>, quests: impl Into<String>) -> Self {
        self.profiles_file = profiles.into();
        self.quests_file = quests.into();
        self
    }

    /// Full paths of the two tables, if a data directory is set.
    pub fn paths(&self) -> Option<(PathBuf, PathBuf)> {
        self.data_dir
            .as_ref()
            .map(|dir| (dir.join(&self.profiles_file), dir.join(&self.quests_file)))
    }

    /// Load and validate the catalog.
    pub fn load(&self) -> ContentResult<Catalog> {
        self.load_unchecked()?.validated()
    }

    /// Load the catalog without validating it.
    pub fn load_unchecked(&self) -> ContentResult<Catalog> {
        let Some((profiles_path, quests_path)) = self.paths() else {
            debug!("using built-in content");
            return Catalog::builtin_unchecked();
        };

        debug!(
            profiles = %profiles_path.display(),
            quests = %quests_path.display(),
            "loading content"
        );
        let profiles = read(&profiles_path)?;
        let quests = read(&quests_path)?;
        Catalog::parse_unchecked(
            &profiles,
            &profiles_path.display().to_string(),
            &quests,
            &quests_path.display().to_string(),
        )
    }
}

fn read(path: &Path) -> ContentResult<String> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}
