pub mod check;
pub mod play;
pub mod profiles;
pub mod quests;

use std::path::Path;

use sq_core::{Catalog, ContentConfig};
use sq_engine::QuestEngine;

/// Build the content configuration for an optional data directory.
fn content_config(data: Option<&Path>) -> ContentConfig {
    match data {
        Some(dir) => ContentConfig::default().with_data_dir(dir),
        None => ContentConfig::default(),
    }
}

/// Load and validate the catalog.
fn load_catalog(data: Option<&Path>) -> Result<Catalog, String> {
    content_config(data).load().map_err(|e| e.to_string())
}

/// Load the catalog and wrap it in a fresh engine.
pub fn load_engine(data: Option<&Path>) -> Result<QuestEngine, String> {
    QuestEngine::from_config(&content_config(data)).map_err(|e| e.to_string())
}
