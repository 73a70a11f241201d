use serde::{Deserialize, Serialize};

/// A selectable hero with its own sequence of checkpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Stable identifier, also the key into the quest table.
    pub id: String,
    /// Human-readable name.
    #[serde(alias = "name")]
    pub display_name: String,
    /// A single glyph (usually an emoji) shown next to the name.
    #[serde(alias = "avatar")]
    pub glyph: String,
    /// Virtues this hero is known for, in display order.
    #[serde(default, alias = "virtues")]
    pub virtue_tags: Vec<String>,
}

impl Profile {
    /// Create a profile with no virtue tags.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        glyph: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            glyph: glyph.into(),
            virtue_tags: Vec::new(),
        }
    }

    /// Builder-style setter for the virtue tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.virtue_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Tags joined for display, e.g. `"Mercy, Humility"`.
    pub fn tags_label(&self) -> String {
        self.virtue_tags.join(", ")
    }
}
