//! Task lists offered by the task store.

use super::ListId;
use serde::{Deserialize, Serialize};

/// A list a new task can be filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    /// List identifier.
    pub id: ListId,
    /// Display name.
    pub name: String,
    /// Icon glyph shown next to the name.
    pub icon: String,
    /// Accent colour, typically a CSS colour string.
    pub color: String,
    /// Optional longer description.
    pub description: Option<String>,
}

impl TaskList {
    /// Creates a list with the required fields and no decoration.
    #[must_use]
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: String::new(),
            color: String::new(),
            description: None,
        }
    }

    /// Sets the icon glyph.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Sets the accent colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
