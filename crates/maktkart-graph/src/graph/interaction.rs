//! Hover and selection state
//!
//! Session-scoped and never persisted. The server receives it as query
//! parameters on every request.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(default)]
    pub hovered: Option<String>,
    #[serde(default)]
    pub selected: Option<String>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hovered(mut self, id: impl Into<String>) -> Self {
        self.hovered = Some(id.into());
        self
    }

    pub fn with_selected(mut self, id: impl Into<String>) -> Self {
        self.selected = Some(id.into());
        self
    }

    pub fn hover(&mut self, id: impl Into<String>) {
        self.hovered = Some(id.into());
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Click semantics: selecting the selected entity again deselects it.
    /// Returns whether `id` is selected afterwards.
    pub fn select(&mut self, id: &str) -> bool {
        if self.is_selected(id) {
            self.selected = None;
            false
        } else {
            self.selected = Some(id.to_string());
            true
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered.as_deref() == Some(id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Hovered or selected
    pub fn touches(&self, id: &str) -> bool {
        self.is_hovered(id) || self.is_selected(id)
    }
}
