use serde::{Deserialize, Serialize};

use super::component::Component;

/// Reserved id of the conventional first screen, used as the navigation fallback.
pub const HOME_SCREEN_ID: &str = "screen-home";

/// One page of the target app, holding an ordered list of components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Screen {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            components: Vec::new(),
        }
    }

    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn component_ids(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.id.as_str()).collect()
    }
}

/// The whole editable application: screens plus editor state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub screens: Vec<Screen>,
    pub active_screen_id: String,
    pub selected_id: Option<String>,
    pub is_preview_mode: bool,
}

impl Document {
    /// A document whose first screen is active, in edit mode.
    pub fn new(screens: Vec<Screen>) -> Self {
        let active_screen_id = screens
            .first()
            .map(|s| s.id.clone())
            .unwrap_or_else(|| HOME_SCREEN_ID.to_string());
        Self {
            screens,
            active_screen_id,
            selected_id: None,
            is_preview_mode: false,
        }
    }

    pub fn screen(&self, id: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == id)
    }

    pub fn has_screen(&self, id: &str) -> bool {
        self.screen(id).is_some()
    }

    /// Index of the screen edits apply to: the configured active screen, or the
    /// first screen when the configured id no longer exists.
    pub fn active_index(&self) -> Option<usize> {
        self.screens
            .iter()
            .position(|s| s.id == self.active_screen_id)
            .or_else(|| (!self.screens.is_empty()).then_some(0))
    }

    pub fn active_screen(&self) -> Option<&Screen> {
        self.active_index().map(|i| &self.screens[i])
    }

    pub(crate) fn active_screen_mut(&mut self) -> Option<&mut Screen> {
        let index = self.active_index()?;
        self.screens.get_mut(index)
    }

    /// The currently selected component, if it lives on the active screen.
    pub fn selected_component(&self) -> Option<&Component> {
        let id = self.selected_id.as_deref()?;
        self.active_screen()?.component(id)
    }
}
