//! The document store: owner of the screen tree and the editor state.
//!
//! Every mutation is synchronous and applies to the active screen only. Each
//! applied mutation is announced as a [`DocumentChange`] on a broadcast
//! channel; mutations that find nothing to act on are ignored silently.

pub mod change;
pub mod ids;

pub use change::*;
pub use ids::*;

use crate::model::{Component, ComponentType, Document, Props, Screen};
use crate::template::initial_screens;
use tokio::sync::broadcast;
use tracing::debug;

const CHANGE_CAPACITY: usize = 64;

#[derive(Debug)]
pub struct DocumentStore {
    document: Document,
    changes: broadcast::Sender<DocumentChange>,
}

impl Default for DocumentStore {
    /// A store holding the bootstrap document.
    fn default() -> Self {
        Self::new(initial_screens())
    }
}

impl DocumentStore {
    pub fn new(screens: Vec<Screen>) -> Self {
        Self::from_document(Document::new(screens))
    }

    pub fn from_document(document: Document) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CAPACITY);
        Self { document, changes }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Receives every change applied after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<DocumentChange> {
        self.changes.subscribe()
    }

    fn emit(&self, change: DocumentChange) {
        debug!(?change, "document changed");
        // No subscribers is fine.
        let _ = self.changes.send(change);
    }

    pub fn screens(&self) -> &[Screen] {
        &self.document.screens
    }

    pub fn active_screen(&self) -> Option<&Screen> {
        self.document.active_screen()
    }

    pub fn active_screen_id(&self) -> &str {
        &self.document.active_screen_id
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.document.selected_id.as_deref()
    }

    pub fn is_preview_mode(&self) -> bool {
        self.document.is_preview_mode
    }

    /// Appends an empty screen, makes it active and clears the selection.
    pub fn add_screen(&mut self, name: &str) -> String {
        let id = generate_screen_id();
        self.document.screens.push(Screen::new(id.clone(), name));
        self.document.active_screen_id = id.clone();
        self.document.selected_id = None;
        self.emit(DocumentChange::ScreenAdded { id: id.clone() });
        id
    }

    /// Sets the active screen without checking it exists. Clears the selection.
    pub fn set_active_screen(&mut self, id: &str) {
        self.document.active_screen_id = id.to_string();
        self.document.selected_id = None;
        self.emit(DocumentChange::ActiveScreenChanged { id: id.to_string() });
    }

    pub fn set_preview_mode(&mut self, enabled: bool) {
        self.document.is_preview_mode = enabled;
        self.document.selected_id = None;
        self.emit(DocumentChange::PreviewModeChanged { enabled });
    }

    /// Appends `component` to the active screen.
    pub fn add_component(&mut self, component: Component) {
        let Some(screen) = self.document.active_screen_mut() else {
            debug!(id = %component.id, "no screen to add component to");
            return;
        };
        let change = DocumentChange::ComponentAdded {
            screen_id: screen.id.clone(),
            id: component.id.clone(),
            kind: component.kind,
        };
        screen.components.push(component);
        self.emit(change);
    }

    /// Palette drop: appends a fresh component of `kind` and returns its id.
    pub fn insert_component(&mut self, kind: ComponentType) -> String {
        let id = generate_id();
        self.add_component(Component::new(id.clone(), kind));
        id
    }

    /// Sets the selection. The id is not validated.
    pub fn select_component(&mut self, id: Option<&str>) {
        self.document.selected_id = id.map(str::to_string);
        self.emit(DocumentChange::SelectionChanged {
            id: self.document.selected_id.clone(),
        });
    }

    /// Shallow-merges `partial` into the props of a component on the active screen.
    pub fn update_component(&mut self, id: &str, partial: Props) {
        let Some(component) = self
            .document
            .active_screen_mut()
            .and_then(|s| s.components.iter_mut().find(|c| c.id == id))
        else {
            debug!(id, "update ignored, component not on active screen");
            return;
        };
        component.props.extend(partial);
        self.emit(DocumentChange::ComponentUpdated { id: id.to_string() });
    }

    pub fn remove_component(&mut self, id: &str) {
        let Some(screen) = self.document.active_screen_mut() else {
            return;
        };
        let before = screen.components.len();
        screen.components.retain(|c| c.id != id);
        if screen.components.len() == before {
            debug!(id, "remove ignored, component not on active screen");
            return;
        }
        if self.document.selected_id.as_deref() == Some(id) {
            self.document.selected_id = None;
        }
        self.emit(DocumentChange::ComponentRemoved { id: id.to_string() });
    }

    /// Replaces the active screen's components verbatim.
    pub fn reorder_components(&mut self, components: Vec<Component>) {
        let Some(screen) = self.document.active_screen_mut() else {
            return;
        };
        screen.components = components;
        let screen_id = screen.id.clone();
        self.emit(DocumentChange::ComponentsReordered { screen_id });
    }

    /// Drag reorder: moves `active_id` to the position of `over_id`.
    ///
    /// Returns whether anything moved.
    pub fn move_component(&mut self, active_id: &str, over_id: &str) -> bool {
        if active_id == over_id {
            return false;
        }
        let Some(screen) = self.document.active_screen() else {
            return false;
        };
        let from = screen.components.iter().position(|c| c.id == active_id);
        let to = screen.components.iter().position(|c| c.id == over_id);
        let (Some(from), Some(to)) = (from, to) else {
            debug!(active_id, over_id, "move ignored, component not on active screen");
            return false;
        };

        let mut components = screen.components.clone();
        let moved = components.remove(from);
        components.insert(to, moved);
        self.reorder_components(components);
        true
    }

    /// Replaces every screen. The first template screen becomes active.
    pub fn load_template(&mut self, screens: Vec<Screen>) {
        let is_preview_mode = self.document.is_preview_mode;
        self.document = Document {
            is_preview_mode,
            ..Document::new(screens)
        };
        self.emit(DocumentChange::TemplateLoaded {
            active_screen_id: self.document.active_screen_id.clone(),
        });
    }
}

