use crate::model::ComponentType;

/// A mutation that was applied to the document, broadcast to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentChange {
    ScreenAdded { id: String },
    ActiveScreenChanged { id: String },
    PreviewModeChanged { enabled: bool },
    ComponentAdded { screen_id: String, id: String, kind: ComponentType },
    SelectionChanged { id: Option<String> },
    ComponentUpdated { id: String },
    ComponentRemoved { id: String },
    ComponentsReordered { screen_id: String },
    TemplateLoaded { active_screen_id: String },
}
