//! Actions attached to interactive components and the preview controller
//! that carries them out.

pub mod preview;

pub use preview::*;

use crate::model::{Component, ComponentType};

pub const ALERT_MESSAGE: &str = "Alert Action Triggered!";

/// What a button does when clicked in preview.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    None,
    Navigate {
        target: String,
    },
    /// Opens an external link; `{Column}` tokens are filled at click time.
    OpenUrl {
        template: String,
    },
    Alert,
}

impl Action {
    /// Reads `actionType` and its companion prop. An action whose companion
    /// is unset is [`Action::None`].
    pub fn from_component(component: &Component) -> Self {
        match component.prop_text("actionType").as_deref() {
            Some("navigate") => component
                .bound_column("targetScreenId")
                .map(|target| Action::Navigate { target })
                .unwrap_or_default(),
            Some("open_url") => component
                .prop_text("urlTarget")
                .map(|template| Action::OpenUrl { template })
                .unwrap_or_default(),
            Some("alert") => Action::Alert,
            _ => Action::None,
        }
    }
}

/// What activating a list item does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAction {
    /// Screen to show after the row is selected.
    pub navigate_to: Option<String>,
}

impl ItemAction {
    /// `None` when activating an item of `component` does nothing.
    ///
    /// Product grids act only with `itemActionType = navigate` and a target.
    /// News grids always select the row and navigate when `actionTarget` is set.
    pub fn from_component(component: &Component) -> Option<Self> {
        match component.kind {
            ComponentType::ProductGrid => {
                if component.prop_text("itemActionType").as_deref() != Some("navigate") {
                    return None;
                }
                component
                    .bound_column("itemTargetScreenId")
                    .map(|target| ItemAction {
                        navigate_to: Some(target),
                    })
            }
            ComponentType::NewsGrid => Some(ItemAction {
                navigate_to: component.bound_column("actionTarget"),
            }),
            _ => None,
        }
    }
}

/// The observable effect of a preview interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Edit mode: the component was selected instead.
    Selected { id: String },
    Navigated { screen_id: String },
    /// A list row was focused without navigating.
    RowSelected { row_index: usize },
    /// The view should open this URL externally.
    OpenUrl { url: String },
    Alert { message: String },
    Ignored,
}
