use super::{ALERT_MESSAGE, Action, ActionOutcome, ItemAction};
use crate::binding::{BindingResolver, BoundField, RowScope, SliderView};
use crate::data::Dataset;
use crate::model::{Component, ComponentType};
use crate::notice::{NoticeKind, Notifier};
use crate::store::DocumentStore;
use tracing::{debug, info};

const WHATSAPP_BASE: &str = "https://wa.me";

/// Drives interactions against the document and the dataset.
///
/// In edit mode a click selects the component and every other interaction is
/// ignored. In preview mode actions are live.
pub struct Preview<'a> {
    store: &'a mut DocumentStore,
    dataset: &'a mut Dataset,
    notifier: Notifier,
}

impl<'a> Preview<'a> {
    pub fn new(store: &'a mut DocumentStore, dataset: &'a mut Dataset) -> Self {
        Self {
            store,
            dataset,
            notifier: Notifier::default(),
        }
    }

    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn store(&self) -> &DocumentStore {
        &*self.store
    }

    pub fn dataset(&self) -> &Dataset {
        &*self.dataset
    }

    pub fn resolver(&self) -> BindingResolver<'_> {
        BindingResolver::new(&*self.dataset)
    }

    /// A component of the active screen, only while previewing.
    fn live_component(&self, id: &str) -> Option<Component> {
        if !self.store.is_preview_mode() {
            return None;
        }
        self.store.active_screen()?.component(id).cloned()
    }

    /// Switches to `screen_id` if it exists.
    pub fn navigate(&mut self, screen_id: &str) -> ActionOutcome {
        if !self.store.document().has_screen(screen_id) {
            debug!(screen_id, "navigation ignored, no such screen");
            return ActionOutcome::Ignored;
        }
        self.store.set_active_screen(screen_id);
        ActionOutcome::Navigated {
            screen_id: screen_id.to_string(),
        }
    }

    pub fn perform(&mut self, action: &Action) -> ActionOutcome {
        match action {
            Action::None => ActionOutcome::Ignored,
            Action::Navigate { target } => self.navigate(target),
            Action::OpenUrl { template } => {
                let url = self.resolver().substitute(template).into_owned();
                info!(%url, "opening link");
                ActionOutcome::OpenUrl { url }
            }
            Action::Alert => {
                self.notifier
                    .notify(NoticeKind::Info, "Alert", ALERT_MESSAGE.to_string());
                ActionOutcome::Alert {
                    message: ALERT_MESSAGE.to_string(),
                }
            }
        }
    }

    /// A click on the body of a component.
    pub fn click(&mut self, id: &str) -> ActionOutcome {
        if !self.store.is_preview_mode() {
            self.store.select_component(Some(id));
            return ActionOutcome::Selected { id: id.to_string() };
        }

        match self.live_component(id) {
            Some(component) if component.kind == ComponentType::Button => {
                self.perform(&Action::from_component(&component))
            }
            _ => ActionOutcome::Ignored,
        }
    }

    /// Activates the item at `position` among the rows a list shows.
    ///
    /// The row is selected before navigating so the destination's detail
    /// views read it on first render.
    pub fn activate_item(&mut self, id: &str, position: usize) -> ActionOutcome {
        let Some(component) = self.live_component(id) else {
            return ActionOutcome::Ignored;
        };
        let Some(action) = ItemAction::from_component(&component) else {
            return ActionOutcome::Ignored;
        };
        let picked = self
            .resolver()
            .visible_rows(&component)
            .get(position)
            .map(|(index, row)| (*index, (*row).clone()));
        let Some((row_index, row)) = picked else {
            debug!(id, position, "item activation ignored, no such item");
            return ActionOutcome::Ignored;
        };

        self.dataset.selected_row = Some(row);
        debug!(id, row_index, "row selected");

        match action.navigate_to {
            Some(target) => match self.navigate(&target) {
                ActionOutcome::Ignored => ActionOutcome::RowSelected { row_index },
                navigated => navigated,
            },
            None => ActionOutcome::RowSelected { row_index },
        }
    }

    /// A click on a manually configured slide with a target screen.
    pub fn activate_slide(&mut self, id: &str, index: usize) -> ActionOutcome {
        let Some(component) = self.live_component(id) else {
            return ActionOutcome::Ignored;
        };
        let target = match self.resolver().slider(&component) {
            SliderView::Manual(slides) => slides
                .into_iter()
                .nth(index)
                .and_then(|slide| slide.target_screen_id),
            _ => None,
        };
        match target {
            Some(target) => self.navigate(&target),
            None => ActionOutcome::Ignored,
        }
    }

    /// The back button of a toolbar.
    pub fn back(&mut self, id: &str) -> ActionOutcome {
        let Some(component) = self.live_component(id) else {
            return ActionOutcome::Ignored;
        };
        match self.resolver().toolbar(&component).back_target {
            Some(target) => self.navigate(&target),
            None => ActionOutcome::Ignored,
        }
    }

    /// The buy button of a product detail: a WhatsApp chat link.
    pub fn buy(&mut self, id: &str) -> ActionOutcome {
        let Some(component) = self.live_component(id) else {
            return ActionOutcome::Ignored;
        };
        if component.kind != ComponentType::ProductDetail {
            return ActionOutcome::Ignored;
        }

        let resolver = self.resolver();
        let title = resolver.resolve_field(
            &BoundField::from_props(&component, &["dataBind_title"], &["title"], "Item"),
            RowScope::SelectedOnly,
        );
        let price = resolver.resolve_field(
            &BoundField::from_props(&component, &["dataBind_price"], &["price"], "0"),
            RowScope::SelectedOnly,
        );
        let number = resolver.product_detail(&component).whatsapp_number;
        let message = format!("Halo, saya mau beli {} seharga {}", title, price);

        let url = match reqwest::Url::parse(&format!("{}/{}", WHATSAPP_BASE, number)) {
            Ok(mut url) => {
                url.query_pairs_mut().append_pair("text", &message);
                // Form encoding escapes a literal '+' as %2B, so every '+' left is a space.
                let query = url.query().map(|q| q.replace('+', "%20"));
                url.set_query(query.as_deref());
                url.to_string()
            }
            Err(_) => {
                debug!(number = %number, "buy ignored, unusable phone number");
                return ActionOutcome::Ignored;
            }
        };
        info!(%url, "opening chat");
        ActionOutcome::OpenUrl { url }
    }
}
