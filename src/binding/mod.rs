//! Resolution of a component's effective display values.
//!
//! Everything here is a pure read over a component and a [`Dataset`]. Bound
//! props are turned into [`BoundField`] chains once per read; missing
//! columns, rows or props fall through to documented defaults instead of
//! failing.

pub mod detail;
pub mod field;
pub mod list;
pub mod media;
pub mod placeholder;

pub use detail::*;
pub use field::*;
pub use list::*;
pub use media::*;

use crate::action::{Action, ItemAction};
use crate::data::{Dataset, Row};
use crate::model::{Component, ComponentType, HOME_SCREEN_ID};
use media::SlideSpec;
use std::borrow::Cow;

pub const TEXT_PLACEHOLDER: &str = "Text Block";
pub const BUTTON_PLACEHOLDER: &str = "Button";
pub const IMAGE_PLACEHOLDER: &str = "https://placehold.co/600x400/e2e8f0/94a3b8?text=Image";

/// A component with every display value resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedView {
    Text {
        text: Resolved,
        size: u64,
        bold: bool,
    },
    Button {
        label: Resolved,
        action: Action,
    },
    Image {
        src: Resolved,
    },
    Video {
        /// `None` when `src` holds no recognizable video id.
        embed_url: Option<String>,
    },
    ProductGrid {
        grid_columns: u64,
        button_text: String,
        items: Vec<ProductCard>,
        on_item: Option<ItemAction>,
    },
    Slider(SliderView),
    Webview {
        src: Option<String>,
        full_height: bool,
        height: u64,
    },
    Spacer {
        height: u64,
    },
    Container,
    Chart,
    BottomNav,
    Toolbar(ToolbarView),
    ProductDetail(ProductDetailView),
    NewsGrid {
        grid_columns: u64,
        items: Vec<NewsCard>,
        on_item: Option<ItemAction>,
    },
    NewsDetail(NewsDetailView),
}

/// A component paired with its resolved view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedComponent {
    pub id: String,
    pub kind: ComponentType,
    pub view: ResolvedView,
}

/// Resolves bindings of components against one dataset snapshot.
#[derive(Debug, Clone, Copy)]
pub struct BindingResolver<'a> {
    dataset: &'a Dataset,
}

impl<'a> BindingResolver<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// The row placeholder tokens are filled from.
    pub fn context_row(&self) -> Option<&'a Row> {
        self.dataset.context_row()
    }

    /// Walks the candidates of `field` in order; the first hit wins.
    pub fn resolve_field(&self, field: &BoundField, scope: RowScope) -> Resolved {
        for candidate in &field.candidates {
            match candidate {
                Bindable::Column(column) => {
                    if let Some(found) = self.lookup(column, scope) {
                        return found;
                    }
                }
                Bindable::Literal { key, value } => {
                    return Resolved::new(value.clone(), ValueSource::Literal { key: key.clone() });
                }
            }
        }
        Resolved::default_value(field.default)
    }

    fn lookup(&self, column: &str, scope: RowScope) -> Option<Resolved> {
        let selected = self
            .dataset
            .selected_row
            .as_ref()
            .and_then(|row| filled_cell(row, column));
        if let Some(value) = selected {
            return Some(Resolved::new(
                value,
                ValueSource::SelectedRow {
                    column: column.to_string(),
                },
            ));
        }

        match scope {
            RowScope::SelectedOnly => None,
            RowScope::Context => {
                let cell = self.dataset.first_row()?.get(column)?;
                Some(Resolved::new(
                    cell.to_string(),
                    ValueSource::Row {
                        index: 0,
                        column: column.to_string(),
                    },
                ))
            }
        }
    }

    /// Text of a `text` or the label of a `button`.
    pub fn text(&self, component: &Component) -> Resolved {
        let field = match component.kind {
            ComponentType::Button => BoundField::from_props(
                component,
                &["dataBind_text"],
                &["label", "text"],
                BUTTON_PLACEHOLDER,
            ),
            _ => BoundField::from_props(component, &["dataBind_text"], &["text"], TEXT_PLACEHOLDER),
        };
        self.resolve_field(&field, RowScope::Context)
    }

    /// Source URL of an `image`.
    pub fn image_src(&self, component: &Component) -> Resolved {
        let field =
            BoundField::from_props(component, &["dataBind_src"], &["src"], IMAGE_PLACEHOLDER);
        self.resolve_field(&field, RowScope::Context)
    }

    pub fn visible_rows(&self, component: &Component) -> Vec<(usize, &'a Row)> {
        list::visible_rows(component, self.dataset)
    }

    pub fn product_cards(&self, component: &Component) -> Vec<ProductCard> {
        list::product_cards(component, self.dataset)
    }

    pub fn news_cards(&self, component: &Component) -> Vec<NewsCard> {
        list::news_cards(component, self.dataset)
    }

    fn detail_field(
        &self,
        component: &Component,
        bind_keys: &[&str],
        literal_keys: &[&str],
        default: &'static str,
    ) -> Resolved {
        let field = BoundField::from_props(component, bind_keys, literal_keys, default);
        self.resolve_field(&field, RowScope::SelectedOnly)
    }

    pub fn product_detail(&self, component: &Component) -> ProductDetailView {
        ProductDetailView {
            image: self.detail_field(
                component,
                &["dataBind_src", "dataBind_image"],
                &["src"],
                PRODUCT_IMAGE_PLACEHOLDER,
            ),
            title: self.detail_field(component, &["dataBind_title"], &["title"], "Product Name"),
            price: self.detail_field(component, &["dataBind_price"], &["price"], "Rp 0"),
            description: self.detail_field(
                component,
                &["dataBind_desc", "dataBind_description"],
                &["description"],
                "Product description goes here...",
            ),
            button_label: component
                .prop_text("buttonLabel")
                .unwrap_or_else(|| "Beli Sekarang".to_string()),
            whatsapp_number: component
                .prop_text("whatsappNumber")
                .unwrap_or_else(|| DEFAULT_WHATSAPP_NUMBER.to_string()),
        }
    }

    pub fn news_detail(&self, component: &Component) -> NewsDetailView {
        NewsDetailView {
            image: self.detail_field(
                component,
                &["dataBind_src", "dataBind_image"],
                &["src"],
                NEWS_IMAGE_PLACEHOLDER,
            ),
            date: self.detail_field(
                component,
                &["dataBind_date"],
                &["date"],
                "News Category / Date",
            ),
            title: self.detail_field(
                component,
                &["dataBind_title"],
                &["title"],
                "Headline News Title",
            ),
            content: self.detail_field(
                component,
                &["dataBind_content"],
                &["description"],
                LOREM_IPSUM,
            ),
        }
    }

    /// Carousel contents: bound to the dataset, listed manually, or empty.
    pub fn slider(&self, component: &Component) -> SliderView {
        let bound = component
            .bound_column("dataBind_src")
            .filter(|_| !self.dataset.rows.is_empty());
        if let Some(column) = bound {
            let caption = component.bound_column("dataBind_text");
            let slides = self
                .dataset
                .rows
                .iter()
                .enumerate()
                .map(|(index, row)| Slide {
                    id: format!("slide-data-{}", index),
                    src: list_cell(index, row, Some(column.as_str()), String::new),
                    caption: caption
                        .as_deref()
                        .map(|c| list_cell(index, row, Some(c), String::new)),
                    target_screen_id: None,
                })
                .collect();
            return SliderView::Bound(slides);
        }

        let manual: Vec<Slide> = component
            .prop("slides")
            .and_then(|v| v.as_array())
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| serde_json::from_value::<SlideSpec>(entry.clone()).ok())
                    .enumerate()
                    .map(|(index, spec)| Slide {
                        id: spec.id.unwrap_or_else(|| format!("slide-{}", index)),
                        src: Resolved::new(
                            spec.src,
                            ValueSource::Literal {
                                key: "slides".to_string(),
                            },
                        ),
                        caption: None,
                        target_screen_id: spec.target_screen_id.filter(|t| !t.is_empty()),
                    })
                    .collect()
            })
            .unwrap_or_default();

        if manual.is_empty() {
            SliderView::Placeholder
        } else {
            SliderView::Manual(manual)
        }
    }

    pub fn toolbar(&self, component: &Component) -> ToolbarView {
        let back_target = (component.prop_bool("showBack") != Some(false)).then(|| {
            component
                .bound_column("backTarget")
                .unwrap_or_else(|| HOME_SCREEN_ID.to_string())
        });
        ToolbarView {
            title: component
                .prop_text("title")
                .unwrap_or_else(|| "Page Title".to_string()),
            back_target,
            background_color: component
                .prop_text("backgroundColor")
                .unwrap_or_else(|| "#ffffff".to_string()),
            text_color: component
                .prop_text("textColor")
                .unwrap_or_else(|| "#000000".to_string()),
        }
    }

    /// Fills `{Column}` tokens from the context row.
    pub fn substitute<'t>(&self, template: &'t str) -> Cow<'t, str> {
        placeholder::substitute(template, self.context_row())
    }

    /// Resolves every display value of `component`.
    pub fn resolve(&self, component: &Component) -> ResolvedComponent {
        let view = match component.kind {
            ComponentType::Text => ResolvedView::Text {
                text: self.text(component),
                size: component.prop_u64("size").unwrap_or(16),
                bold: component.prop_bool("bold").unwrap_or(false),
            },
            ComponentType::Button => ResolvedView::Button {
                label: self.text(component),
                action: Action::from_component(component),
            },
            ComponentType::Image => ResolvedView::Image {
                src: self.image_src(component),
            },
            ComponentType::Video => ResolvedView::Video {
                embed_url: component
                    .prop_text("src")
                    .and_then(|src| youtube_embed_url(&src)),
            },
            ComponentType::ProductGrid => ResolvedView::ProductGrid {
                grid_columns: component.prop_u64("gridColumns").unwrap_or(2),
                button_text: component
                    .prop_text("buttonText")
                    .unwrap_or_else(|| "Buy".to_string()),
                items: self.product_cards(component),
                on_item: ItemAction::from_component(component),
            },
            ComponentType::Slider => ResolvedView::Slider(self.slider(component)),
            ComponentType::Webview => ResolvedView::Webview {
                src: component.prop_text("src"),
                full_height: component.prop_text("sizeMode").as_deref() == Some("full"),
                height: component.prop_u64("height").unwrap_or(300),
            },
            ComponentType::Spacer => ResolvedView::Spacer {
                height: component.prop_u64("height").unwrap_or(20),
            },
            ComponentType::Container => ResolvedView::Container,
            ComponentType::Chart => ResolvedView::Chart,
            ComponentType::BottomNav => ResolvedView::BottomNav,
            ComponentType::Toolbar => ResolvedView::Toolbar(self.toolbar(component)),
            ComponentType::ProductDetail => {
                ResolvedView::ProductDetail(self.product_detail(component))
            }
            ComponentType::NewsGrid => ResolvedView::NewsGrid {
                grid_columns: component.prop_u64("gridColumns").unwrap_or(1),
                items: self.news_cards(component),
                on_item: ItemAction::from_component(component),
            },
            ComponentType::NewsDetail => ResolvedView::NewsDetail(self.news_detail(component)),
        };

        ResolvedComponent {
            id: component.id.clone(),
            kind: component.kind,
            view,
        }
    }
}
