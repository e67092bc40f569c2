use crate::binding::{Resolved, ResolvedComponent, ResolvedView, SliderView, ValueSource};

/// Formats resolved values into human-readable provenance explanations.
pub struct ProvenanceFormatter;

impl ProvenanceFormatter {
    /// Explains where a single value came from, e.g.
    /// `"Shoe" (row 0, column Title)`.
    pub fn format_value(resolved: &Resolved) -> String {
        format!("\"{}\" ({})", resolved.value, Self::format_source(&resolved.source))
    }

    pub fn format_source(source: &ValueSource) -> String {
        match source {
            ValueSource::SelectedRow { column } => format!("selected row, column {}", column),
            ValueSource::Row { index, column } => format!("row {}, column {}", index, column),
            ValueSource::Literal { key } => format!("literal '{}'", key),
            ValueSource::Default => "default".to_string(),
        }
    }

    /// One header line for the component, then one indented line per value.
    pub fn format_component(component: &ResolvedComponent) -> String {
        let mut lines = vec![format!("{} [{}]", component.id, component.kind)];
        for (label, value) in Self::fields(&component.view) {
            lines.push(format!("  {}: {}", label, value));
        }
        lines.join("\n")
    }

    fn fields(view: &ResolvedView) -> Vec<(String, String)> {
        let value = |label: &str, resolved: &Resolved| {
            (label.to_string(), Self::format_value(resolved))
        };
        let plain = |label: &str, text: String| (label.to_string(), text);

        match view {
            ResolvedView::Text { text, size, bold } => vec![
                value("text", text),
                plain("style", format!("{}px{}", size, if *bold { " bold" } else { "" })),
            ],
            ResolvedView::Button { label, action } => {
                vec![value("label", label), plain("action", format!("{:?}", action))]
            }
            ResolvedView::Image { src } => vec![value("src", src)],
            ResolvedView::Video { embed_url } => vec![plain(
                "embed",
                embed_url.clone().unwrap_or_else(|| "(no video id)".to_string()),
            )],
            ResolvedView::ProductGrid {
                grid_columns,
                button_text,
                items,
                on_item,
            } => {
                let mut fields = vec![
                    plain("layout", format!("{} columns, button '{}'", grid_columns, button_text)),
                    plain("on item", format!("{:?}", on_item)),
                ];
                for (n, item) in items.iter().enumerate() {
                    fields.push(value(&format!("#{} title", n + 1), &item.title));
                    fields.push(value(&format!("#{} subtitle", n + 1), &item.subtitle));
                    fields.push(value(&format!("#{} image", n + 1), &item.image));
                }
                fields
            }
            ResolvedView::NewsGrid {
                grid_columns,
                items,
                on_item,
            } => {
                let mut fields = vec![
                    plain("layout", format!("{} columns", grid_columns)),
                    plain("on item", format!("{:?}", on_item)),
                ];
                for (n, item) in items.iter().enumerate() {
                    fields.push(value(&format!("#{} title", n + 1), &item.title));
                    fields.push(value(&format!("#{} date", n + 1), &item.date));
                    if let Some(summary) = &item.summary {
                        fields.push(value(&format!("#{} summary", n + 1), summary));
                    }
                }
                fields
            }
            ResolvedView::Slider(slider) => {
                let mode = match slider {
                    SliderView::Bound(_) => "bound",
                    SliderView::Manual(_) => "manual",
                    SliderView::Placeholder => "placeholder",
                };
                let mut fields = vec![plain("mode", mode.to_string())];
                for slide in slider.slides() {
                    fields.push(value(&slide.id, &slide.src));
                }
                fields
            }
            ResolvedView::Webview {
                src,
                full_height,
                height,
            } => vec![
                plain("src", src.clone().unwrap_or_else(|| "(none)".to_string())),
                plain(
                    "size",
                    if *full_height {
                        "full".to_string()
                    } else {
                        format!("{}px", height)
                    },
                ),
            ],
            ResolvedView::Spacer { height } => vec![plain("height", format!("{}px", height))],
            ResolvedView::Container | ResolvedView::Chart | ResolvedView::BottomNav => vec![],
            ResolvedView::Toolbar(toolbar) => vec![
                plain("title", toolbar.title.clone()),
                plain(
                    "back",
                    toolbar.back_target.clone().unwrap_or_else(|| "(hidden)".to_string()),
                ),
            ],
            ResolvedView::ProductDetail(detail) => vec![
                value("image", &detail.image),
                value("title", &detail.title),
                value("price", &detail.price),
                value("description", &detail.description),
                plain("button", format!("{} -> {}", detail.button_label, detail.whatsapp_number)),
            ],
            ResolvedView::NewsDetail(detail) => vec![
                value("image", &detail.image),
                value("date", &detail.date),
                value("title", &detail.title),
                value("content", &detail.content),
            ],
        }
    }
}
