use crate::model::{Component, ComponentType, HOME_SCREEN_ID, Screen};
use serde_json::json;

pub const DETAIL_SCREEN_ID: &str = "screen-detail";

/// Templates bundled with the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTemplate {
    /// The document a fresh editor starts with.
    Starter,
    /// "Online shop": catalogue grid plus a bound detail page.
    Ecommerce,
}

impl BuiltinTemplate {
    pub const ALL: &'static [BuiltinTemplate] =
        &[BuiltinTemplate::Starter, BuiltinTemplate::Ecommerce];

    pub fn name(&self) -> &'static str {
        match self {
            BuiltinTemplate::Starter => "starter",
            BuiltinTemplate::Ecommerce => "ecommerce",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    pub fn screens(&self) -> Vec<Screen> {
        match self {
            BuiltinTemplate::Starter => initial_screens(),
            BuiltinTemplate::Ecommerce => ecommerce_template(),
        }
    }
}

/// Home screen with a banner and a catalogue grid that opens a detail page.
pub fn initial_screens() -> Vec<Screen> {
    let detail_id = "screen-kg4wjodkwjdboashsp2p0r";
    vec![
        Screen::new(HOME_SCREEN_ID, "Home").with_components(vec![
            Component::new("mfas11fu5uact7n9v9optq", ComponentType::Image).with_prop(
                "src",
                "https://lelogama.go-jek.com/post_featured_image/Gojek_KV-GOKANTOR-NON-PROMO_1456x818.jpg",
            ),
            Component::new("2qr991cu60tahw7ljjaek", ComponentType::ProductGrid)
                .with_prop("bind_image", "Image")
                .with_prop("bind_title", "Title")
                .with_prop("bind_subtitle", "Price")
                .with_prop("itemActionType", "navigate")
                .with_prop("itemTargetScreenId", detail_id),
        ]),
        Screen::new(detail_id, "page").with_components(vec![
            Component::new("9kygpvyhtb8q37m0skuua8", ComponentType::Toolbar)
                .with_prop("title", "detail"),
            Component::new("dqd93uka0ehxp79cjv91mc", ComponentType::ProductDetail)
                .with_prop("dataBind_title", "Title")
                .with_prop("dataBind_price", "Price")
                .with_prop("dataBind_description", "Description")
                .with_prop("dataBind_image", "Image")
                .with_prop("whatsappNumber", "6282246197193"),
        ]),
    ]
}

pub fn ecommerce_template() -> Vec<Screen> {
    vec![
        Screen::new(HOME_SCREEN_ID, "Home").with_components(vec![
            Component::new("comp-header", ComponentType::Container).with_prop(
                "style",
                json!({
                    "backgroundColor": "#2563eb",
                    "padding": "16px",
                    "color": "white",
                    "display": "flex",
                    "justifyContent": "space-between",
                    "alignItems": "center"
                }),
            ),
            Component::new("comp-title", ComponentType::Text)
                .with_prop("text", "My Online Shop")
                .with_prop("bold", true)
                .with_prop("size", 18)
                .with_prop("align", "center"),
            Component::new("comp-banner", ComponentType::Slider)
                .with_prop("width", "100%")
                .with_prop("src", "https://placehold.co/600x300/2563eb/white?text=Promo+50%25"),
            Component::new("comp-search", ComponentType::Text)
                .with_prop("text", "🔍 Search Product...")
                .with_prop("size", 14)
                .with_prop("color", "#9ca3af"),
            Component::new("comp-grid", ComponentType::ProductGrid)
                .with_prop("gridColumns", 2)
                .with_prop("bind_image", "Image")
                .with_prop("bind_title", "Title")
                .with_prop("bind_subtitle", "Price")
                .with_prop("itemActionType", "navigate")
                .with_prop("itemTargetScreenId", DETAIL_SCREEN_ID),
            Component::new("comp-spacer", ComponentType::Container).with_prop("height", "60px"),
            Component::new("comp-nav", ComponentType::BottomNav),
        ]),
        Screen::new(DETAIL_SCREEN_ID, "Detail").with_components(vec![
            Component::new("comp-detail-img", ComponentType::Image)
                .with_prop("width", "100%")
                .with_prop("height", "300px")
                .with_prop("dataBind_src", "Image")
                .with_prop("src", "https://placehold.co/600x400"),
            Component::new("comp-detail-title", ComponentType::Text)
                .with_prop("text", "Product Title")
                .with_prop("dataBind_text", "Title")
                .with_prop("bold", true)
                .with_prop("size", 24),
            Component::new("comp-detail-price", ComponentType::Text)
                .with_prop("text", "Rp 0")
                .with_prop("dataBind_text", "Price")
                .with_prop("size", 20)
                .with_prop("color", "#2563eb")
                .with_prop("bold", true),
            Component::new("comp-detail-desc", ComponentType::Text)
                .with_prop("text", "Description")
                .with_prop("dataBind_text", "Description")
                .with_prop("size", 14)
                .with_prop("color", "#4b5563"),
            Component::new("comp-detail-buy", ComponentType::Button)
                .with_prop("label", "🛒 Beli via WhatsApp")
                .with_prop("actionType", "open_url")
                .with_prop(
                    "urlTarget",
                    "https://wa.me/628123456789?text=Halo Kak, saya mau beli {Title} harga {Price}",
                )
                .with_prop("backgroundColor", "#22c55e")
                .with_prop("color", "white"),
        ]),
    ]
}
