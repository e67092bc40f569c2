use super::field::Resolved;

pub const PRODUCT_IMAGE_PLACEHOLDER: &str =
    "https://placehold.co/600x600/f3f4f6/9ca3af?text=Product+Image";
pub const NEWS_IMAGE_PLACEHOLDER: &str =
    "https://placehold.co/800x400/f3f4f6/9ca3af?text=News+Image";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "6281234567890";
pub const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua...";

/// Resolved fields of a `product_detail` card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetailView {
    pub image: Resolved,
    pub title: Resolved,
    pub price: Resolved,
    pub description: Resolved,
    pub button_label: String,
    pub whatsapp_number: String,
}

/// Resolved fields of a `news_detail` article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDetailView {
    pub image: Resolved,
    pub date: Resolved,
    pub title: Resolved,
    pub content: Resolved,
}

/// Resolved fields of a `toolbar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarView {
    pub title: String,
    /// Target of the back button, or `None` when the button is hidden.
    pub back_target: Option<String>,
    pub background_color: String,
    pub text_color: String,
}
