use super::field::Resolved;
use serde::Deserialize;

pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Extracts a YouTube video id from a watch URL, a short link, an embed URL
/// or a bare id.
pub fn youtube_id(src: &str) -> Option<&str> {
    let after = |marker: &str, stop: char| {
        src.split_once(marker)
            .map(|(_, rest)| rest.split(stop).next().unwrap_or(rest))
    };

    let id = if src.contains("v=") {
        after("v=", '&')
    } else if src.contains("youtu.be/") {
        after("youtu.be/", '?')
    } else if src.contains("embed/") {
        after("embed/", '?')
    } else if !src.contains('/') && src.chars().count() > 5 {
        Some(src)
    } else {
        None
    };
    id.filter(|id| !id.is_empty())
}

pub fn youtube_embed_url(src: &str) -> Option<String> {
    youtube_id(src).map(|id| format!("{}{}", YOUTUBE_EMBED_BASE, id))
}

/// A manually configured slide as stored in the `slides` prop.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SlideSpec {
    pub id: Option<String>,
    #[serde(default)]
    pub src: String,
    pub target_screen_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: String,
    pub src: Resolved,
    pub caption: Option<Resolved>,
    /// Screen a click on this slide navigates to in preview.
    pub target_screen_id: Option<String>,
}

/// The three ways a carousel is filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliderView {
    /// One slide per dataset row.
    Bound(Vec<Slide>),
    /// Slides listed in the component's props.
    Manual(Vec<Slide>),
    /// Nothing configured.
    Placeholder,
}

impl SliderView {
    pub fn slides(&self) -> &[Slide] {
        match self {
            SliderView::Bound(slides) | SliderView::Manual(slides) => slides,
            SliderView::Placeholder => &[],
        }
    }
}
