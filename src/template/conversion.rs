use crate::error::DocumentError;
use crate::model::Screen;

/// A trait for custom document formats that can be converted into bindery screens.
///
/// Implement it on your own structs to load designs authored elsewhere into a
/// [`DocumentStore`](crate::store::DocumentStore) through `load_template`.
///
/// # Example
///
/// ```rust,no_run
/// use bindery::prelude::*;
/// use bindery::error::DocumentError;
/// use std::result::Result;
///
/// struct Page { slug: String, headline: String }
/// struct Site { pages: Vec<Page> }
///
/// impl IntoScreens for Site {
///     fn into_screens(self) -> Result<Vec<Screen>, DocumentError> {
///         if self.pages.is_empty() {
///             return Err(DocumentError::ConversionError("site has no pages".into()));
///         }
///         Ok(self
///             .pages
///             .into_iter()
///             .map(|page| {
///                 let id = format!("{}-headline", page.slug);
///                 let headline = Component::new(id, ComponentType::Text)
///                     .with_prop("text", page.headline.clone());
///                 Screen::new(format!("screen-{}", page.slug), page.headline)
///                     .with_components(vec![headline])
///             })
///             .collect())
///     }
/// }
/// ```
pub trait IntoScreens {
    /// Consumes the object and converts it into an ordered list of screens.
    fn into_screens(self) -> Result<Vec<Screen>, DocumentError>;
}

impl IntoScreens for Vec<Screen> {
    fn into_screens(self) -> Result<Vec<Screen>, DocumentError> {
        Ok(self)
    }
}
