//! # Bindery - Document Model and Data-Binding Engine for a Screen Builder
//!
//! **Bindery** is the core of a drag-and-drop mobile screen builder. It owns the
//! tree of screens and components a user composes, pulls a rectangular dataset
//! from a spreadsheet, resolves which value every bound property shows, and
//! drives the interactive preview in which buttons and list items navigate
//! between screens.
//!
//! ## Core Workflow
//!
//! 1.  **Load a Document**: Start a [`store::DocumentStore`] from a bundled
//!     template, a saved [`template::ProjectFile`], or your own format through
//!     the `IntoScreens` trait.
//! 2.  **Connect Data**: Build a [`source::DataSource`] for a sheet id, a sheet
//!     URL or `DEMO`, and fetch it. Failures fall back to a mock table.
//! 3.  **Resolve**: Ask a [`binding::BindingResolver`] for the effective values
//!     of each component, with the provenance of every value.
//! 4.  **Preview**: Route clicks through [`action::Preview`] to navigate, select
//!     rows and open links.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bindery::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let mut store = DocumentStore::new(BuiltinTemplate::Ecommerce.screens());
//!     let mut source = DataSource::builder().sheet_id("DEMO").build()?;
//!     source.fetch_data().await?;
//!
//!     let resolver = BindingResolver::new(source.dataset());
//!     for component in &store.active_screen().unwrap().components {
//!         println!("{}", ProvenanceFormatter::format_component(&resolver.resolve(component)));
//!     }
//!
//!     store.set_preview_mode(true);
//!     let mut preview = Preview::new(&mut store, source.dataset_mut());
//!     let outcome = preview.activate_item("comp-grid", 0);
//!     println!("-> {:?}", outcome);
//!     Ok(())
//! }
//! ```

pub mod action;
pub mod binding;
pub mod data;
pub mod error;
pub mod model;
pub mod notice;
pub mod prelude;
pub mod source;
pub mod store;
pub mod template;
pub mod trace;
