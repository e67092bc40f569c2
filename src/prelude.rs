//! Prelude module for convenient imports
//!
//! Re-exports the types most programs built on bindery need.
//!
//! # Example
//!
//! ```rust,no_run
//! use bindery::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let project = ProjectFile::load("path/to/project.json")?;
//! let table = Table::from_file("path/to/data.json")?;
//! let dataset = Dataset::from_table("local", table);
//!
//! let resolver = BindingResolver::new(&dataset);
//! for screen in &project.screens {
//!     for component in &screen.components {
//!         println!("{}", ProvenanceFormatter::format_component(&resolver.resolve(component)));
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// Document model and editing
pub use crate::model::{Component, ComponentType, Document, Props, Scalar, Screen};
pub use crate::store::{DocumentChange, DocumentStore};

// Data acquisition
pub use crate::data::{Dataset, Row, Table};
pub use crate::source::{DataSource, FetchOrigin, SheetFetcher, SourceConfig};

// Resolution and interaction
pub use crate::action::{Action, ActionOutcome, Preview};
pub use crate::binding::{BindingResolver, Resolved, ResolvedView, ValueSource};
pub use crate::notice::{Notice, NoticeKind, Notifier};

// Templates and persistence
pub use crate::template::{BuiltinTemplate, IntoScreens, ProjectFile};

// Error types
pub use crate::error::{DocumentError, SourceError};

// Provenance formatting
pub use crate::trace::ProvenanceFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
