pub mod fixtures;
pub mod gviz;
pub mod model;

pub use fixtures::*;
pub use model::*;
