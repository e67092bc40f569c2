pub mod builtin;
pub mod conversion;
pub mod project;

pub use builtin::*;
pub use conversion::*;
pub use project::*;
