pub mod component;
pub mod screen;
pub mod value;

pub use component::*;
pub use screen::*;
pub use value::*;
