//! Data types shared by the grid view, sources and renderers.

mod event;
mod grid;
mod selection;
mod value;

pub use event::*;
pub use grid::*;
pub use selection::*;
pub use value::*;
