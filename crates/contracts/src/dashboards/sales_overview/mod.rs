//! Sales overview dashboard: data model, selection state and view derivations.

pub mod model;
pub mod selection;
pub mod view;

pub use model::*;
pub use selection::*;
pub use view::*;
