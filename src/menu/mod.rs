//! Menu Builder Core
//!
//! In-memory navigation tree: item store, mutations, cycle guard, view
//! models and persistence. Nothing in here touches the DOM.

pub mod guard;
pub mod persist;
pub mod render;
pub mod store;
mod tree;

pub use persist::{save, SaveOutcome, SaveTransport};
pub use render::item_fragment;
pub use tree::{ItemSource, MenuTree, TreeError, TreeResult};
